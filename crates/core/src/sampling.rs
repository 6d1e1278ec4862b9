use rayon::prelude::*;

use crate::{BrdfModel, SampleSet};

/// Resolution of the outgoing-direction grid used to tabulate a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub n_theta: usize,
    pub n_phi: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            n_theta: 90,
            n_phi: 360,
        }
    }
}

/// Tabulates `model` for one incident direction.
///
/// Each polar ring is one measurement path sweeping the azimuth. The ring at
/// `theta = 0` collapses to a single sample. Returns the samples and the
/// length of every path in storage order.
pub fn sample_brdf_grid(
    model: &dyn BrdfModel,
    incident: [f32; 2],
    params: &GridParams,
) -> (SampleSet, Vec<usize>) {
    let channels = model.wavelength_count().max(1);
    if params.n_theta == 0 || params.n_phi == 0 {
        return (SampleSet::with_channels(channels), Vec::new());
    }

    let rows: Vec<Vec<(f32, f32, Vec<f32>)>> = (0..params.n_theta)
        .into_par_iter()
        .map(|i| {
            let theta = 90.0 * i as f32 / params.n_theta as f32;
            let n_phi = if i == 0 { 1 } else { params.n_phi };
            (0..n_phi)
                .map(|j| {
                    let phi = 360.0 * j as f32 / params.n_phi as f32;
                    let mut out = vec![0.0; channels];
                    model.eval(incident, [theta, phi], &mut out);
                    (theta, phi, out)
                })
                .collect()
        })
        .collect();

    let path_lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
    let total: usize = path_lengths.iter().sum();

    let mut set = SampleSet::with_channels(channels);
    set.theta.reserve(total);
    set.phi.reserve(total);
    for (theta, phi, values) in rows.into_iter().flatten() {
        set.theta.push(theta);
        set.phi.push(phi);
        for (column, value) in set.intensities.iter_mut().zip(values) {
            column.push(value);
        }
    }

    log::debug!(
        "tabulated {} samples over {} paths for incident [{}, {}]",
        total,
        path_lengths.len(),
        incident[0],
        incident[1]
    );
    (set, path_lengths)
}
