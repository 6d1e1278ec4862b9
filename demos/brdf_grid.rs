use std::sync::Arc;

use scatterview::{BrdfModel, DataSample, GridParams, Metadata, SampleConfig};

/// Lambertian base with a Blinn-style lobe, luminance plus two spectral
/// channels.
struct Plastic {
    shininess: f32,
}

impl BrdfModel for Plastic {
    fn wavelength_count(&self) -> usize {
        3
    }

    fn eval(&self, incident: [f32; 2], outgoing: [f32; 2], out: &mut [f32]) {
        let dir = |[t, p]: [f32; 2]| {
            let (t, p) = (t.to_radians(), p.to_radians());
            [t.sin() * p.cos(), t.sin() * p.sin(), t.cos()]
        };
        let i = dir(incident);
        let o = dir(outgoing);
        let h = [i[0] + o[0], i[1] + o[1], i[2] + o[2]];
        let len = (h[0] * h[0] + h[1] * h[1] + h[2] * h[2]).sqrt().max(1e-6);
        let specular = (h[2] / len).max(0.0).powf(self.shininess);
        out[1] = 0.3 + specular;
        out[2] = 0.1 + specular;
        out[0] = 0.5 * (out[1] + out[2]);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut metadata = Metadata::new("plastic", [30.0, 0.0]);
    metadata.wavelengths = vec![470.0, 620.0];
    let grid = GridParams {
        n_theta: 45,
        n_phi: 180,
    };
    let mut sample = DataSample::from_brdf(
        Arc::new(Plastic { shininess: 80.0 }),
        metadata,
        grid,
        SampleConfig::default(),
    )?;
    sample.derive_all_normals()?;

    for incident in [[30.0, 0.0], [60.0, 90.0]] {
        sample.set_incident_angle(incident)?;
        let stats = sample.global_statistics();
        for w in 0..sample.channel_count() {
            if let Some(e) = stats.extrema(w) {
                let s = sample.samples();
                println!(
                    "incident {:?} {:>10}: peak at theta {:.1} phi {:.1}, mean height {:.3}",
                    incident,
                    sample.metadata().channel_label(w),
                    s.theta[e.highest_index],
                    s.phi[e.highest_index],
                    e.average
                );
            }
        }
    }
    Ok(())
}
