use scatterview_core::{AngularSamples, RawPoint};
use scatterview_mesh::display_position;

use crate::global::average_raw_point;
use crate::{Extent, WavelengthExtrema};

/// Aggregates over the selected samples only.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStatistics {
    pub count: usize,
    /// Mean display position at the active wavelength.
    pub center: [f32; 3],
    pub extent: Extent,
    /// Mean raw point at the active wavelength.
    pub average_point: RawPoint,
    /// Extrema per channel, restricted to the selection.
    pub extrema: Vec<Option<WavelengthExtrema>>,
}

impl SelectionStatistics {
    /// The result for an empty selection.
    pub fn empty() -> Self {
        Self {
            count: 0,
            center: [0.0; 3],
            extent: Extent::empty(),
            average_point: RawPoint::new(0.0, 0.0, 0.0),
            extrema: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn extreme_index(&self, wavelength: usize, highest: bool) -> Option<usize> {
        self.extrema
            .get(wavelength)
            .and_then(Option::as_ref)
            .map(|e| e.index(highest))
    }
}

impl Default for SelectionStatistics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Recomputes the statistics of the current selection.
///
/// `heights` holds the display heights of every channel (linear or
/// logarithmic, as shown); `wavelength` picks the channel the center and
/// extent are measured at.
pub fn update_selection_statistics<S: AngularSamples>(
    selected: &[bool],
    raw: &S,
    projected: &[[f32; 2]],
    heights: &[&[f32]],
    wavelength: usize,
) -> SelectionStatistics {
    debug_assert_eq!(selected.len(), raw.len());
    debug_assert_eq!(projected.len(), raw.len());

    let indices: Vec<usize> = selected
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.then_some(i))
        .collect();
    if indices.is_empty() {
        return SelectionStatistics::empty();
    }

    let Some(active) = heights.get(wavelength) else {
        return SelectionStatistics::empty();
    };

    let mut sum = [0.0f64; 3];
    let mut extent = Extent::empty();
    for &i in &indices {
        let p = display_position(projected[i], active[i]);
        sum[0] += p[0] as f64;
        sum[1] += p[1] as f64;
        sum[2] += p[2] as f64;
        extent.include(p);
    }
    let c = indices.len() as f64;

    SelectionStatistics {
        count: indices.len(),
        center: [
            (sum[0] / c) as f32,
            (sum[1] / c) as f32,
            (sum[2] / c) as f32,
        ],
        extent,
        average_point: average_raw_point(raw, wavelength, indices.iter().copied()),
        extrema: heights
            .iter()
            .map(|h| WavelengthExtrema::over(h, indices.iter().copied()))
            .collect(),
    }
}
