use scatterview_core::{AngularSamples, RawPoint};

/// Lowest and highest sample of one channel.
///
/// Ties resolve to the smallest index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthExtrema {
    pub lowest_index: usize,
    pub lowest_value: f32,
    pub highest_index: usize,
    pub highest_value: f32,
    pub average: f32,
}

impl WavelengthExtrema {
    /// Extrema of `values` over `indices`, skipping non-finite values.
    pub fn over(values: &[f32], indices: impl IntoIterator<Item = usize>) -> Option<Self> {
        let mut acc: Option<Self> = None;
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for i in indices {
            let v = values[i];
            if !v.is_finite() {
                continue;
            }
            sum += v as f64;
            count += 1;
            match acc.as_mut() {
                None => {
                    acc = Some(Self {
                        lowest_index: i,
                        lowest_value: v,
                        highest_index: i,
                        highest_value: v,
                        average: 0.0,
                    })
                }
                Some(e) => {
                    if v < e.lowest_value {
                        e.lowest_index = i;
                        e.lowest_value = v;
                    }
                    if v > e.highest_value {
                        e.highest_index = i;
                        e.highest_value = v;
                    }
                }
            }
        }
        acc.map(|mut e| {
            e.average = (sum / count as f64) as f32;
            e
        })
    }

    pub fn index(&self, highest: bool) -> usize {
        if highest {
            self.highest_index
        } else {
            self.lowest_index
        }
    }
}

/// Statistics over every sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointsStatistics {
    pub count: usize,
    /// Mean position in the parameter domain.
    pub centroid: [f32; 2],
    /// Mean raw point per channel.
    pub average_points: Vec<RawPoint>,
    /// Extrema of the heights per channel, `None` for a channel without a
    /// finite value.
    pub extrema: Vec<Option<WavelengthExtrema>>,
}

impl PointsStatistics {
    pub fn extrema(&self, wavelength: usize) -> Option<&WavelengthExtrema> {
        self.extrema.get(wavelength).and_then(Option::as_ref)
    }

    pub fn extreme_index(&self, wavelength: usize, highest: bool) -> Option<usize> {
        self.extrema(wavelength).map(|e| e.index(highest))
    }
}

/// Extrema and averages over every sample. `heights` holds one slice per
/// channel, each as long as `raw`.
pub fn compute_global_statistics<S: AngularSamples>(
    raw: &S,
    heights: &[&[f32]],
) -> PointsStatistics {
    let n = raw.len();
    debug_assert!(heights.iter().all(|h| h.len() == n));

    let mut centroid = [0.0f64; 2];
    for i in 0..n {
        let p = raw.project(i);
        centroid[0] += p[0] as f64;
        centroid[1] += p[1] as f64;
    }
    let denom = n.max(1) as f64;

    PointsStatistics {
        count: n,
        centroid: [(centroid[0] / denom) as f32, (centroid[1] / denom) as f32],
        average_points: (0..raw.wavelength_count())
            .map(|w| average_raw_point(raw, w, 0..n))
            .collect(),
        extrema: heights
            .iter()
            .map(|h| WavelengthExtrema::over(h, 0..n))
            .collect(),
    }
}

pub(crate) fn average_raw_point<S: AngularSamples>(
    raw: &S,
    wavelength: usize,
    indices: impl IntoIterator<Item = usize>,
) -> RawPoint {
    let mut sum = [0.0f64; 3];
    let mut count = 0usize;
    for i in indices {
        let [theta, phi] = raw.angles(i);
        sum[0] += theta as f64;
        sum[1] += phi as f64;
        sum[2] += raw.sample_at(i, wavelength) as f64;
        count += 1;
    }
    if count == 0 {
        return RawPoint::new(0.0, 0.0, 0.0);
    }
    let c = count as f64;
    RawPoint::new(
        (sum[0] / c) as f32,
        (sum[1] / c) as f32,
        (sum[2] / c) as f32,
    )
}
