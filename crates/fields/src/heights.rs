use rayon::prelude::*;
use scatterview_core::AngularSamples;

/// Parameters of the logarithmic remapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogParams {
    /// When a channel has non-positive values, intensities are shifted so the
    /// smallest one maps to `ln(correction)` instead of `-inf`.
    pub correction: f32,
}

impl Default for LogParams {
    fn default() -> Self {
        Self { correction: 1e-5 }
    }
}

/// Finite intensity bounds of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    pub min: f32,
    pub max: f32,
}

impl IntensityRange {
    /// Bounds over the finite values, `None` if there are none.
    pub fn of(values: &[f32]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(r) => Some(Self {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }
}

/// Normalized linear and logarithmic heights of one channel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeightField {
    pub range: Option<IntensityRange>,
    pub heights: Vec<f32>,
    pub log_heights: Vec<f32>,
}

impl HeightField {
    /// Maps intensities into `[0, 1]`, linearly and logarithmically.
    ///
    /// A constant channel maps to zero; non-finite intensities map to zero.
    pub fn from_intensities(values: &[f32], params: &LogParams) -> Self {
        let Some(range) = IntensityRange::of(values) else {
            return Self {
                range: None,
                heights: vec![0.0; values.len()],
                log_heights: vec![0.0; values.len()],
            };
        };

        // f64 keeps wide or strongly negative channels from collapsing
        let min = f64::from(range.min);
        let max = f64::from(range.max);
        let span = max - min;
        let shifted = |v: f64| {
            if min <= 0.0 {
                (v - min) + f64::from(params.correction)
            } else {
                v
            }
        };
        let log_min = shifted(min).ln();
        let log_span = shifted(max).ln() - log_min;

        let mut heights = Vec::with_capacity(values.len());
        let mut log_heights = Vec::with_capacity(values.len());
        for &v in values {
            if !v.is_finite() || span <= 0.0 {
                heights.push(0.0);
                log_heights.push(0.0);
                continue;
            }
            let v = f64::from(v);
            heights.push(((v - min) / span).clamp(0.0, 1.0) as f32);
            let lh = (shifted(v).ln() - log_min) / log_span;
            log_heights.push(if lh.is_finite() {
                lh.clamp(0.0, 1.0) as f32
            } else {
                0.0
            });
        }

        Self {
            range: Some(range),
            heights,
            log_heights,
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Linear or logarithmic heights.
    pub fn display(&self, log: bool) -> &[f32] {
        if log {
            &self.log_heights
        } else {
            &self.heights
        }
    }
}

/// Height fields for every channel, derived in parallel.
pub fn compute_heights<S: AngularSamples + Sync>(
    samples: &S,
    params: &LogParams,
) -> Vec<HeightField> {
    (0..samples.wavelength_count())
        .into_par_iter()
        .map(|w| HeightField::from_intensities(samples.channel(w), params))
        .collect()
}
