use std::fmt;
use std::sync::Arc;

use scatterview_core::{BrdfModel, GridParams};

/// Where the samples of a [`crate::DataSample`] come from.
#[derive(Clone, Default)]
pub enum SampleKind {
    /// Samples handed in by a reader; the incident angle is informational.
    #[default]
    Measured,
    /// Samples tabulated from a model, re-tabulated when the incident angle
    /// changes.
    Analytic {
        model: Arc<dyn BrdfModel>,
        grid: GridParams,
    },
}

impl SampleKind {
    pub fn is_analytic(&self) -> bool {
        matches!(self, SampleKind::Analytic { .. })
    }
}

impl fmt::Debug for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleKind::Measured => f.write_str("Measured"),
            SampleKind::Analytic { model, grid } => f
                .debug_struct("Analytic")
                .field("channels", &model.wavelength_count())
                .field("grid", grid)
                .finish(),
        }
    }
}
