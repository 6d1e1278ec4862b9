use scatterview_fields::{LogParams, PathParams};
use scatterview_selection::PickParams;

/// Tunables of a [`crate::DataSample`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleConfig {
    pub pick: PickParams,
    pub log: LogParams,
    pub paths: PathParams,
}
