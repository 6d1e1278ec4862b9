/// Errors raised while assembling a [`crate::SampleSet`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("column `{column}` has {len} entries, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        len: usize,
        expected: usize,
    },
    #[error("a sample set needs at least one intensity channel")]
    NoIntensityChannels,
}
