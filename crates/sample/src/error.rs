use scatterview_core::CoreError;
use scatterview_fields::FieldError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Surface data was requested while the samples triangulate to nothing.
    #[error("the {samples} samples do not form a surface")]
    MeshUnavailable { samples: usize },
}
