#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Normals were requested before triangulation produced any face.
    #[error("no triangulated mesh is available for {vertices} samples")]
    MissingMesh { vertices: usize },
    #[error("{field} has {len} entries but the mesh has {vertices} vertices")]
    LengthMismatch {
        field: &'static str,
        len: usize,
        vertices: usize,
    },
    #[error("wavelength index {index} out of range ({count} channels)")]
    WavelengthOutOfRange { index: usize, count: usize },
}
