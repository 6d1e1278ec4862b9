use scatterview_mesh::display_position;

/// Everything an upload layer needs to draw the current state.
///
/// All per-sample slices share the sample order; `faces` index into them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderBuffers<'a> {
    pub points: &'a [[f32; 2]],
    /// Heights of the active channel in the active display mode.
    pub heights: &'a [f32],
    pub normals: &'a [[f32; 3]],
    pub faces: &'a [[u32; 3]],
    /// Path breakpoints for drawing measurement paths as line strips.
    pub path_breaks: &'a [usize],
    pub selected: &'a [bool],
}

impl RenderBuffers<'_> {
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Lifted vertex positions.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.points
            .iter()
            .zip(self.heights)
            .map(|(&p, &h)| display_position(p, h))
            .collect()
    }

    /// Faces flattened to a triangle-list index buffer.
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }
}
