use nalgebra::{Matrix4, Vector4};

/// Pixel position of a display-space point, origin at the top-left.
///
/// Points behind the camera (`w <= 0`) or outside the view volume have no
/// screen position.
pub fn project_to_screen(
    view_projection: &Matrix4<f32>,
    position: [f32; 3],
    viewport: [u32; 2],
) -> Option<[f32; 2]> {
    let clip = view_projection * Vector4::new(position[0], position[1], position[2], 1.0);
    if clip.w.is_nan() || clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.xyz() / clip.w;
    if !ndc.iter().all(|v| (-1.0..=1.0).contains(v)) {
        return None;
    }
    let width = viewport[0] as f32;
    let height = viewport[1] as f32;
    Some([
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - (ndc.y + 1.0) * 0.5) * height,
    ])
}
