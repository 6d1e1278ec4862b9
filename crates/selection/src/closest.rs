use nalgebra::Matrix4;
use scatterview_mesh::display_position;

use crate::project_to_screen;

/// Tuning of click picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickParams {
    /// Clicks farther than this many pixels from every sample pick nothing.
    pub max_pick_distance: f32,
}

impl Default for PickParams {
    fn default() -> Self {
        Self {
            max_pick_distance: 30.0,
        }
    }
}

/// Selects the sample drawn closest to `pixel`, replacing the selection.
///
/// Ties go to the lowest index. Returns `None` and leaves `flags` untouched
/// when no visible sample lies within `max_distance` pixels.
pub fn select_closest(
    flags: &mut [bool],
    projected: &[[f32; 2]],
    heights: &[f32],
    view_projection: &Matrix4<f32>,
    pixel: [f32; 2],
    viewport: [u32; 2],
    max_distance: f32,
) -> Option<usize> {
    debug_assert_eq!(flags.len(), projected.len());
    debug_assert_eq!(flags.len(), heights.len());

    let mut best: Option<(usize, f32)> = None;
    for (i, (&point, &height)) in projected.iter().zip(heights).enumerate() {
        let Some(screen) = project_to_screen(
            view_projection,
            display_position(point, height),
            viewport,
        ) else {
            continue;
        };
        let dx = screen[0] - pixel[0];
        let dy = screen[1] - pixel[1];
        let d2 = dx * dx + dy * dy;
        if best.map_or(true, |(_, b)| d2 < b) {
            best = Some((i, d2));
        }
    }

    let (index, d2) = best?;
    if d2.sqrt() > max_distance {
        log::trace!("closest sample is {} px away, nothing picked", d2.sqrt());
        return None;
    }

    flags.iter_mut().for_each(|f| *f = false);
    flags[index] = true;
    Some(index)
}
