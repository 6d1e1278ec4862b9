use nalgebra::Matrix4;
use rayon::prelude::*;
use scatterview_mesh::display_position;

use crate::{project_to_screen, SelectionBox, SelectionMode};

/// Updates `flags` with the samples whose display position lands inside the
/// box.
///
/// `projected` and `heights` describe the surface as currently shown. Each
/// flag only depends on its own sample, so the pass runs in parallel.
pub fn select_in_box(
    flags: &mut [bool],
    projected: &[[f32; 2]],
    heights: &[f32],
    view_projection: &Matrix4<f32>,
    selection_box: &SelectionBox,
    viewport: [u32; 2],
    mode: SelectionMode,
) {
    debug_assert_eq!(flags.len(), projected.len());
    debug_assert_eq!(flags.len(), heights.len());

    flags
        .par_iter_mut()
        .zip(projected.par_iter().zip(heights.par_iter()))
        .for_each(|(flag, (&point, &height))| {
            let inside = project_to_screen(
                view_projection,
                display_position(point, height),
                viewport,
            )
            .is_some_and(|pixel| selection_box.contains(pixel));
            *flag = mode.combine(*flag, inside);
        });
}
