use scatterview_core::samples::retain_by_mask;
use scatterview_core::{Metadata, SampleSet};
use scatterview_fields::PathSegments;

/// Removes every selected sample from the sample columns, the projected
/// points, the path breakpoints and the metadata in one pass.
///
/// The surviving samples keep their relative order and end up deselected.
/// Returns the number of removed samples.
pub fn delete_selected(
    flags: &mut Vec<bool>,
    samples: &mut SampleSet,
    projected: &mut Vec<[f32; 2]>,
    metadata: &mut Metadata,
    segments: &mut PathSegments,
) -> usize {
    debug_assert_eq!(flags.len(), samples.len());
    debug_assert_eq!(flags.len(), projected.len());

    if !flags.iter().any(|f| *f) {
        return 0;
    }

    let removed = samples.remove_flagged(flags);
    retain_by_mask(projected, flags);
    metadata.remove_flagged(flags);
    segments.remove_flagged(flags);

    flags.clear();
    flags.resize(samples.len(), false);

    log::debug!("deleted {} samples, {} remain", removed, samples.len());
    removed
}
