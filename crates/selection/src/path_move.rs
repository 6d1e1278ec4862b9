use scatterview_fields::PathSegments;

/// Shifts every selected sample one step along its measurement path.
///
/// `up` moves towards higher indices. A sample at the end of its path stays
/// put. All moves read the selection as it was before the call, so a run of
/// selected samples shifts as a block.
pub fn move_selection(flags: &mut [bool], up: bool, segments: &PathSegments) {
    debug_assert_eq!(flags.len(), segments.sample_count());

    let prior = flags.to_vec();
    flags.iter_mut().for_each(|f| *f = false);
    for (i, _) in prior.iter().enumerate().filter(|(_, s)| **s) {
        let target = match segments.segment_of(i) {
            Some(path) if up => (i + 1).min(path.end - 1),
            Some(path) => i.saturating_sub(1).max(path.start),
            None => i,
        };
        flags[target] = true;
    }
}
