use scatterview_stats::{PointsStatistics, SelectionStatistics};

/// Replaces the selection with the lowest or highest sample of `wavelength`.
///
/// The search is scoped to the current selection when there is one, and to
/// every sample otherwise. Returns the picked index, or `None` when the
/// channel has no finite height (which includes the empty sample set).
pub fn select_extreme(
    flags: &mut [bool],
    global: &PointsStatistics,
    selection: &SelectionStatistics,
    wavelength: usize,
    highest: bool,
) -> Option<usize> {
    if flags.is_empty() {
        return None;
    }
    let index = if selection.is_empty() {
        global.extreme_index(wavelength, highest)
    } else {
        selection.extreme_index(wavelength, highest)
    }?;

    flags.iter_mut().for_each(|f| *f = false);
    flags[index] = true;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scatterview_core::SampleSet;
    use scatterview_mesh::project_samples;
    use scatterview_stats::{compute_global_statistics, update_selection_statistics};

    fn setup() -> (SampleSet, Vec<[f32; 2]>, Vec<f32>) {
        let set = SampleSet::from_columns(
            vec![0.0, 10.0, 20.0, 30.0, 40.0],
            vec![0.0; 5],
            vec![vec![0.0, 0.3, 0.1, 0.6, 1.0]],
        )
        .unwrap();
        let pts = project_samples(&set);
        let heights = set.intensities[0].clone();
        (set, pts, heights)
    }

    #[test]
    fn extreme_is_scoped_to_selection() {
        let (set, pts, h) = setup();
        let global = compute_global_statistics(&set, &[h.as_slice()]);
        let mut flags = vec![false, true, false, true, false];
        let selection = update_selection_statistics(&flags, &set, &pts, &[h.as_slice()], 0);

        let picked = select_extreme(&mut flags, &global, &selection, 0, true);
        assert_eq!(picked, Some(3));
        assert_eq!(flags, vec![false, false, false, true, false]);
    }

    #[test]
    fn lowest_within_selection() {
        let (set, pts, h) = setup();
        let global = compute_global_statistics(&set, &[h.as_slice()]);
        let mut flags = vec![false, true, false, true, false];
        let selection = update_selection_statistics(&flags, &set, &pts, &[h.as_slice()], 0);
        assert_eq!(select_extreme(&mut flags, &global, &selection, 0, false), Some(1));
    }

    #[test]
    fn empty_selection_uses_global_statistics() {
        let (set, pts, h) = setup();
        let global = compute_global_statistics(&set, &[h.as_slice()]);
        let mut flags = vec![false; 5];
        let selection = update_selection_statistics(&flags, &set, &pts, &[h.as_slice()], 0);
        assert_eq!(select_extreme(&mut flags, &global, &selection, 0, true), Some(4));
        assert_eq!(flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn empty_sample_set_is_a_no_op() {
        let set = SampleSet::with_channels(1);
        let none: [f32; 0] = [];
        let global = compute_global_statistics(&set, &[&none[..]]);
        let mut flags: Vec<bool> = Vec::new();
        let picked = select_extreme(&mut flags, &global, &SelectionStatistics::empty(), 0, true);
        assert_eq!(picked, None);
    }
}
