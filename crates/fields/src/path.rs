use std::ops::Range;

/// Thresholds for inferring measurement paths from sample order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParams {
    /// A step whose direction has a cosine below this against the previous
    /// step starts a new path.
    pub min_turn_cosine: f32,
    /// A step longer than this (parameter-domain units) starts a new path.
    pub max_step: f32,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            min_turn_cosine: 0.0,
            max_step: 0.25,
        }
    }
}

/// Breakpoints partitioning the sample range into contiguous paths.
///
/// Always starts with `0` and ends with the sample count; strictly increasing
/// in between. An empty sample set is `[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments {
    breaks: Vec<usize>,
}

impl PathSegments {
    /// One path covering `n` samples.
    pub fn single(n: usize) -> Self {
        if n == 0 {
            Self { breaks: vec![0] }
        } else {
            Self { breaks: vec![0, n] }
        }
    }

    /// Paths of the given lengths, in order. Zero-length entries are dropped.
    pub fn from_lengths(lengths: &[usize]) -> Self {
        let mut breaks = Vec::with_capacity(lengths.len() + 1);
        breaks.push(0);
        let mut end = 0;
        for &len in lengths {
            if len == 0 {
                continue;
            }
            end += len;
            breaks.push(end);
        }
        Self { breaks }
    }

    /// Infers paths from the projected sample order.
    ///
    /// A new path starts wherever the walk through consecutive samples
    /// doubles back or jumps.
    pub fn infer(points: &[[f32; 2]], params: &PathParams) -> Self {
        let n = points.len();
        if n == 0 {
            return Self::single(0);
        }

        let mut breaks = vec![0];
        let mut direction: Option<[f32; 2]> = None;
        for i in 1..n {
            let step = [points[i][0] - points[i - 1][0], points[i][1] - points[i - 1][1]];
            let len = (step[0] * step[0] + step[1] * step[1]).sqrt();

            let split = if !len.is_finite() || len > params.max_step {
                true
            } else if len <= f32::EPSILON {
                false
            } else {
                let unit = [step[0] / len, step[1] / len];
                match direction {
                    Some(d) => unit[0] * d[0] + unit[1] * d[1] < params.min_turn_cosine,
                    None => false,
                }
            };

            if split {
                breaks.push(i);
                direction = None;
            } else if len > f32::EPSILON && len.is_finite() {
                direction = Some([step[0] / len, step[1] / len]);
            }
        }
        breaks.push(n);

        Self { breaks }
    }

    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    pub fn count(&self) -> usize {
        self.breaks.len() - 1
    }

    pub fn sample_count(&self) -> usize {
        self.breaks.last().copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.breaks.windows(2).map(|w| w[0]..w[1])
    }

    /// The path containing sample `index`, if in range.
    pub fn segment_of(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.sample_count() {
            return None;
        }
        // first break strictly greater than index
        let hi = self.breaks.partition_point(|&b| b <= index);
        Some(self.breaks[hi - 1]..self.breaks[hi])
    }

    pub fn lengths(&self) -> Vec<usize> {
        self.iter().map(|r| r.len()).collect()
    }

    /// Drops every flagged sample and any path left empty.
    ///
    /// # Panics
    ///
    /// Panics if `remove.len()` differs from the sample count.
    pub fn remove_flagged(&mut self, remove: &[bool]) {
        assert_eq!(remove.len(), self.sample_count(), "mask must cover every sample");
        let lengths: Vec<usize> = self
            .iter()
            .map(|r| remove[r].iter().filter(|flag| !**flag).count())
            .collect();
        *self = Self::from_lengths(&lengths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring(theta: f32, count: usize) -> Vec<[f32; 2]> {
        (0..count)
            .map(|j| {
                let phi = std::f32::consts::TAU * j as f32 / count as f32;
                [theta * phi.cos(), theta * phi.sin()]
            })
            .collect()
    }

    #[test]
    fn empty_has_single_break() {
        let segs = PathSegments::single(0);
        assert_eq!(segs.breaks(), &[0]);
        assert_eq!(segs.count(), 0);
        assert_eq!(segs.iter().count(), 0);
    }

    #[test]
    fn lengths_round_trip() {
        let segs = PathSegments::from_lengths(&[3, 0, 2]);
        assert_eq!(segs.breaks(), &[0, 3, 5]);
        assert_eq!(segs.lengths(), vec![3, 2]);
    }

    #[test]
    fn segment_lookup() {
        let segs = PathSegments::from_lengths(&[3, 2, 4]);
        assert_eq!(segs.segment_of(0), Some(0..3));
        assert_eq!(segs.segment_of(2), Some(0..3));
        assert_eq!(segs.segment_of(3), Some(3..5));
        assert_eq!(segs.segment_of(8), Some(5..9));
        assert_eq!(segs.segment_of(9), None);
    }

    #[test]
    fn straight_sweeps_split_on_reversal() {
        // out along +x, then back along -x
        let pts = vec![[0.0, 0.0], [0.1, 0.0], [0.2, 0.0], [0.15, 0.05], [0.05, 0.05]];
        let segs = PathSegments::infer(&pts, &PathParams::default());
        assert_eq!(segs.breaks(), &[0, 3, 5]);
    }

    #[test]
    fn concentric_rings_split_on_jump() {
        let mut pts = ring(0.3, 24);
        pts.extend(ring(0.6, 48));
        let segs = PathSegments::infer(&pts, &PathParams::default());
        assert_eq!(segs.lengths(), vec![24, 48]);
    }

    #[test]
    fn repeated_points_do_not_split() {
        let pts = vec![[0.0, 0.0], [0.0, 0.0], [0.1, 0.0], [0.1, 0.0], [0.2, 0.0]];
        let segs = PathSegments::infer(&pts, &PathParams::default());
        assert_eq!(segs.count(), 1);
    }

    #[test]
    fn removal_compacts_and_drops_empty_paths() {
        let mut segs = PathSegments::from_lengths(&[2, 2, 3]);
        segs.remove_flagged(&[false, true, true, true, false, true, false]);
        assert_eq!(segs.breaks(), &[0, 1, 3]);
    }

    #[test]
    fn removing_everything_leaves_empty_segments() {
        let mut segs = PathSegments::from_lengths(&[2, 1]);
        segs.remove_flagged(&[true, true, true]);
        assert_eq!(segs, PathSegments::single(0));
    }

    proptest! {
        #[test]
        fn inferred_breaks_are_strictly_increasing(
            pts in prop::collection::vec((-1.0f32..1.0, -1.0f32..1.0), 0..200)
        ) {
            let points: Vec<[f32; 2]> = pts.into_iter().map(|(x, y)| [x, y]).collect();
            let segs = PathSegments::infer(&points, &PathParams::default());
            prop_assert_eq!(segs.breaks()[0], 0);
            prop_assert_eq!(segs.sample_count(), points.len());
            prop_assert!(segs.breaks().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
