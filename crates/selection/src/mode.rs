/// How a new screen-space selection combines with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Replace the selection.
    #[default]
    Standard,
    /// Union with the selection.
    Add,
    /// Remove from the selection.
    Subtract,
}

impl SelectionMode {
    #[inline]
    pub fn combine(self, prior: bool, inside: bool) -> bool {
        match self {
            SelectionMode::Standard => inside,
            SelectionMode::Add => prior || inside,
            SelectionMode::Subtract => prior && !inside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionMode;

    #[test]
    fn truth_tables() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        let standard: Vec<bool> = cases
            .iter()
            .map(|&(p, i)| SelectionMode::Standard.combine(p, i))
            .collect();
        let add: Vec<bool> = cases
            .iter()
            .map(|&(p, i)| SelectionMode::Add.combine(p, i))
            .collect();
        let subtract: Vec<bool> = cases
            .iter()
            .map(|&(p, i)| SelectionMode::Subtract.combine(p, i))
            .collect();
        assert_eq!(standard, vec![false, true, false, true]);
        assert_eq!(add, vec![false, true, true, true]);
        assert_eq!(subtract, vec![false, false, true, false]);
    }

    #[test]
    fn standard_is_default() {
        assert_eq!(SelectionMode::default(), SelectionMode::Standard);
    }
}
