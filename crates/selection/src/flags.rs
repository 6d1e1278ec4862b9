pub fn select_all(flags: &mut [bool]) {
    flags.iter_mut().for_each(|f| *f = true);
}

pub fn deselect_all(flags: &mut [bool]) {
    flags.iter_mut().for_each(|f| *f = false);
}

pub fn count_selected(flags: &[bool]) -> usize {
    flags.iter().filter(|f| **f).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_deselect_are_idempotent() {
        let mut flags = vec![false, true, false];
        select_all(&mut flags);
        select_all(&mut flags);
        assert_eq!(count_selected(&flags), 3);
        deselect_all(&mut flags);
        deselect_all(&mut flags);
        assert_eq!(count_selected(&flags), 0);
    }

    #[test]
    fn empty_flags() {
        let mut flags: Vec<bool> = Vec::new();
        select_all(&mut flags);
        assert_eq!(count_selected(&flags), 0);
    }
}
