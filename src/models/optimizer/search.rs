use crate::TimeStep;

/// Returns the smallest index `k` such that `starts[k] >= end`, or `starts.len()`
/// when every start is before `end`.
///
/// `starts` must be sorted in ascending order. The comparison is inclusive so a
/// job starting exactly when another ends is considered compatible with it.
pub fn next_compatible(starts: &[TimeStep], end: TimeStep) -> usize {
    // Invariant: everything in [0, low) is < end, everything in [high, len) is >= end.
    let mut low = 0;
    let mut high = starts.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if starts[mid] >= end {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}

/// Index of the first job that may follow the job at `index` ending at `end`.
///
/// Always lies strictly after `index`: a zero-length job's lower bound can land
/// on itself or on zero-length peers sorted before it.
pub fn next_after(starts: &[TimeStep], index: usize, end: TimeStep) -> usize {
    next_compatible(starts, end).max(index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_starts() {
        assert_eq!(next_compatible(&[], 10), 0);
    }

    #[test]
    fn test_end_after_every_start() {
        assert_eq!(next_compatible(&[1, 2, 3], 4), 3);
    }

    #[test]
    fn test_end_before_every_start() {
        assert_eq!(next_compatible(&[5, 6, 7], 1), 0);
    }

    #[test]
    fn test_exact_match_is_compatible() {
        // A strict comparison would return 3 here.
        assert_eq!(next_compatible(&[1, 2, 3, 5], 3), 2);
    }

    #[test]
    fn test_duplicates_return_first_occurrence() {
        assert_eq!(next_compatible(&[1, 3, 3, 3, 8], 3), 1);
        assert_eq!(next_compatible(&[1, 3, 3, 3, 8], 4), 4);
    }

    #[test]
    fn test_matches_linear_scan() {
        let starts = [-4, -4, 0, 2, 2, 7, 9, 9, 9, 15];
        for end in -6..18 {
            let expected = starts.iter().position(|&s| s >= end).unwrap_or(starts.len());
            assert_eq!(next_compatible(&starts, end), expected, "end = {end}");
        }
    }

    #[test]
    fn test_next_after_skips_zero_length_peers() {
        // Three zero-length jobs at t = 2 followed by a job starting at 2.
        let starts = [2, 2, 2, 2];
        assert_eq!(next_after(&starts, 0, 2), 1);
        assert_eq!(next_after(&starts, 2, 2), 3);
        assert_eq!(next_after(&starts, 3, 6), 4);
    }
}
