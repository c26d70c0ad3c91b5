// Coverage metrics over an occurrence list
//
// Both scores are fractions of the input sequence explained by a pattern.
// The simple score double-counts overlapping spans and is cheap enough to
// run at every acceptance test. The non-overlapping score solves weighted
// interval scheduling and reports the support that survives when each
// sequence position may be claimed once.

use serde::{Deserialize, Serialize};

use super::occurrence::{Occurrence, OccurrenceList};

/// Result of the non-overlapping coverage selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonOverlapScore {
    /// Covered positions of the best non-overlapping subset over sequence length
    pub score: f64,

    /// Number of occurrences in that subset
    pub selected: usize,
}

/// Total span weight over sequence length, overlaps counted every time
///
/// # Example
/// ```
/// use gapmine::mining::{simple_score, Occurrence, OccurrenceList};
///
/// let occurrences: OccurrenceList =
///     [Occurrence::new(0, 2), Occurrence::new(3, 4)].into_iter().collect();
/// assert_eq!(simple_score(&occurrences, 5), 1.0);
/// ```
pub fn simple_score(occurrences: &OccurrenceList, sequence_len: usize) -> f64 {
    if sequence_len == 0 {
        return 0.0;
    }

    let covered: usize = occurrences.iter().map(Occurrence::weight).sum();
    covered as f64 / sequence_len as f64
}

/// Maximum-weight subset of mutually non-overlapping occurrences
///
/// Occurrences are processed in order of end position so the compatible
/// prefix of every span is found by binary search:
/// `best[i] = max(best[i - 1], best[k] + weight(i))`, where `k` counts the
/// spans ending strictly before span `i` starts. The selected count is
/// carried alongside and only changes when taking span `i` strictly wins.
pub fn non_overlap_score(occurrences: &OccurrenceList, sequence_len: usize) -> NonOverlapScore {
    if sequence_len == 0 || occurrences.is_empty() {
        return NonOverlapScore {
            score: 0.0,
            selected: 0,
        };
    }

    let mut by_end: Vec<Occurrence> = occurrences.iter().copied().collect();
    by_end.sort_unstable_by_key(|occurrence| (occurrence.end, occurrence.start));

    let n = by_end.len();
    let mut best = vec![0usize; n + 1];
    let mut selected = vec![0usize; n + 1];

    for i in 1..=n {
        let current = by_end[i - 1];
        let k = by_end[..i - 1].partition_point(|earlier| earlier.end < current.start);

        let take = best[k] + current.weight();
        if take > best[i - 1] {
            best[i] = take;
            selected[i] = selected[k] + 1;
        } else {
            best[i] = best[i - 1];
            selected[i] = selected[i - 1];
        }
    }

    NonOverlapScore {
        score: best[n] as f64 / sequence_len as f64,
        selected: selected[n],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(spans: &[(usize, usize)]) -> OccurrenceList {
        spans
            .iter()
            .map(|&(start, end)| Occurrence::new(start, end))
            .collect()
    }

    #[test]
    fn test_simple_score_counts_overlap() {
        let occurrences = list(&[(0, 2), (1, 3), (2, 4)]);
        assert!((simple_score(&occurrences, 10) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_simple_score_empty() {
        assert_eq!(simple_score(&OccurrenceList::new(), 10), 0.0);
        assert_eq!(simple_score(&list(&[(0, 1)]), 0), 0.0);
    }

    #[test]
    fn test_non_overlap_disjoint_takes_all() {
        let result = non_overlap_score(&list(&[(0, 2), (3, 4)]), 5);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.selected, 2);
    }

    #[test]
    fn test_non_overlap_shared_endpoint_counts_as_overlap() {
        let result = non_overlap_score(&list(&[(0, 2), (1, 3), (2, 4)]), 10);
        assert!((result.score - 0.3).abs() < 1e-12);
        assert_eq!(result.selected, 1);
    }

    #[test]
    fn test_non_overlap_prefers_heavier_subset() {
        // two short spans beat one long span that overlaps both
        let result = non_overlap_score(&list(&[(0, 3), (1, 2), (3, 5)]), 10);
        assert!((result.score - 0.5).abs() < 1e-12);
        assert_eq!(result.selected, 2);
    }

    #[test]
    fn test_non_overlap_nested_span_never_double_counts() {
        // (1, 2) and (5, 6) are both inside (0, 10)
        let result = non_overlap_score(&list(&[(0, 10), (1, 2), (5, 6)]), 20);
        assert!((result.score - 0.55).abs() < 1e-12);
        assert_eq!(result.selected, 1);
    }

    #[test]
    fn test_non_overlap_chained_spans_inside_long_span() {
        // (7, 8) must not pair with (0, 10) through (5, 6)
        let result = non_overlap_score(&list(&[(0, 10), (5, 6), (7, 8)]), 20);
        assert!((result.score - 0.55).abs() < 1e-12);
        assert_eq!(result.selected, 1);
    }

    #[test]
    fn test_non_overlap_never_exceeds_simple() {
        let occurrences = list(&[(0, 1), (0, 2), (1, 4), (3, 5), (6, 7), (6, 9)]);
        let simple = simple_score(&occurrences, 12);
        let result = non_overlap_score(&occurrences, 12);
        assert!(result.score <= simple);
        assert!(result.selected <= occurrences.len());
    }

    #[test]
    fn test_non_overlap_empty() {
        let result = non_overlap_score(&OccurrenceList::new(), 8);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.selected, 0);
    }
}
