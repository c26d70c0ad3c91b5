use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One approximate instance of a pattern: a closed span `[start, end]`
///
/// Intermediate alignment points are not kept; a pattern of length `n`
/// collapses its `n - 1` gap steps into this single span. Ordering is
/// lexicographic on `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub start: usize,
    pub end: usize,
}

impl Occurrence {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "occurrence must span at least two positions");
        Self { start, end }
    }

    /// Number of sequence positions covered by the span
    pub fn weight(&self) -> usize {
        self.end - self.start + 1
    }

    /// Two spans overlap unless one ends strictly before the other starts
    pub fn overlaps(&self, other: &Occurrence) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    /// Chain `next` onto this occurrence of a pattern of length `pattern_len`
    ///
    /// Succeeds iff `next` starts exactly where this span ends and finishes
    /// within `max_error + pattern_len` positions of this span's start. The
    /// bound is relative to the start, so the slack budget is shared by
    /// every link of the pattern rather than granted per link.
    pub fn link(&self, next: &Occurrence, pattern_len: usize, max_error: usize) -> Option<Occurrence> {
        let bound = self.start.saturating_add(max_error).saturating_add(pattern_len);
        if self.end == next.start && next.end <= bound {
            Some(Occurrence::new(self.start, next.end))
        } else {
            None
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Sorted, duplicate-free occurrences of a single pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceList(Vec<Occurrence>);

impl OccurrenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Occurrence] {
        &self.0
    }

    pub fn contains(&self, occurrence: &Occurrence) -> bool {
        self.0.binary_search(occurrence).is_ok()
    }

    /// Append an occurrence that sorts strictly after every stored one
    ///
    /// The seed scan visits spans in ascending order, so it can build lists
    /// without sorting.
    pub(crate) fn push_ascending(&mut self, occurrence: Occurrence) {
        debug_assert!(self.0.last().map_or(true, |last| *last < occurrence));
        self.0.push(occurrence);
    }

    /// Occurrences of the extended pattern `self ++ other`
    ///
    /// Every pair is tried with [`Occurrence::link`]; the surviving spans are
    /// sorted and deduplicated. Quadratic, but both inputs have already
    /// passed support pruning and are short in practice.
    pub fn intersect(&self, other: &OccurrenceList, pattern_len: usize, max_error: usize) -> OccurrenceList {
        self.0
            .iter()
            .flat_map(|first| {
                other
                    .0
                    .iter()
                    .filter_map(move |next| first.link(next, pattern_len, max_error))
            })
            .collect()
    }

    /// Sorted union of two lists by a linear two-pointer merge
    pub fn merge(&self, other: &OccurrenceList) -> OccurrenceList {
        let (left, right) = (&self.0, &other.0);
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Less => {
                    merged.push(left[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(right[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(left[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);

        OccurrenceList(merged)
    }
}

impl FromIterator<Occurrence> for OccurrenceList {
    fn from_iter<I: IntoIterator<Item = Occurrence>>(iter: I) -> Self {
        let mut occurrences: Vec<Occurrence> = iter.into_iter().collect();
        occurrences.sort_unstable();
        occurrences.dedup();
        OccurrenceList(occurrences)
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
