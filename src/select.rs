//! Post-mining selection of reportable patterns
//!
//! The engine accepts patterns on overlap-counted coverage. Before a pattern
//! is reported it is re-scored with the non-overlapping coverage, and its
//! support is recounted as the number of occurrences in that selection.

use serde::Serialize;
use std::cmp::Ordering;

use crate::mining::{
    non_overlap_score, simple_score, Criterion, OccurrenceList, Pattern, PatternTable, Symbol,
};

/// A mined pattern with both coverage scores attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPattern<S> {
    pub pattern: Pattern<S>,
    pub occurrences: OccurrenceList,
    /// Overlap-counted coverage (acceptance metric)
    pub simple_score: f64,
    /// Non-overlapping coverage (reporting metric)
    pub coverage: f64,
    /// Occurrences kept by the non-overlapping selection
    pub selected: usize,
}

impl<S: Symbol> RankedPattern<S> {
    pub fn score(pattern: Pattern<S>, occurrences: OccurrenceList, sequence_len: usize) -> Self {
        let simple = simple_score(&occurrences, sequence_len);
        let non_overlap = non_overlap_score(&occurrences, sequence_len);
        Self {
            pattern,
            occurrences,
            simple_score: simple,
            coverage: non_overlap.score,
            selected: non_overlap.selected,
        }
    }

    /// Whether the non-overlapping selection still meets the criterion
    pub fn qualifies(&self, criterion: &Criterion) -> bool {
        self.coverage >= criterion.min_score && self.selected >= criterion.min_support
    }
}

/// Score every pattern without filtering, in table order
pub fn score_all<S: Symbol>(table: PatternTable<S>, sequence_len: usize) -> Vec<RankedPattern<S>> {
    table
        .into_iter()
        .map(|(pattern, occurrences)| RankedPattern::score(pattern, occurrences, sequence_len))
        .collect()
}

/// Qualifying patterns, best first
///
/// Ordered by coverage (descending), then length (descending), then pattern.
pub fn rank<S: Symbol>(
    table: PatternTable<S>,
    sequence_len: usize,
    criterion: &Criterion,
) -> Vec<RankedPattern<S>> {
    let mut ranked: Vec<_> = score_all(table, sequence_len)
        .into_iter()
        .filter(|candidate| candidate.qualifies(criterion))
        .collect();

    ranked.sort_by(|a, b| {
        b.coverage
            .partial_cmp(&a.coverage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.pattern.len().cmp(&a.pattern.len()))
            .then_with(|| a.pattern.cmp(&b.pattern))
    });

    tracing::debug!(qualifying = ranked.len(), "ranked patterns");
    ranked
}

/// First pattern in table order whose non-overlapping selection qualifies
pub fn first_qualifying<S: Symbol>(
    table: &PatternTable<S>,
    sequence_len: usize,
    criterion: &Criterion,
) -> Option<RankedPattern<S>> {
    table
        .iter()
        .map(|(pattern, occurrences)| {
            RankedPattern::score(pattern.clone(), occurrences.clone(), sequence_len)
        })
        .find(|candidate| candidate.qualifies(criterion))
}
