use super::criterion::Criterion;
use super::occurrence::{Occurrence, OccurrenceList};
use super::symbol::{Pattern, PatternTable, Symbol};

/// Length-2 seed patterns bucketed by their first symbol
///
/// Built once per mining run and only read afterwards. Buckets bound the
/// candidate scan during extension: every extension of a pattern ending in
/// symbol `s` is looked up in the bucket of `s`.
#[derive(Debug, Clone)]
pub struct SeedIndex<S> {
    buckets: Vec<PatternTable<S>>,
}

impl<S: Symbol> SeedIndex<S> {
    /// Scan `sequence` once and collect every surviving seed
    ///
    /// For each position `i`, every `j` in `i + 1 ..= i + max_error + 1`
    /// (clamped to the last index) contributes occurrence `(i, j)` to the
    /// pattern `sequence[i] sequence[j]`. Patterns with fewer than
    /// `min_support` occurrences are dropped afterwards.
    ///
    /// `bucket_count` must be non-zero.
    pub fn build(sequence: &[S], criterion: &Criterion, bucket_count: usize) -> Self {
        debug_assert!(bucket_count > 0);
        let mut index = Self {
            buckets: vec![PatternTable::new(); bucket_count],
        };

        let last = sequence.len().saturating_sub(1);
        for (i, &first) in sequence.iter().enumerate() {
            let window_end = i.saturating_add(criterion.max_error).saturating_add(1).min(last);
            let bucket = index.bucket_of(first);
            for j in (i + 1)..=window_end {
                index.buckets[bucket]
                    .occurrences_mut(Pattern::pair(first, sequence[j]))
                    .push_ascending(Occurrence::new(i, j));
            }
        }

        let scanned = index.len();
        for bucket in &mut index.buckets {
            bucket.retain_min_support(criterion.min_support);
        }
        tracing::debug!(
            scanned,
            kept = index.len(),
            min_support = criterion.min_support,
            "built seed index"
        );

        index
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_of(&self, symbol: S) -> usize {
        (symbol.bucket_key() % self.buckets.len() as u64) as usize
    }

    /// Number of seed patterns across all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(PatternTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(PatternTable::is_empty)
    }

    pub fn get(&self, pattern: &Pattern<S>) -> Option<&OccurrenceList> {
        let first = pattern.first()?;
        self.buckets[self.bucket_of(first)].get(pattern)
    }

    /// Seeds starting with `symbol`, the only candidates that can follow a
    /// pattern ending in `symbol`
    pub fn successors(&self, symbol: S) -> impl Iterator<Item = (&Pattern<S>, &OccurrenceList)> {
        self.buckets[self.bucket_of(symbol)]
            .iter()
            .filter(move |(pattern, _)| pattern.first() == Some(symbol))
    }

    /// Every seed, bucket by bucket
    pub fn seeds(&self) -> impl Iterator<Item = (&Pattern<S>, &OccurrenceList)> {
        self.buckets.iter().flat_map(PatternTable::iter)
    }
}
