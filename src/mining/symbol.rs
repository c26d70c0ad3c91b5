use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use super::occurrence::OccurrenceList;

/// A discrete value of the input sequence
///
/// Symbols are compared by value. `bucket_key` maps a symbol to the integer
/// used to shard the seed index; distinct symbols may share a key.
pub trait Symbol: Copy + Ord + Hash + fmt::Debug + fmt::Display {
    fn bucket_key(self) -> u64;
}

macro_rules! impl_symbol {
    ($($ty:ty),*) => {
        $(
            impl Symbol for $ty {
                #[inline]
                fn bucket_key(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_symbol!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Symbol for char {
    #[inline]
    fn bucket_key(self) -> u64 {
        u64::from(u32::from(self))
    }
}

/// An ordered run of symbols searched for repeated occurrence
///
/// Patterns have value semantics: two patterns are equal iff their symbols
/// are equal. Extending a pattern always produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern<S>(Vec<S>);

impl<S: Symbol> Pattern<S> {
    /// Build the length-2 seed pattern `first second`
    pub fn pair(first: S, second: S) -> Self {
        Self(vec![first, second])
    }

    /// Copy of this pattern with `symbol` appended
    pub fn extended(&self, symbol: S) -> Self {
        let mut symbols = Vec::with_capacity(self.0.len() + 1);
        symbols.extend_from_slice(&self.0);
        symbols.push(symbol);
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<S> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<S> {
        self.0.last().copied()
    }

    pub fn symbols(&self) -> &[S] {
        &self.0
    }
}

/// Patterns always hold at least two symbols; shorter vectors are a caller bug.
impl<S> From<Vec<S>> for Pattern<S> {
    fn from(symbols: Vec<S>) -> Self {
        debug_assert!(symbols.len() >= 2, "pattern needs at least two symbols");
        Self(symbols)
    }
}

impl<S: Symbol> fmt::Display for Pattern<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}

/// Patterns discovered so far, each with its occurrence list
///
/// Iteration is ordered by pattern, which keeps mining output deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable<S> {
    entries: BTreeMap<Pattern<S>, OccurrenceList>,
}

impl<S> Default for PatternTable<S> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<S: Symbol> PatternTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, pattern: &Pattern<S>) -> Option<&OccurrenceList> {
        self.entries.get(pattern)
    }

    pub fn contains(&self, pattern: &Pattern<S>) -> bool {
        self.entries.contains_key(pattern)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Pattern<S>, OccurrenceList> {
        self.entries.iter()
    }

    pub fn patterns(&self) -> btree_map::Keys<'_, Pattern<S>, OccurrenceList> {
        self.entries.keys()
    }

    /// Insert `occurrences` under `pattern`, unioning with any list already
    /// stored for it
    pub fn insert_merged(&mut self, pattern: Pattern<S>, occurrences: OccurrenceList) {
        match self.entries.entry(pattern) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(occurrences);
            }
            btree_map::Entry::Occupied(mut slot) => {
                tracing::trace!(pattern = %slot.key(), "merging occurrence lists");
                let merged = slot.get().merge(&occurrences);
                slot.insert(merged);
            }
        }
    }

    /// Move every entry of `other` into this table
    pub fn absorb(&mut self, other: PatternTable<S>) {
        if self.entries.is_empty() {
            self.entries = other.entries;
            return;
        }
        for (pattern, occurrences) in other.entries {
            self.insert_merged(pattern, occurrences);
        }
    }

    pub(crate) fn occurrences_mut(&mut self, pattern: Pattern<S>) -> &mut OccurrenceList {
        self.entries.entry(pattern).or_default()
    }

    pub(crate) fn retain_min_support(&mut self, min_support: usize) {
        self.entries
            .retain(|_, occurrences| occurrences.len() >= min_support);
    }
}

impl<S> IntoIterator for PatternTable<S> {
    type Item = (Pattern<S>, OccurrenceList);
    type IntoIter = btree_map::IntoIter<Pattern<S>, OccurrenceList>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a PatternTable<S> {
    type Item = (&'a Pattern<S>, &'a OccurrenceList);
    type IntoIter = btree_map::Iter<'a, Pattern<S>, OccurrenceList>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Symbol> FromIterator<(Pattern<S>, OccurrenceList)> for PatternTable<S> {
    fn from_iter<I: IntoIterator<Item = (Pattern<S>, OccurrenceList)>>(iter: I) -> Self {
        let mut table = PatternTable::new();
        for (pattern, occurrences) in iter {
            table.insert_merged(pattern, occurrences);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::Occurrence;

    fn list(spans: &[(usize, usize)]) -> OccurrenceList {
        spans
            .iter()
            .map(|&(start, end)| Occurrence::new(start, end))
            .collect()
    }

    #[test]
    fn test_pattern_value_equality() {
        let a = Pattern::pair(1u32, 2);
        let b = Pattern::from(vec![1u32, 2]);
        assert_eq!(a, b);
        assert_ne!(a, Pattern::pair(2u32, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least two symbols")]
    fn test_pattern_from_single_symbol_panics() {
        let _ = Pattern::from(vec![7u32]);
    }

    #[test]
    fn test_pattern_extended_leaves_original() {
        let seed = Pattern::pair('a', 'b');
        let grown = seed.extended('c');
        assert_eq!(seed.len(), 2);
        assert_eq!(grown.symbols(), &['a', 'b', 'c']);
        assert_eq!(grown.first(), Some('a'));
        assert_eq!(grown.last(), Some('c'));
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(Pattern::from(vec![1u8, 3, 2]).to_string(), "[1 3 2]");
    }

    #[test]
    fn test_char_bucket_key() {
        assert_eq!('a'.bucket_key(), 97);
        assert_eq!(7u8.bucket_key(), 7);
    }

    #[test]
    fn test_insert_merged_unions_on_collision() {
        let mut table = PatternTable::new();
        table.insert_merged(Pattern::pair(1u32, 2), list(&[(0, 1), (4, 5)]));
        table.insert_merged(Pattern::pair(1u32, 2), list(&[(2, 3), (4, 5)]));

        let merged = table.get(&Pattern::pair(1, 2)).unwrap();
        assert_eq!(merged, &list(&[(0, 1), (2, 3), (4, 5)]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_absorb_inserts_and_merges() {
        let mut left = PatternTable::new();
        left.insert_merged(Pattern::pair(1u32, 2), list(&[(0, 1)]));

        let mut right = PatternTable::new();
        right.insert_merged(Pattern::pair(1u32, 2), list(&[(3, 4)]));
        right.insert_merged(Pattern::pair(2u32, 2), list(&[(1, 2)]));

        left.absorb(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.get(&Pattern::pair(1, 2)).unwrap().len(), 2);
        assert!(left.contains(&Pattern::pair(2, 2)));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let table: PatternTable<u32> = vec![
            (Pattern::pair(3, 1), list(&[(0, 1)])),
            (Pattern::pair(1, 2), list(&[(0, 1)])),
            (Pattern::from(vec![1, 2, 3]), list(&[(0, 2)])),
        ]
        .into_iter()
        .collect();

        let order: Vec<String> = table.patterns().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["[1 2]", "[1 2 3]", "[3 1]"]);
    }
}
