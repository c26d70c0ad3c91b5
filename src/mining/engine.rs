use super::criterion::Criterion;
use super::error::{MiningError, Result};
use super::occurrence::OccurrenceList;
use super::score::simple_score;
use super::seed::SeedIndex;
use super::symbol::{Pattern, PatternTable, Symbol};

/// Default seed index size: 2^8 buckets
pub const DEFAULT_BUCKET_BITS: u32 = 8;

/// Largest accepted seed index size: 2^16 buckets
pub const MAX_BUCKET_BITS: u32 = 16;

/// Mine `sequence` with the default seed index size
///
/// # Example
/// ```
/// use gapmine::mining::{mine, Criterion, Occurrence, Pattern};
///
/// let criterion = Criterion { min_score: 0.0, ..Criterion::default() };
/// let patterns = mine(&[1u32, 3, 2, 1, 2], &criterion).unwrap();
///
/// let found = patterns.get(&Pattern::pair(1, 2)).unwrap();
/// assert_eq!(found.as_slice(), &[Occurrence::new(0, 2), Occurrence::new(3, 4)]);
/// ```
pub fn mine<S: Symbol>(sequence: &[S], criterion: &Criterion) -> Result<PatternTable<S>> {
    Miner::new(*criterion).mine(sequence)
}

/// Support-pruned pattern growth miner
///
/// Holds only configuration; every call to [`Miner::mine`] is an
/// independent run.
#[derive(Debug, Clone)]
pub struct Miner {
    criterion: Criterion,
    bucket_bits: u32,
}

impl Miner {
    pub fn new(criterion: Criterion) -> Self {
        Self {
            criterion,
            bucket_bits: DEFAULT_BUCKET_BITS,
        }
    }

    /// Use `2^bits` buckets for the seed index
    pub fn with_bucket_bits(mut self, bits: u32) -> Self {
        self.bucket_bits = bits;
        self
    }

    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    /// Check the criterion, the seed index size and the sequence length
    pub fn validate<S>(&self, sequence: &[S]) -> Result<()> {
        self.criterion.validate()?;

        if self.bucket_bits > MAX_BUCKET_BITS {
            return Err(MiningError::BucketBitsOutOfRange {
                bits: self.bucket_bits,
                max: MAX_BUCKET_BITS,
            });
        }

        if sequence.len() < 2 {
            return Err(MiningError::SequenceTooShort {
                len: sequence.len(),
            });
        }

        Ok(())
    }

    /// Grow every seed of `sequence` and collect the accepted patterns
    ///
    /// Every returned pattern has at least `min_len` symbols, at least
    /// `min_support` occurrences and a simple score of at least `min_score`.
    pub fn mine<S: Symbol>(&self, sequence: &[S]) -> Result<PatternTable<S>> {
        self.validate(sequence)?;

        let index = SeedIndex::build(sequence, &self.criterion, 1usize << self.bucket_bits);
        let extender = Extender {
            criterion: &self.criterion,
            index: &index,
            sequence_len: sequence.len(),
        };

        let mut patterns = PatternTable::new();
        for (seed, occurrences) in index.seeds() {
            patterns.absorb(extender.extend(seed, occurrences));
        }

        tracing::debug!(
            sequence_len = sequence.len(),
            seeds = index.len(),
            patterns = patterns.len(),
            "mining finished"
        );

        Ok(patterns)
    }
}

/// Read-only context shared by one run's recursion
struct Extender<'a, S> {
    criterion: &'a Criterion,
    index: &'a SeedIndex<S>,
    sequence_len: usize,
}

impl<S: Symbol> Extender<'_, S> {
    /// Grow `pattern` depth-first and return every pattern accepted below it
    ///
    /// A pattern is emitted when it is a leaf (nothing can follow its last
    /// symbol), when some extension dies for lack of support, or when an
    /// extension survives but loses occurrences. Each call owns its result
    /// table; children's tables are merged in.
    fn extend(&self, pattern: &Pattern<S>, occurrences: &OccurrenceList) -> PatternTable<S> {
        let mut result = PatternTable::new();
        let Some(last) = pattern.last() else {
            return result;
        };

        let mut candidates = self.index.successors(last).peekable();
        if candidates.peek().is_none() {
            self.accept(&mut result, pattern, occurrences);
            return result;
        }

        for (seed, seed_occurrences) in candidates {
            let extended_occurrences =
                occurrences.intersect(seed_occurrences, pattern.len(), self.criterion.max_error);

            if extended_occurrences.len() >= self.criterion.min_support {
                let Some(next) = seed.last() else {
                    continue;
                };
                let extended = pattern.extended(next);
                result.absorb(self.extend(&extended, &extended_occurrences));

                if occurrences.len() > extended_occurrences.len() {
                    self.accept(&mut result, pattern, occurrences);
                }
            } else {
                tracing::trace!(
                    %pattern,
                    via = %seed,
                    support = extended_occurrences.len(),
                    "extension below min_support"
                );
                self.accept(&mut result, pattern, occurrences);
            }
        }

        result
    }

    /// Emit `pattern` if it is long enough and covers enough of the sequence
    fn accept(&self, result: &mut PatternTable<S>, pattern: &Pattern<S>, occurrences: &OccurrenceList) {
        if pattern.len() < self.criterion.min_len || result.contains(pattern) {
            return;
        }
        if simple_score(occurrences, self.sequence_len) >= self.criterion.min_score {
            result.insert_merged(pattern.clone(), occurrences.clone());
        }
    }
}
