// Gap-Tolerant Pattern Growth Mining
//
// This module discovers recurring patterns inside one long symbol sequence.
// A pattern may reappear with bounded positional slack: the symbols of an
// occurrence need not be adjacent, but the whole occurrence must fit inside
// a window that grows with the pattern's length plus `max_error`.
//
// Pipeline:
// 1. Seed: scan the sequence once, collect every length-2 pattern whose two
//    symbols are at most `max_error + 1` apart, bucket by first symbol and
//    prune by minimum support.
// 2. Extend: grow each seed one symbol at a time by chaining its occurrences
//    onto seed occurrences that start where it ends. Recurse while support
//    survives; emit a pattern when its extensions lose support.
// 3. Score: acceptance uses overlap-counted coverage. Callers re-rank with
//    the non-overlapping (weighted interval scheduling) coverage.
//
// Key Insight: slack is measured from the start of the match and scales with
// the pattern length, so a long pattern may spread its gaps anywhere as long
// as the total stays within `max_error`.

mod criterion;
mod engine;
mod error;
mod occurrence;
mod score;
mod seed;
mod symbol;

pub use criterion::Criterion;
pub use engine::{mine, Miner, DEFAULT_BUCKET_BITS, MAX_BUCKET_BITS};
pub use error::MiningError;
pub use occurrence::{Occurrence, OccurrenceList};
pub use score::{non_overlap_score, simple_score, NonOverlapScore};
pub use seed::SeedIndex;
pub use symbol::{Pattern, PatternTable, Symbol};
