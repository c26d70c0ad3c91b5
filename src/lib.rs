//! gapmine - Gap-tolerant recurring pattern miner
//!
//! This library grows recurring patterns bottom-up from length-2 seeds inside
//! one long symbol sequence, tolerating a bounded amount of positional slack
//! per occurrence, and ranks them by non-overlapping coverage.

pub mod cli;
pub mod input;
pub mod mining;
pub mod report;
pub mod select;
