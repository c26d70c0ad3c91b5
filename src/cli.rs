//! CLI argument parsing for gapmine

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::mining::{Criterion, DEFAULT_BUCKET_BITS};
use crate::report::OutputFormat;

/// Synthetic input generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    /// 0, 1, ..., alphabet - 1 repeated
    Cyclic,
    /// Uniform random symbols from a seeded generator
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "gapmine")]
#[command(version)]
#[command(about = "Mine recurring gap-tolerant patterns from a symbol sequence", long_about = None)]
pub struct Cli {
    /// File of integer symbols separated by whitespace or commas ("-" for stdin)
    #[arg(value_name = "INPUT", conflicts_with = "generate")]
    pub input: Option<PathBuf>,

    /// Generate the input sequence instead of reading it
    #[arg(long = "generate", value_enum, value_name = "KIND")]
    pub generate: Option<Generator>,

    /// Length of the generated sequence
    #[arg(long = "length", value_name = "N", default_value = "100")]
    pub length: usize,

    /// Number of distinct symbols in the generated sequence
    #[arg(long = "alphabet", value_name = "K", default_value = "32")]
    pub alphabet: u32,

    /// Seed for the random generator
    #[arg(long = "seed", value_name = "SEED", default_value = "0")]
    pub seed: u64,

    /// TOML file with min_len, min_support, max_error and min_score
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum pattern length
    #[arg(short = 'l', long = "min-len", value_name = "N")]
    pub min_len: Option<usize>,

    /// Minimum number of occurrences
    #[arg(short = 's', long = "min-support", value_name = "N")]
    pub min_support: Option<usize>,

    /// Maximum total gap slack per occurrence
    #[arg(short = 'e', long = "max-error", value_name = "N")]
    pub max_error: Option<usize>,

    /// Minimum coverage ratio in [0, 1]
    #[arg(long = "min-score", value_name = "RATIO")]
    pub min_score: Option<f64>,

    /// Seed index size as a power of two
    #[arg(long = "bucket-bits", value_name = "BITS", default_value_t = DEFAULT_BUCKET_BITS)]
    pub bucket_bits: u32,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report only the first qualifying pattern
    #[arg(long = "first")]
    pub first: bool,

    /// Report every mined pattern, skipping the non-overlapping re-filter
    #[arg(long = "unfiltered", conflicts_with = "first")]
    pub unfiltered: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line thresholds on top of `base`
    pub fn apply_overrides(&self, base: Criterion) -> Criterion {
        Criterion {
            min_len: self.min_len.unwrap_or(base.min_len),
            min_support: self.min_support.unwrap_or(base.min_support),
            max_error: self.max_error.unwrap_or(base.max_error),
            min_score: self.min_score.unwrap_or(base.min_score),
        }
    }
}
