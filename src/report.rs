//! Rendering of mining results as text, JSON or CSV

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

use crate::mining::{Criterion, Symbol};
use crate::select::RankedPattern;

/// Output format for mined patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Everything reported about one mining run
#[derive(Debug, Clone, Serialize)]
pub struct MiningReport<S> {
    pub sequence_len: usize,
    pub criterion: Criterion,
    pub patterns: Vec<RankedPattern<S>>,
}

impl<S: Symbol + Serialize> MiningReport<S> {
    pub fn new(sequence_len: usize, criterion: Criterion, patterns: Vec<RankedPattern<S>>) -> Self {
        Self {
            sequence_len,
            criterion,
            patterns,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
            }
            OutputFormat::Csv => Ok(self.to_csv()),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Sequence length: {}, patterns: {}",
            self.sequence_len,
            self.patterns.len()
        );

        for ranked in &self.patterns {
            let _ = writeln!(
                out,
                "Pattern {} (length {}, support {}, selected {}, coverage {:.3}, simple {:.3})",
                ranked.pattern,
                ranked.pattern.len(),
                ranked.occurrences.len(),
                ranked.selected,
                ranked.coverage,
                ranked.simple_score
            );
            for occurrence in &ranked.occurrences {
                let _ = writeln!(out, "    {}", occurrence);
            }
        }

        out
    }

    fn to_csv(&self) -> String {
        let mut out =
            String::from("pattern,length,support,selected,simple_score,coverage,occurrences\n");

        for ranked in &self.patterns {
            let occurrences = ranked
                .occurrences
                .iter()
                .map(|o| format!("{}-{}", o.start, o.end))
                .collect::<Vec<_>>()
                .join(";");
            let _ = writeln!(
                out,
                "{},{},{},{},{:.6},{:.6},{}",
                escape_field(&ranked.pattern.to_string()),
                ranked.pattern.len(),
                ranked.occurrences.len(),
                ranked.selected,
                ranked.simple_score,
                ranked.coverage,
                escape_field(&occurrences)
            );
        }

        out
    }
}

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
