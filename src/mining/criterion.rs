// Acceptance criterion for pattern mining
//
// The four thresholds bound every stage of the run: seeds and extensions
// are pruned by support, gaps are bounded by `max_error`, and emitted
// patterns must reach `min_len` and `min_score`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::MiningError;

/// Thresholds controlling which patterns the miner keeps
///
/// # Example
/// ```
/// use gapmine::mining::Criterion;
///
/// let criterion = Criterion::default();
/// assert_eq!(criterion.min_support, 2);
/// assert!(criterion.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criterion {
    /// Minimum accepted pattern length (in symbols)
    ///
    /// Shorter patterns are still grown from, they are only never emitted.
    /// Must be >= 2 since seeds are length 2.
    pub min_len: usize,

    /// Minimum number of occurrences at every pruning point
    ///
    /// Applied to seeds after the scan and to every extension before
    /// recursing into it.
    pub min_support: usize,

    /// Maximum total positional slack of an occurrence
    ///
    /// An occurrence of a pattern of length `n` may span at most
    /// `n - 1 + max_error` positions. 0 means exact contiguous matches.
    pub max_error: usize,

    /// Minimum coverage ratio in `[0, 1]` for acceptance
    ///
    /// The engine compares it against the overlap-counted simple score;
    /// the selector compares it against the non-overlapping score.
    pub min_score: f64,
}

impl Default for Criterion {
    fn default() -> Self {
        Self {
            min_len: 2,
            min_support: 2,
            max_error: 1,
            min_score: 0.5,
        }
    }
}

impl Criterion {
    /// Load a criterion from a TOML file
    ///
    /// Fields missing from the file keep their default value.
    ///
    /// # Example TOML
    /// ```toml
    /// min_len = 3
    /// min_support = 2
    /// max_error = 1
    /// min_score = 0.25
    /// ```
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read criterion file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a criterion from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let criterion: Criterion =
            toml::from_str(content).context("Failed to parse TOML criterion")?;
        criterion.validate()?;
        Ok(criterion)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), MiningError> {
        if self.min_len < 2 {
            return Err(MiningError::InvalidCriterion {
                field: "min_len",
                reason: format!("must be >= 2, got {}", self.min_len),
            });
        }

        if self.min_support < 1 {
            return Err(MiningError::InvalidCriterion {
                field: "min_support",
                reason: format!("must be >= 1, got {}", self.min_support),
            });
        }

        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(MiningError::InvalidCriterion {
                field: "min_score",
                reason: format!("must be in [0, 1], got {}", self.min_score),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_criterion() {
        let criterion = Criterion::default();
        assert_eq!(criterion.min_len, 2);
        assert_eq!(criterion.min_support, 2);
        assert_eq!(criterion.max_error, 1);
        assert_eq!(criterion.min_score, 0.5);
        assert!(criterion.validate().is_ok());
    }

    #[test]
    fn test_invalid_min_len() {
        let criterion = Criterion {
            min_len: 1,
            ..Criterion::default()
        };
        assert!(matches!(
            criterion.validate(),
            Err(MiningError::InvalidCriterion { field: "min_len", .. })
        ));
    }

    #[test]
    fn test_invalid_min_support() {
        let criterion = Criterion {
            min_support: 0,
            ..Criterion::default()
        };
        assert!(matches!(
            criterion.validate(),
            Err(MiningError::InvalidCriterion {
                field: "min_support",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_min_score() {
        for score in [-0.1, 1.5, f64::NAN] {
            let criterion = Criterion {
                min_score: score,
                ..Criterion::default()
            };
            assert!(criterion.validate().is_err(), "score {} accepted", score);
        }
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let criterion = Criterion::from_toml_str("min_len = 4\nmax_error = 0\n").unwrap();
        assert_eq!(criterion.min_len, 4);
        assert_eq!(criterion.max_error, 0);
        assert_eq!(criterion.min_support, 2);
        assert_eq!(criterion.min_score, 0.5);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(Criterion::from_toml_str("min_score = 2.0\n").is_err());
        assert!(Criterion::from_toml_str("min_len = \"three\"\n").is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_support = 3").unwrap();
        writeln!(file, "min_score = 0.1").unwrap();

        let criterion = Criterion::from_toml_file(file.path()).unwrap();
        assert_eq!(criterion.min_support, 3);
        assert_eq!(criterion.min_score, 0.1);
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = Criterion::from_toml_file("/nonexistent/criterion.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read criterion file"));
    }
}
