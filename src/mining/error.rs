use thiserror::Error;

/// Errors reported at the mining entry boundary
///
/// The engine itself cannot fail once its inputs are validated, so every
/// variant describes a rejected precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    #[error("Invalid criterion: {field} {reason}")]
    InvalidCriterion { field: &'static str, reason: String },

    #[error("Sequence too short: need at least 2 symbols, got {len}")]
    SequenceTooShort { len: usize },

    #[error("Bucket bits out of range: got {bits}, maximum is {max}")]
    BucketBitsOutOfRange { bits: u32, max: u32 },
}

/// Result type for mining operations
pub type Result<T> = std::result::Result<T, MiningError>;
