//! Input sequences for the miner
//!
//! Sequences are read as integer symbols from text, or generated
//! synthetically for demos and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or generating a sequence
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid symbol {token:?} at token {position}")]
    InvalidToken { position: usize, token: String },

    #[error("Invalid generator settings: {0}")]
    InvalidGenerator(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Parse whitespace- and/or comma-separated unsigned integers
///
/// `#` starts a comment that runs to the end of the line.
///
/// # Example
/// ```
/// use gapmine::input::parse_sequence;
///
/// let symbols = parse_sequence("1 3, 2\n1,2 # tail").unwrap();
/// assert_eq!(symbols, vec![1, 3, 2, 1, 2]);
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<u32>> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u32>().map_err(|_| InputError::InvalidToken {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Read a sequence from a file, or from stdin when `path` is `-`
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    parse_sequence(&text)
}

/// `0, 1, ..., alphabet - 1, 0, 1, ...` truncated to `len` symbols
pub fn cyclic_sequence(len: usize, alphabet: u32) -> Result<Vec<u32>> {
    if alphabet == 0 {
        return Err(InputError::InvalidGenerator(
            "alphabet must be non-zero".to_string(),
        ));
    }
    Ok((0..len).map(|i| (i % alphabet as usize) as u32).collect())
}

/// `len` uniform symbols from `0..alphabet`, reproducible for a given seed
pub fn random_sequence(len: usize, alphabet: u32, seed: u64) -> Result<Vec<u32>> {
    if alphabet == 0 {
        return Err(InputError::InvalidGenerator(
            "alphabet must be non-zero".to_string(),
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..len).map(|_| rng.gen_range(0..alphabet)).collect())
}
