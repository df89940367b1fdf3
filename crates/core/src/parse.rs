//! Parsing master seeds from user-provided text.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced by [`parse_seed`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedParseError {
    /// Input was empty after trimming.
    #[error("seed is empty")]
    Empty,
    /// Input was not a valid decimal or hexadecimal integer.
    #[error("invalid seed {input:?}: {source}")]
    Invalid {
        /// Trimmed input text.
        input: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },
}

/// Parse a 32-bit seed written in decimal or `0x`-prefixed hexadecimal.
///
/// Zero is accepted; the store interprets it as "generate a runtime seed".
pub fn parse_seed(text: &str) -> Result<u32, SeedParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SeedParseError::Empty);
    }

    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.replace('_', "").parse::<u32>(),
    };

    parsed.map_err(|source| SeedParseError::Invalid {
        input: trimmed.to_string(),
        source,
    })
}
