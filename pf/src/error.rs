//! Formatting error types

use thiserror::Error;

/// Errors that can occur while parsing formatter input
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid timestamp {input:?}: {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Timestamp out of range: {0}ms")]
    OutOfRange(i64),

    #[error("Unknown byte unit: {0:?}")]
    UnknownUnit(String),

    #[error("Base must be at least 2, got {0}")]
    InvalidBase(u64),
}
