//! Error classification key

use std::fmt;

/// Identifier that groups error reports which share one alert
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// Error carried a numeric code
    Code(i64),
    /// Error matched a catalog entry
    Catalog(String),
    /// Neither; rendered as `0`
    Unknown,
}

impl ErrorKey {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Catalog(name) => f.write_str(name),
            Self::Unknown => f.write_str("0"),
        }
    }
}
