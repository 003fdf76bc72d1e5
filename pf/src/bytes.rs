//! Byte-size formatting in binary (1024) units

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::FormatError;

const DIVISOR: u64 = 1024;

/// Unit ladder used by [`to_tbgbmbkbb`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ByteUnit {
    #[default]
    B,
    KB,
    MB,
    GB,
    TB,
}

impl ByteUnit {
    /// All units, smallest first
    pub const ALL: [ByteUnit; 5] = [Self::B, Self::KB, Self::MB, Self::GB, Self::TB];

    /// Position on the ladder (B = 0)
    pub fn level(self) -> u32 {
        self as u32
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
        }
    }

    fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ByteUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::UnknownUnit(s.to_string()))
    }
}

/// Render a byte count as space separated components, largest unit first
///
/// `from` states the unit of the smallest component that is rendered; anything
/// below it is truncated. Zero components are omitted and TB absorbs every
/// amount above it, so `to_tbgbmbkbb(1024, ByteUnit::B)` is `"1KB"` and
/// `to_tbgbmbkbb(1025, ByteUnit::B)` is `"1KB 1B"`.
pub fn to_tbgbmbkbb(bytes: u64, from: ByteUnit) -> String {
    debug!(%bytes, %from, "to_tbgbmbkbb: called");
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut num = bytes / DIVISOR.pow(from.level());
    let mut unit = from;
    let mut parts: Vec<(u64, ByteUnit)> = Vec::new();

    while num > 0 {
        match unit.next() {
            Some(next) => {
                parts.push((num % DIVISOR, unit));
                num /= DIVISOR;
                unit = next;
            }
            None => {
                parts.push((num, unit));
                break;
            }
        }
    }

    if parts.is_empty() {
        return format!("0{}", from);
    }

    parts
        .iter()
        .rev()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{}{}", amount, unit))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const TB: u64 = MB * 1024 * 1024;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(to_tbgbmbkbb(0, ByteUnit::B), "0B");
        assert_eq!(to_tbgbmbkbb(0, ByteUnit::MB), "0B");
    }

    #[test]
    fn test_exact_units() {
        assert_eq!(to_tbgbmbkbb(1, ByteUnit::B), "1B");
        assert_eq!(to_tbgbmbkbb(KB, ByteUnit::B), "1KB");
        assert_eq!(to_tbgbmbkbb(MB, ByteUnit::B), "1MB");
        assert_eq!(to_tbgbmbkbb(TB, ByteUnit::B), "1TB");
    }

    #[test]
    fn test_mixed_components() {
        assert_eq!(to_tbgbmbkbb(KB + 1, ByteUnit::B), "1KB 1B");
        assert_eq!(to_tbgbmbkbb(KB + 512, ByteUnit::B), "1KB 512B");
        assert_eq!(to_tbgbmbkbb(MB + 5, ByteUnit::B), "1MB 5B");
    }

    #[test]
    fn test_terabytes_absorb_overflow() {
        assert_eq!(to_tbgbmbkbb(2048 * TB, ByteUnit::B), "2048TB");
    }

    #[test]
    fn test_from_level_truncates_smaller_units() {
        assert_eq!(to_tbgbmbkbb(2 * KB + 100, ByteUnit::KB), "2KB");
        assert_eq!(to_tbgbmbkbb(512, ByteUnit::KB), "0KB");
        assert_eq!(to_tbgbmbkbb(3 * MB + 2 * KB, ByteUnit::MB), "3MB");
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("kb".parse::<ByteUnit>().unwrap(), ByteUnit::KB);
        assert_eq!(" TB ".parse::<ByteUnit>().unwrap(), ByteUnit::TB);
        assert!("PB".parse::<ByteUnit>().is_err());
    }

    proptest! {
        #[test]
        fn prop_components_sum_back_to_input(bytes in 1u64..(64 * TB)) {
            let rendered = to_tbgbmbkbb(bytes, ByteUnit::B);
            let mut total = 0u64;
            for part in rendered.split(' ') {
                let split = part.find(|c: char| c.is_ascii_alphabetic()).unwrap();
                let (amount, suffix) = part.split_at(split);
                let unit: ByteUnit = suffix.parse().unwrap();
                let amount: u64 = amount.parse().unwrap();
                prop_assert!(amount > 0);
                total += amount * DIVISOR.pow(unit.level());
            }
            prop_assert_eq!(total, bytes);
        }
    }
}
