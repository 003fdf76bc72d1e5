//! Digit decomposition

use crate::error::FormatError;

/// Default minimum number of digits returned by [`number_to_digits`]
pub const DEFAULT_DIGIT_LENGTH: usize = 3;

/// Default numeric base for [`number_to_digits`]
pub const DEFAULT_BASE: u64 = 10;

/// Split `num` into digits, least significant first, zero-padded to `length`
///
/// Used to drive per-digit counters (e.g. `7` -> `[7, 0, 0]`).
pub fn number_to_digits(num: u64, length: usize, base: u64) -> Result<Vec<u64>, FormatError> {
    if base < 2 {
        return Err(FormatError::InvalidBase(base));
    }

    let mut digits = Vec::with_capacity(length);
    let mut remain = num;
    while remain > 0 || digits.len() < length {
        digits.push(remain % base);
        remain /= base;
    }
    Ok(digits)
}
