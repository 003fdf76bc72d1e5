//! PresentFmt - formatting helpers for presentation layers
//!
//! Pure, stateless conversions used when rendering values to users: byte
//! sizes, durations, calendar dates, digit decomposition and HTML stripping.
//!
//! # Example
//!
//! ```
//! use presentfmt::{ByteUnit, to_hhmmss, to_tbgbmbkbb};
//!
//! assert_eq!(to_tbgbmbkbb(1024, ByteUnit::B), "1KB");
//! assert_eq!(to_hhmmss(3725), "1:02:05");
//! ```

mod bytes;
mod digits;
mod error;
mod text;
mod time;

pub use bytes::{ByteUnit, to_tbgbmbkbb};
pub use digits::{DEFAULT_BASE, DEFAULT_DIGIT_LENGTH, number_to_digits};
pub use error::FormatError;
pub use text::remove_html_tag;
pub use time::{
    MILLIS_PER_DAY, interval_in_days, parse_seconds, parse_timestamp, time_string_to_mmdd_hhmm,
    time_to_date_with_zero, to_hhmmss, to_yymmdd,
};
