//! Domain types for error alert coordination

mod catalog;
mod key;
mod reported;
mod resolution;

pub use catalog::{ERR_NETWORK_UNAVAILABLE, ERR_NOT_LOGGED_IN, ERR_WANT_CELLULAR_NETWORK_USE_PERMIT, ErrorCatalog};
pub use key::ErrorKey;
pub use reported::{OpaqueValue, ReportedError};
pub use resolution::{Choice, Resolution};
