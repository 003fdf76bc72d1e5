//! Error key classification

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{ErrorCatalog, ErrorKey, ReportedError};

/// Maps reported errors to the key their alerts are grouped under
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier {
    catalog: ErrorCatalog,
}

impl ErrorClassifier {
    pub fn new(catalog: ErrorCatalog) -> Self {
        Self { catalog }
    }

    /// Turn a loosely shaped JSON error into a [`ReportedError`]
    ///
    /// Strings naming a catalog entry become catalog errors; the rest goes
    /// through [`ReportedError::json`].
    pub fn ingest(&self, value: Value) -> ReportedError {
        debug!(%value, "ErrorClassifier::ingest: called");
        if let Value::String(name) = &value
            && self.catalog.contains(name)
        {
            return ReportedError::catalog(name.clone());
        }

        ReportedError::json(value)
    }

    /// Derive the grouping key for an error
    ///
    /// Errors that carry no code and match no catalog entry map to
    /// [`ErrorKey::Unknown`] and emit one warning.
    pub fn key_for_error(&self, error: &ReportedError) -> ErrorKey {
        if let Some(code) = error.numeric_code() {
            return ErrorKey::Code(code);
        }

        match error.string_form() {
            Some(name) if self.catalog.contains(&name) => ErrorKey::Catalog(name),
            _ => {
                warn!(error = %error, "Cannot derive error key, using default key 0");
                ErrorKey::Unknown
            }
        }
    }
}
