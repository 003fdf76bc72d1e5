//! Registry of well-known error names

use std::collections::BTreeSet;

/// The network is not reachable
pub const ERR_NETWORK_UNAVAILABLE: &str = "ERR_NETWORK_UNAVAILABLE";

/// The user has no session
pub const ERR_NOT_LOGGED_IN: &str = "ERR_NOT_LOGGED_IN";

/// The operation needs consent to use cellular data
pub const ERR_WANT_CELLULAR_NETWORK_USE_PERMIT: &str = "ERR_WANT_CELLULAR_NETWORK_USE_PERMIT";

/// Set of error names that classify as their own key
///
/// The built-in sentinels are always present; configuration may add more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCatalog {
    names: BTreeSet<String>,
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self::with_names(std::iter::empty::<String>())
    }
}

impl ErrorCatalog {
    /// Built-in sentinels plus `extra`
    pub fn with_names<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = [ERR_NETWORK_UNAVAILABLE, ERR_NOT_LOGGED_IN, ERR_WANT_CELLULAR_NETWORK_USE_PERMIT]
            .into_iter()
            .map(String::from)
            .collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
