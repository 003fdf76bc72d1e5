//! Default handling applied when an alert is accepted

use tracing::debug;

use crate::domain::{ERR_NOT_LOGGED_IN, ErrorKey};
use crate::navigation::{LoginRoute, NavigationDispatcher};

/// Server code for an expired session token
pub const AUTH_EXPIRED_CODE: i64 = 10;

/// Side effect run on the positive path for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultHandler {
    /// Resolve queued reports as handled
    Acknowledge,
    /// Resolve queued reports as handled, then open the login scene
    AcknowledgeAndLogin,
}

impl DefaultHandler {
    pub fn for_key(key: &ErrorKey) -> Self {
        match key {
            ErrorKey::Code(AUTH_EXPIRED_CODE) => Self::AcknowledgeAndLogin,
            ErrorKey::Catalog(name) if name == ERR_NOT_LOGGED_IN => Self::AcknowledgeAndLogin,
            _ => Self::Acknowledge,
        }
    }

    /// Run `on_handled`, then this handler's own side effect
    ///
    /// Returns whatever `on_handled` reports (the number of resolved entries
    /// when it flushes a queue).
    pub fn resolve<F>(self, on_handled: F, login: &LoginRoute, navigator: &dyn NavigationDispatcher) -> usize
    where
        F: FnOnce() -> usize,
    {
        debug!(handler = ?self, "DefaultHandler::resolve: called");
        let resolved = on_handled();
        if self == Self::AcknowledgeAndLogin {
            navigator.dispatch(login.push_action());
        }
        resolved
    }
}
