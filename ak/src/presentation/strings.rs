//! Localized display strings

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Symbolic identifiers for every string an alert can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringId {
    AlertTitleTokenOff,
    AlertMsgTokenOff,
    AlertTitleNetworkUnavailable,
    AlertTitleNotLogIn,
    AlertMsgNotLogIn,
    AlertTitleCellularNetworkUsage,
    AlertMsgCellularNetworkUsage,
    ActionTitleConfirm,
    ActionTitleCancel,
    ActionTitleRetry,
    ActionTitleLogin,
    ActionTitleLoginAgain,
    ActionTitleWontLogin,
}

impl StringId {
    /// Built-in English text
    pub fn default_text(self) -> &'static str {
        match self {
            Self::AlertTitleTokenOff => "Session expired",
            Self::AlertMsgTokenOff => "Your login has expired. Please log in again.",
            Self::AlertTitleNetworkUnavailable => "Network unavailable",
            Self::AlertTitleNotLogIn => "Not logged in",
            Self::AlertMsgNotLogIn => "Please log in to continue.",
            Self::AlertTitleCellularNetworkUsage => "Use cellular data?",
            Self::AlertMsgCellularNetworkUsage => "You are not on Wi-Fi. Continuing will use cellular data.",
            Self::ActionTitleConfirm => "OK",
            Self::ActionTitleCancel => "Cancel",
            Self::ActionTitleRetry => "Retry",
            Self::ActionTitleLogin => "Log in",
            Self::ActionTitleLoginAgain => "Log in again",
            Self::ActionTitleWontLogin => "Not now",
        }
    }
}

/// Source of display text for alerts
pub trait StringCatalog: Send + Sync {
    fn text(&self, id: StringId) -> String;
}

/// Built-in strings with per-id overrides, as loaded from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedStrings {
    overrides: HashMap<StringId, String>,
}

impl LocalizedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, id: StringId, text: impl Into<String>) -> Self {
        self.overrides.insert(id, text.into());
        self
    }
}

impl StringCatalog for LocalizedStrings {
    fn text(&self, id: StringId) -> String {
        self.overrides
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.default_text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let strings = LocalizedStrings::new();
        assert_eq!(strings.text(StringId::ActionTitleRetry), "Retry");
    }

    #[test]
    fn test_override() {
        let strings = LocalizedStrings::new().with_override(StringId::ActionTitleRetry, "重试");
        assert_eq!(strings.text(StringId::ActionTitleRetry), "重试");
        assert_eq!(strings.text(StringId::ActionTitleCancel), "Cancel");
    }

    #[test]
    fn test_deserialize_overrides() {
        let yaml = "alert-title-network-unavailable: Offline\naction-title-confirm: Got it\n";
        let strings: LocalizedStrings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(strings.text(StringId::AlertTitleNetworkUnavailable), "Offline");
        assert_eq!(strings.text(StringId::ActionTitleConfirm), "Got it");
        assert_eq!(strings.text(StringId::ActionTitleLogin), "Log in");
    }
}
