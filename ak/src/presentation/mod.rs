//! Alert content derived from an error

mod strings;

pub use strings::{LocalizedStrings, StringCatalog, StringId};

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    ERR_NETWORK_UNAVAILABLE, ERR_NOT_LOGGED_IN, ERR_WANT_CELLULAR_NETWORK_USE_PERMIT, OpaqueValue, ReportedError,
};
use crate::policy::AUTH_EXPIRED_CODE;

/// What an alert for an error shows
///
/// A presentation with neither title nor message text is empty, which means
/// the error resolves without asking the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlertPresentation {
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "positive-action")]
    pub positive_action: Option<String>,
    #[serde(rename = "negative-action")]
    pub negative_action: Option<String>,
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

impl AlertPresentation {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title) && !has_text(&self.message)
    }
}

/// Builds [`AlertPresentation`]s from errors using a string catalog
#[derive(Clone)]
pub struct PresentationBuilder {
    strings: Arc<dyn StringCatalog>,
}

impl Default for PresentationBuilder {
    fn default() -> Self {
        Self::new(Arc::new(LocalizedStrings::default()))
    }
}

impl PresentationBuilder {
    pub fn new(strings: Arc<dyn StringCatalog>) -> Self {
        Self { strings }
    }

    pub fn build(&self, error: &ReportedError) -> AlertPresentation {
        debug!(%error, "PresentationBuilder::build: called");
        if let Some(code) = error.numeric_code() {
            return if code == AUTH_EXPIRED_CODE {
                self.token_off()
            } else {
                self.server_message(error.msg())
            };
        }

        match error {
            ReportedError::Catalog { name } => self.sentinel(name),
            ReportedError::Opaque(OpaqueValue::Json(Value::Object(map))) if map.contains_key("code") => {
                self.server_message(error.msg())
            }
            ReportedError::Opaque(OpaqueValue::Json(Value::String(name))) => self.sentinel(name),
            ReportedError::Numeric { .. } | ReportedError::Opaque(_) => AlertPresentation::default(),
        }
    }

    fn text(&self, id: StringId) -> Option<String> {
        Some(self.strings.text(id))
    }

    fn token_off(&self) -> AlertPresentation {
        AlertPresentation {
            title: self.text(StringId::AlertTitleTokenOff),
            message: self.text(StringId::AlertMsgTokenOff),
            positive_action: self.text(StringId::ActionTitleLoginAgain),
            negative_action: self.text(StringId::ActionTitleCancel),
        }
    }

    fn server_message(&self, msg: Option<String>) -> AlertPresentation {
        AlertPresentation {
            title: msg,
            message: Some(String::new()),
            positive_action: self.text(StringId::ActionTitleConfirm),
            negative_action: None,
        }
    }

    fn sentinel(&self, name: &str) -> AlertPresentation {
        match name {
            ERR_NETWORK_UNAVAILABLE => AlertPresentation {
                title: self.text(StringId::AlertTitleNetworkUnavailable),
                message: None,
                positive_action: self.text(StringId::ActionTitleRetry),
                negative_action: None,
            },
            ERR_NOT_LOGGED_IN => AlertPresentation {
                title: self.text(StringId::AlertTitleNotLogIn),
                message: self.text(StringId::AlertMsgNotLogIn),
                positive_action: self.text(StringId::ActionTitleLogin),
                negative_action: self.text(StringId::ActionTitleWontLogin),
            },
            ERR_WANT_CELLULAR_NETWORK_USE_PERMIT => AlertPresentation {
                title: self.text(StringId::AlertTitleCellularNetworkUsage),
                message: self.text(StringId::AlertMsgCellularNetworkUsage),
                positive_action: self.text(StringId::ActionTitleConfirm),
                negative_action: self.text(StringId::ActionTitleCancel),
            },
            _ => AlertPresentation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_off() {
        let p = PresentationBuilder::default().build(&ReportedError::code(AUTH_EXPIRED_CODE));
        assert_eq!(p.title.as_deref(), Some("Session expired"));
        assert_eq!(p.positive_action.as_deref(), Some("Log in again"));
        assert_eq!(p.negative_action.as_deref(), Some("Cancel"));
        assert!(!p.is_empty());
    }

    #[test]
    fn test_server_message_uses_msg_as_title() {
        let p = PresentationBuilder::default().build(&ReportedError::numeric(500, "Server busy"));
        assert_eq!(p.title.as_deref(), Some("Server busy"));
        assert_eq!(p.message.as_deref(), Some(""));
        assert_eq!(p.positive_action.as_deref(), Some("OK"));
        assert_eq!(p.negative_action, None);
    }

    #[test]
    fn test_numeric_without_msg_is_empty() {
        let p = PresentationBuilder::default().build(&ReportedError::code(500));
        assert!(p.is_empty());
    }

    #[test]
    fn test_network_unavailable_single_action() {
        let p = PresentationBuilder::default().build(&ReportedError::catalog(ERR_NETWORK_UNAVAILABLE));
        assert!(has_text(&p.title));
        assert!(p.positive_action.is_some());
        assert!(p.negative_action.is_none());
    }

    #[test]
    fn test_not_logged_in_and_cellular_have_two_actions() {
        let builder = PresentationBuilder::default();
        for name in [ERR_NOT_LOGGED_IN, ERR_WANT_CELLULAR_NETWORK_USE_PERMIT] {
            let p = builder.build(&ReportedError::catalog(name));
            assert!(has_text(&p.title) && has_text(&p.message), "{}", name);
            assert!(p.positive_action.is_some() && p.negative_action.is_some(), "{}", name);
        }
    }

    #[test]
    fn test_unrecognized_is_empty() {
        let builder = PresentationBuilder::default();
        assert!(builder.build(&ReportedError::catalog("ERR_DISK_FULL")).is_empty());
        assert!(builder.build(&ReportedError::json(json!({"oops": 1}))).is_empty());
        assert!(builder.build(&ReportedError::json(json!("random failure"))).is_empty());
    }

    #[test]
    fn test_opaque_object_with_code_field() {
        let p = PresentationBuilder::default().build(&ReportedError::json(json!({"code": "E42", "msg": "Bad input"})));
        assert_eq!(p.title.as_deref(), Some("Bad input"));
        assert_eq!(p.positive_action.as_deref(), Some("OK"));
    }

    #[test]
    fn test_json_object_with_auth_expired_code() {
        let builder = PresentationBuilder::default();
        let expected = builder.build(&ReportedError::code(AUTH_EXPIRED_CODE));

        let normalized = ReportedError::json(json!({"code": 10, "msg": "expired"}));
        assert_eq!(builder.build(&normalized), expected);

        let raw = ReportedError::Opaque(OpaqueValue::Json(json!({"code": 10.0, "msg": "expired"})));
        assert_eq!(builder.build(&raw), expected);
    }

    #[test]
    fn test_custom_strings() {
        let strings = LocalizedStrings::new().with_override(StringId::AlertTitleNetworkUnavailable, "Offline");
        let builder = PresentationBuilder::new(Arc::new(strings));
        let p = builder.build(&ReportedError::catalog(ERR_NETWORK_UNAVAILABLE));
        assert_eq!(p.title.as_deref(), Some("Offline"));
    }
}
