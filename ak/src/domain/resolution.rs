//! User choices and how a queued report ends

use serde::{Deserialize, Serialize};

/// Button the user pressed on an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Positive,
    Negative,
}

/// Outcome delivered to every report queued under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Handled,
    Ignored,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Handled => write!(f, "handled"),
            Self::Ignored => write!(f, "ignored"),
        }
    }
}
