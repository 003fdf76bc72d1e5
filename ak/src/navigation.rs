//! Navigation collaborator

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Action handed to the application's navigation dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavigationAction {
    /// Push a scene on top of the current stack
    Push {
        key: String,
        modal: bool,
        #[serde(rename = "modal-level")]
        modal_level: u32,
    },
}

/// Receives navigation side effects produced by default handlers
pub trait NavigationDispatcher: Send + Sync {
    fn dispatch(&self, action: NavigationAction);
}

impl<F> NavigationDispatcher for F
where
    F: Fn(NavigationAction) + Send + Sync,
{
    fn dispatch(&self, action: NavigationAction) {
        self(action)
    }
}

/// Dispatcher that only records the action in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl NavigationDispatcher for LoggingNavigator {
    fn dispatch(&self, action: NavigationAction) {
        info!(?action, "Navigation requested but no dispatcher is attached");
    }
}

/// Scene shown when the session must be re-established
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRoute {
    #[serde(rename = "scene-key")]
    pub scene_key: String,

    pub modal: bool,

    #[serde(rename = "modal-level")]
    pub modal_level: u32,
}

impl Default for LoginRoute {
    fn default() -> Self {
        debug!("LoginRoute::default: called");
        Self {
            scene_key: "loginScene".to_string(),
            modal: true,
            modal_level: 50,
        }
    }
}

impl LoginRoute {
    pub fn push_action(&self) -> NavigationAction {
        NavigationAction::Push {
            key: self.scene_key.clone(),
            modal: self.modal,
            modal_level: self.modal_level,
        }
    }
}
