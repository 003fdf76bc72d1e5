//! Dialog presentation collaborator

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::coordinator::CoordRequest;
use crate::domain::{Choice, ErrorKey};
use crate::error::AlertError;
use crate::presentation::{AlertPresentation, StringId};

/// One button on an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertAction {
    pub label: String,
    pub choice: Choice,
}

/// Request to show a modal alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub key: ErrorKey,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Positive action first, negative action second when present
    pub actions: Vec<AlertAction>,
}

impl AlertRequest {
    /// Build the request; a missing positive label falls back to the
    /// built-in confirm text so the alert can always be accepted
    pub fn new(key: ErrorKey, presentation: AlertPresentation) -> Self {
        let positive = match presentation.positive_action {
            Some(label) if !label.is_empty() => label,
            _ => {
                warn!(key = %key, "Alert has no positive action label, using default");
                StringId::ActionTitleConfirm.default_text().to_string()
            }
        };
        let mut actions = vec![AlertAction {
            label: positive,
            choice: Choice::Positive,
        }];
        if let Some(label) = presentation.negative_action {
            actions.push(AlertAction {
                label,
                choice: Choice::Negative,
            });
        }

        Self {
            key,
            title: presentation.title,
            message: presentation.message,
            actions,
        }
    }
}

/// Sends the user's choice for one alert back to the coordinator
///
/// Consumed on use: an alert is answered once.
#[derive(Debug)]
pub struct AlertResponder {
    key: ErrorKey,
    tx: mpsc::Sender<CoordRequest>,
}

impl AlertResponder {
    pub(crate) fn new(key: ErrorKey, tx: mpsc::Sender<CoordRequest>) -> Self {
        Self { key, tx }
    }

    pub fn key(&self) -> &ErrorKey {
        &self.key
    }

    pub async fn respond(self, choice: Choice) -> Result<(), AlertError> {
        debug!(key = %self.key, ?choice, "AlertResponder::respond: called");
        self.tx
            .send(CoordRequest::Respond { key: self.key, choice })
            .await
            .map_err(|_| AlertError::ChannelClosed)
    }

    /// Non-async variant for UI callbacks
    pub fn try_respond(self, choice: Choice) -> Result<(), AlertError> {
        debug!(key = %self.key, ?choice, "AlertResponder::try_respond: called");
        self.tx
            .try_send(CoordRequest::Respond { key: self.key, choice })
            .map_err(|e| match e {
                TrySendError::Full(_) => AlertError::QueueFull,
                TrySendError::Closed(_) => AlertError::ChannelClosed,
            })
    }
}

/// Shows alerts to the user
///
/// Called from the coordinator task; implementations must not block.
pub trait AlertPresenter: Send + Sync {
    fn present(&self, request: AlertRequest, responder: AlertResponder);
}

/// Alert waiting for the UI to show it
#[derive(Debug)]
pub struct PendingAlert {
    pub request: AlertRequest,
    pub responder: AlertResponder,
}

/// Presenter that forwards alerts over a channel to the UI side
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<PendingAlert>,
}

impl ChannelPresenter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingAlert>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AlertPresenter for ChannelPresenter {
    fn present(&self, request: AlertRequest, responder: AlertResponder) {
        let key = request.key.clone();
        if self.tx.send(PendingAlert { request, responder }).is_err() {
            warn!(%key, "Alert receiver dropped; key stays pending");
        }
    }
}
