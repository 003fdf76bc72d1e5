//! Coordinator error types

use thiserror::Error;

/// Errors returned to callers talking to the coordinator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("Coordinator channel closed")]
    ChannelClosed,

    #[error("Coordinator request queue is full")]
    QueueFull,

    #[error("Resolution cancelled: coordinator shut down")]
    Cancelled,
}

impl AlertError {
    /// Check if retrying the same request later can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, AlertError::QueueFull)
    }
}
