//! Message types for the Coordinator

use tokio::sync::oneshot;

use crate::domain::{Choice, ErrorKey, ReportedError, Resolution};
use crate::queue::ErrorCallbacks;

/// Internal requests to the Coordinator task
#[derive(Debug)]
pub enum CoordRequest {
    /// Report an error occurrence
    Report {
        error: ReportedError,
        callbacks: ErrorCallbacks,
        reply_tx: Option<oneshot::Sender<Resolution>>,
    },

    /// User answered the alert shown for a key
    Respond { key: ErrorKey, choice: Choice },

    /// Number of reports queued under a key
    PendingLen {
        key: ErrorKey,
        reply_tx: oneshot::Sender<usize>,
    },

    /// Get current metrics
    GetMetrics {
        reply_tx: oneshot::Sender<CoordinatorMetrics>,
    },

    /// Shutdown the coordinator
    Shutdown,
}

/// Coordinator metrics for observability
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatorMetrics {
    pub pending_keys: usize,
    pub reports_received: u64,
    pub coalesced_reports: u64,
    pub unknown_errors: u64,
    pub alerts_presented: u64,
    pub immediate_resolutions: u64,
    pub handled_flushes: u64,
    pub ignored_flushes: u64,
    pub stale_responses: u64,
}
