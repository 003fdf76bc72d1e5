//! CoordinatorHandle - Client interface for error reporting

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use super::messages::{CoordRequest, CoordinatorMetrics};
use crate::domain::{Choice, ErrorKey, ReportedError, Resolution};
use crate::error::AlertError;
use crate::queue::ErrorCallbacks;

/// Handle for application code to report errors to the Coordinator
///
/// This handle is cloneable and can be passed to every call site that needs
/// to surface errors.
#[derive(Debug, Clone)]
pub struct CoordinatorHandle {
    /// Sender to the Coordinator task
    tx: mpsc::Sender<CoordRequest>,
}

/// Resolution of a submitted report, available once its key resolves
#[derive(Debug)]
pub struct PendingResolution {
    rx: oneshot::Receiver<Resolution>,
}

impl PendingResolution {
    /// Wait until the alert this report joined is answered
    pub async fn wait(self) -> Result<Resolution, AlertError> {
        self.rx.await.map_err(|_| AlertError::Cancelled)
    }
}

impl CoordinatorHandle {
    pub(crate) fn new(tx: mpsc::Sender<CoordRequest>) -> Self {
        debug!("CoordinatorHandle::new: called");
        Self { tx }
    }

    async fn send(&self, req: CoordRequest) -> Result<(), AlertError> {
        self.tx.send(req).await.map_err(|_| AlertError::ChannelClosed)
    }

    /// Report an error without waiting for its resolution
    ///
    /// `callbacks` run on the coordinator task once the error's key resolves.
    pub async fn handle_error(&self, error: ReportedError, callbacks: ErrorCallbacks) -> Result<(), AlertError> {
        debug!(%error, ?callbacks, "CoordinatorHandle::handle_error: called");
        self.send(CoordRequest::Report {
            error,
            callbacks,
            reply_tx: None,
        })
        .await?;

        debug!("CoordinatorHandle::handle_error: sent");
        Ok(())
    }

    /// Report an error and get a handle on its eventual resolution
    ///
    /// Reports are queued in the order this method is awaited.
    pub async fn submit(&self, error: ReportedError, callbacks: ErrorCallbacks) -> Result<PendingResolution, AlertError> {
        debug!(%error, ?callbacks, "CoordinatorHandle::submit: called");
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(CoordRequest::Report {
            error,
            callbacks,
            reply_tx: Some(reply_tx),
        })
        .await?;

        debug!("CoordinatorHandle::submit: queued");
        Ok(PendingResolution { rx: reply_rx })
    }

    /// Report an error and wait until it resolves
    pub async fn report(&self, error: ReportedError) -> Result<Resolution, AlertError> {
        debug!(%error, "CoordinatorHandle::report: called");
        self.submit(error, ErrorCallbacks::new()).await?.wait().await
    }

    /// Answer the alert shown for `key`
    pub async fn respond(&self, key: ErrorKey, choice: Choice) -> Result<(), AlertError> {
        debug!(%key, ?choice, "CoordinatorHandle::respond: called");
        self.send(CoordRequest::Respond { key, choice }).await
    }

    /// Number of reports waiting under `key`
    pub async fn pending_len(&self, key: ErrorKey) -> Result<usize, AlertError> {
        debug!(%key, "CoordinatorHandle::pending_len: called");
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(CoordRequest::PendingLen { key, reply_tx }).await?;

        debug!("CoordinatorHandle::pending_len: waiting for reply");
        reply_rx.await.map_err(|_| AlertError::Cancelled)
    }

    /// Get current coordinator metrics
    pub async fn metrics(&self) -> Result<CoordinatorMetrics, AlertError> {
        debug!("CoordinatorHandle::metrics: called");
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(CoordRequest::GetMetrics { reply_tx }).await?;

        debug!("CoordinatorHandle::metrics: waiting for reply");
        reply_rx.await.map_err(|_| AlertError::Cancelled)
    }

    /// Request shutdown of the Coordinator
    pub async fn shutdown(&self) -> Result<(), AlertError> {
        debug!("CoordinatorHandle::shutdown: called");
        self.send(CoordRequest::Shutdown).await
    }
}
