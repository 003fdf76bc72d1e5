//! Per-key callback queues
//!
//! Every report under a key contributes one entry holding both its "handled"
//! and its "ignored" continuation, so the handled queue and the ignore queue
//! of a key always have the same length. A key's entries are removed as a
//! whole before any of them runs.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::oneshot;
use tracing::debug;

use crate::domain::{ErrorKey, Resolution};

/// Zero-argument continuation run when a report resolves
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Optional continuations supplied with a report
#[derive(Default)]
pub struct ErrorCallbacks {
    pub(crate) on_handled: Option<Callback>,
    pub(crate) on_ignored: Option<Callback>,
}

impl ErrorCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run when the user accepts the alert or the error resolves silently
    pub fn on_handled(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_handled = Some(Box::new(f));
        self
    }

    /// Run when the user dismisses the alert
    pub fn on_ignored(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_ignored = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ErrorCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCallbacks")
            .field("on_handled", &self.on_handled.is_some())
            .field("on_ignored", &self.on_ignored.is_some())
            .finish()
    }
}

/// One queued report
pub struct QueuedEntry {
    on_handled: Callback,
    on_ignored: Callback,
    reply_tx: Option<oneshot::Sender<Resolution>>,
}

impl QueuedEntry {
    pub fn new(on_handled: Callback, on_ignored: Callback) -> Self {
        Self {
            on_handled,
            on_ignored,
            reply_tx: None,
        }
    }

    /// Also notify an awaiting caller once the entry resolves
    pub fn with_reply(mut self, reply_tx: Option<oneshot::Sender<Resolution>>) -> Self {
        self.reply_tx = reply_tx;
        self
    }

    fn resolve(self, resolution: Resolution) {
        match resolution {
            Resolution::Handled => (self.on_handled)(),
            Resolution::Ignored => (self.on_ignored)(),
        }
        if let Some(reply_tx) = self.reply_tx {
            // Caller may have stopped waiting
            let _ = reply_tx.send(resolution);
        }
    }
}

impl fmt::Debug for QueuedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuedEntry")
            .field("awaited", &self.reply_tx.is_some())
            .finish_non_exhaustive()
    }
}

/// Pending reports grouped by error key
#[derive(Debug, Default)]
pub struct ErrorQueues {
    queues: HashMap<ErrorKey, Vec<QueuedEntry>>,
}

impl ErrorQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, creating the key's queue if needed
    pub fn enqueue(&mut self, key: ErrorKey, entry: QueuedEntry) {
        let queue = self.queues.entry(key).or_default();
        queue.push(entry);
        debug!(len = queue.len(), "ErrorQueues::enqueue: queued");
    }

    /// True when exactly one report is queued under `key`
    pub fn is_first_in_queue(&self, key: &ErrorKey) -> bool {
        self.handle_queue_len(key) == 1
    }

    pub fn is_pending(&self, key: &ErrorKey) -> bool {
        self.handle_queue_len(key) > 0
    }

    pub fn handle_queue_len(&self, key: &ErrorKey) -> usize {
        self.queues.get(key).map_or(0, Vec::len)
    }

    pub fn ignore_queue_len(&self, key: &ErrorKey) -> usize {
        self.queues.get(key).map_or(0, Vec::len)
    }

    /// Number of keys with at least one queued report
    pub fn pending_keys(&self) -> usize {
        self.queues.len()
    }

    /// Run every queued "handled" continuation for `key` in FIFO order
    ///
    /// Returns how many entries resolved; an absent key resolves none.
    pub fn flush_handled(&mut self, key: &ErrorKey) -> usize {
        self.flush(key, Resolution::Handled)
    }

    /// Run every queued "ignored" continuation for `key` in FIFO order
    pub fn flush_ignored(&mut self, key: &ErrorKey) -> usize {
        self.flush(key, Resolution::Ignored)
    }

    fn flush(&mut self, key: &ErrorKey, resolution: Resolution) -> usize {
        let Some(entries) = self.queues.remove(key) else {
            debug!(%key, %resolution, "ErrorQueues::flush: nothing queued");
            return 0;
        };

        let count = entries.len();
        debug!(%key, %resolution, count, "ErrorQueues::flush: resolving");
        for entry in entries {
            entry.resolve(resolution);
        }
        count
    }
}
