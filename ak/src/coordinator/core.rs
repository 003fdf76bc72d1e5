//! Main Coordinator task implementation

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::config::CoordinatorConfig;
use super::handle::CoordinatorHandle;
use super::messages::{CoordRequest, CoordinatorMetrics};
use crate::alert::{AlertPresenter, AlertRequest, AlertResponder};
use crate::classify::ErrorClassifier;
use crate::domain::{Choice, ErrorKey, ReportedError, Resolution};
use crate::navigation::{LoggingNavigator, LoginRoute, NavigationDispatcher};
use crate::policy::DefaultHandler;
use crate::presentation::{LocalizedStrings, PresentationBuilder, StringCatalog};
use crate::queue::{Callback, ErrorCallbacks, ErrorQueues, QueuedEntry};

/// The Coordinator decides, per error key, whether a report shows an alert,
/// joins one already showing, or resolves on the spot
pub struct Coordinator {
    config: CoordinatorConfig,
    tx: mpsc::Sender<CoordRequest>,
    rx: mpsc::Receiver<CoordRequest>,
    presenter: Arc<dyn AlertPresenter>,
    navigator: Arc<dyn NavigationDispatcher>,
    strings: Arc<dyn StringCatalog>,
}

impl Coordinator {
    /// Create a new Coordinator that shows alerts through `presenter`
    ///
    /// Navigation is only logged and built-in strings are used until
    /// [`with_navigator`](Self::with_navigator) / [`with_strings`](Self::with_strings)
    /// say otherwise.
    pub fn new(config: CoordinatorConfig, presenter: Arc<dyn AlertPresenter>) -> Self {
        let (tx, rx) = mpsc::channel(config.channel_buffer.max(1));
        Self {
            config,
            tx,
            rx,
            presenter,
            navigator: Arc::new(LoggingNavigator),
            strings: Arc::new(LocalizedStrings::default()),
        }
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn NavigationDispatcher>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn with_strings(mut self, strings: Arc<dyn StringCatalog>) -> Self {
        self.strings = strings;
        self
    }

    pub fn handle(&self) -> CoordinatorHandle {
        CoordinatorHandle::new(self.tx.clone())
    }

    /// Spawn the Coordinator task and return a handle to it
    pub fn spawn(self) -> (CoordinatorHandle, JoinHandle<()>) {
        let handle = self.handle();
        (handle, tokio::spawn(self.run()))
    }

    /// Run the Coordinator task
    ///
    /// This consumes the Coordinator and runs until shutdown is requested.
    /// Reports still pending at that point are dropped; callers awaiting them
    /// observe a cancelled resolution.
    pub async fn run(mut self) {
        let mut state = AlertState {
            queues: ErrorQueues::new(),
            classifier: ErrorClassifier::new(self.config.catalog()),
            builder: PresentationBuilder::new(self.strings.clone()),
            presenter: self.presenter.clone(),
            navigator: self.navigator.clone(),
            login: self.config.login.clone(),
            tx: self.tx.clone(),
            metrics: CoordinatorMetrics::default(),
        };

        info!("Coordinator started");

        while let Some(req) = self.rx.recv().await {
            match req {
                CoordRequest::Report {
                    error,
                    callbacks,
                    reply_tx,
                } => state.report(error, callbacks, reply_tx),

                CoordRequest::Respond { key, choice } => state.respond(&key, choice),

                CoordRequest::PendingLen { key, reply_tx } => {
                    let _ = reply_tx.send(state.queues.handle_queue_len(&key));
                }

                CoordRequest::GetMetrics { reply_tx } => {
                    let _ = reply_tx.send(state.metrics.clone());
                }

                CoordRequest::Shutdown => {
                    info!("Coordinator shutting down");
                    break;
                }
            }
        }

        let pending_keys = state.queues.pending_keys();
        if pending_keys > 0 {
            warn!(pending_keys, "Coordinator stopped with unresolved alerts");
        }
        info!("Coordinator stopped");
    }
}

/// State owned by the running Coordinator task
struct AlertState {
    queues: ErrorQueues,
    classifier: ErrorClassifier,
    builder: PresentationBuilder,
    presenter: Arc<dyn AlertPresenter>,
    navigator: Arc<dyn NavigationDispatcher>,
    login: LoginRoute,
    tx: mpsc::Sender<CoordRequest>,
    metrics: CoordinatorMetrics,
}

impl AlertState {
    fn report(&mut self, error: ReportedError, callbacks: ErrorCallbacks, reply_tx: Option<oneshot::Sender<Resolution>>) {
        self.metrics.reports_received += 1;

        let key = self.classifier.key_for_error(&error);
        if key.is_unknown() {
            self.metrics.unknown_errors += 1;
        }

        self.queues
            .enqueue(key.clone(), queued_entry(&key, &error, callbacks, reply_tx));

        if !self.queues.is_first_in_queue(&key) {
            debug!(
                key = %key,
                queued = self.queues.handle_queue_len(&key),
                "Joining pending alert"
            );
            self.metrics.coalesced_reports += 1;
            return;
        }

        let presentation = self.builder.build(&error);
        if presentation.is_empty() {
            debug!(key = %key, "No alert for error, resolving immediately");
            self.metrics.immediate_resolutions += 1;
            self.resolve_positive(&key);
        } else {
            debug!(key = %key, "Presenting alert");
            self.metrics.alerts_presented += 1;
            let responder = AlertResponder::new(key.clone(), self.tx.clone());
            self.presenter.present(AlertRequest::new(key, presentation), responder);
        }

        self.metrics.pending_keys = self.queues.pending_keys();
    }

    fn respond(&mut self, key: &ErrorKey, choice: Choice) {
        if !self.queues.is_pending(key) {
            debug!(key = %key, ?choice, "Response for a key with nothing pending");
            self.metrics.stale_responses += 1;
            return;
        }

        match choice {
            Choice::Positive => self.resolve_positive(key),
            Choice::Negative => {
                let resolved = self.queues.flush_ignored(key);
                debug!(key = %key, resolved, "Alert dismissed");
                self.metrics.ignored_flushes += 1;
            }
        }

        self.metrics.pending_keys = self.queues.pending_keys();
    }

    fn resolve_positive(&mut self, key: &ErrorKey) {
        let queues = &mut self.queues;
        let resolved = DefaultHandler::for_key(key).resolve(
            || queues.flush_handled(key),
            &self.login,
            self.navigator.as_ref(),
        );
        debug!(key = %key, resolved, "Alert accepted");
        self.metrics.handled_flushes += 1;
    }
}

/// Build the queue entry for one report, filling in default continuations
fn queued_entry(
    key: &ErrorKey,
    error: &ReportedError,
    callbacks: ErrorCallbacks,
    reply_tx: Option<oneshot::Sender<Resolution>>,
) -> QueuedEntry {
    let ErrorCallbacks { on_handled, on_ignored } = callbacks;

    let on_handled: Callback = on_handled.unwrap_or_else(|| Box::new(|| {}));
    let on_ignored: Callback = match on_ignored {
        Some(callback) => callback,
        None if key.is_unknown() => {
            let error = error.clone();
            Box::new(move || log_ignored_unknown(&error))
        }
        None => Box::new(|| {}),
    };

    QueuedEntry::new(on_handled, on_ignored).with_reply(reply_tx)
}

fn log_ignored_unknown(err: &ReportedError) {
    match err.describe() {
        Ok(text) => error!(error = %text, "Ignoring unknown error"),
        Err(e) => error!("Ignoring unknown error that cannot be rendered: {}", e),
    }
}
