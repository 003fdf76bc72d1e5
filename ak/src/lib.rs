//! AlertKit - coalescing error alerts for presentation layers
//!
//! Application code reports errors from anywhere; AlertKit makes sure the user
//! sees at most one alert per kind of error at a time. Reports that arrive
//! while an alert for the same key is showing join it and resolve together
//! with the user's answer.
//!
//! # Flow
//!
//! ```text
//! report(error) ─► classify ─► ErrorKey ─► queue
//!                                            │ first in queue?
//!                         ┌──── no ──────────┤
//!                         ▼                  ▼ yes
//!                  wait for alert     build presentation
//!                                      │ empty      │ has text
//!                                      ▼            ▼
//!                              default handler   AlertPresenter ─► user choice
//!                                      │                              │
//!                                      └──────── flush queue ◄────────┘
//! ```
//!
//! # Modules
//!
//! - [`coordinator`] - Coordinator task and its handle
//! - [`classify`] - Error key classification
//! - [`queue`] - Per-key callback queues
//! - [`policy`] - Default handling on the positive path
//! - [`presentation`] - Alert content and display strings
//! - [`alert`] / [`navigation`] - Collaborator traits
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use alertkit::{ChannelPresenter, Coordinator, CoordinatorConfig, ReportedError};
//!
//! let (presenter, mut alerts) = ChannelPresenter::new();
//! let (handle, _task) = Coordinator::new(CoordinatorConfig::default(), Arc::new(presenter)).spawn();
//! let pending = handle.submit(ReportedError::code(10), Default::default()).await?;
//! let alert = alerts.recv().await.unwrap();
//! alert.responder.respond(alertkit::Choice::Positive).await?;
//! pending.wait().await?;
//! ```

pub mod alert;
pub mod classify;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod navigation;
pub mod policy;
pub mod presentation;
pub mod queue;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use alert::{AlertAction, AlertPresenter, AlertRequest, AlertResponder, ChannelPresenter, PendingAlert};
pub use classify::ErrorClassifier;
pub use config::Config;
pub use coordinator::{CoordRequest, Coordinator, CoordinatorConfig, CoordinatorHandle, CoordinatorMetrics, PendingResolution};
pub use domain::{
    Choice, ERR_NETWORK_UNAVAILABLE, ERR_NOT_LOGGED_IN, ERR_WANT_CELLULAR_NETWORK_USE_PERMIT, ErrorCatalog, ErrorKey,
    OpaqueValue, ReportedError, Resolution,
};
pub use error::AlertError;
pub use navigation::{LoggingNavigator, LoginRoute, NavigationAction, NavigationDispatcher};
pub use policy::{AUTH_EXPIRED_CODE, DefaultHandler};
pub use presentation::{AlertPresentation, LocalizedStrings, PresentationBuilder, StringCatalog, StringId};
pub use queue::{Callback, ErrorCallbacks, ErrorQueues, QueuedEntry};
