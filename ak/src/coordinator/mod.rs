//! Coordinator for error alerts
//!
//! The Coordinator owns every per-key queue and serializes all access to it
//! through one request channel:
//! - **Report:** classify an error, queue its continuations, show at most one alert per key
//! - **Respond:** resolve every report queued under a key with the user's choice

mod config;
mod core;
mod handle;
mod messages;

pub use config::CoordinatorConfig;
pub use core::Coordinator;
pub use handle::{CoordinatorHandle, PendingResolution};
pub use messages::{CoordRequest, CoordinatorMetrics};
