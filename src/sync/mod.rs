//! Remote synchronisation
//!
//! A fixed-interval cycle fetches a batch of remote quotes, reconciles it into
//! the local repository (server wins on category conflicts), pushes every
//! local quote back out, and persists when anything changed.

pub mod engine;
pub mod reconcile;
pub mod remote;

pub use engine::SyncEngine;
pub use reconcile::{reconcile, SyncReport};
pub use remote::{HttpRemote, RemoteSource};

use std::time::Duration;
use thiserror::Error;

/// Time between two sync cycles
pub const SYNC_INTERVAL: Duration = Duration::from_secs(30);

/// Sync errors
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Remote returned status {0}")]
    Status(u16),
    #[error("Invalid remote response: {0}")]
    InvalidResponse(String),
}

/// Ticker for the periodic sync loop
///
/// The first tick fires one full interval after creation. A cycle that runs
/// past the next deadline delays the schedule instead of bursting.
pub fn sync_ticker() -> tokio::time::Interval {
    let start = tokio::time::Instant::now() + SYNC_INTERVAL;
    let mut ticker = tokio::time::interval_at(start, SYNC_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    ticker
}
