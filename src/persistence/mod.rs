//! Lifetime stats persistence
//!
//! Features:
//! - `StatsStore` port so the game never touches files directly
//! - Plain line-delimited text format
//! - File-backed and in-memory stores

pub mod store;
pub mod text;

pub use store::{FileStatsStore, MemoryStatsStore};
pub use text::{decode, encode};

use thiserror::Error;

use crate::stats::LifetimeStats;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("stats I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stats file ended before the {0} line")]
    MissingLine(&'static str),

    #[error("could not read {field} from {value:?}")]
    BadNumber { field: &'static str, value: String },

    #[error("expected {expected} kill counts, found {found}")]
    KillCount { expected: usize, found: usize },
}

/// Where lifetime stats live between runs
pub trait StatsStore {
    /// Load saved stats, or `None` if nothing has been saved yet
    fn load(&mut self) -> Result<Option<LifetimeStats>, PersistenceError>;

    fn save(&mut self, stats: &LifetimeStats) -> Result<(), PersistenceError>;

    /// Load saved stats, falling back to empty ones when missing or unreadable
    fn load_or_default(&mut self) -> LifetimeStats {
        match self.load() {
            Ok(Some(stats)) => stats,
            Ok(None) => {
                log::info!("No saved stats, starting fresh");
                LifetimeStats::default()
            }
            Err(e) => {
                log::warn!("Failed to load stats: {e}");
                LifetimeStats::default()
            }
        }
    }
}
