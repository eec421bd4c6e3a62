//! Team Elo - Elo ratings for teams from a chronological match log
//!
//! This crate folds an ordered log of game results into per-team Elo ratings,
//! using an experience and strength dependent K-factor, and projects the
//! final ratings into standings.

pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod rating;
pub mod standings;
pub mod types;

// Re-export commonly used types and traits
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use history::{process_history, HistoryProcessor, HistorySummary};
pub use input::{load_games, parse_games, RawGameRecord};
pub use rating::{EloRatingCalculator, RatingCalculator, TeamRegistry};
pub use standings::Standings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
