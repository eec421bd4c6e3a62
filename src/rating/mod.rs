//! Elo rating engine
//!
//! This module provides outcome classification, K-factor selection, the Elo
//! update itself and the registry holding every team's rating state.

pub mod calculator;
pub mod elo;
pub mod k_factor;
pub mod outcome;
pub mod registry;

// Re-export commonly used types
pub use calculator::{GameRatingUpdate, RatingCalculator};
pub use elo::{expected_score, EloRatingCalculator};
pub use k_factor::{k_factor, KFactorConfig};
pub use outcome::{classify, classify_side};
pub use registry::TeamRegistry;
