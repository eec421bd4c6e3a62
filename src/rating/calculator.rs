//! Rating calculator trait
//!
//! This module defines the interface the history driver uses to turn one game
//! and the pre-game state of both teams into their new ratings.

use crate::types::{GameRecord, RatingChange, TeamState};
use serde::{Deserialize, Serialize};

/// New ratings for both sides of a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRatingUpdate {
    pub home: RatingChange,
    pub away: RatingChange,
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator {
    /// Calculate the new ratings of both teams for `game`
    ///
    /// # Arguments
    /// * `home` - State of the home team before the game
    /// * `away` - State of the away team before the game
    /// * `game` - The game being rated
    ///
    /// Both states are read-only: every value in the returned update must be
    /// derived from this pre-game snapshot. Committing it is the caller's job.
    fn calculate_game(
        &self,
        home: &TeamState,
        away: &TeamState,
        game: &GameRecord,
    ) -> crate::error::Result<GameRatingUpdate>;

    /// Get the initial rating for new teams
    fn initial_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}
