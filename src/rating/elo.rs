//! Elo rating system implementation
//!
//! This module provides the concrete rating calculator: expected scores come
//! from the skillratings crate, the update itself applies a per-team K-factor
//! and rounds the result to a whole rating point.

use crate::config::RatingConfig;
use crate::error::EloError;
use crate::rating::calculator::{GameRatingUpdate, RatingCalculator};
use crate::rating::outcome::classify_side;
use crate::types::{GameOutcome, GameRecord, RatingChange, Side, TeamState};
use skillratings::elo::EloRating;

/// Expected score of a team rated `rating` against one rated `opponent_rating`
///
/// `1 / (1 + 10^((opponent_rating - rating) / 400))`, always in (0, 1).
pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
    let (expected, _) = skillratings::elo::expected_score(
        &EloRating { rating },
        &EloRating {
            rating: opponent_rating,
        },
    );
    expected
}

/// Round to the nearest whole point, halves go up
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Apply one Elo update: `round(rating + k * (actual - expected))`
pub fn updated_rating(rating: f64, k_factor: f64, actual: f64, expected: f64) -> f64 {
    round_half_up(rating + k_factor * (actual - expected))
}

/// Elo rating calculator implementation
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// K-factor for a team in its current state
    pub fn k_factor_for(&self, team: &TeamState) -> f64 {
        self.config
            .k_factor
            .select(team.number_of_games, team.rating)
    }

    fn rating_change(
        &self,
        team: &TeamState,
        opponent: &TeamState,
        outcome: GameOutcome,
    ) -> RatingChange {
        let k_factor = self.k_factor_for(team);
        let expected = expected_score(team.rating, opponent.rating);

        RatingChange {
            team: team.name.clone(),
            old_rating: team.rating,
            new_rating: updated_rating(team.rating, k_factor, outcome.score(), expected),
            outcome,
            expected_score: expected,
            k_factor,
        }
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_game(
        &self,
        home: &TeamState,
        away: &TeamState,
        game: &GameRecord,
    ) -> crate::error::Result<GameRatingUpdate> {
        if home.name != game.home_team || away.name != game.away_team {
            return Err(EloError::RatingCalculationFailed {
                reason: format!(
                    "Team states ({} vs {}) do not match game {}",
                    home.name, away.name, game
                ),
            }
            .into());
        }

        if home.name == away.name {
            return Err(EloError::RatingCalculationFailed {
                reason: format!("Team {} cannot play against itself", home.name),
            }
            .into());
        }

        Ok(GameRatingUpdate {
            home: self.rating_change(home, away, classify_side(Side::Home, game)),
            away: self.rating_change(away, home, classify_side(Side::Away, game)),
        })
    }

    fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }
}
