//! Adjustment factor (K-factor) selection
//!
//! New teams move fast, established teams move at a normal pace and elite
//! teams barely move at all.

use crate::error::EloError;
use serde::{Deserialize, Serialize};

/// Thresholds and factors used to pick a team's K-factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KFactorConfig {
    /// Teams with fewer games than this are provisional
    pub provisional_games: u32,
    /// Factor for provisional teams
    pub provisional: f64,
    /// Factor for established teams rated at or below the elite threshold
    pub established: f64,
    /// Factor for established teams rated above the elite threshold
    pub elite: f64,
    /// Ratings strictly above this count as elite
    pub elite_rating_threshold: f64,
}

impl Default for KFactorConfig {
    fn default() -> Self {
        Self {
            provisional_games: 30,
            provisional: 40.0,
            established: 20.0,
            elite: 10.0,
            elite_rating_threshold: 2400.0,
        }
    }
}

impl KFactorConfig {
    /// Pick the factor for a team with `number_of_games` played and `rating`
    pub fn select(&self, number_of_games: u32, rating: f64) -> f64 {
        if number_of_games < self.provisional_games {
            self.provisional
        } else if rating <= self.elite_rating_threshold {
            self.established
        } else {
            self.elite
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        for (name, k) in [
            ("provisional", self.provisional),
            ("established", self.established),
            ("elite", self.elite),
        ] {
            if !k.is_finite() || k <= 0.0 {
                return Err(EloError::ConfigurationError {
                    message: format!("K-factor '{}' must be positive and finite (got {})", name, k),
                }
                .into());
            }
        }

        if self.provisional < self.established || self.established < self.elite {
            return Err(EloError::ConfigurationError {
                message: format!(
                    "K-factors must not increase with experience (got {}/{}/{})",
                    self.provisional, self.established, self.elite
                ),
            }
            .into());
        }

        if !self.elite_rating_threshold.is_finite() {
            return Err(EloError::ConfigurationError {
                message: "Elite rating threshold must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// K-factor with the default thresholds (30 games, 2400 rating, 40/20/10)
pub fn k_factor(number_of_games: u32, rating: f64) -> f64 {
    KFactorConfig::default().select(number_of_games, rating)
}
