//! Rating system configuration

use crate::error::EloError;
use crate::rating::k_factor::KFactorConfig;
use crate::types::DEFAULT_RATING;
use serde::{Deserialize, Serialize};

/// Parameters of the Elo rating system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating given to a team on its first appearance
    pub initial_rating: f64,
    /// K-factor thresholds
    pub k_factor: KFactorConfig,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: DEFAULT_RATING,
            k_factor: KFactorConfig::default(),
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.initial_rating.is_finite() || self.initial_rating <= 0.0 {
            return Err(EloError::ConfigurationError {
                message: format!(
                    "Initial rating must be a positive number, got {}",
                    self.initial_rating
                ),
            }
            .into());
        }

        self.k_factor.validate()
    }
}
