//! Main application configuration
//!
//! This module defines the primary configuration structures for the rating
//! tool, including environment variable and TOML file loading and validation.

use crate::config::rating::RatingConfig;
use crate::standings::{OutputFormat, SortOrder};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// How the final standings are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub order: SortOrder,
    /// Only list this many teams
    pub limit: Option<usize>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "team-elo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            order: SortOrder::Asc,
            limit: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Rating settings
        if let Ok(rating) = env::var("INITIAL_RATING") {
            self.rating.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(games) = env::var("K_FACTOR_PROVISIONAL_GAMES") {
            self.rating.k_factor.provisional_games = games
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR_PROVISIONAL_GAMES value: {}", games))?;
        }
        if let Ok(k) = env::var("K_FACTOR_PROVISIONAL") {
            self.rating.k_factor.provisional = k
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR_PROVISIONAL value: {}", k))?;
        }
        if let Ok(k) = env::var("K_FACTOR_ESTABLISHED") {
            self.rating.k_factor.established = k
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR_ESTABLISHED value: {}", k))?;
        }
        if let Ok(k) = env::var("K_FACTOR_ELITE") {
            self.rating.k_factor.elite = k
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR_ELITE value: {}", k))?;
        }
        if let Ok(threshold) = env::var("ELITE_RATING_THRESHOLD") {
            self.rating.k_factor.elite_rating_threshold = threshold
                .parse()
                .map_err(|_| anyhow!("Invalid ELITE_RATING_THRESHOLD value: {}", threshold))?;
        }

        // Output settings
        if let Ok(format) = env::var("OUTPUT_FORMAT") {
            self.output.format = format.parse::<OutputFormat>().map_err(|e| anyhow!(e))?;
        }
        if let Ok(order) = env::var("OUTPUT_ORDER") {
            self.output.order = order.parse::<SortOrder>().map_err(|e| anyhow!(e))?;
        }
        if let Ok(limit) = env::var("OUTPUT_LIMIT") {
            self.output.limit = Some(
                limit
                    .parse()
                    .map_err(|_| anyhow!("Invalid OUTPUT_LIMIT value: {}", limit))?,
            );
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate rating settings
    config.rating.validate()?;

    // Validate output settings
    if config.output.limit == Some(0) {
        return Err(anyhow!("Output limit must be greater than 0"));
    }

    Ok(())
}
