//! Game log loading and validation
//!
//! The game log is a JSON array of objects with `home_team`, `away_team`,
//! `home_score` and `away_score` fields (plus optional `date` and
//! `tournament`). Records are parsed loosely so that a single bad record does
//! not hide its position: each one is validated into a [`GameRecord`] when the
//! history driver reaches it.

use crate::error::EloError;
use crate::types::GameRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A game exactly as it appears in the log, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGameRecord {
    #[serde(default)]
    pub home_team: Option<Value>,
    #[serde(default)]
    pub away_team: Option<Value>,
    #[serde(default)]
    pub home_score: Option<Value>,
    #[serde(default)]
    pub away_score: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub tournament: Option<Value>,
}

impl From<&GameRecord> for RawGameRecord {
    fn from(game: &GameRecord) -> Self {
        Self {
            home_team: Some(Value::from(game.home_team.clone())),
            away_team: Some(Value::from(game.away_team.clone())),
            home_score: Some(Value::from(game.home_score)),
            away_score: Some(Value::from(game.away_score)),
            date: game.date.map(|date| Value::from(date.to_string())),
            tournament: game.tournament.clone().map(Value::from),
        }
    }
}

impl RawGameRecord {
    /// Validate this record, `index` being its position in the log
    pub fn validate(&self, index: usize) -> crate::error::Result<GameRecord> {
        let invalid = |reason: String| EloError::InvalidGameRecord { index, reason };

        let home_team = team_field("home_team", self.home_team.as_ref()).map_err(invalid)?;
        let away_team = team_field("away_team", self.away_team.as_ref()).map_err(invalid)?;
        if home_team == away_team {
            return Err(invalid(format!("team '{}' is listed as both home and away", home_team)).into());
        }

        let home_score = score_field("home_score", self.home_score.as_ref()).map_err(invalid)?;
        let away_score = score_field("away_score", self.away_score.as_ref()).map_err(invalid)?;

        let date = match &self.date {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .map_err(|e| invalid(format!("invalid date '{}': {}", text, e)))?,
            ),
            Some(other) => return Err(invalid(format!("date must be a string, got {}", other)).into()),
        };

        let tournament = match &self.tournament {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(other) => {
                return Err(invalid(format!("tournament must be a string, got {}", other)).into())
            }
        };

        Ok(GameRecord {
            home_team,
            away_team,
            home_score,
            away_score,
            date,
            tournament,
        })
    }
}

fn team_field(field: &str, value: Option<&Value>) -> std::result::Result<String, String> {
    match value {
        None | Some(Value::Null) => Err(format!("missing {}", field)),
        Some(Value::String(name)) if name.trim().is_empty() => Err(format!("{} is empty", field)),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(format!("{} must be a string, got {}", field, other)),
    }
}

fn score_field(field: &str, value: Option<&Value>) -> std::result::Result<u32, String> {
    match value {
        None | Some(Value::Null) => Err(format!("missing {}", field)),
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|score| u32::try_from(score).ok())
            .ok_or_else(|| format!("{} must be a non-negative integer, got {}", field, number)),
        Some(other) => Err(format!("{} must be numeric, got {}", field, other)),
    }
}

/// Parse a game log from a JSON string
pub fn parse_games(json: &str) -> crate::error::Result<Vec<RawGameRecord>> {
    serde_json::from_str(json).map_err(|e| {
        EloError::InputSource {
            path: "<inline>".to_string(),
            message: format!("Failed to parse JSON: {}", e),
        }
        .into()
    })
}

/// Load a game log from a JSON file
pub fn load_games(path: impl AsRef<Path>) -> crate::error::Result<Vec<RawGameRecord>> {
    let path = path.as_ref();
    let source = |message: String| EloError::InputSource {
        path: path.display().to_string(),
        message,
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| source(format!("Failed to read file: {}", e)))?;
    let records: Vec<RawGameRecord> = serde_json::from_str(&contents)
        .map_err(|e| source(format!("Failed to parse JSON: {}", e)))?;

    tracing::info!("Loaded {} game records from {}", records.len(), path.display());
    Ok(records)
}

/// Validate a whole log up front, stopping at the first malformed record
pub fn validate_games(records: &[RawGameRecord]) -> crate::error::Result<Vec<GameRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}
