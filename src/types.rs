//! Common types used throughout the rating engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for teams
pub type TeamId = String;

/// Rating given to a team the first time it shows up in the game log
pub const DEFAULT_RATING: f64 = 1500.0;

/// Ratings are whole numbers after every update, so write them as integers
fn serialize_rating<S>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if rating.fract() == 0.0 && rating.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*rating as i64)
    } else {
        serializer.serialize_f64(*rating)
    }
}

/// Which side of a game a team played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Result of a single game from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Draw,
    Loss,
}

impl GameOutcome {
    /// Actual result used by the Elo formula (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        match self {
            GameOutcome::Win => 1.0,
            GameOutcome::Draw => 0.5,
            GameOutcome::Loss => 0.0,
        }
    }

    /// The same game seen from the opponent's side
    pub fn mirrored(&self) -> Self {
        match self {
            GameOutcome::Win => GameOutcome::Loss,
            GameOutcome::Draw => GameOutcome::Draw,
            GameOutcome::Loss => GameOutcome::Win,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win => write!(f, "win"),
            GameOutcome::Draw => write!(f, "draw"),
            GameOutcome::Loss => write!(f, "loss"),
        }
    }
}

/// A validated game from the match log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    /// Date the game was played, when the log carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Competition name, when the log carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
}

impl GameRecord {
    pub fn new(
        home_team: impl Into<TeamId>,
        away_team: impl Into<TeamId>,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score,
            away_score,
            date: None,
            tournament: None,
        }
    }

    /// Identifier of the team playing on `side`
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    /// Side `team` played on, or `None` if it did not take part
    pub fn side_of(&self, team: &str) -> Option<Side> {
        if self.home_team == team {
            Some(Side::Home)
        } else if self.away_team == team {
            Some(Side::Away)
        } else {
            None
        }
    }
}

impl std::fmt::Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

/// Rating state of one team, owned by the registry while the log is processed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamState {
    pub name: TeamId,
    #[serde(serialize_with = "serialize_rating")]
    pub rating: f64,
    pub number_of_games: u32,
    pub game_history: Vec<GameRecord>,
}

impl TeamState {
    /// Create the state of a team that has not played yet
    pub fn new(name: impl Into<TeamId>, initial_rating: f64) -> Self {
        Self {
            name: name.into(),
            rating: initial_rating,
            number_of_games: 0,
            game_history: Vec::new(),
        }
    }

    /// Commit the result of one game
    pub fn record_game(&mut self, new_rating: f64, game: &GameRecord) {
        self.rating = new_rating;
        self.number_of_games += 1;
        self.game_history.push(game.clone());
    }

    /// Win/draw/loss tally over the team's history
    pub fn record(&self) -> TeamRecord {
        self.game_history
            .iter()
            .filter_map(|game| crate::rating::outcome::classify(&self.name, game))
            .fold(TeamRecord::default(), |mut record, outcome| {
                match outcome {
                    GameOutcome::Win => record.wins += 1,
                    GameOutcome::Draw => record.draws += 1,
                    GameOutcome::Loss => record.losses += 1,
                }
                record
            })
    }
}

/// Win/draw/loss tally for a team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Rating change information for one team in one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub team: TeamId,
    #[serde(serialize_with = "serialize_rating")]
    pub old_rating: f64,
    #[serde(serialize_with = "serialize_rating")]
    pub new_rating: f64,
    pub outcome: GameOutcome,
    pub expected_score: f64,
    pub k_factor: f64,
}

impl RatingChange {
    /// How much the rating moved (+/-)
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}
