//! Standings projection
//!
//! Turns the final registry into a rating-ordered list and renders it as a
//! table or as JSON.

use crate::rating::TeamRegistry;
use crate::types::TeamState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Write as _;
use std::str::FromStr;

/// How standings are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Direction standings are listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Weakest team first
    Asc,
    /// Strongest team first
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Final team states ordered ascending by rating
///
/// Teams with the same rating are ordered by name so the listing is stable
/// across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    teams: Vec<TeamState>,
}

impl Standings {
    pub fn from_teams(mut teams: Vec<TeamState>) -> Self {
        teams.sort_by(|a, b| {
            a.rating
                .total_cmp(&b.rating)
                .then_with(|| a.name.cmp(&b.name))
        });
        Self { teams }
    }

    pub fn from_registry(registry: &TeamRegistry) -> Self {
        Self::from_teams(registry.teams().cloned().collect())
    }

    /// All teams, weakest first
    pub fn teams(&self) -> &[TeamState] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Strength rank for `rating`: one more than the number of teams rated
    /// strictly higher, so equal ratings share a rank
    fn rank_of(&self, rating: f64) -> usize {
        let at_or_below = self
            .teams
            .partition_point(|team| team.rating.total_cmp(&rating) != Ordering::Greater);
        self.teams.len() - at_or_below + 1
    }

    /// Teams with their strength rank, in `order`, keeping the first `limit`
    ///
    /// Teams sharing a rating are listed by name in both orders.
    pub fn ranked(&self, order: SortOrder, limit: Option<usize>) -> Vec<(usize, &TeamState)> {
        let mut ranked: Vec<_> = self
            .teams
            .iter()
            .map(|team| (self.rank_of(team.rating), team))
            .collect();

        if order == SortOrder::Desc {
            ranked.sort_by(|(a_rank, a), (b_rank, b)| {
                a_rank.cmp(b_rank).then_with(|| a.name.cmp(&b.name))
            });
        }

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Render as pretty JSON: an array of team states with their full history
    pub fn to_json(&self, order: SortOrder, limit: Option<usize>) -> crate::error::Result<String> {
        let teams: Vec<&TeamState> = self
            .ranked(order, limit)
            .into_iter()
            .map(|(_, team)| team)
            .collect();
        Ok(serde_json::to_string_pretty(&teams)?)
    }

    /// Render as a plain-text leaderboard
    pub fn render_table(&self, order: SortOrder, limit: Option<usize>) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>5}  {:<30} {:>7} {:>6} {:>5} {:>5} {:>5}",
            "Rank", "Team", "Rating", "Games", "W", "D", "L"
        );
        let _ = writeln!(out, "{}", "-".repeat(70));

        for (rank, team) in self.ranked(order, limit) {
            let record = team.record();
            let _ = writeln!(
                out,
                "{:>5}  {:<30} {:>7.0} {:>6} {:>5} {:>5} {:>5}",
                rank,
                team.name,
                team.rating,
                team.number_of_games,
                record.wins,
                record.draws,
                record.losses
            );
        }

        out
    }

    pub fn into_teams(self) -> Vec<TeamState> {
        self.teams
    }
}

impl From<TeamRegistry> for Standings {
    fn from(registry: TeamRegistry) -> Self {
        Self::from_teams(registry.into_teams())
    }
}
