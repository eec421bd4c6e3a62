//! History fold driver
//!
//! Threads the team registry through the game log, one game at a time, in
//! log order. Elo is path-dependent: every rating depends on all earlier
//! games its team played, so the log is never reordered or split.

use crate::config::RatingConfig;
use crate::error::EloError;
use crate::input::RawGameRecord;
use crate::rating::{EloRatingCalculator, GameRatingUpdate, RatingCalculator, TeamRegistry};
use crate::types::GameRecord;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Counters for one call to [`HistoryProcessor::process`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub games_processed: usize,
    pub teams_created: usize,
}

/// Applies games to an exclusively owned team registry
pub struct HistoryProcessor {
    calculator: Box<dyn RatingCalculator>,
    registry: TeamRegistry,
    games_processed: usize,
}

impl HistoryProcessor {
    /// Create a processor with an empty registry
    pub fn new(calculator: Box<dyn RatingCalculator>) -> Self {
        let registry = TeamRegistry::new(calculator.initial_rating());
        Self {
            calculator,
            registry,
            games_processed: 0,
        }
    }

    /// Create a processor using the Elo calculator with `config`
    pub fn with_config(config: RatingConfig) -> crate::error::Result<Self> {
        Ok(Self::new(Box::new(EloRatingCalculator::new(config)?)))
    }

    /// Rate a single game and commit the result for both teams
    ///
    /// Both new ratings are computed from the ratings the teams had before
    /// this game; nothing is written until both are known.
    pub fn apply_game(&mut self, game: &GameRecord) -> crate::error::Result<GameRatingUpdate> {
        if game.home_team == game.away_team {
            return Err(EloError::RatingCalculationFailed {
                reason: format!("Team {} cannot play against itself", game.home_team),
            }
            .into());
        }

        let (home, home_created) = self.registry.take_or_create(&game.home_team);
        let (away, away_created) = self.registry.take_or_create(&game.away_team);

        let update = match self.calculator.calculate_game(&home, &away, game) {
            Ok(update) => update,
            Err(error) => {
                // Teams first seen in this game are not kept
                for (team, created) in [(home, home_created), (away, away_created)] {
                    if !created {
                        self.registry.store(team);
                    }
                }
                return Err(error);
            }
        };

        for (mut team, created, change) in [
            (home, home_created, &update.home),
            (away, away_created, &update.away),
        ] {
            if created {
                debug!("New team '{}' starts at {}", team.name, change.old_rating);
            }
            team.record_game(change.new_rating, game);
            self.registry.store(team);
        }

        self.games_processed += 1;

        debug!(
            "Game {}: {} {} {:.0} -> {:.0} (k={}, expected {:.3}), {} {} {:.0} -> {:.0} (k={}, expected {:.3})",
            self.games_processed,
            update.home.team,
            update.home.outcome,
            update.home.old_rating,
            update.home.new_rating,
            update.home.k_factor,
            update.home.expected_score,
            update.away.team,
            update.away.outcome,
            update.away.old_rating,
            update.away.new_rating,
            update.away.k_factor,
            update.away.expected_score,
        );

        Ok(update)
    }

    /// Apply validated games in order
    ///
    /// Stops at the first game that cannot be rated; earlier games stay
    /// committed and the failing one is not applied.
    pub fn process(&mut self, games: &[GameRecord]) -> crate::error::Result<HistorySummary> {
        let teams_before = self.registry.len();

        for (index, game) in games.iter().enumerate() {
            self.apply_game(game)
                .with_context(|| format!("Failed to rate game {} ({})", index, game))?;
        }

        self.finish(games.len(), teams_before)
    }

    /// Validate and apply raw log records in order
    ///
    /// Each record is validated when the fold reaches it, so a malformed
    /// record aborts processing at its own position.
    pub fn process_raw(
        &mut self,
        records: &[RawGameRecord],
    ) -> crate::error::Result<HistorySummary> {
        let teams_before = self.registry.len();

        for (index, record) in records.iter().enumerate() {
            let game = record.validate(index)?;
            self.apply_game(&game)
                .with_context(|| format!("Failed to rate game {} ({})", index, game))?;
        }

        self.finish(records.len(), teams_before)
    }

    fn finish(
        &self,
        games_processed: usize,
        teams_before: usize,
    ) -> crate::error::Result<HistorySummary> {
        let summary = HistorySummary {
            games_processed,
            teams_created: self.registry.len() - teams_before,
        };

        info!(
            "Processed {} games, {} new teams ({} teams rated in total)",
            summary.games_processed,
            summary.teams_created,
            self.registry.len()
        );

        Ok(summary)
    }

    /// Current registry
    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    /// Total number of games applied by this processor
    pub fn games_processed(&self) -> usize {
        self.games_processed
    }

    /// Consume the processor, returning the final registry
    pub fn into_registry(self) -> TeamRegistry {
        self.registry
    }
}

/// Fold `games` into a fresh registry using the Elo calculator
pub fn process_history(
    games: &[GameRecord],
    config: &RatingConfig,
) -> crate::error::Result<TeamRegistry> {
    let mut processor = HistoryProcessor::with_config(config.clone())?;
    processor.process(games)?;
    Ok(processor.into_registry())
}
