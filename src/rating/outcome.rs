//! Outcome classification
//!
//! Turns a final score into a win/draw/loss for one side of the game.

use crate::types::{GameOutcome, GameRecord, Side};

/// Outcome of `game` for the team that played on `side`
pub fn classify_side(side: Side, game: &GameRecord) -> GameOutcome {
    let home = if game.home_score > game.away_score {
        GameOutcome::Win
    } else if game.home_score == game.away_score {
        GameOutcome::Draw
    } else {
        GameOutcome::Loss
    };

    match side {
        Side::Home => home,
        Side::Away => home.mirrored(),
    }
}

/// Outcome of `game` for `team`, or `None` if the team did not play in it
pub fn classify(team: &str, game: &GameRecord) -> Option<GameOutcome> {
    game.side_of(team).map(|side| classify_side(side, game))
}
