//! Test fixtures for integration testing

#![allow(dead_code)]

use team_elo::types::GameRecord;

/// Shorthand for a game between `home` and `away`
pub fn game(home: &str, away: &str, home_score: u32, away_score: u32) -> GameRecord {
    GameRecord::new(home, away, home_score, away_score)
}

/// The first international fixtures, as they appear in a results export
pub const EARLY_INTERNATIONALS_JSON: &str = r#"[
    {"date": "1872-11-30", "home_team": "Scotland", "away_team": "England", "home_score": 0, "away_score": 0, "tournament": "Friendly", "city": "Glasgow", "country": "Scotland", "neutral": false},
    {"date": "1873-03-08", "home_team": "England", "away_team": "Scotland", "home_score": 4, "away_score": 2, "tournament": "Friendly", "city": "London", "country": "England", "neutral": false},
    {"date": "1874-03-07", "home_team": "Scotland", "away_team": "England", "home_score": 2, "away_score": 1, "tournament": "Friendly", "city": "Glasgow", "country": "Scotland", "neutral": false},
    {"date": "1875-03-06", "home_team": "England", "away_team": "Scotland", "home_score": 2, "away_score": 2, "tournament": "Friendly", "city": "London", "country": "England", "neutral": false},
    {"date": "1876-03-04", "home_team": "Scotland", "away_team": "England", "home_score": 3, "away_score": 0, "tournament": "Friendly", "city": "Glasgow", "country": "Scotland", "neutral": false},
    {"date": "1876-03-25", "home_team": "Scotland", "away_team": "Wales", "home_score": 4, "away_score": 0, "tournament": "Friendly", "city": "Glasgow", "country": "Scotland", "neutral": false}
]"#;

/// A beats B, then B beats C, then C draws with A
pub fn three_game_sequence() -> Vec<GameRecord> {
    vec![game("A", "B", 2, 0), game("B", "C", 1, 0), game("C", "A", 1, 1)]
}

/// The same games with the first two swapped
pub fn three_game_sequence_reordered() -> Vec<GameRecord> {
    vec![game("B", "C", 1, 0), game("A", "B", 2, 0), game("C", "A", 1, 1)]
}

/// A long round-robin style log between `teams` teams
pub fn round_robin(teams: usize, rounds: usize) -> Vec<GameRecord> {
    let mut games = Vec::new();
    for round in 0..rounds {
        for home in 0..teams {
            for away in 0..teams {
                if home == away {
                    continue;
                }
                let home_score = ((home * 7 + away * 3 + round) % 4) as u32;
                let away_score = ((away * 5 + home + round * 2) % 3) as u32;
                games.push(game(
                    &format!("team_{}", home),
                    &format!("team_{}", away),
                    home_score,
                    away_score,
                ));
            }
        }
    }
    games
}
