//! Integration tests for the team-elo rating engine
//!
//! These tests run whole game logs through the public API:
//! - Fresh-team scenarios (win, draw)
//! - Determinism and order sensitivity of the fold
//! - Loading, validating and rating a results export
//! - Standings projection of the final registry

mod fixtures;

use fixtures::{game, three_game_sequence, three_game_sequence_reordered};
use team_elo::config::RatingConfig;
use team_elo::standings::SortOrder;
use team_elo::{
    parse_games, process_history, EloError, HistoryProcessor, Standings, TeamRegistry,
};

fn rating(registry: &TeamRegistry, team: &str) -> f64 {
    registry
        .get(team)
        .map(|t| t.rating)
        .unwrap_or_else(|| panic!("team {} missing", team))
}

#[test]
fn test_fresh_teams_win() {
    let win = game("A", "B", 3, 1);
    let registry = process_history(&[win.clone()], &RatingConfig::default()).unwrap();

    assert_eq!(rating(&registry, "A"), 1520.0);
    assert_eq!(rating(&registry, "B"), 1480.0);

    for name in ["A", "B"] {
        let team = registry.get(name).unwrap();
        assert_eq!(team.number_of_games, 1);
        assert_eq!(team.game_history, vec![win.clone()]);
    }
}

#[test]
fn test_fresh_teams_draw() {
    let registry = process_history(&[game("A", "B", 2, 2)], &RatingConfig::default()).unwrap();

    assert_eq!(rating(&registry, "A"), 1500.0);
    assert_eq!(rating(&registry, "B"), 1500.0);
    assert_eq!(registry.get("A").unwrap().number_of_games, 1);
    assert_eq!(registry.get("B").unwrap().number_of_games, 1);
}

#[test]
fn test_away_win_mirrors_home_win() {
    let registry = process_history(&[game("A", "B", 0, 1)], &RatingConfig::default()).unwrap();

    assert_eq!(rating(&registry, "A"), 1480.0);
    assert_eq!(rating(&registry, "B"), 1520.0);
}

#[test]
fn test_unseen_team_starts_from_defaults() {
    let mut processor = HistoryProcessor::with_config(RatingConfig::default()).unwrap();
    processor.process(&[game("A", "B", 1, 0), game("A", "B", 1, 0)]).unwrap();

    // C has never played: its first game is rated from 1500 with K=40
    let update = processor.apply_game(&game("C", "A", 1, 0)).unwrap();
    assert_eq!(update.home.old_rating, 1500.0);
    assert_eq!(update.home.k_factor, 40.0);

    let c = processor.registry().get("C").unwrap();
    assert_eq!(c.number_of_games, 1);
    assert_eq!(c.game_history.len(), 1);
}

#[test]
fn test_processing_is_deterministic() {
    let games = fixtures::round_robin(6, 8);

    let first = process_history(&games, &RatingConfig::default()).unwrap();
    let second = process_history(&games, &RatingConfig::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_processing_order_changes_ratings() {
    let config = RatingConfig::default();
    let original = process_history(&three_game_sequence(), &config).unwrap();
    let reordered = process_history(&three_game_sequence_reordered(), &config).unwrap();

    assert_eq!(rating(&original, "A"), 1518.0);
    assert_eq!(rating(&original, "B"), 1501.0);
    assert_eq!(rating(&original, "C"), 1481.0);

    assert_eq!(rating(&reordered, "A"), 1519.0);
    assert_eq!(rating(&reordered, "B"), 1499.0);
    assert_eq!(rating(&reordered, "C"), 1482.0);

    // Same games, same number played by everyone
    for name in ["A", "B", "C"] {
        assert_eq!(original.get(name).unwrap().number_of_games, 2);
        assert_eq!(reordered.get(name).unwrap().number_of_games, 2);
    }
}

#[test]
fn test_results_export_end_to_end() {
    let records = parse_games(fixtures::EARLY_INTERNATIONALS_JSON).unwrap();
    assert_eq!(records.len(), 6);

    let mut processor = HistoryProcessor::with_config(RatingConfig::default()).unwrap();
    let summary = processor.process_raw(&records).unwrap();
    assert_eq!(summary.games_processed, 6);
    assert_eq!(summary.teams_created, 3);

    let registry = processor.into_registry();
    assert_eq!(rating(&registry, "Scotland"), 1541.0);
    assert_eq!(rating(&registry, "England"), 1478.0);
    assert_eq!(rating(&registry, "Wales"), 1481.0);

    let scotland = registry.get("Scotland").unwrap();
    assert_eq!(scotland.number_of_games, 6);
    let record = scotland.record();
    assert_eq!((record.wins, record.draws, record.losses), (3, 2, 1));
    assert_eq!(
        scotland.game_history[0].date.map(|d| d.to_string()),
        Some("1872-11-30".to_string())
    );

    let standings = Standings::from(registry);
    let names: Vec<_> = standings.teams().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["England", "Wales", "Scotland"]);

    let top = standings.ranked(SortOrder::Desc, Some(1));
    assert_eq!(top[0].0, 1);
    assert_eq!(top[0].1.name, "Scotland");
}

#[test]
fn test_malformed_export_reports_position() {
    let records = parse_games(
        r#"[
            {"home_team": "Scotland", "away_team": "England", "home_score": 0, "away_score": 0},
            {"home_team": "England", "away_team": "Scotland", "home_score": 4}
        ]"#,
    )
    .unwrap();

    let mut processor = HistoryProcessor::with_config(RatingConfig::default()).unwrap();
    let error = processor.process_raw(&records).unwrap_err();

    match error.downcast_ref::<EloError>() {
        Some(EloError::InvalidGameRecord { index, reason }) => {
            assert_eq!(*index, 1);
            assert!(reason.contains("away_score"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // Only the first game was applied
    assert_eq!(processor.games_processed(), 1);
    assert_eq!(processor.registry().get("England").unwrap().number_of_games, 1);
}

#[test]
fn test_established_teams_slow_down() {
    // 30 draws between two teams keeps both at 1500 and makes them established
    let mut games: Vec<_> = (0..30).map(|_| game("A", "B", 1, 1)).collect();
    games.push(game("A", "B", 1, 0));

    let mut processor = HistoryProcessor::with_config(RatingConfig::default()).unwrap();
    processor.process(&games[..30]).unwrap();
    assert_eq!(rating(processor.registry(), "A"), 1500.0);
    assert_eq!(processor.registry().get("A").unwrap().number_of_games, 30);

    let update = processor.apply_game(&games[30]).unwrap();
    assert_eq!(update.home.k_factor, 20.0);
    assert_eq!(update.home.new_rating, 1510.0);
    assert_eq!(update.away.new_rating, 1490.0);
}

#[test]
fn test_json_standings_shape() {
    let registry = process_history(&three_game_sequence(), &RatingConfig::default()).unwrap();
    let json = Standings::from(registry)
        .to_json(SortOrder::Asc, None)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let teams = value.as_array().unwrap();
    assert_eq!(teams.len(), 3);

    let ratings: Vec<f64> = teams.iter().map(|t| t["rating"].as_f64().unwrap()).collect();
    assert!(ratings.windows(2).all(|w| w[0] <= w[1]));

    for team in teams {
        assert_eq!(team["numberOfGames"], 2);
        assert_eq!(team["gameHistory"].as_array().unwrap().len(), 2);
    }
}
