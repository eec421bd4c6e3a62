//! Property tests for the rating engine

mod fixtures;

use proptest::prelude::*;
use team_elo::config::RatingConfig;
use team_elo::rating::{classify, expected_score, k_factor};
use team_elo::types::{GameOutcome, GameRecord};
use team_elo::{process_history, HistoryProcessor};

fn arb_game() -> impl Strategy<Value = GameRecord> {
    let teams = prop::sample::select(vec!["A", "B", "C", "D", "E"]);
    (teams.clone(), teams, 0u32..6, 0u32..6)
        .prop_filter("a team cannot play itself", |(home, away, _, _)| home != away)
        .prop_map(|(home, away, hs, aws)| GameRecord::new(home, away, hs, aws))
}

proptest! {
    #[test]
    fn expected_scores_sum_to_one(a in 0.0f64..4000.0, b in 0.0f64..4000.0) {
        let sum = expected_score(a, b) + expected_score(b, a);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expected_score_in_open_unit_interval(a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let expected = expected_score(a, b);
        prop_assert!(expected > 0.0 && expected < 1.0);
    }

    #[test]
    fn draws_are_half_for_both_sides(score in 0u32..20) {
        let game = GameRecord::new("Home", "Away", score, score);
        prop_assert_eq!(classify("Home", &game), Some(GameOutcome::Draw));
        prop_assert_eq!(classify("Away", &game), Some(GameOutcome::Draw));
    }

    #[test]
    fn decisive_games_have_one_winner(home in 0u32..20, away in 0u32..20) {
        prop_assume!(home != away);
        let game = GameRecord::new("Home", "Away", home, away);
        let home_outcome = classify("Home", &game).unwrap();
        let away_outcome = classify("Away", &game).unwrap();

        prop_assert_eq!(home_outcome.score() + away_outcome.score(), 1.0);
        prop_assert_eq!(home_outcome == GameOutcome::Win, home > away);
    }

    #[test]
    fn provisional_teams_always_use_forty(games in 0u32..30, rating in 0.0f64..4000.0) {
        prop_assert_eq!(k_factor(games, rating), 40.0);
    }

    #[test]
    fn established_teams_never_use_forty(games in 30u32..1000, rating in 0.0f64..4000.0) {
        let k = k_factor(games, rating);
        prop_assert!(k == 20.0 || k == 10.0);
        prop_assert_eq!(k == 10.0, rating > 2400.0);
    }

    #[test]
    fn folding_is_deterministic(games in prop::collection::vec(arb_game(), 0..60)) {
        let first = process_history(&games, &RatingConfig::default()).unwrap();
        let second = process_history(&games, &RatingConfig::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_game_lands_in_both_histories(games in prop::collection::vec(arb_game(), 1..60)) {
        let registry = process_history(&games, &RatingConfig::default()).unwrap();

        let total_appearances: u32 = registry.teams().map(|t| t.number_of_games).sum();
        prop_assert_eq!(total_appearances as usize, games.len() * 2);

        for team in registry.teams() {
            prop_assert_eq!(team.game_history.len(), team.number_of_games as usize);
            prop_assert_eq!(team.record().games(), team.number_of_games);
            prop_assert_eq!(team.rating.fract(), 0.0);
        }
    }

    #[test]
    fn first_game_starts_from_defaults(games in prop::collection::vec(arb_game(), 1..40)) {
        let mut processor = HistoryProcessor::with_config(RatingConfig::default()).unwrap();
        for game in &games {
            let home_is_new = !processor.registry().contains(&game.home_team);
            let away_is_new = !processor.registry().contains(&game.away_team);

            let update = processor.apply_game(game).unwrap();
            if home_is_new {
                prop_assert_eq!(update.home.old_rating, 1500.0);
                prop_assert_eq!(update.home.k_factor, 40.0);
            }
            if away_is_new {
                prop_assert_eq!(update.away.old_rating, 1500.0);
                prop_assert_eq!(update.away.k_factor, 40.0);
            }
        }
    }
}

#[test]
fn fixture_round_robin_has_no_self_play() {
    assert!(fixtures::round_robin(4, 2)
        .iter()
        .all(|game| game.home_team != game.away_team));
}
