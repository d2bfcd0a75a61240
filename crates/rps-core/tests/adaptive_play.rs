//! Long-run behaviour of the adaptive opponent.
//!
//! Run with: cargo test -p rps-core --test adaptive_play

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rps_core::{EnginePhase, GameError, Move, OpponentEngine, Outcome, OutcomeCounts};

const ROUNDS: u32 = 1000;

#[test]
fn test_repeated_move_is_exploited() {
    let mut engine = OpponentEngine::new();
    let mut last = None;

    for _ in 0..ROUNDS {
        last = Some(engine.play("PAPER").unwrap());
    }

    let counts = last.unwrap().counts;
    assert_eq!(counts.total(), ROUNDS);
    // Only the two cold-start rounds and the first sight of the context can
    // escape the counter-move.
    assert!(counts.defeats > ROUNDS - 4, "defeats: {}", counts.defeats);
}

#[test]
fn test_random_player_is_not_locked_out() {
    let mut player = StdRng::seed_from_u64(42);
    let mut engine = OpponentEngine::new();
    let mut counts = OutcomeCounts::default();

    for _ in 0..ROUNDS {
        let m = Move::ALL[player.gen_range(0..Move::ALL.len())];
        counts = engine.play(m.as_str()).unwrap().counts;
    }

    let threshold = ROUNDS / 5;
    assert!(counts.ties > threshold, "ties: {}", counts.ties);
    assert!(counts.victories > threshold, "victories: {}", counts.victories);
    assert!(counts.defeats > threshold, "defeats: {}", counts.defeats);
}

#[test]
fn test_every_round_is_consistent_with_the_cycle() {
    let mut player = StdRng::seed_from_u64(7);
    let mut engine = OpponentEngine::with_seed(7);

    for n in 1..=300u32 {
        let m = Move::ALL[player.gen_range(0..Move::ALL.len())];
        let round = engine.play_move(m);

        let expected = if round.player_move == round.opponent_move {
            Outcome::Tie
        } else if round.opponent_move.beats(round.player_move) {
            Outcome::Defeat
        } else {
            assert!(round.player_move.beats(round.opponent_move));
            Outcome::Victory
        };
        assert_eq!(round.outcome, expected);
        assert_eq!(round.counts.total(), n);
        assert_eq!(engine.history().len() as u32, n);
    }
}

#[test]
fn test_move_names_in_any_case() {
    let mut engine = OpponentEngine::new();
    for name in ["rock", "ROCK", "Rock", "sCiSsOrS", "paper", "PAPER"] {
        assert!(engine.play(name).is_ok(), "{} should be accepted", name);
    }
    assert_eq!(engine.counts().total(), 6);

    for name in ["rock1", "paperrock", "stone", "r", "rock "] {
        assert_eq!(
            engine.play(name),
            Err(GameError::InvalidMove(name.to_string()))
        );
    }
    assert_eq!(engine.counts().total(), 6);
}

#[test]
fn test_stop_game() {
    let moves = [
        "PAPER", "PAPER", "PAPER", "PAPER", "PAPER", "PAPER", "SCISSORS", "ROCK", "PAPER",
    ];
    let mut engine = OpponentEngine::new();
    for m in moves {
        engine.play(m).unwrap();
    }

    let summary = engine.finalize();
    let history: Vec<&str> = summary.move_history.iter().map(|m| m.as_str()).collect();

    assert_eq!(summary.counts.total(), moves.len() as u32);
    assert_eq!(history, moves);
    assert_eq!(summary.favourite_move, Some(Move::Paper));
    assert!((summary.favourite_move_share - 7.0 / 9.0).abs() < 1e-7);
    assert_eq!(summary.percentile, 0.0);
    // Rounds four to six counter the known (PAPER, PAPER) context and the
    // SCISSORS round is met with SCISSORS.
    assert!(summary.counts.defeats >= 3, "defeats: {}", summary.counts.defeats);
    assert!(summary.counts.ties >= 1, "ties: {}", summary.counts.ties);
    let expected_rate = f64::from(summary.counts.victories) / moves.len() as f64;
    assert!((summary.win_rate - expected_rate).abs() < 1e-9);

    assert_eq!(engine.phase(), EnginePhase::Empty);
    assert_eq!(engine.counts(), OutcomeCounts::default());
}

#[test]
fn test_stop_game_one_move_type() {
    let mut engine = OpponentEngine::new();
    for _ in 0..6 {
        engine.play("ROCK").unwrap();
    }

    let summary = engine.finalize();
    assert_eq!(summary.counts.total(), 6);
    assert_eq!(summary.favourite_move, Some(Move::Rock));
    assert!((summary.favourite_move_share - 1.0).abs() < 1e-7);
    assert!(summary.counts.defeats >= 3, "defeats: {}", summary.counts.defeats);
    assert!(summary.win_rate <= 0.5, "win rate: {}", summary.win_rate);
}

#[test]
fn test_stop_game_even_split() {
    let moves = ["ROCK", "ROCK", "PAPER", "PAPER", "SCISSORS", "SCISSORS"];
    let mut engine = OpponentEngine::new();
    for m in moves {
        engine.play(m).unwrap();
    }

    let summary = engine.finalize();
    assert_eq!(summary.counts.total(), 6);
    assert_eq!(summary.favourite_move, Some(Move::Rock));
    assert!((summary.favourite_move_share - 1.0 / 3.0).abs() < 1e-7);
}

#[test]
fn test_stop_empty_game() {
    let mut engine = OpponentEngine::new();
    let summary = engine.finalize();

    assert_eq!(summary.favourite_move, None);
    assert_eq!(summary.favourite_move_share, 0.0);
    assert_eq!(summary.win_rate, 0.0);
    assert!(summary.move_history.is_empty());
    assert_eq!(summary.counts, OutcomeCounts::default());
}

#[test]
fn test_reused_session_remembers_the_player() {
    let mut engine = OpponentEngine::new();
    for _ in 0..20 {
        engine.play_move(Move::Rock);
    }
    engine.finalize();

    // Cold start is random again, but once two moves are in the learned
    // (ROCK, ROCK) -> ROCK row is used immediately.
    engine.play_move(Move::Rock);
    engine.play_move(Move::Rock);
    for _ in 0..10 {
        let round = engine.play_move(Move::Rock);
        assert_eq!(round.opponent_move, Move::Paper);
        assert_eq!(round.outcome, Outcome::Defeat);
    }
}
