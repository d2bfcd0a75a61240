//! Adaptive opponent.
//!
//! The engine learns an order-2 model of the player: for every ordered pair of
//! consecutive player moves it counts which move came next. Before each round
//! it looks up the row for the two most recent moves, takes the most frequent
//! follow-up as the predicted player move, and plays the move that beats it.

use super::moves::{Move, Outcome, MOVE_COUNT};
use super::summary::DetailedSummary;
use crate::error::GameError;
use crate::stats::OutcomeCounts;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One row per ordered (second-to-last, last) pair, one column per next move
pub type TransitionMatrix = [[u32; MOVE_COUNT]; MOVE_COUNT * MOVE_COUNT];

/// Where a session is in its learning lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    /// No moves recorded
    Empty,
    /// One move recorded, not enough context for the model
    Warming,
    /// Two or more moves recorded
    Learning,
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
    /// Running counts right after this round
    pub counts: OutcomeCounts,
}

/// Per-session adaptive opponent
#[derive(Clone, Debug)]
pub struct OpponentEngine {
    transitions: TransitionMatrix,
    history: Vec<Move>,
    counts: OutcomeCounts,
    rng: StdRng,
}

impl OpponentEngine {
    /// Create an engine seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine with a reproducible random sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            transitions: [[0; MOVE_COUNT]; MOVE_COUNT * MOVE_COUNT],
            history: Vec::new(),
            counts: OutcomeCounts::default(),
            rng,
        }
    }

    pub fn phase(&self) -> EnginePhase {
        match self.history.len() {
            0 => EnginePhase::Empty,
            1 => EnginePhase::Warming,
            _ => EnginePhase::Learning,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn counts(&self) -> OutcomeCounts {
        self.counts
    }

    pub fn transitions(&self) -> &TransitionMatrix {
        &self.transitions
    }

    /// Play one round with a move name in any letter case.
    ///
    /// An unrecognized name leaves the engine untouched.
    pub fn play(&mut self, move_name: &str) -> Result<Round, GameError> {
        let player_move = move_name.parse::<Move>().inspect_err(|e| {
            tracing::warn!("Playing failed: {}", e);
        })?;
        Ok(self.play_move(player_move))
    }

    /// Play one round with an already parsed move
    pub fn play_move(&mut self, player_move: Move) -> Round {
        // The prediction must only see moves strictly before this one.
        let opponent_move = self.predict();

        if let Some(row) = self.context_row() {
            self.transitions[row][player_move.index()] += 1;
        }
        self.history.push(player_move);

        let outcome = Outcome::resolve(player_move, opponent_move);
        self.counts.record(outcome);

        Round {
            player_move,
            opponent_move,
            outcome,
            counts: self.counts,
        }
    }

    /// Choose the opponent's move for the next round.
    ///
    /// The running maximum starts at a random column and is only replaced by a
    /// strictly greater count, so an unseen context or a tied row resolves to
    /// the random start rather than to the lowest index.
    pub fn predict(&mut self) -> Move {
        let random_choice = self.rng.gen_range(0..MOVE_COUNT);

        let Some(row) = self.context_row() else {
            return Move::ALL[random_choice];
        };

        let counts = &self.transitions[row];
        let mut best = random_choice;
        for (column, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = column;
            }
        }

        Move::ALL[best].loses_to()
    }

    /// Build the end-of-game summary and clear the session.
    ///
    /// The learned transition counts survive, so a reused session keeps its
    /// model of the player.
    pub fn finalize(&mut self) -> DetailedSummary {
        let summary = DetailedSummary::from_session(self.counts, &self.history);
        self.clear();
        summary
    }

    /// Clear the session and forget everything learned
    pub fn hard_reset(&mut self) {
        self.transitions = [[0; MOVE_COUNT]; MOVE_COUNT * MOVE_COUNT];
        self.clear();
    }

    fn clear(&mut self) {
        self.history.clear();
        self.counts.reset();
    }

    /// Matrix row for the two most recent moves, if both exist
    fn context_row(&self) -> Option<usize> {
        match self.history.as_slice() {
            [.., second_to_last, last] => {
                Some(MOVE_COUNT * second_to_last.index() + last.index())
            }
            _ => None,
        }
    }
}

impl Default for OpponentEngine {
    fn default() -> Self {
        Self::new()
    }
}
