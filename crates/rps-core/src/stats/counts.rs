//! Per-session outcome counters.

use crate::game::Outcome;
use serde::{Deserialize, Serialize};

/// Victories, defeats and ties, from the player's perspective
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub victories: u32,
    pub defeats: u32,
    pub ties: u32,
}

impl OutcomeCounts {
    pub fn new(victories: u32, defeats: u32, ties: u32) -> Self {
        Self {
            victories,
            defeats,
            ties,
        }
    }

    /// Count one more round with the given outcome
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Victory => self.victories += 1,
            Outcome::Defeat => self.defeats += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Total rounds played
    pub fn total(&self) -> u32 {
        self.victories + self.defeats + self.ties
    }

    /// Victories over total rounds, `None` when no round was played
    pub fn win_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(f64::from(self.victories) / f64::from(total)),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
