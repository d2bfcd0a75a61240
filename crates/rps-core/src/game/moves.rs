//! Rock-Paper-Scissors moves and round outcomes.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of distinct moves
pub const MOVE_COUNT: usize = 3;

/// A Rock-Paper-Scissors move.
///
/// Declaration order is the enumeration order used for indexing the
/// transition matrix and for breaking ties when picking a favourite move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Rock,
    Scissors,
    Paper,
}

impl Move {
    /// All moves in enumeration order
    pub const ALL: [Move; MOVE_COUNT] = [Move::Rock, Move::Scissors, Move::Paper];

    /// Position of this move in [`Move::ALL`]
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Scissors => 1,
            Move::Paper => 2,
        }
    }

    /// Move at position `index` in [`Move::ALL`]
    pub fn from_index(index: usize) -> Option<Move> {
        Self::ALL.get(index).copied()
    }

    /// The one move this move loses to.
    ///
    /// This is the only place the cyclic relation is written down.
    pub fn loses_to(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Check if this move beats the other
    pub fn beats(self, other: Move) -> bool {
        other.loses_to() == self
    }

    /// Canonical upper-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Scissors => "SCISSORS",
            Move::Paper => "PAPER",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::InvalidMove(s.to_string()))
    }
}

/// Round outcome, always from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Tie,
    Victory,
    Defeat,
}

impl Outcome {
    /// Judge a round between the player and the opponent
    pub fn resolve(player: Move, opponent: Move) -> Outcome {
        if player == opponent {
            Outcome::Tie
        } else if player.loses_to() == opponent {
            Outcome::Defeat
        } else {
            Outcome::Victory
        }
    }
}
