//! End-of-game summary.

use super::moves::{Move, MOVE_COUNT};
use crate::stats::OutcomeCounts;
use serde::{Deserialize, Serialize};

/// Detailed statistics for a finished session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedSummary {
    #[serde(flatten)]
    pub counts: OutcomeCounts,
    /// Most played move, `None` for an empty session
    pub favourite_move: Option<Move>,
    /// Share of rounds played with the favourite move
    pub favourite_move_share: f64,
    /// Player's victories over total rounds, 0 for an empty session
    pub win_rate: f64,
    pub move_history: Vec<Move>,
    /// Fraction of finalized sessions ranked at or below this one
    #[serde(rename = "better_than_other_users_percentage")]
    pub percentile: f64,
}

impl DetailedSummary {
    pub(crate) fn from_session(counts: OutcomeCounts, history: &[Move]) -> Self {
        if history.is_empty() {
            return Self {
                counts,
                ..Self::default()
            };
        }

        let mut frequency = [0usize; MOVE_COUNT];
        for m in history {
            frequency[m.index()] += 1;
        }

        // First move in enumeration order reaching the maximum wins ties.
        let mut favourite = Move::ALL[0];
        for m in Move::ALL {
            if frequency[m.index()] > frequency[favourite.index()] {
                favourite = m;
            }
        }

        Self {
            counts,
            favourite_move: Some(favourite),
            favourite_move_share: frequency[favourite.index()] as f64 / history.len() as f64,
            win_rate: counts.win_rate().unwrap_or(0.0),
            move_history: history.to_vec(),
            percentile: 0.0,
        }
    }

    /// Merge the cross-session rank into the summary
    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }
}
