//! Global ranking of finalized sessions.

use super::counts::OutcomeCounts;
use crate::session::SessionId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Finalized outcome counts of every session, shared across all sessions.
///
/// Upserts take the write lock and `percentile` scans under a single read
/// lock, so a scan never sees a half-applied write. Entries are never removed.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    finalized: RwLock<HashMap<SessionId, OutcomeCounts>>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the finalized counts of a session, replacing any earlier entry
    pub fn record(&self, session_id: SessionId, counts: OutcomeCounts) {
        self.finalized
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id, counts);
    }

    /// Fraction of ranked sessions whose win rate is at or below this one's.
    ///
    /// Sessions with zero rounds have no win rate and are left out of the
    /// ranking entirely. An unknown or zero-round session ranks `0.0`.
    pub fn percentile(&self, session_id: &SessionId) -> f64 {
        let finalized = self
            .finalized
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(own) = finalized.get(session_id).and_then(OutcomeCounts::win_rate) else {
            return 0.0;
        };

        let (at_or_below, ranked) = finalized
            .values()
            .filter_map(OutcomeCounts::win_rate)
            .fold((0usize, 0usize), |(below, ranked), rate| {
                (below + usize::from(rate <= own), ranked + 1)
            });

        at_or_below as f64 / ranked as f64
    }

    pub fn get(&self, session_id: &SessionId) -> Option<OutcomeCounts> {
        self.finalized
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.finalized
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
