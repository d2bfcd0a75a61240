//! Application state management.

use rps_core::{DetailedSummary, GameError, Move, Round, SessionId, SessionStore, StatsAggregator};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    sessions: Arc<SessionStore>,
    stats: Arc<StatsAggregator>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    /// Play one round in the given session.
    ///
    /// The move is parsed before the session is looked up, so a bad move
    /// never creates a session.
    pub fn play(&self, session_id: &SessionId, move_name: &str) -> Result<Round, GameError> {
        let player_move = move_name.parse::<Move>().inspect_err(|e| {
            tracing::warn!("Playing failed: {}", e);
        })?;

        Ok(self
            .sessions
            .with_engine(session_id, |engine| engine.play_move(player_move)))
    }

    /// Finish the session's game, record it, and rank it against everyone.
    ///
    /// Finalize, record and rank all run under the session lock, so a
    /// concurrent stop of the same session cannot overwrite the entry between
    /// this call's record and rank. Lock order is session, then stats.
    pub fn stop(&self, session_id: &SessionId) -> DetailedSummary {
        let summary = self.sessions.with_engine(session_id, |engine| {
            let summary = engine.finalize();
            self.stats.record(session_id.clone(), summary.counts);
            let percentile = self.stats.percentile(session_id);
            summary.with_percentile(percentile)
        });

        tracing::info!(
            "Session {} finished after {} rounds, percentile {:.3}",
            session_id,
            summary.counts.total(),
            summary.percentile
        );

        summary
    }

    /// Drop idle sessions. Their finalized stats are kept.
    pub fn evict_idle(&self, max_idle: Duration) -> Vec<SessionId> {
        self.sessions.evict_idle(max_idle)
    }
}
