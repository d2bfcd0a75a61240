//! RPS Core Library
//!
//! This crate provides the adaptive rock-paper-scissors opponent, the
//! per-session outcome bookkeeping, and the cross-session percentile ranking.
//! It performs no I/O; a dispatcher (see `rps-server`) owns the session store
//! and the aggregator and calls into them per request.

pub mod error;
pub mod game;
pub mod session;
pub mod stats;

pub use error::GameError;
pub use game::{DetailedSummary, EnginePhase, Move, OpponentEngine, Outcome, Round};
pub use session::{SessionId, SessionStore};
pub use stats::{OutcomeCounts, StatsAggregator};
