//! Game definitions and the adaptive opponent.

mod engine;
mod moves;
mod summary;

pub use engine::{EnginePhase, OpponentEngine, Round};
pub use moves::{Move, Outcome, MOVE_COUNT};
pub use summary::DetailedSummary;
