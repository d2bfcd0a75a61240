//! Outcome counters and the global ranking of finalized sessions.

mod aggregator;
mod counts;

pub use aggregator::StatsAggregator;
pub use counts::OutcomeCounts;
