//! Conformance coverage aggregation
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  records ──► AggregationRun::tally ──► Tally { CoverageSummary } │
//! │     │              │                                             │
//! │     │        RequirementTracker (first claim wins)               │
//! │     └──────────► build_details(records, &summary)                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each run owns its tracker and counters; runs never share state.

mod aggregator;
mod dedup;
mod summary;

pub use aggregator::{build_details, compute_summary, AggregationRun, RequirementDetail, Tally};
pub use dedup::RequirementTracker;
pub use summary::{CoverageSummary, LevelCounts};
