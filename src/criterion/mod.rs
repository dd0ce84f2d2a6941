//! Criterion
//!
//! The M-adjustment search: configuration, the evaluator, its outcomes, and a
//! serializable problem definition tying them together.
pub mod config;
pub mod evaluator;
pub mod outcome;
pub mod problem;


pub use config::{JsonIO, SearchConfig};
pub use evaluator::{list_m_adjustment_sets, MAdjustment};
pub use outcome::{AdjustmentSet, CandidateOutcome, Condition, SearchResult, SearchStats};
pub use problem::MAdjProblem;
