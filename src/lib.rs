// Modules
pub mod ancestry;
pub mod constants;
pub mod criterion;
pub mod errors;
pub mod graph;
pub mod paths;
pub mod separation;
pub mod transforms;
pub mod variable;

// Individual classes, and functions
pub use criterion::{list_m_adjustment_sets, MAdjustment, SearchConfig, SearchResult};
pub use errors::MAdjustError;
pub use graph::MGraph;
pub use variable::Variable;
