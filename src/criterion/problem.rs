//! Problem definition
//!
//! A complete, serializable search input: the m-graph, the treatment and outcome, and
//! the variable list.
use crate::criterion::config::{JsonIO, SearchConfig};
use crate::criterion::evaluator::MAdjustment;
use crate::criterion::outcome::SearchResult;
use crate::errors::MAdjustError;
use crate::graph::MGraph;
use crate::variable::Variable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MAdjProblem {
    pub graph: MGraph,
    pub treatment: String,
    pub outcome: String,
    pub variables: Vec<Variable>,
}

impl MAdjProblem {
    pub fn new(graph: MGraph, treatment: impl Into<String>, outcome: impl Into<String>, variables: Vec<Variable>) -> Self {
        MAdjProblem {
            graph,
            treatment: treatment.into(),
            outcome: outcome.into(),
            variables,
        }
    }

    /// Evaluator for this problem with the default oracle.
    pub fn evaluator(&self) -> Result<MAdjustment<'_>, MAdjustError> {
        MAdjustment::new(&self.graph, &self.treatment, &self.outcome, &self.variables)
    }

    /// Run the full search.
    pub fn solve(&self, config: &SearchConfig) -> Result<SearchResult, MAdjustError> {
        self.evaluator()?.with_config(config.clone()).search()
    }
}

impl JsonIO for MAdjProblem {}
