//! M-Adjustment Evaluator
//!
//! Exhaustive search for sets satisfying the M-adjustment criterion of Saadati & Tian.
//! Every subset of the variable list is a candidate; a candidate is valid when
//!
//! 1. none of its members lies on, or descends from a vertex on, a proper causal path
//!    from the treatment to the outcome (the exclusion set `D_pcp`);
//! 2. treatment and outcome are d-separated given the candidate and its missingness
//!    indicators `R_W` in the proper backdoor graph;
//! 3. the outcome and `R_W` are d-separated given the treatment once the treatment's
//!    incoming edges are removed;
//! 4. if the treatment is an ancestor of some vertex in `R_W`, treatment and outcome are
//!    d-separated given nothing once the treatment's outgoing edges are removed.
//!
//! `R_W` holds the indicators of the treatment, the outcome, and every partially
//! observed member of the candidate.
use crate::ancestry::{descendant_indices, is_ancestor_idx};
use crate::constants::{MAX_VARIABLES, WARN_VARIABLE_COUNT};
use crate::criterion::config::SearchConfig;
use crate::criterion::outcome::{AdjustmentSet, CandidateOutcome, Condition, SearchResult};
use crate::errors::MAdjustError;
use crate::graph::MGraph;
use crate::paths::{endpoints, proper_causal_paths, CausalPath};
use crate::separation::{BayesBall, DSeparation};
use crate::transforms::{above_cut, below_cut, proper_backdoor_graph};
use crate::variable::Variable;
use hashbrown::HashSet;
use log::{debug, info, warn};
use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use std::time::Instant;

/// Evaluator of the M-adjustment criterion for one treatment, outcome and variable list.
///
/// Everything that does not depend on the candidate set (proper causal paths, the
/// exclusion set and the three derived graphs) is computed once in [`MAdjustment::new`].
pub struct MAdjustment<'a, D = BayesBall> {
    graph: &'a MGraph,
    x: &'a str,
    y: &'a str,
    variables: &'a [Variable],
    oracle: D,
    config: SearchConfig,
    x_idx: NodeIndex,
    paths: Vec<CausalPath>,
    excluded: HashSet<NodeIndex>,
    backdoor: MGraph,
    above: MGraph,
    below: MGraph,
}

impl<'a> MAdjustment<'a, BayesBall> {
    /// Prepare a search with the default [`BayesBall`] oracle and default configuration.
    ///
    /// * `graph` - The m-graph, indicators included.
    /// * `x` - Name of the treatment.
    /// * `y` - Name of the outcome.
    /// * `variables` - Variables that may form adjustment sets, each with its optional indicator.
    pub fn new(graph: &'a MGraph, x: &'a str, y: &'a str, variables: &'a [Variable]) -> Result<Self, MAdjustError> {
        let (x_idx, y_idx) = endpoints(graph, x, y)?;
        if variables.len() > MAX_VARIABLES {
            return Err(MAdjustError::InvalidParameter(
                "variables".to_string(),
                format!("at most {MAX_VARIABLES} entries"),
                variables.len().to_string(),
            ));
        }
        for v in variables {
            graph.index(&v.name)?;
            if let Some(r) = &v.indicator {
                graph.index(r)?;
            }
        }

        let paths = proper_causal_paths(graph, x, y)?;
        let mut excluded: HashSet<NodeIndex> = HashSet::new();
        excluded.extend(descendant_indices(graph, x_idx));
        excluded.extend(descendant_indices(graph, y_idx));
        for edge in paths.iter().flat_map(CausalPath::edges) {
            for vertex in [&edge.source, &edge.sink] {
                let idx = graph.index(vertex)?;
                if !excluded.contains(&idx) {
                    excluded.extend(descendant_indices(graph, idx));
                }
            }
        }

        Ok(MAdjustment {
            graph,
            x,
            y,
            variables,
            oracle: BayesBall,
            config: SearchConfig::default(),
            x_idx,
            backdoor: proper_backdoor_graph(graph, &paths)?,
            above: above_cut(graph, x)?,
            below: below_cut(graph, x)?,
            paths,
            excluded,
        })
    }
}

impl<'a, D: DSeparation> MAdjustment<'a, D> {
    /// Replace the d-separation oracle.
    pub fn with_oracle<E: DSeparation>(self, oracle: E) -> MAdjustment<'a, E> {
        MAdjustment {
            graph: self.graph,
            x: self.x,
            y: self.y,
            variables: self.variables,
            oracle,
            config: self.config,
            x_idx: self.x_idx,
            paths: self.paths,
            excluded: self.excluded,
            backdoor: self.backdoor,
            above: self.above,
            below: self.below,
        }
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Proper causal paths from the treatment to the outcome.
    pub fn paths(&self) -> &[CausalPath] {
        &self.paths
    }

    /// The exclusion set `D_pcp`: treatment, outcome, every vertex on a proper causal
    /// path, and all their descendants, in vertex insertion order.
    pub fn exclusion_set(&self) -> Vec<&str> {
        let mut idx: Vec<NodeIndex> = self.excluded.iter().copied().collect();
        idx.sort_unstable();
        idx.into_iter().map(|i| self.graph.name(i)).collect()
    }

    /// Missingness indicators `R_W` for the candidate `z`, in variable-list order.
    pub fn missingness_set(&self, z: &[&str]) -> Vec<&'a str> {
        let mut r_w: Vec<&'a str> = Vec::new();
        for v in self.variables {
            let Some(r) = v.indicator.as_deref() else {
                continue;
            };
            let in_w = v.name == self.x || v.name == self.y || z.contains(&v.name.as_str());
            if in_w && !r_w.contains(&r) {
                r_w.push(r);
            }
        }
        r_w
    }

    /// Check a single proposed adjustment set against the criterion.
    ///
    /// Members are matched to the variable list by name to find their indicators; a
    /// member that is not in the list contributes no indicator.
    pub fn check<S: AsRef<str>>(&self, z: &[S]) -> Result<CandidateOutcome, MAdjustError> {
        let z: Vec<&str> = z.iter().map(AsRef::as_ref).collect();
        self.evaluate(&z)
    }

    fn evaluate(&self, z: &[&str]) -> Result<CandidateOutcome, MAdjustError> {
        for name in z {
            if self.excluded.contains(&self.graph.index(name)?) {
                return Ok(CandidateOutcome::Rejected(Condition::PathExclusion));
            }
        }

        let r_w = self.missingness_set(z);
        let mut given: Vec<&str> = z.to_vec();
        given.extend(r_w.iter().copied());
        if !self.oracle.d_separated(&self.backdoor, &[self.x], &[self.y], &given)? {
            return Ok(CandidateOutcome::Rejected(Condition::ProperBackdoor));
        }

        if !r_w.is_empty() && !self.oracle.d_separated(&self.above, &[self.y], &r_w, &[self.x])? {
            return Ok(CandidateOutcome::Rejected(Condition::OutcomeMissingness));
        }

        let r_idx = r_w
            .iter()
            .map(|r| self.graph.index(r))
            .collect::<Result<Vec<_>, _>>()?;
        if is_ancestor_idx(self.graph, self.x_idx, &r_idx)
            && !self.oracle.d_separated(&self.below, &[self.x], &[self.y], &[])?
        {
            return Ok(CandidateOutcome::Rejected(Condition::Ancestral));
        }

        Ok(CandidateOutcome::Valid)
    }

    /// Candidate for `mask`: the first variable is the most significant bit.
    fn select(&self, mask: u64) -> Vec<&'a str> {
        let n = self.variables.len();
        self.variables
            .iter()
            .enumerate()
            .filter(|(j, _)| (mask >> (n - 1 - j)) & 1 == 1)
            .map(|(_, v)| v.name.as_str())
            .collect()
    }

    fn evaluate_mask(&self, mask: u64) -> Result<(Vec<&'a str>, CandidateOutcome), MAdjustError> {
        let z = self.select(mask);
        let outcome = self.evaluate(&z)?;
        if let CandidateOutcome::Rejected(condition) = outcome {
            debug!("Candidate {:?} failed {}.", z, condition);
        }
        Ok((z, outcome))
    }

    fn masks(&self) -> std::ops::Range<u64> {
        let start = if self.config.include_empty_set { 0 } else { 1 };
        start..(1u64 << self.variables.len())
    }
}

impl<'a, D: DSeparation + Sync> MAdjustment<'a, D> {
    /// Evaluate every candidate set in ascending mask order.
    ///
    /// Oracle errors abort the search and are returned unchanged.
    pub fn search(&self) -> Result<SearchResult, MAdjustError> {
        let start = Instant::now();
        let n = self.variables.len();
        if n > WARN_VARIABLE_COUNT {
            warn!("Searching all subsets of {n} variables, this may take a long time. Consider trimming the variable list.");
        }
        info!(
            "Evaluating M-adjustment criterion for {} -> {} over {} variables with {} proper causal paths.",
            self.x,
            self.y,
            n,
            self.paths.len()
        );

        let mut result = SearchResult::default();
        if self.config.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.num_threads.unwrap_or(0))
                .build()
                .map_err(|e| MAdjustError::InvalidParameter("num_threads".to_string(), "a usable thread count".to_string(), e.to_string()))?;
            let outcomes = pool.install(|| {
                self.masks()
                    .into_par_iter()
                    .map(|mask| self.evaluate_mask(mask))
                    .collect::<Result<Vec<_>, _>>()
            })?;
            for (z, outcome) in outcomes {
                result.push(&z, outcome);
            }
        } else {
            for mask in self.masks() {
                let (z, outcome) = self.evaluate_mask(mask)?;
                result.push(&z, outcome);
            }
        }

        info!(
            "Found {} valid adjustment sets out of {} candidates in {} seconds.",
            result.valid_sets.len(),
            result.stats.candidates,
            start.elapsed().as_secs_f32()
        );
        Ok(result)
    }
}

/// Find every M-adjustment set for the effect of `x` on `y`, and the smallest one.
///
/// Uses the [`BayesBall`] oracle and the default [`SearchConfig`].
pub fn list_m_adjustment_sets(
    graph: &MGraph,
    x: &str,
    y: &str,
    variables: &[Variable],
) -> Result<(Vec<AdjustmentSet>, Option<AdjustmentSet>), MAdjustError> {
    Ok(MAdjustment::new(graph, x, y, variables)?.search()?.into_parts())
}
