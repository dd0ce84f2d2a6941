//! Search outcomes
//!
//! Per-candidate verdicts and the folded result of a full search.
use serde::{Deserialize, Serialize};
use std::fmt;

/// An adjustment set, as variable names in the order of the variable list.
pub type AdjustmentSet = Vec<String>;

/// The four conditions of the M-adjustment criterion, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// No member lies on, or descends from a vertex on, a proper causal path.
    PathExclusion,
    /// Treatment and outcome are d-separated by the set and its indicators in the proper backdoor graph.
    ProperBackdoor,
    /// Outcome and indicators are d-separated by the treatment once the treatment's incoming edges are cut.
    OutcomeMissingness,
    /// If the treatment is an ancestor of an indicator, treatment and outcome are
    /// d-separated once the treatment's outgoing edges are cut.
    Ancestral,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::PathExclusion => "condition 1 (path exclusion)",
            Condition::ProperBackdoor => "condition 2 (proper backdoor separation)",
            Condition::OutcomeMissingness => "condition 3 (outcome-missingness separation)",
            Condition::Ancestral => "condition 4 (ancestral separation)",
        };
        f.write_str(s)
    }
}

/// Verdict for a single candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateOutcome {
    Valid,
    /// The first condition the candidate failed.
    Rejected(Condition),
}

impl CandidateOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, CandidateOutcome::Valid)
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of candidate sets evaluated.
    pub candidates: u64,
    pub path_exclusion: u64,
    pub proper_backdoor: u64,
    pub outcome_missingness: u64,
    pub ancestral: u64,
}

impl SearchStats {
    pub(crate) fn record(&mut self, outcome: CandidateOutcome) {
        self.candidates += 1;
        match outcome {
            CandidateOutcome::Valid => {}
            CandidateOutcome::Rejected(Condition::PathExclusion) => self.path_exclusion += 1,
            CandidateOutcome::Rejected(Condition::ProperBackdoor) => self.proper_backdoor += 1,
            CandidateOutcome::Rejected(Condition::OutcomeMissingness) => self.outcome_missingness += 1,
            CandidateOutcome::Rejected(Condition::Ancestral) => self.ancestral += 1,
        }
    }

    /// Number of candidates that were rejected, on any condition.
    pub fn rejected(&self) -> u64 {
        self.path_exclusion + self.proper_backdoor + self.outcome_missingness + self.ancestral
    }
}

/// All valid adjustment sets in enumeration order, and the first one of minimal size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub valid_sets: Vec<AdjustmentSet>,
    pub best_set: Option<AdjustmentSet>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Fold one candidate into the result. A valid set only replaces the best set when
    /// it is strictly smaller, so ties keep the earliest set found.
    pub(crate) fn push(&mut self, set: &[&str], outcome: CandidateOutcome) {
        self.stats.record(outcome);
        if !outcome.is_valid() {
            return;
        }
        let set: AdjustmentSet = set.iter().map(|s| s.to_string()).collect();
        let better = match &self.best_set {
            Some(best) => set.len() < best.len(),
            None => true,
        };
        if better {
            self.best_set = Some(set.clone());
        }
        self.valid_sets.push(set);
    }

    pub fn has_valid_set(&self) -> bool {
        self.best_set.is_some()
    }

    /// The `(valid_sets, best_set)` pair.
    pub fn into_parts(self) -> (Vec<AdjustmentSet>, Option<AdjustmentSet>) {
        (self.valid_sets, self.best_set)
    }
}
