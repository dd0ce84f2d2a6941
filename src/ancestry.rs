//! Ancestry
//!
//! Ancestor and descendant queries over an [`MGraph`]. Both relations are reflexive here:
//! a vertex counts as its own ancestor and its own descendant.
use crate::errors::MAdjustError;
use crate::graph::MGraph;
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Dfs, Reversed, Walker};

/// Returns `true` if `x` is an ancestor of any vertex in `targets`.
///
/// The walk starts at each target and follows predecessor edges, so a target equal to
/// `x` matches immediately.
pub fn is_ancestor<S: AsRef<str>>(graph: &MGraph, x: &str, targets: &[S]) -> Result<bool, MAdjustError> {
    let xi = graph.index(x)?;
    let targets = targets
        .iter()
        .map(|t| graph.index(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(is_ancestor_idx(graph, xi, &targets))
}

/// The vertex `source` together with every vertex reachable from it.
pub fn descendants_of(graph: &MGraph, source: &str) -> Result<HashSet<String>, MAdjustError> {
    let idx = graph.index(source)?;
    Ok(descendant_indices(graph, idx)
        .into_iter()
        .map(|d| graph.name(d).to_string())
        .collect())
}

pub(crate) fn is_ancestor_idx(graph: &MGraph, x: NodeIndex, targets: &[NodeIndex]) -> bool {
    let rev = Reversed(graph.raw());
    let mut dfs = Dfs::empty(rev);
    for &t in targets {
        dfs.move_to(t);
        while let Some(n) = dfs.next(rev) {
            if n == x {
                return true;
            }
        }
    }
    false
}

pub(crate) fn descendant_indices(graph: &MGraph, source: NodeIndex) -> Vec<NodeIndex> {
    Dfs::new(graph.raw(), source).iter(graph.raw()).collect()
}

/// Every vertex that has a descendant in `set`, members of `set` included.
pub(crate) fn ancestor_closure(graph: &MGraph, set: &[NodeIndex]) -> HashSet<NodeIndex> {
    let rev = Reversed(graph.raw());
    let mut dfs = Dfs::empty(rev);
    let mut closure = HashSet::new();
    for &s in set {
        dfs.move_to(s);
        while let Some(n) = dfs.next(rev) {
            closure.insert(n);
        }
    }
    closure
}
