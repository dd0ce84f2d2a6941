//! d-Separation
//!
//! The conditional-independence oracle used by the M-adjustment criterion. Any type
//! implementing [`DSeparation`] can be plugged into the search; [`BayesBall`] is the
//! default implementation.
use crate::ancestry::ancestor_closure;
use crate::errors::MAdjustError;
use crate::graph::MGraph;
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// Decides whether two vertex sets are d-separated by a conditioning set in a DAG.
pub trait DSeparation {
    /// Returns `Ok(true)` when every trail between `a` and `b` is blocked by `given`.
    ///
    /// * `graph` - The DAG to test in.
    /// * `a` - First vertex set.
    /// * `b` - Second vertex set.
    /// * `given` - Conditioning set.
    fn d_separated(&self, graph: &MGraph, a: &[&str], b: &[&str], given: &[&str]) -> Result<bool, MAdjustError>;
}

impl<F> DSeparation for F
where
    F: Fn(&MGraph, &[&str], &[&str], &[&str]) -> Result<bool, MAdjustError>,
{
    fn d_separated(&self, graph: &MGraph, a: &[&str], b: &[&str], given: &[&str]) -> Result<bool, MAdjustError> {
        self(graph, a, b, given)
    }
}

/// Bayes-Ball reachability.
///
/// A ball starts at every vertex of `a` and moves along active trails: through
/// unconditioned chains and forks, and bounces back up at colliders that are conditioned
/// on or have a conditioned descendant. The sets are d-separated iff the ball never
/// reaches `b`.
///
/// Empty `a` or `b` are trivially separated. Sets that share a vertex are rejected with
/// [`MAdjustError::InvalidParameter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BayesBall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Travel {
    /// Arrived from a child, moving against edge direction.
    Up,
    /// Arrived from a parent, moving along edge direction.
    Down,
}

impl DSeparation for BayesBall {
    fn d_separated(&self, graph: &MGraph, a: &[&str], b: &[&str], given: &[&str]) -> Result<bool, MAdjustError> {
        let a = indices(graph, a)?;
        let b = indices(graph, b)?;
        let z = indices(graph, given)?;
        disjoint(graph, &a, &b)?;
        disjoint(graph, &a, &z)?;
        disjoint(graph, &b, &z)?;
        if a.is_empty() || b.is_empty() {
            return Ok(true);
        }
        Ok(!reaches(graph, &a, &b, &z))
    }
}

fn indices(graph: &MGraph, names: &[&str]) -> Result<HashSet<NodeIndex>, MAdjustError> {
    names.iter().map(|n| graph.index(n)).collect()
}

fn disjoint(graph: &MGraph, s: &HashSet<NodeIndex>, t: &HashSet<NodeIndex>) -> Result<(), MAdjustError> {
    match s.intersection(t).next() {
        Some(&shared) => Err(MAdjustError::InvalidParameter(
            "d-separation sets".to_string(),
            "pairwise disjoint vertex sets".to_string(),
            format!("'{}' in more than one set", graph.name(shared)),
        )),
        None => Ok(()),
    }
}

fn reaches(graph: &MGraph, a: &HashSet<NodeIndex>, b: &HashSet<NodeIndex>, z: &HashSet<NodeIndex>) -> bool {
    let zv: Vec<NodeIndex> = z.iter().copied().collect();
    let opens_collider = ancestor_closure(graph, &zv);

    let mut visited: HashSet<(NodeIndex, Travel)> = HashSet::new();
    let mut queue: VecDeque<(NodeIndex, Travel)> = a.iter().map(|&n| (n, Travel::Up)).collect();

    while let Some((node, travel)) = queue.pop_front() {
        if !visited.insert((node, travel)) {
            continue;
        }
        let conditioned = z.contains(&node);
        if !conditioned && b.contains(&node) {
            return true;
        }
        match travel {
            Travel::Up => {
                if !conditioned {
                    queue.extend(graph.predecessors(node).into_iter().map(|p| (p, Travel::Up)));
                    queue.extend(graph.successors(node).into_iter().map(|c| (c, Travel::Down)));
                }
            }
            Travel::Down => {
                if !conditioned {
                    queue.extend(graph.successors(node).into_iter().map(|c| (c, Travel::Down)));
                }
                if opens_collider.contains(&node) {
                    queue.extend(graph.predecessors(node).into_iter().map(|p| (p, Travel::Up)));
                }
            }
        }
    }
    false
}
