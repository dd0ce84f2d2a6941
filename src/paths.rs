//! Proper Causal Paths
//!
//! A proper causal path is a directed path from the treatment to the outcome that meets
//! the treatment only at its start. In a DAG every directed path out of the treatment
//! is proper, so the search is a plain depth-first walk along successor edges.
use crate::errors::MAdjustError;
use crate::graph::{Edge, MGraph};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed path stored as its consecutive edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CausalPath {
    edges: Vec<Edge>,
}

impl CausalPath {
    pub fn new(edges: Vec<Edge>) -> Self {
        CausalPath { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge leaving the treatment.
    pub fn first_edge(&self) -> Option<&Edge> {
        self.edges.first()
    }

    /// Vertices along the path, treatment first and outcome last.
    pub fn vertices(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.edges.first().map(|e| e.source.as_str()).into_iter().collect();
        v.extend(self.edges.iter().map(|e| e.sink.as_str()));
        v
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<S: AsRef<str>> From<&[(S, S)]> for CausalPath {
    fn from(pairs: &[(S, S)]) -> Self {
        CausalPath::new(pairs.iter().map(|(s, t)| Edge::new(s.as_ref(), t.as_ref())).collect())
    }
}

impl fmt::Display for CausalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices().join(" -> "))
    }
}

/// Find all proper causal paths from `x` to `y`.
///
/// Successors are explored in vertex insertion order, so the order of the returned paths
/// is deterministic for a given graph. A direct edge `x -> y` yields a one-edge path; no
/// directed connection yields an empty list.
///
/// * `graph` - The m-graph.
/// * `x` - Name of the treatment vertex.
/// * `y` - Name of the outcome vertex.
pub fn proper_causal_paths(graph: &MGraph, x: &str, y: &str) -> Result<Vec<CausalPath>, MAdjustError> {
    let (xi, yi) = endpoints(graph, x, y)?;
    Ok(vertex_paths(graph, xi, yi)
        .into_iter()
        .map(|trail| {
            CausalPath::new(
                trail
                    .windows(2)
                    .map(|pair| Edge::new(graph.name(pair[0]), graph.name(pair[1])))
                    .collect(),
            )
        })
        .collect())
}

pub(crate) fn endpoints(graph: &MGraph, x: &str, y: &str) -> Result<(NodeIndex, NodeIndex), MAdjustError> {
    let xi = graph.index(x)?;
    let yi = graph.index(y)?;
    if xi == yi {
        return Err(MAdjustError::InvalidParameter(
            "treatment".to_string(),
            "a vertex different from the outcome".to_string(),
            x.to_string(),
        ));
    }
    Ok((xi, yi))
}

/// Paths from `x` to `y` as vertex sequences, both endpoints included.
pub(crate) fn vertex_paths(graph: &MGraph, x: NodeIndex, y: NodeIndex) -> Vec<Vec<NodeIndex>> {
    let mut found = Vec::new();
    let mut trail = vec![x];
    walk(graph, x, y, &mut trail, &mut found);
    found
}

fn walk(graph: &MGraph, current: NodeIndex, y: NodeIndex, trail: &mut Vec<NodeIndex>, found: &mut Vec<Vec<NodeIndex>>) {
    if current == y {
        found.push(trail.clone());
        return;
    }
    for child in graph.successors(current) {
        trail.push(child);
        walk(graph, child, y, trail, found);
        trail.pop();
    }
}
