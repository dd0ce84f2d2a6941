//! M-Graph
//!
//! Directed acyclic graph over named vertices. Substantive variables and their
//! missingness indicators live side by side as ordinary vertices; the pairing between
//! them is carried by [`crate::variable::Variable`], not by the graph.
//!
//! Vertices are stored in a petgraph arena and never removed, so a vertex's index is
//! stable for the lifetime of the graph and every derived copy of it.
use crate::errors::MAdjustError;
use hashbrown::HashMap;
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A directed edge, `source -> sink`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub sink: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, sink: impl Into<String>) -> Self {
        Edge {
            source: source.into(),
            sink: sink.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.sink)
    }
}

/// Serialized form of an [`MGraph`]: vertex names in insertion order and the edge list.
#[derive(Serialize, Deserialize)]
struct GraphDef {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

/// A directed acyclic m-graph.
///
/// Cloning is cheap enough to do per transform: the name lookup table is shared between
/// copies and only the edge arena is duplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphDef", into = "GraphDef")]
pub struct MGraph {
    graph: DiGraph<String, ()>,
    node_map: Arc<HashMap<String, NodeIndex>>,
}

impl Default for MGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        MGraph {
            graph: DiGraph::new(),
            node_map: Arc::new(HashMap::new()),
        }
    }

    /// Build a graph from a list of vertex names and a list of `(source, sink)` pairs.
    ///
    /// Every edge endpoint must appear in `nodes`.
    ///
    /// * `nodes` - Vertex names, in the order they should be indexed.
    /// * `edges` - Directed edges between those vertices.
    pub fn from_edges<N, S, T>(nodes: N, edges: &[(S, T)]) -> Result<Self, MAdjustError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut g = MGraph::new();
        for node in nodes {
            g.add_node(node)?;
        }
        for (source, sink) in edges {
            g.add_edge(source.as_ref(), sink.as_ref())?;
        }
        Ok(g)
    }

    /// Add a vertex to the graph.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<(), MAdjustError> {
        let name = name.into();
        if self.node_map.contains_key(&name) {
            return Err(MAdjustError::DuplicateNode(name));
        }
        let idx = self.graph.add_node(name.clone());
        Arc::make_mut(&mut self.node_map).insert(name, idx);
        Ok(())
    }

    /// Add the edge `from -> to`.
    ///
    /// Adding an edge that already exists is a no-op. An edge that would close a directed
    /// cycle (including a self loop) is rejected, so an `MGraph` is acyclic by construction.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), MAdjustError> {
        let source = self.index(from)?;
        let sink = self.index(to)?;
        if source == sink || has_path_connecting(&self.graph, sink, source, None) {
            return Err(MAdjustError::CycleDetected {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.graph.update_edge(source, sink, ());
        Ok(())
    }

    /// Check if the graph contains a vertex.
    pub fn contains_node(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Check if the graph contains the edge `from -> to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&source), Some(&sink)) => self.graph.find_edge(source, sink).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertex names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// All edges, sorted by the insertion order of their source, then their sink.
    pub fn edges(&self) -> Vec<Edge> {
        let mut pairs: Vec<(NodeIndex, NodeIndex)> =
            self.graph.edge_references().map(|e| (e.source(), e.target())).collect();
        pairs.sort_unstable();
        pairs
            .into_iter()
            .map(|(source, sink)| Edge::new(self.name(source), self.name(sink)))
            .collect()
    }

    /// Children of a vertex, in insertion order.
    pub fn children(&self, name: &str) -> Result<Vec<&str>, MAdjustError> {
        let idx = self.index(name)?;
        Ok(self.successors(idx).into_iter().map(|c| self.name(c)).collect())
    }

    /// Parents of a vertex, in insertion order.
    pub fn parents(&self, name: &str) -> Result<Vec<&str>, MAdjustError> {
        let idx = self.index(name)?;
        Ok(self.predecessors(idx).into_iter().map(|p| self.name(p)).collect())
    }

    pub(crate) fn index(&self, name: &str) -> Result<NodeIndex, MAdjustError> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| MAdjustError::NodeNotFound(name.to_string()))
    }

    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        self.graph.node_weight(idx).map(String::as_str).unwrap_or_default()
    }

    pub(crate) fn raw(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// Direct successors sorted by index, so traversals are independent of edge insertion order.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.sorted_neighbors(idx, Direction::Outgoing)
    }

    pub(crate) fn predecessors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.sorted_neighbors(idx, Direction::Incoming)
    }

    fn sorted_neighbors(&self, idx: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        let mut n: Vec<NodeIndex> = self.graph.neighbors_directed(idx, dir).collect();
        n.sort_unstable();
        n
    }

    /// Remove the edge `source -> sink` if present. Returns whether an edge was removed.
    pub(crate) fn remove_edge_between(&mut self, source: NodeIndex, sink: NodeIndex) -> bool {
        match self.graph.find_edge(source, sink) {
            Some(e) => self.graph.remove_edge(e).is_some(),
            None => false,
        }
    }

    /// Drop every edge incident to `idx` in the given direction.
    pub(crate) fn clear_edges(&mut self, idx: NodeIndex, dir: Direction) {
        self.graph.retain_edges(|g, e| match g.edge_endpoints(e) {
            Some((source, sink)) => match dir {
                Direction::Incoming => sink != idx,
                Direction::Outgoing => source != idx,
            },
            None => true,
        });
    }
}

impl TryFrom<GraphDef> for MGraph {
    type Error = MAdjustError;

    fn try_from(def: GraphDef) -> Result<Self, Self::Error> {
        MGraph::from_edges(def.nodes, def.edges.as_slice())
    }
}

impl From<MGraph> for GraphDef {
    fn from(g: MGraph) -> Self {
        GraphDef {
            nodes: g.nodes().map(str::to_string).collect(),
            edges: g.edges().into_iter().map(|e| (e.source, e.sink)).collect(),
        }
    }
}
