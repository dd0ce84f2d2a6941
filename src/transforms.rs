//! Graph Transforms
//!
//! Derived graphs used by the independence checks of the M-adjustment criterion. Each
//! transform returns a new graph and leaves its input untouched.
use crate::errors::MAdjustError;
use crate::graph::MGraph;
use crate::paths::CausalPath;
use petgraph::Direction;

/// Proper backdoor graph: `graph` with the first edge of every proper causal path removed.
///
/// Later edges of the same paths are kept, so a mediator chain past the first hop stays intact.
pub fn proper_backdoor_graph(graph: &MGraph, paths: &[CausalPath]) -> Result<MGraph, MAdjustError> {
    let mut g = graph.clone();
    for edge in paths.iter().filter_map(CausalPath::first_edge) {
        let source = g.index(&edge.source)?;
        let sink = g.index(&edge.sink)?;
        g.remove_edge_between(source, sink);
    }
    Ok(g)
}

/// `graph` with every edge pointing into `x` removed.
pub fn above_cut(graph: &MGraph, x: &str) -> Result<MGraph, MAdjustError> {
    cut(graph, x, Direction::Incoming)
}

/// `graph` with every edge leaving `x` removed.
pub fn below_cut(graph: &MGraph, x: &str) -> Result<MGraph, MAdjustError> {
    cut(graph, x, Direction::Outgoing)
}

fn cut(graph: &MGraph, x: &str, dir: Direction) -> Result<MGraph, MAdjustError> {
    let idx = graph.index(x)?;
    let mut g = graph.clone();
    g.clear_edges(idx, dir);
    Ok(g)
}
