//! Errors
//!
//! Custom error types used throughout the `madjust` crate.
use thiserror::Error;

/// Errors that can occur while building m-graphs or searching for adjustment sets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MAdjustError {
    /// A vertex name was referenced that the graph does not contain.
    #[error("Vertex '{0}' not found in the graph.")]
    NodeNotFound(String),
    /// A vertex with this name was already added.
    #[error("Vertex '{0}' already exists in the graph.")]
    DuplicateNode(String),
    /// Adding the edge would close a directed cycle.
    #[error("Adding edge {from} -> {to} would create a cycle.")]
    CycleDetected { from: String, to: String },
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write an object to json or to a file.
    #[error("Unable to write object: {0}")]
    UnableToWrite(String),
    /// Unable to read an object from json or from a file.
    #[error("Unable to read object: {0}")]
    UnableToRead(String),
}
