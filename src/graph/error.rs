//! Error management.

use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[display(fmt = "no such vertex: {}", _0)]
    NoVertex(String),
    #[display(fmt = "no such edge: ({}, {})", _0, _1)]
    NoEdge(String, String),
    #[display(fmt = "graph is not directed")]
    NotDirected,
    #[display(fmt = "graph is not undirected")]
    NotUndirected,
}

impl GraphError {
    pub(crate) fn no_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::NoVertex(format!("{:?}", v))
    }

    pub(crate) fn no_edge<V: std::fmt::Debug>(u: &V, v: &V) -> Self {
        GraphError::NoEdge(format!("{:?}", u), format!("{:?}", v))
    }
}

impl std::error::Error for GraphError {}

pub type Result<T> = std::result::Result<T, GraphError>;
