//! Directed and undirected graphs.

pub use adjacency::{AdjacencyGraph, DirectedAdjacencyGraph, UndirectedAdjacencyGraph};
pub use edge::{Directed, DirectedEdge, Edge, EdgeKind, Undirected, UndirectedEdge};
pub use error::GraphError;
pub use graph::{EdgeIter, EdgeOf, Graph, Vertex, VertexIter};
pub use mutable::MutableGraph;
pub use neighbors::NeighborSet;

pub mod error;

mod adjacency;
mod edge;
mod graph;
mod mutable;
mod neighbors;
