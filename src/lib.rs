//! Adjacency-list graphs, bidirectional external streams and topological
//! sort.

pub mod graph;
pub mod iterator;
pub mod stream;
