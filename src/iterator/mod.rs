//! Streams traversing a graph.

pub use graph_iterator::GraphIterator;
pub use topsort::TopsortIterator;

mod graph_iterator;
mod topsort;
