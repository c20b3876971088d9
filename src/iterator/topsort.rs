use super::GraphIterator;
use crate::graph::Graph;
use crate::stream::{
    error::{Result, StreamError},
    Stream, Unwrapped,
};
use log::debug;
use std::collections::HashMap;

/// Kahn's topological sort as a forward-only stream.
///
/// Vertices whose remaining in-degree is zero wait on a LIFO work-list.
/// Emitting a vertex decrements the in-degree of its out-neighbors. On a
/// cyclic graph the vertices on a cycle, and those reachable only through
/// one, are never emitted.
pub struct TopsortIterator<'g, G: Graph> {
    graph: &'g G,
    waiting: Vec<&'g G::Vertex>,
    in_degrees: HashMap<&'g G::Vertex, usize>,
}

impl<'g, G: Graph> TopsortIterator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        let mut it = Self {
            graph,
            waiting: vec![],
            in_degrees: HashMap::new(),
        };
        it.set_to_begin();
        it
    }
}

impl<'g, G: Graph> Stream for TopsortIterator<'g, G> {
    type Item = &'g G::Vertex;

    fn at_beginning(&mut self) -> bool {
        true
    }

    fn at_end(&mut self) -> bool {
        self.waiting.is_empty()
    }

    fn basic_forward(&mut self) -> Result<Self::Item> {
        let graph = self.graph;
        let u = self.waiting.pop().ok_or(StreamError::EndOfStream)?;
        for v in graph.each_adjacent(u).into_iter().flatten() {
            if let Some(in_degree) = self.in_degrees.get_mut(v) {
                *in_degree -= 1;
                if *in_degree == 0 {
                    self.waiting.push(v);
                }
            }
        }
        Ok(u)
    }

    fn basic_backward(&mut self) -> Result<Self::Item> {
        Err(StreamError::EndOfStream)
    }

    fn peek(&mut self) -> Result<Self::Item> {
        self.waiting.last().copied().ok_or(StreamError::EndOfStream)
    }

    /// The last vertex of a full traversal; the iterator is left at the end.
    fn last(&mut self) -> Option<Self::Item> {
        self.set_to_begin();
        let mut last = None;
        while let Ok(v) = self.forward() {
            last = Some(v);
        }
        last
    }

    fn set_to_begin(&mut self) {
        let graph = self.graph;
        let mut in_degrees: HashMap<_, _> = graph.each_vertex().map(|v| (v, 0)).collect();
        for u in graph.each_vertex() {
            for v in graph.each_adjacent(u).into_iter().flatten() {
                *in_degrees.entry(v).or_insert(0) += 1;
            }
        }
        let waiting: Vec<_> = graph
            .each_vertex()
            .filter(|v| in_degrees.get(v) == Some(&0))
            .collect();
        debug!(
            "topsort: {} of {} vertices ready",
            waiting.len(),
            in_degrees.len()
        );
        self.in_degrees = in_degrees;
        self.waiting = waiting;
    }
}

impl<'g, G: Graph> GraphIterator for TopsortIterator<'g, G> {
    type G = G;

    fn graph(&self) -> &G {
        self.graph
    }
}

impl<'g, G: Graph> Unwrapped for TopsortIterator<'g, G> {
    type Base = Self;

    fn unwrapped(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedAdjacencyGraph, MutableGraph};

    fn create_dag() -> DirectedAdjacencyGraph<i32> {
        DirectedAdjacencyGraph::from_pairs(vec![1, 2, 2, 3, 2, 4, 4, 5])
    }

    fn assert_respects_edges(g: &DirectedAdjacencyGraph<i32>, order: &[&i32]) {
        for (u, v) in g.each_edge() {
            let index = |w: &i32| order.iter().position(|&x| x == w).unwrap();
            assert!(index(u) < index(v), "{} must precede {}", u, v);
        }
    }

    #[test]
    fn test_acyclic() {
        let g = create_dag();
        let order = TopsortIterator::new(&g).to_vec();
        assert_eq!(order.len(), 5);
        assert_respects_edges(&g, &order);
        assert!(g.is_acyclic());
    }

    #[test]
    fn test_two_cycle() {
        let g = DirectedAdjacencyGraph::from_pairs(vec![1, 2, 2, 1]);
        let mut it = TopsortIterator::new(&g);
        assert!(it.at_end());
        assert_eq!(it.length(), 0);
        assert!(!g.is_acyclic());
    }

    #[test]
    fn test_behind_cycle() {
        let mut g = DirectedAdjacencyGraph::from_pairs(vec![0, 1, 1, 2, 2, 1, 2, 3]);
        assert_eq!(TopsortIterator::new(&g).to_vec(), [&0]);
        g.remove_edge(&2, &1).unwrap();
        assert!(g.is_acyclic());
    }

    #[test]
    fn test_forward_only() {
        let g = create_dag();
        let mut it = g.topsort_iterator();
        assert!(it.at_beginning());
        assert_eq!(it.forward(), Ok(&1));
        assert!(it.at_beginning());
        assert_eq!(it.backward(), Err(StreamError::EndOfStream));
        assert_eq!(it.forward(), Ok(&2));
    }

    #[test]
    fn test_peek_keeps_vertex() {
        let g = DirectedAdjacencyGraph::from_pairs(vec![1, 2, 2, 3]);
        let mut it = g.topsort_iterator();
        assert_eq!(it.peek(), Ok(&1));
        assert_eq!(it.peek(), Ok(&1));
        assert_eq!(it.forward(), Ok(&1));
        assert_eq!(it.peek(), it.forward());
        it.set_to_begin();
        it.peek().unwrap();
        assert_eq!(it.to_vec(), [&1, &2, &3]);
        assert_eq!(it.peek(), Err(StreamError::EndOfStream));
    }

    #[test]
    fn test_last() {
        let g = create_dag();
        let mut it = g.topsort_iterator();
        let order = g.topsort_iterator().to_vec();
        assert_eq!(it.last(), order.last().copied());
        assert!(it.at_end());
        assert_eq!(DirectedAdjacencyGraph::<i32>::new().topsort_iterator().last(), None);
    }

    #[test]
    fn test_reversed_forward_only_is_empty() {
        let g = create_dag();
        let mut r = g.topsort_iterator().reversed();
        assert!(r.at_beginning());
        assert_eq!(r.forward(), Err(StreamError::EndOfStream));
        assert!(r.to_vec().is_empty());
    }

    #[test]
    fn test_restart() {
        let g = create_dag();
        let mut it = g.topsort_iterator();
        let first = it.to_vec();
        assert_eq!(it.to_vec(), first);
        assert_eq!(it.unwrapped().graph().num_vertices(), 5);
    }

    #[test]
    fn test_empty_and_isolated() {
        let g = DirectedAdjacencyGraph::<i32>::new();
        assert!(TopsortIterator::new(&g).is_empty());
        assert!(g.is_acyclic());
        let mut g = DirectedAdjacencyGraph::new();
        g.add_vertices(vec![3, 1, 2]);
        assert_eq!(TopsortIterator::new(&g).length(), 3);
    }
}
