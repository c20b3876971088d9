use super::{
    error::{GraphError, Result},
    AdjacencyGraph, Edge, EdgeKind, MutableGraph, Undirected, UndirectedEdge,
};
use crate::iterator::{GraphIterator, TopsortIterator};
use crate::stream::Stream;
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Requirements on vertex values: equality, hashing and cheap duplication.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

pub type VertexIter<'a, V> = Box<dyn Iterator<Item = &'a V> + 'a>;

pub type EdgeIter<'a, V> = Box<dyn Iterator<Item = (&'a V, &'a V)> + 'a>;

/// The edge type of graph `G`.
pub type EdgeOf<G> = <<G as Graph>::Kind as EdgeKind<<G as Graph>::Vertex>>::Edge;

/// Read access to a finite graph.
///
/// Implementors supply `each_vertex` and `each_adjacent`; every other query
/// is derived from these two and only overridden for efficiency.
pub trait Graph {
    type Vertex: Vertex;

    /// [`Directed`](super::Directed) or [`Undirected`].
    type Kind: EdgeKind<Self::Vertex>;

    fn each_vertex(&self) -> VertexIter<'_, Self::Vertex>;

    /// The out-neighbors of `v`, or all neighbors for an undirected graph.
    fn each_adjacent(&self, v: &Self::Vertex) -> Result<VertexIter<'_, Self::Vertex>>;

    fn is_directed(&self) -> bool {
        <<Self::Kind as EdgeKind<Self::Vertex>>::Edge as Edge<Self::Vertex>>::DIRECTED
    }

    fn has_vertex(&self, v: &Self::Vertex) -> bool {
        self.each_vertex().any(|u| u == v)
    }

    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.each_adjacent(u)
            .map(|mut adjacent| adjacent.any(|w| w == v))
            .unwrap_or(false)
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    fn num_vertices(&self) -> usize {
        self.each_vertex().count()
    }

    fn vertices(&self) -> Vec<Self::Vertex> {
        self.each_vertex().cloned().collect()
    }

    fn adjacent_vertices(&self, v: &Self::Vertex) -> Result<Vec<Self::Vertex>> {
        Ok(self.each_adjacent(v)?.cloned().collect())
    }

    fn out_degree(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.each_adjacent(v)?.count())
    }

    /// Every edge as a `(source, target)` pair.
    ///
    /// Undirected edges are reported once: the pairs already seen are kept
    /// in a set keyed by [`UndirectedEdge`].
    fn each_edge(&self) -> EdgeIter<'_, Self::Vertex> {
        let pairs = self.each_vertex().flat_map(move |u| {
            self.each_adjacent(u)
                .into_iter()
                .flatten()
                .map(move |v| (u, v))
        });
        if self.is_directed() {
            Box::new(pairs)
        } else {
            let mut seen = HashSet::new();
            Box::new(pairs.filter(move |&(u, v)| seen.insert(UndirectedEdge::new(u, v))))
        }
    }

    fn edges(&self) -> Vec<EdgeOf<Self>>
    where
        Self: Sized,
    {
        self.each_edge()
            .map(|(u, v)| <EdgeOf<Self> as Edge<Self::Vertex>>::new(u.clone(), v.clone()))
            .collect()
    }

    fn num_edges(&self) -> usize {
        self.each_edge().count()
    }

    /// Same directedness, same vertex set and same edge set.
    fn graph_eq<G>(&self, other: &G) -> bool
    where
        Self: Sized,
        G: Graph<Vertex = Self::Vertex>,
    {
        self.is_directed() == other.is_directed()
            && self.num_vertices() == other.num_vertices()
            && self.each_vertex().all(|v| other.has_vertex(v))
            && self.num_edges() == other.num_edges()
            && self.each_edge().all(|(u, v)| other.has_edge(u, v))
    }

    /// The string forms of all edges, sorted and concatenated.
    fn edges_to_string(&self) -> String
    where
        Self: Sized,
        EdgeOf<Self>: Display,
    {
        self.edges().iter().map(ToString::to_string).sorted().join("")
    }

    /// Materializes the graph into an [`AdjacencyGraph`] of the same kind.
    fn to_adjacency(&self) -> AdjacencyGraph<Self::Vertex, Self::Kind>
    where
        Self: Sized,
    {
        AdjacencyGraph::from_graph(self)
    }

    /// A copy with every edge flipped; a plain copy for undirected graphs.
    fn reverse(&self) -> AdjacencyGraph<Self::Vertex, Self::Kind>
    where
        Self: Sized,
    {
        if !self.is_directed() {
            return self.to_adjacency();
        }
        debug!("reversing {} edges", self.num_edges());
        let mut g = AdjacencyGraph::new();
        g.add_vertices(self.each_vertex().cloned());
        g.add_edges(self.each_edge().map(|(u, v)| (v.clone(), u.clone())));
        g
    }

    /// An undirected copy of the graph.
    fn to_undirected(&self) -> AdjacencyGraph<Self::Vertex, Undirected>
    where
        Self: Sized,
    {
        let mut g = AdjacencyGraph::new();
        g.add_vertices(self.each_vertex().cloned());
        g.add_edges(self.each_edge().map(|(u, v)| (u.clone(), v.clone())));
        g
    }

    /// The vertex sets of the connected components of an undirected graph,
    /// in vertex enumeration order.
    fn connected_components(&self) -> Result<Vec<Vec<Self::Vertex>>> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }
        let mut visited: HashSet<&Self::Vertex> = HashSet::new();
        let mut components = vec![];
        for root in self.each_vertex() {
            if !visited.insert(root) {
                continue;
            }
            let mut component = vec![];
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                component.push(u.clone());
                for v in self.each_adjacent(u)? {
                    if visited.insert(v) {
                        stack.push(v);
                    }
                }
            }
            components.push(component);
        }
        Ok(components)
    }

    fn topsort_iterator(&self) -> TopsortIterator<'_, Self>
    where
        Self: Sized,
    {
        TopsortIterator::new(self)
    }

    /// True iff a topological traversal reaches every vertex.
    fn is_acyclic(&self) -> bool
    where
        Self: Sized,
    {
        self.topsort_iterator().length() == self.num_vertices()
    }

    /// A topological order of a directed graph.
    ///
    /// Vertices on or behind a cycle are missing from the result.
    fn topsort(&self) -> Result<Vec<Self::Vertex>>
    where
        Self: Sized,
    {
        if !self.is_directed() {
            return Err(GraphError::NotDirected);
        }
        Ok(self.topsort_iterator().to_vec().into_iter().cloned().collect())
    }
}
