use super::{
    error::{GraphError, Result},
    Directed, EdgeKind, Graph, MutableGraph, NeighborSet, Undirected, Vertex, VertexIter,
};
use itertools::Itertools;
use log::trace;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

/// A graph stored as adjacency lists over dense vertex indices.
///
/// Vertex `vertices[i]` has index `i`; `neighbors[i]` holds the indices of
/// its out-neighbors (all neighbors if undirected). Vertices enumerate in
/// index order, which is insertion order until a removal moves the last
/// vertex into the vacated slot.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, K = Directed, C = HashSet<usize>> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    neighbors: Vec<C>,
    kind: PhantomData<K>,
}

pub type DirectedAdjacencyGraph<V, C = HashSet<usize>> = AdjacencyGraph<V, Directed, C>;

pub type UndirectedAdjacencyGraph<V, C = HashSet<usize>> = AdjacencyGraph<V, Undirected, C>;

/// Constructors for the default `HashSet<usize>` container. Other
/// containers start from [`AdjacencyGraph::with_neighbors`] and use the
/// `with_*` builders.
impl<V: Vertex, K: EdgeKind<V>> AdjacencyGraph<V, K> {
    pub fn new() -> Self {
        Self::with_neighbors()
    }

    /// Builds a graph from a flat `[u1, v1, u2, v2, ...]` list of edges.
    ///
    /// A trailing unpaired vertex is ignored.
    pub fn from_pairs<I: IntoIterator<Item = V>>(pairs: I) -> Self {
        Self::new().with_pairs(pairs)
    }

    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        Self::new().with_edges(edges)
    }

    /// Copies the vertices and edges of `graph`.
    pub fn from_graph<G: Graph<Vertex = V>>(graph: &G) -> Self {
        Self::new().with_graph(graph)
    }

    /// Copies the vertices and edges of every graph in `graphs`.
    pub fn from_graphs<'g, G, I>(graphs: I) -> Self
    where
        G: Graph<Vertex = V> + 'g,
        I: IntoIterator<Item = &'g G>,
    {
        graphs
            .into_iter()
            .fold(Self::new(), |g, graph| g.with_graph(graph))
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> AdjacencyGraph<V, K, C> {
    /// An empty graph storing neighbors in `C`.
    pub fn with_neighbors() -> Self {
        Self {
            vertices: vec![],
            index: HashMap::new(),
            neighbors: vec![],
            kind: PhantomData,
        }
    }

    /// Adds the edges of a flat `[u1, v1, u2, v2, ...]` list.
    pub fn with_pairs<I: IntoIterator<Item = V>>(self, pairs: I) -> Self {
        self.with_edges(pairs.into_iter().tuples())
    }

    pub fn with_edges<I: IntoIterator<Item = (V, V)>>(mut self, edges: I) -> Self {
        self.add_edges(edges);
        self
    }

    /// Adds the vertices and edges of `graph`.
    pub fn with_graph<G: Graph<Vertex = V>>(mut self, graph: &G) -> Self {
        self.merge(graph);
        self
    }

    fn position(&self, v: &V) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::no_vertex(v))
    }

    fn insert(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        trace!("adding vertex {:?}", v);
        let i = self.vertices.len();
        self.index.insert(v.clone(), i);
        self.vertices.push(v);
        self.neighbors.push(C::default());
        i
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> Default for AdjacencyGraph<V, K, C> {
    fn default() -> Self {
        Self::with_neighbors()
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> Graph for AdjacencyGraph<V, K, C> {
    type Vertex = V;
    type Kind = K;

    fn each_vertex(&self) -> VertexIter<'_, V> {
        Box::new(self.vertices.iter())
    }

    fn each_adjacent(&self, v: &V) -> Result<VertexIter<'_, V>> {
        let i = self.position(v)?;
        Ok(Box::new(
            self.neighbors[i].indices().map(move |j| &self.vertices[j]),
        ))
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&i), Some(&j)) => self.neighbors[i].has(j),
            _ => false,
        }
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn out_degree(&self, v: &V) -> Result<usize> {
        Ok(self.neighbors[self.position(v)?].count())
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> MutableGraph for AdjacencyGraph<V, K, C> {
    fn add_vertex(&mut self, v: V) {
        self.insert(v);
    }

    fn add_edge(&mut self, u: V, v: V) {
        trace!("adding edge ({:?}, {:?})", u, v);
        let i = self.insert(u);
        let j = self.insert(v);
        self.neighbors[i].add(j);
        if !self.is_directed() && i != j {
            self.neighbors[j].add(i);
        }
    }

    fn remove_vertex(&mut self, v: &V) -> Result<()> {
        let i = self
            .index
            .remove(v)
            .ok_or_else(|| GraphError::no_vertex(v))?;
        trace!("removing vertex {:?}", v);
        for neighbors in self.neighbors.iter_mut() {
            neighbors.delete(i);
        }
        let last = self.vertices.len() - 1;
        self.vertices.swap_remove(i);
        self.neighbors.swap_remove(i);
        if i != last {
            // The former last vertex now lives at `i`.
            for neighbors in self.neighbors.iter_mut() {
                neighbors.relabel(last, i);
            }
            if let Some(moved) = self.index.get_mut(&self.vertices[i]) {
                *moved = i;
            }
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<()> {
        let (i, j) = match (self.index.get(u), self.index.get(v)) {
            (Some(&i), Some(&j)) if self.neighbors[i].has(j) => (i, j),
            _ => return Err(GraphError::no_edge(u, v)),
        };
        trace!("removing edge ({:?}, {:?})", u, v);
        self.neighbors[i].delete(j);
        if !self.is_directed() {
            self.neighbors[j].delete(i);
        }
        Ok(())
    }
}

impl<V, K, C> fmt::Display for AdjacencyGraph<V, K, C>
where
    V: Vertex,
    K: EdgeKind<V>,
    K::Edge: fmt::Display,
    C: NeighborSet,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.edges_to_string())
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> PartialEq for AdjacencyGraph<V, K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.graph_eq(other)
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> Eq for AdjacencyGraph<V, K, C> {}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> FromIterator<(V, V)> for AdjacencyGraph<V, K, C> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        Self::with_neighbors().with_edges(iter)
    }
}

impl<V: Vertex, K: EdgeKind<V>, C: NeighborSet> Extend<(V, V)> for AdjacencyGraph<V, K, C> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}
