use super::Vertex;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// An ordered pair of vertices.
///
/// Indexing an edge with `0` yields the source, any other index yields the
/// target.
pub trait Edge<V>: Clone + Eq + Hash + fmt::Debug + Index<usize, Output = V> {
    /// Whether edges of this type are directed.
    const DIRECTED: bool;

    fn new(source: V, target: V) -> Self;

    fn source(&self) -> &V;

    fn target(&self) -> &V;

    fn into_pair(self) -> (V, V);

    /// Returns a new edge with swapped endpoints.
    fn reverse(&self) -> Self
    where
        V: Clone,
    {
        Self::new(self.target().clone(), self.source().clone())
    }
}

/// An edge equal to another edge only if both endpoints match in order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge<V> {
    source: V,
    target: V,
}

/// An edge equal to another edge if the endpoints match in either order.
///
/// Hashing combines the endpoint hashes commutatively, so `(u, v)` and
/// `(v, u)` land in the same bucket.
#[derive(Debug, Clone)]
pub struct UndirectedEdge<V> {
    source: V,
    target: V,
}

impl<V: Vertex> Edge<V> for DirectedEdge<V> {
    const DIRECTED: bool = true;

    fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }

    fn into_pair(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V: Vertex> Edge<V> for UndirectedEdge<V> {
    const DIRECTED: bool = false;

    fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }

    fn into_pair(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V: PartialEq> PartialEq for UndirectedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

impl<V: Eq> Eq for UndirectedEdge<V> {}

impl<V: PartialEq> PartialEq<DirectedEdge<V>> for UndirectedEdge<V> {
    fn eq(&self, other: &DirectedEdge<V>) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

impl<V: PartialEq> PartialEq<UndirectedEdge<V>> for DirectedEdge<V> {
    fn eq(&self, other: &UndirectedEdge<V>) -> bool {
        other == self
    }
}

impl<V: Hash> Hash for UndirectedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let endpoint_hash = |v: &V| {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        };
        state.write_u64(endpoint_hash(&self.source).wrapping_add(endpoint_hash(&self.target)));
    }
}

// Orders by the normalised (smaller, larger) pair to stay consistent with `eq`.
impl<V: Ord> UndirectedEdge<V> {
    fn normalised(&self) -> (&V, &V) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}

impl<V: Ord> PartialOrd for UndirectedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for UndirectedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalised().cmp(&other.normalised())
    }
}

impl<V> Index<usize> for DirectedEdge<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        if index == 0 {
            &self.source
        } else {
            &self.target
        }
    }
}

impl<V> Index<usize> for UndirectedEdge<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        if index == 0 {
            &self.source
        } else {
            &self.target
        }
    }
}

impl<V: fmt::Display> fmt::Display for DirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{})", self.source, self.target)
    }
}

impl<V: fmt::Display> fmt::Display for UndirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}={})", self.source, self.target)
    }
}

impl<V> From<(V, V)> for DirectedEdge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self { source, target }
    }
}

impl<V> From<[V; 2]> for DirectedEdge<V> {
    fn from([source, target]: [V; 2]) -> Self {
        Self { source, target }
    }
}

impl<V> From<(V, V)> for UndirectedEdge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self { source, target }
    }
}

impl<V> From<[V; 2]> for UndirectedEdge<V> {
    fn from([source, target]: [V; 2]) -> Self {
        Self { source, target }
    }
}

/// Selects the edge type, and with it the directedness, of a graph.
pub trait EdgeKind<V>: fmt::Debug + Clone + Copy + Default {
    type Edge: Edge<V>;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl<V: Vertex> EdgeKind<V> for Directed {
    type Edge = DirectedEdge<V>;
}

impl<V: Vertex> EdgeKind<V> for Undirected {
    type Edge = UndirectedEdge<V>;
}
