use super::{
    error::{GraphError, Result},
    Graph,
};
use log::{info, trace};

/// A graph whose vertices and edges can be added and removed.
pub trait MutableGraph: Graph {
    /// Adds `v`; a no-op if it is already present.
    fn add_vertex(&mut self, v: Self::Vertex);

    /// Adds the edge `(u, v)`, adding missing endpoints first.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex);

    /// Removes `v` together with every edge referencing it.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<()>;

    /// Removes the edge `(u, v)`, including all parallel occurrences.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> Result<()>;

    fn add_vertices<I>(&mut self, vertices: I)
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Vertex>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    fn add_edges<I>(&mut self, edges: I)
    where
        Self: Sized,
        I: IntoIterator<Item = (Self::Vertex, Self::Vertex)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Removes every vertex in `vertices`.
    ///
    /// Nothing is removed unless all of them are present.
    fn remove_vertices<'v, I>(&mut self, vertices: I) -> Result<()>
    where
        Self: Sized,
        Self::Vertex: 'v,
        I: IntoIterator<Item = &'v Self::Vertex>,
    {
        let vertices: Vec<_> = vertices.into_iter().collect();
        if let Some(v) = vertices.iter().find(|v| !self.has_vertex(v)) {
            return Err(GraphError::no_vertex(*v));
        }
        for v in vertices {
            if self.has_vertex(v) {
                self.remove_vertex(v)?;
            }
        }
        Ok(())
    }

    /// Copies the vertices and edges of `other` into `self`.
    fn merge<G>(&mut self, other: &G)
    where
        Self: Sized,
        G: Graph<Vertex = Self::Vertex>,
    {
        trace!("merging {} vertices", other.num_vertices());
        self.add_vertices(other.each_vertex().cloned());
        self.add_edges(other.each_edge().map(|(u, v)| (u.clone(), v.clone())));
    }

    /// Every simple cycle through `v`.
    ///
    /// A cycle is the sequence of vertices visited after leaving `v`, ending
    /// with `v` itself: the cycle `1 -> 2 -> 1` is reported from `1` as
    /// `[2, 1]`.
    fn cycles_with_vertex(&self, v: &Self::Vertex) -> Result<Vec<Vec<Self::Vertex>>> {
        if !self.has_vertex(v) {
            return Err(GraphError::no_vertex(v));
        }
        let mut cycles = vec![];
        collect_cycles(self, v, v, &mut vec![], &mut cycles)?;
        Ok(cycles)
    }

    /// Every simple cycle of the graph, each reported once.
    ///
    /// Works on a copy: once the cycles through a vertex are collected, the
    /// vertex is deleted from the copy. Brute force, O(V^4) on dense graphs.
    fn cycles(&self) -> Result<Vec<Vec<Self::Vertex>>>
    where
        Self: Sized + Clone,
    {
        let mut working = self.clone();
        let mut cycles = vec![];
        for v in self.each_vertex() {
            cycles.extend(working.cycles_with_vertex(v)?);
            working.remove_vertex(v)?;
        }
        info!(
            "found {} cycles among {} vertices",
            cycles.len(),
            self.num_vertices()
        );
        Ok(cycles)
    }
}

fn collect_cycles<'g, G>(
    graph: &'g G,
    start: &G::Vertex,
    u: &G::Vertex,
    path: &mut Vec<&'g G::Vertex>,
    cycles: &mut Vec<Vec<G::Vertex>>,
) -> Result<()>
where
    G: Graph + ?Sized,
{
    for w in graph.each_adjacent(u)? {
        if w == start {
            let mut cycle: Vec<_> = path.iter().map(|&x| x.clone()).collect();
            cycle.push(start.clone());
            cycles.push(cycle);
        } else if !path.contains(&w) {
            path.push(w);
            collect_cycles(graph, start, w, path, cycles)?;
            path.pop();
        }
    }
    Ok(())
}
