use graphstream::{
    graph::{
        DirectedAdjacencyGraph, Graph, GraphError, MutableGraph, UndirectedAdjacencyGraph, Vertex,
    },
    iterator::{GraphIterator, TopsortIterator},
};

fn create_dag() -> DirectedAdjacencyGraph<i32> {
    DirectedAdjacencyGraph::from_pairs(vec![1, 2, 2, 3, 2, 4, 4, 5])
}

fn create_modules() -> DirectedAdjacencyGraph<&'static str> {
    DirectedAdjacencyGraph::from_edges(vec![
        ("jquery", "ui"),
        ("jquery", "widgets"),
        ("ui", "widgets"),
        ("widgets", "app"),
        ("polyfill", "app"),
    ])
}

fn assert_topological<V: Vertex>(g: &DirectedAdjacencyGraph<V>, order: &[V]) {
    assert_eq!(order.len(), g.num_vertices());
    let index = |v: &V| order.iter().position(|w| w == v).unwrap();
    for (u, v) in g.each_edge() {
        assert!(index(u) < index(v), "{:?} must precede {:?}", u, v);
    }
}

#[test]
fn test_topsort_dag() {
    let g = create_dag();
    let mut it = TopsortIterator::new(&g);
    assert_eq!(it.length(), 5);
    let order = g.topsort().unwrap();
    assert_topological(&g, &order);
    assert!(g.is_acyclic());
    assert_eq!(g.to_string(), "(1-2)(2-3)(2-4)(4-5)");
}

#[test]
fn test_topsort_cycle() {
    let g = DirectedAdjacencyGraph::from_pairs(vec![1, 2, 2, 1]);
    assert!(!g.is_acyclic());
    assert_eq!(g.topsort_iterator().length(), 0);
    assert_eq!(g.topsort(), Ok(vec![]));
    assert_eq!(g.cycles(), Ok(vec![vec![2, 1]]));
}

#[test]
fn test_build_order() {
    let mut g = create_modules();
    assert_topological(&g, &g.topsort().unwrap());
    g.add_edge("app", "jquery");
    assert!(!g.is_acyclic());
    let order = g.topsort().unwrap();
    assert_eq!(order, ["polyfill"]);
    let cycles = g.cycles().unwrap();
    assert_eq!(cycles.len(), 2);
    assert!(cycles.iter().all(|cycle| cycle.contains(&"app")));
}

#[test]
fn test_reverse_order() {
    let g = create_modules();
    let r = g.reverse();
    let mut order = r.topsort().unwrap();
    order.reverse();
    assert_topological(&g, &order);
}

#[test]
fn test_undirected_rejected() {
    let g = UndirectedAdjacencyGraph::from_pairs(vec![1, 2, 2, 3]);
    assert_eq!(g.topsort(), Err(GraphError::NotDirected));
    assert!(!g.is_acyclic());
    assert_eq!(g.connected_components().map(|c| c.len()), Ok(1));
}
