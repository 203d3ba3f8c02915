use matrix_sssp::{Cost, Graph, Selection, ShortestPathEngine, VertexId};
use proptest::prelude::*;

/// Graphs with up to 8 vertices and small integer weights, zero included.
fn graph_and_source() -> impl Strategy<Value = (Graph, VertexId)> {
    (1usize..=8).prop_flat_map(|n| {
        let edge = (1..=n, 1..=n, 0u32..20);
        (
            prop::collection::vec(edge, 0..(n * n)),
            1..=n,
        )
            .prop_map(move |(edges, source)| {
                let edges: Vec<(VertexId, VertexId, Cost)> = edges
                    .into_iter()
                    .map(|(from, to, w)| (from, to, w as Cost))
                    .collect();
                (Graph::from_edges(n, &edges).unwrap(), source)
            })
    })
}

/// Bellman-Ford relaxation, used as the reference distances.
fn reference_distances(graph: &Graph, source: VertexId) -> Vec<Cost> {
    let n = graph.vertex_count();
    let mut dist = vec![Cost::INFINITY; n];
    dist[source - 1] = 0.0;
    for _ in 0..n {
        for from in graph.vertices() {
            for (to, w) in graph.neighbors(from).unwrap() {
                if dist[from - 1] + w < dist[to - 1] {
                    dist[to - 1] = dist[from - 1] + w;
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn source_distance_is_zero((graph, source) in graph_and_source()) {
        let paths = ShortestPathEngine::new(&graph).run_from(source).unwrap();
        prop_assert_eq!(paths.distance(source).unwrap(), 0.0);
        prop_assert_eq!(paths.predecessor(source).unwrap(), None);
    }

    #[test]
    fn distances_are_minimal((graph, source) in graph_and_source()) {
        let paths = ShortestPathEngine::new(&graph).run_from(source).unwrap();
        let expected = reference_distances(&graph, source);
        prop_assert_eq!(paths.distances(), expected.as_slice());
    }

    /// Following predecessors reproduces a path whose weight is the distance.
    #[test]
    fn routes_match_distances((graph, source) in graph_and_source()) {
        let engine = ShortestPathEngine::new(&graph);
        let paths = engine.run_from(source).unwrap();
        for v in graph.vertices() {
            match engine.path_to(v, &paths).unwrap() {
                Some(path) => {
                    prop_assert_eq!(path[0], source);
                    prop_assert_eq!(*path.last().unwrap(), v);
                    prop_assert!(path.len() <= graph.vertex_count());
                    let mut total = 0.0;
                    for pair in path.windows(2) {
                        let w = graph.edge(pair[0], pair[1]).unwrap();
                        prop_assert!(w.is_some());
                        total += w.unwrap();
                    }
                    prop_assert_eq!(total, paths.distance(v).unwrap());
                    prop_assert!(paths.is_visited(v).unwrap());
                }
                None => {
                    prop_assert!(paths.distance(v).unwrap().is_infinite());
                    prop_assert!(!paths.is_visited(v).unwrap());
                }
            }
        }
    }

    #[test]
    fn scan_and_heap_agree((graph, source) in graph_and_source()) {
        let scan = ShortestPathEngine::with_selection(&graph, Selection::Scan).run_from(source).unwrap();
        let heap = ShortestPathEngine::with_selection(&graph, Selection::Heap).run_from(source).unwrap();
        prop_assert_eq!(scan, heap);
    }

    #[test]
    fn runs_are_idempotent((graph, source) in graph_and_source()) {
        let engine = ShortestPathEngine::new(&graph);
        prop_assert_eq!(engine.run_from(source).unwrap(), engine.run_from(source).unwrap());
    }
}
