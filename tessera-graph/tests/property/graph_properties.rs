//! Property tests for tessera-graph adjacency and window queries.

use proptest::prelude::*;

use tessera_core::traits::IGraphView;
use tessera_core::{EntityRef, Properties, Window};
use tessera_graph::TemporalGraph;

fn build_random_graph(n: usize, edges: &[(usize, usize, i64)]) -> TemporalGraph {
    let mut graph = TemporalGraph::new();
    for i in 0..n {
        graph.add_node(0_i64, &format!("n{i}"), Properties::new());
    }
    for &(src, dst, t) in edges {
        graph.add_edge(t, &format!("n{src}"), &format!("n{dst}"), Properties::new());
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((0..n, 0..n, 0_i64..50), 0..n * 3)
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(edges in edge_strategy(12)) {
        let graph = build_random_graph(12, &edges);
        for node in graph.nodes() {
            for edge in graph.neighbors(&node).unwrap() {
                prop_assert!(edge.is_edge());
                prop_assert!(graph.neighbors(&edge).unwrap().contains(&node));
            }
        }
        for edge in graph.edges() {
            for node in graph.neighbors(&edge).unwrap() {
                prop_assert!(node.is_node());
                prop_assert!(graph.neighbors(&node).unwrap().contains(&edge));
            }
        }
    }

    #[test]
    fn neighbors_have_no_duplicates(edges in edge_strategy(10)) {
        let graph = build_random_graph(10, &edges);
        for entity in graph.nodes().into_iter().chain(graph.edges()) {
            let neighbors = graph.neighbors(&entity).unwrap();
            let mut deduped = neighbors.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(neighbors.len(), deduped.len());
        }
    }

    #[test]
    fn active_edges_imply_active_endpoints(
        edges in edge_strategy(10),
        start in 0_i64..50,
        len in 0_i64..20,
    ) {
        let graph = build_random_graph(10, &edges);
        let window = Window::new(start, start + len).unwrap();
        for edge in graph.edges() {
            if graph.exists_in_window(&edge, &window).unwrap() {
                if let EntityRef::Edge(src, dst) = &edge {
                    prop_assert!(graph.exists_in_window(&EntityRef::node(src.as_str()), &window).unwrap());
                    prop_assert!(graph.exists_in_window(&EntityRef::node(dst.as_str()), &window).unwrap());
                }
            }
        }
    }
}
