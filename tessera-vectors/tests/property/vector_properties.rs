//! Property tests for selection set algebra and expansion.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use proptest::prelude::*;
use tessera_core::traits::IGraphView;
use tessera_core::{EntityRef, Properties, TesseraConfig, Window};
use tessera_embeddings::EmbeddingFn;
use tessera_graph::TemporalGraph;
use tessera_vectors::{DefaultTemplate, VectorisedGraph};

type Edges = Vec<(usize, usize, i64)>;

fn embed(text: &str) -> Vec<f32> {
    let h = text
        .bytes()
        .fold(17u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    vec![1.0 + (h % 7) as f32, (h / 7 % 5) as f32, (h / 35 % 3) as f32]
}

fn build(n: usize, edges: &Edges) -> (Arc<TemporalGraph>, VectorisedGraph) {
    let mut graph = TemporalGraph::new();
    for i in 0..n {
        graph.add_node(i as i64, &format!("n{i}"), Properties::new());
    }
    for &(src, dst, t) in edges {
        graph.add_edge(t, &format!("n{src}"), &format!("n{dst}"), Properties::new());
    }
    let graph = Arc::new(graph);
    let provider = EmbeddingFn::new(|texts: &[String]| Ok(texts.iter().map(|t| embed(t)).collect()));
    let template = DefaultTemplate::new()
        .with_node_template("{{ name }}")
        .with_edge_template("{{ name }}");
    let vg = VectorisedGraph::vectorise(
        Arc::clone(&graph),
        Arc::new(provider),
        &template,
        &TesseraConfig::default(),
    )
    .unwrap();
    (graph, vg)
}

fn reachable(graph: &TemporalGraph, start: &EntityRef) -> HashSet<EntityRef> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(entity) = queue.pop_front() {
        for neighbor in graph.neighbors(&entity).unwrap() {
            if seen.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }
    seen
}

fn graph_strategy() -> impl Strategy<Value = (usize, Edges)> {
    (2usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0i64..20), 0..16),
        )
    })
}

proptest! {
    #[test]
    fn adding_nodes_twice_changes_nothing(
        (n, edges) in graph_strategy(),
        picks in prop::collection::vec(0usize..8, 0..10),
    ) {
        let (_, vg) = build(n, &edges);
        let names: Vec<String> = picks.iter().map(|i| format!("n{}", i % n)).collect();

        let mut once = vg.empty_selection();
        once.add_nodes(&names).unwrap();
        let mut twice = once.clone();
        twice.add_nodes(&names).unwrap();

        prop_assert_eq!(once.items(), twice.items());
        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(once.len(), unique.len());
    }

    #[test]
    fn append_keeps_first_occurrence(
        (n, edges) in graph_strategy(),
        left in prop::collection::vec(0usize..8, 0..6),
        right in prop::collection::vec(0usize..8, 0..6),
    ) {
        let (_, vg) = build(n, &edges);
        let names = |picks: &[usize]| -> Vec<String> {
            picks.iter().map(|i| format!("n{}", i % n)).collect()
        };

        let mut a = vg.empty_selection();
        a.add_nodes(names(&left[..])).unwrap();
        let mut b = vg.empty_selection();
        b.add_nodes(names(&right[..])).unwrap();

        let prefix = a.nodes();
        a.append(&b);
        let joined = a.nodes();

        prop_assert_eq!(&joined[..prefix.len()], &prefix[..]);
        let unique: HashSet<&String> = joined.iter().collect();
        prop_assert_eq!(unique.len(), joined.len());
        for name in b.nodes() {
            prop_assert!(joined.contains(&name));
        }
    }

    #[test]
    fn unlimited_expansion_covers_exactly_the_reachable_set(
        (n, edges) in graph_strategy(),
        start in 0usize..8,
    ) {
        let (graph, vg) = build(n, &edges);
        let start = EntityRef::node(format!("n{}", start % n));

        let mut selection = vg.empty_selection();
        selection.add_nodes([start.as_node().unwrap()]).unwrap();
        selection.expand_entities_by_similarity("n0", usize::MAX, None).unwrap();

        let selected: HashSet<EntityRef> = selection.entities().cloned().collect();
        prop_assert_eq!(selected, reachable(&graph, &start));
    }

    #[test]
    fn empty_selections_stay_empty(
        (n, edges) in graph_strategy(),
        limit in 0usize..20,
    ) {
        let (_, vg) = build(n, &edges);
        let mut selection = vg.empty_selection();
        selection.expand_entities_by_similarity("n1", limit, None).unwrap();
        selection.expand_documents_by_similarity("n1", limit, None).unwrap();
        selection.expand(limit, None).unwrap();
        prop_assert!(selection.is_empty());
    }

    #[test]
    fn narrower_windows_never_add_more(
        (n, edges) in graph_strategy(),
        start in 0usize..8,
        (lo, hi) in (0i64..20, 0i64..20).prop_map(|(a, b)| (a.min(b), a.max(b))),
        margin in 0i64..10,
        limit in 1usize..12,
    ) {
        let (_, vg) = build(n, &edges);
        let narrow = Window::new(lo, hi).unwrap();
        let wide = Window::new(lo - margin, hi + margin).unwrap();

        let mut seed = vg.empty_selection();
        seed.add_nodes([format!("n{}", start % n)]).unwrap();

        let grow = |window: Option<Window>| -> (usize, usize) {
            let mut guided = seed.clone();
            guided.expand_entities_by_similarity("n2", limit, window).unwrap();
            let mut breadth = seed.clone();
            breadth.expand(limit, window).unwrap();
            (guided.len(), breadth.len())
        };

        let (narrow_guided, narrow_breadth) = grow(Some(narrow));
        let (wide_guided, wide_breadth) = grow(Some(wide));
        let (open_guided, open_breadth) = grow(None);

        prop_assert!(narrow_guided <= wide_guided);
        prop_assert!(wide_guided <= open_guided);
        prop_assert!(narrow_breadth <= wide_breadth);
        prop_assert!(wide_breadth <= open_breadth);
    }
}
