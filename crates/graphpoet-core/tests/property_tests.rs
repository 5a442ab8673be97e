//! Property-based tests using proptest

use graphpoet_core::{
    EdgeGraph, GraphPoet, GraphSnapshot, Representation, VertexGraph, WeightedDigraph,
    decode_snapshot, encode_snapshot,
};
use proptest::prelude::*;

/// One mutation from the graph contract, over a small label alphabet so that
/// collisions (overwrites, removals of connected vertices) are common.
#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Set(u8, u8, u32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(Op::Add),
        (0u8..6, 0u8..6, 0u32..4).prop_map(|(s, t, w)| Op::Set(s, t, w)),
        (0u8..6).prop_map(Op::Remove),
    ]
}

/// Apply `op` and return the observable result as a number.
fn apply<G: WeightedDigraph<u8> + ?Sized>(graph: &mut G, op: &Op) -> u32 {
    match *op {
        Op::Add(v) => u32::from(graph.add_vertex(v)),
        Op::Set(s, t, w) => graph.set_edge(s, t, w),
        Op::Remove(v) => u32::from(graph.remove_vertex(&v)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn representations_are_observably_identical(ops in prop::collection::vec(op(), 0..60)) {
        let mut edges = EdgeGraph::<u8>::new();
        let mut vertices = VertexGraph::<u8>::new();

        for op in &ops {
            prop_assert_eq!(apply(&mut edges, op), apply(&mut vertices, op), "{:?}", op);
        }

        prop_assert_eq!(edges.vertices(), vertices.vertices());
        for v in 0u8..6 {
            prop_assert_eq!(edges.in_neighbors(&v), vertices.in_neighbors(&v));
            prop_assert_eq!(edges.out_neighbors(&v), vertices.out_neighbors(&v));
        }
        prop_assert_eq!(edges.to_string(), vertices.to_string());
    }

    #[test]
    fn rep_invariant_holds_after_any_sequence(ops in prop::collection::vec(op(), 0..60)) {
        for representation in [Representation::Edges, Representation::Vertices] {
            let mut graph = representation.empty::<u8>();
            for op in &ops {
                apply(&mut graph, op);
                prop_assert!(graph.check_rep().is_ok());
            }

            for (s, t, w) in graph.edges() {
                prop_assert!(w > 0);
                prop_assert!(graph.contains_vertex(&s) && graph.contains_vertex(&t));
                prop_assert_eq!(graph.in_neighbors(&t).get(&s).copied(), Some(w));
            }
        }
    }

    #[test]
    fn set_edge_is_reflected_from_both_ends(s in 0u8..6, t in 0u8..6, w in 1u32..1000) {
        let mut graph = VertexGraph::<u8>::new();
        graph.set_edge(s, t, w);

        prop_assert_eq!(graph.out_neighbors(&s).get(&t).copied(), Some(w));
        prop_assert_eq!(graph.in_neighbors(&t).get(&s).copied(), Some(w));

        prop_assert_eq!(graph.set_edge(s, t, 0), w);
        prop_assert!(!graph.out_neighbors(&s).contains_key(&t));
        prop_assert!(!graph.in_neighbors(&t).contains_key(&s));
    }

    #[test]
    fn snapshot_preserves_observable_state(ops in prop::collection::vec(op(), 0..40)) {
        let mut graph = EdgeGraph::<u8>::new();
        for op in &ops {
            apply(&mut graph, op);
        }

        let bytes = encode_snapshot(&GraphSnapshot::capture(&graph));
        prop_assert!(bytes.is_ok());
        let bytes = bytes.unwrap_or_default();
        let snapshot = decode_snapshot::<u8>(&bytes);
        prop_assert!(snapshot.is_ok());

        let mut restored = VertexGraph::<u8>::new();
        if let Ok(snapshot) = snapshot {
            prop_assert!(snapshot.restore_into(&mut restored).is_ok());
        }
        prop_assert_eq!(restored.vertices(), graph.vertices());
        prop_assert_eq!(restored.edges(), graph.edges());
    }

    #[test]
    fn poem_never_drops_input_words(
        corpus in prop::collection::vec("[a-c]{1,2}", 0..30),
        input in prop::collection::vec("[a-c]{1,2}", 1..8),
    ) {
        let poet = GraphPoet::from_tokens(&corpus, Representation::Vertices);
        let poem = poet.compose(&input.join(" "));

        let words: Vec<&str> = poem.text.split(' ').collect();
        prop_assert_eq!(words.len(), input.len() + poem.insertions.len());

        for insertion in &poem.insertions {
            let first = poet.graph().edge_weight(&insertion.before, &insertion.bridge.word);
            let second = poet.graph().edge_weight(&insertion.bridge.word, &insertion.after);
            prop_assert!(first > 0 && second > 0);
            prop_assert_eq!(u64::from(first) + u64::from(second), insertion.bridge.weight);
        }
    }
}
