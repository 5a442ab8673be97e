//! Behaviour every [`WeightedDigraph`] must exhibit.
//!
//! Each check is generic over the representation; `conformance_suite!`
//! instantiates the whole set once per concrete type.

use super::{EdgeGraph, VertexGraph, WeightedDigraph};
use std::collections::{BTreeMap, BTreeSet};

fn s(label: &str) -> String {
    label.to_string()
}

fn initial_vertices_empty<G: WeightedDigraph<String> + Default>() {
    let graph = G::default();
    assert!(graph.vertices().is_empty());
}

fn add_vertex_reports_novelty<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();

    assert!(graph.add_vertex(s("A")));
    assert!(!graph.add_vertex(s("A")));
    assert_eq!(graph.vertices(), BTreeSet::from([s("A")]));
}

fn zero_weight_on_missing_edge_changes_nothing<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.add_vertex(s("California"));

    assert_eq!(graph.set_edge(s("California"), s("New York"), 0), 0);
    assert_eq!(graph.vertices(), BTreeSet::from([s("California")]));
    assert!(graph.out_neighbors(&s("California")).is_empty());
}

fn positive_weight_adds_missing_endpoints<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.add_vertex(s("New York"));

    assert_eq!(graph.set_edge(s("California"), s("New York"), 43), 0);
    assert_eq!(
        graph.vertices(),
        BTreeSet::from([s("California"), s("New York")])
    );
    assert_eq!(
        graph.out_neighbors(&s("California")),
        BTreeMap::from([(s("New York"), 43)])
    );
    assert_eq!(
        graph.in_neighbors(&s("New York")),
        BTreeMap::from([(s("California"), 43)])
    );
}

fn overwrite_returns_previous_weight<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("a"), s("b"), 5);

    assert_eq!(graph.set_edge(s("a"), s("b"), 9), 5);
    assert_eq!(graph.edge_weight(&s("a"), &s("b")), 9);
    assert_eq!(graph.edge_count(), 1);
}

fn repeated_set_is_idempotent<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    assert_eq!(graph.set_edge(s("a"), s("b"), 3), 0);
    let once = (graph.vertices(), graph.edges());

    assert_eq!(graph.set_edge(s("a"), s("b"), 3), 3);
    assert_eq!((graph.vertices(), graph.edges()), once);
}

fn zero_weight_removes_edge_but_keeps_vertices<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("a"), s("b"), 7);

    assert_eq!(graph.set_edge(s("a"), s("b"), 0), 7);
    assert!(!graph.out_neighbors(&s("a")).contains_key(&s("b")));
    assert!(!graph.in_neighbors(&s("b")).contains_key(&s("a")));
    assert_eq!(graph.vertices(), BTreeSet::from([s("a"), s("b")]));
    assert_eq!(graph.set_edge(s("a"), s("b"), 0), 0);
}

fn edges_are_directed<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("a"), s("b"), 2);
    graph.set_edge(s("b"), s("a"), 6);

    assert_eq!(graph.edge_weight(&s("a"), &s("b")), 2);
    assert_eq!(graph.edge_weight(&s("b"), &s("a")), 6);
    assert_eq!(graph.set_edge(s("a"), s("b"), 0), 2);
    assert_eq!(graph.edge_weight(&s("b"), &s("a")), 6);
}

fn remove_vertex_reports_presence<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    assert!(!graph.remove_vertex(&s("A")));

    graph.add_vertex(s("A"));
    assert!(graph.remove_vertex(&s("A")));
    assert!(graph.vertices().is_empty());
    assert!(graph.add_vertex(s("A")));
}

fn remove_vertex_purges_incident_edges<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("a"), s("v"), 1);
    graph.set_edge(s("v"), s("b"), 2);
    graph.set_edge(s("v"), s("v"), 3);
    graph.set_edge(s("a"), s("b"), 4);

    assert!(graph.remove_vertex(&s("v")));

    assert!(!graph.vertices().contains(&s("v")));
    for u in graph.vertices() {
        assert!(!graph.out_neighbors(&u).contains_key(&s("v")));
        assert!(!graph.in_neighbors(&u).contains_key(&s("v")));
    }
    assert_eq!(graph.edges(), vec![(s("a"), s("b"), 4)]);
    assert!(graph.check_rep().is_ok());
}

fn accessors_return_copies<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("a"), s("b"), 1);

    let mut vertices = graph.vertices();
    vertices.insert(s("intruder"));
    let mut targets = graph.out_neighbors(&s("a"));
    targets.insert(s("intruder"), 99);

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.out_neighbors(&s("a")), BTreeMap::from([(s("b"), 1)]));
}

fn absent_labels_have_no_neighbours<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("a"), s("b"), 1);

    assert!(graph.in_neighbors(&s("missing")).is_empty());
    assert!(graph.out_neighbors(&s("missing")).is_empty());
    assert!(graph.in_neighbors(&s("a")).is_empty());
    assert!(graph.out_neighbors(&s("b")).is_empty());
}

fn neighbour_maps_collect_every_edge<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("California"), s("Delhi"), 2000);
    graph.set_edge(s("New York"), s("California"), 48);
    graph.set_edge(s("London"), s("New York"), 379);
    graph.set_edge(s("Berlin"), s("California"), 12);

    assert_eq!(
        graph.in_neighbors(&s("California")),
        BTreeMap::from([(s("Berlin"), 12), (s("New York"), 48)])
    );
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.check_rep().is_ok());
}

fn renders_edges_then_isolated_vertices<G: WeightedDigraph<String> + Default>() {
    let mut graph = G::default();
    graph.set_edge(s("California"), s("Delhi"), 2000);
    graph.set_edge(s("Berlin"), s("London"), 248);
    graph.add_vertex(s("Hong Kong"));

    assert_eq!(
        crate::formats::render_graph(&graph),
        "Berlin-----(248)----->London\nCalifornia-----(2000)----->Delhi\nHong Kong"
    );
}

fn supports_integer_labels<G: WeightedDigraph<u32> + Default>() {
    let mut graph = G::default();
    graph.set_edge(23, 35, 67);

    assert_eq!(crate::formats::render_graph(&graph), "23-----(67)----->35");
}

fn supports_char_labels<G: WeightedDigraph<char> + Default>() {
    let mut graph = G::default();
    graph.set_edge('A', 'B', 67);

    assert_eq!(crate::formats::render_graph(&graph), "A-----(67)----->B");
}

macro_rules! conformance_suite {
    ($($module:ident => $graph:ident),* $(,)?) => {
        $(
            mod $module {
                use super::*;

                #[test]
                fn initial_vertices_empty() {
                    super::initial_vertices_empty::<$graph<String>>();
                }

                #[test]
                fn add_vertex_reports_novelty() {
                    super::add_vertex_reports_novelty::<$graph<String>>();
                }

                #[test]
                fn zero_weight_on_missing_edge_changes_nothing() {
                    super::zero_weight_on_missing_edge_changes_nothing::<$graph<String>>();
                }

                #[test]
                fn positive_weight_adds_missing_endpoints() {
                    super::positive_weight_adds_missing_endpoints::<$graph<String>>();
                }

                #[test]
                fn overwrite_returns_previous_weight() {
                    super::overwrite_returns_previous_weight::<$graph<String>>();
                }

                #[test]
                fn repeated_set_is_idempotent() {
                    super::repeated_set_is_idempotent::<$graph<String>>();
                }

                #[test]
                fn zero_weight_removes_edge_but_keeps_vertices() {
                    super::zero_weight_removes_edge_but_keeps_vertices::<$graph<String>>();
                }

                #[test]
                fn edges_are_directed() {
                    super::edges_are_directed::<$graph<String>>();
                }

                #[test]
                fn remove_vertex_reports_presence() {
                    super::remove_vertex_reports_presence::<$graph<String>>();
                }

                #[test]
                fn remove_vertex_purges_incident_edges() {
                    super::remove_vertex_purges_incident_edges::<$graph<String>>();
                }

                #[test]
                fn accessors_return_copies() {
                    super::accessors_return_copies::<$graph<String>>();
                }

                #[test]
                fn absent_labels_have_no_neighbours() {
                    super::absent_labels_have_no_neighbours::<$graph<String>>();
                }

                #[test]
                fn neighbour_maps_collect_every_edge() {
                    super::neighbour_maps_collect_every_edge::<$graph<String>>();
                }

                #[test]
                fn renders_edges_then_isolated_vertices() {
                    super::renders_edges_then_isolated_vertices::<$graph<String>>();
                }

                #[test]
                fn supports_integer_labels() {
                    super::supports_integer_labels::<$graph<u32>>();
                }

                #[test]
                fn supports_char_labels() {
                    super::supports_char_labels::<$graph<char>>();
                }
            }
        )*
    };
}

conformance_suite! {
    edge_list => EdgeGraph,
    vertex_centric => VertexGraph,
}
