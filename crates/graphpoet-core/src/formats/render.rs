//! Diagnostic text rendering.

use crate::Label;
use crate::graph::WeightedDigraph;
use std::fmt::Display;

/// Format one edge as `SOURCE-----(WEIGHT)----->TARGET`.
pub fn edge_line<L: Display + ?Sized>(source: &L, target: &L, weight: u32) -> String {
    format!("{source}-----({weight})----->{target}")
}

/// Render a graph: one line per edge (sorted), then one line per vertex with
/// no incident edge (sorted). Lines are joined by `\n` with no trailing
/// newline; an empty graph renders as an empty string.
pub fn render_graph<L, G>(graph: &G) -> String
where
    L: Label + Display,
    G: WeightedDigraph<L> + ?Sized,
{
    let edges = graph
        .edges()
        .into_iter()
        .map(|(source, target, weight)| edge_line(&source, &target, weight));
    let isolated = graph.isolated_vertices().into_iter().map(|v| v.to_string());

    edges.chain(isolated).collect::<Vec<_>>().join("\n")
}

// =============================================================================
// TESTS
// =============================================================================
