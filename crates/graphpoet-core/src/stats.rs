//! # Stats Module
//!
//! Summary metrics for any weighted digraph.

use crate::Label;
use crate::graph::WeightedDigraph;
use serde::Serialize;

/// Size and weight summary of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats<L> {
    pub vertices: usize,
    pub edges: usize,
    /// Vertices with no incident edge.
    pub isolated: usize,
    /// Sum of all edge weights.
    pub total_weight: u64,
    /// The heaviest edge; ties go to the first in sorted order.
    pub heaviest_edge: Option<(L, L, u32)>,
}

impl<L: Label> GraphStats<L> {
    /// Compute statistics for `graph`.
    pub fn collect<G: WeightedDigraph<L> + ?Sized>(graph: &G) -> Self {
        let edges = graph.edges();

        let total_weight = edges.iter().map(|(_, _, w)| u64::from(*w)).sum();
        let mut heaviest: Option<&(L, L, u32)> = None;
        for edge in &edges {
            if heaviest.is_none_or(|h| edge.2 > h.2) {
                heaviest = Some(edge);
            }
        }

        Self {
            vertices: graph.vertex_count(),
            edges: edges.len(),
            isolated: graph.isolated_vertices().len(),
            total_weight,
            heaviest_edge: heaviest.cloned(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
