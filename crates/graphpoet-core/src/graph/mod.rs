//! # Graph Engine
//!
//! The weighted directed graph ADT and its two representations.
//!
//! - [`EdgeGraph`]: vertex set plus a flat list of immutable edge records.
//! - [`VertexGraph`]: arena of vertices, each owning its incoming and
//!   outgoing weight maps.
//!
//! Both implement [`WeightedDigraph`] and are observably identical for any
//! sequence of operations. All outputs use `BTreeMap`/`BTreeSet` for
//! deterministic ordering.

mod edges;
mod vertices;

#[cfg(test)]
mod conformance;

pub use edges::{Edge, EdgeGraph};
pub use vertices::VertexGraph;

use crate::Label;
use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// WEIGHTEDDIGRAPH TRAIT
// =============================================================================

/// A mutable directed graph with positive integer edge weights.
///
/// Weights cross the API as plain `u32`, where `0` means "no edge". No
/// accessor hands out a reference into internal state; every query returns
/// an owned copy.
pub trait WeightedDigraph<L: Label> {
    /// Add a vertex. Returns `true` if it was not already present.
    fn add_vertex(&mut self, label: L) -> bool;

    /// Create, overwrite, or remove the edge `source -> target`.
    ///
    /// A positive weight adds missing endpoints as vertices and stores the
    /// weight. A weight of `0` removes the edge and leaves both vertices in
    /// place. Returns the weight the edge had before the call, or `0`.
    fn set_edge(&mut self, source: L, target: L, weight: u32) -> u32;

    /// Remove a vertex together with every edge into or out of it.
    /// Returns `true` if the vertex was present.
    fn remove_vertex(&mut self, label: &L) -> bool;

    /// Copy of the current vertex set.
    fn vertices(&self) -> BTreeSet<L>;

    /// Every vertex with an edge into `target`, mapped to that edge's weight.
    /// Empty if `target` has no incoming edges or is not in the graph.
    fn in_neighbors(&self, target: &L) -> BTreeMap<L, u32>;

    /// Every vertex `source` has an edge to, mapped to that edge's weight.
    /// Empty if `source` has no outgoing edges or is not in the graph.
    fn out_neighbors(&self, source: &L) -> BTreeMap<L, u32>;

    /// Verify the representation invariant.
    fn check_rep(&self) -> Result<(), GraphError>;

    /// Weight of `source -> target`, or `0` if there is no such edge.
    fn edge_weight(&self, source: &L, target: &L) -> u32 {
        self.out_neighbors(source).get(target).copied().unwrap_or(0)
    }

    /// Check if the graph contains a vertex.
    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices().contains(label)
    }

    /// Get the total number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the total number of edges.
    fn edge_count(&self) -> usize {
        self.vertices()
            .iter()
            .map(|v| self.out_neighbors(v).len())
            .sum()
    }

    /// All edges as `(source, target, weight)`, sorted by source then target.
    fn edges(&self) -> Vec<(L, L, u32)> {
        self.vertices()
            .into_iter()
            .flat_map(|source| {
                self.out_neighbors(&source)
                    .into_iter()
                    .map(move |(target, weight)| (source.clone(), target, weight))
            })
            .collect()
    }

    /// Vertices with no incident edge in either direction.
    fn isolated_vertices(&self) -> BTreeSet<L> {
        self.vertices()
            .into_iter()
            .filter(|v| self.in_neighbors(v).is_empty() && self.out_neighbors(v).is_empty())
            .collect()
    }
}

impl<L: Label, G: WeightedDigraph<L> + ?Sized> WeightedDigraph<L> for Box<G> {
    fn add_vertex(&mut self, label: L) -> bool {
        (**self).add_vertex(label)
    }

    fn set_edge(&mut self, source: L, target: L, weight: u32) -> u32 {
        (**self).set_edge(source, target, weight)
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        (**self).remove_vertex(label)
    }

    fn vertices(&self) -> BTreeSet<L> {
        (**self).vertices()
    }

    fn in_neighbors(&self, target: &L) -> BTreeMap<L, u32> {
        (**self).in_neighbors(target)
    }

    fn out_neighbors(&self, source: &L) -> BTreeMap<L, u32> {
        (**self).out_neighbors(source)
    }

    fn check_rep(&self) -> Result<(), GraphError> {
        (**self).check_rep()
    }

    fn edge_weight(&self, source: &L, target: &L) -> u32 {
        (**self).edge_weight(source, target)
    }

    fn contains_vertex(&self, label: &L) -> bool {
        (**self).contains_vertex(label)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

// =============================================================================
// REPRESENTATION SELECTION
// =============================================================================

/// Which concrete representation backs a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// [`EdgeGraph`]: linear scans over a list of edge records.
    Edges,
    /// [`VertexGraph`]: per-vertex neighbour maps.
    #[default]
    Vertices,
}

impl Representation {
    /// Create an empty graph of this representation.
    #[must_use]
    pub fn empty<L: Label + 'static>(self) -> Box<dyn WeightedDigraph<L>> {
        match self {
            Self::Edges => Box::new(EdgeGraph::new()),
            Self::Vertices => Box::new(VertexGraph::new()),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Edges => "edges",
            Self::Vertices => "vertices",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
