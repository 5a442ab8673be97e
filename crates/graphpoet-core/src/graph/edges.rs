//! Edge-list representation.
//!
//! Rep: a vertex set and an unordered list of immutable [`Edge`] records.
//!
//! Rep invariant:
//! - both endpoints of every edge are in `vertices`
//! - no ordered pair appears in more than one record
//! - every weight is positive (guaranteed by [`EdgeWeight`])
//!
//! Lookups scan the edge list linearly; changing a weight replaces the
//! record instead of mutating it.

use super::WeightedDigraph;
use crate::error::GraphError;
use crate::formats::edge_line;
use crate::{EdgeWeight, Label};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// =============================================================================
// EDGE RECORD
// =============================================================================

/// An immutable directed edge with a positive weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<L> {
    source: L,
    target: L,
    weight: EdgeWeight,
}

impl<L: Label> Edge<L> {
    #[must_use]
    pub fn new(source: L, target: L, weight: EdgeWeight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    #[must_use]
    pub fn source(&self) -> &L {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &L {
        &self.target
    }

    #[must_use]
    pub fn weight(&self) -> EdgeWeight {
        self.weight
    }

    /// Check if this edge runs from `source` to `target`.
    #[must_use]
    pub fn connects(&self, source: &L, target: &L) -> bool {
        self.source == *source && self.target == *target
    }

    /// Check if `vertex` is either endpoint.
    #[must_use]
    pub fn touches(&self, vertex: &L) -> bool {
        self.source == *vertex || self.target == *vertex
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&edge_line(&self.source, &self.target, self.weight.get()))
    }
}

// =============================================================================
// EDGE GRAPH
// =============================================================================

/// Weighted digraph stored as a vertex set plus a list of edge records.
#[derive(Debug, Clone)]
pub struct EdgeGraph<L> {
    vertices: BTreeSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L> Default for EdgeGraph<L> {
    fn default() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<L: Label> EdgeGraph<L> {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate the raw edge records in storage order.
    pub fn records(&self) -> impl Iterator<Item = &Edge<L>> {
        self.edges.iter()
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    /// Remove the record for `source -> target`, returning its weight or 0.
    fn take_edge(&mut self, source: &L, target: &L) -> u32 {
        match self.position(source, target) {
            Some(index) => self.edges.swap_remove(index).weight.get(),
            None => 0,
        }
    }
}

impl<L: Label> WeightedDigraph<L> for EdgeGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        let added = self.vertices.insert(label);
        debug_assert!(self.check_rep().is_ok());
        added
    }

    fn set_edge(&mut self, source: L, target: L, weight: u32) -> u32 {
        let previous = self.take_edge(&source, &target);

        if let Some(weight) = EdgeWeight::new(weight) {
            self.vertices.insert(source.clone());
            self.vertices.insert(target.clone());
            self.edges.push(Edge::new(source, target, weight));
        }

        debug_assert!(self.check_rep().is_ok());
        previous
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        if !self.vertices.remove(label) {
            return false;
        }
        self.edges.retain(|e| !e.touches(label));

        debug_assert!(self.check_rep().is_ok());
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.vertices.clone()
    }

    fn in_neighbors(&self, target: &L) -> BTreeMap<L, u32> {
        self.edges
            .iter()
            .filter(|e| e.target == *target)
            .map(|e| (e.source.clone(), e.weight.get()))
            .collect()
    }

    fn out_neighbors(&self, source: &L) -> BTreeMap<L, u32> {
        self.edges
            .iter()
            .filter(|e| e.source == *source)
            .map(|e| (e.target.clone(), e.weight.get()))
            .collect()
    }

    fn check_rep(&self) -> Result<(), GraphError> {
        let mut seen = BTreeSet::new();
        for edge in &self.edges {
            if !self.vertices.contains(&edge.source) || !self.vertices.contains(&edge.target) {
                return Err(GraphError::dangling(&edge.source, &edge.target));
            }
            if !seen.insert((&edge.source, &edge.target)) {
                return Err(GraphError::duplicate(&edge.source, &edge.target));
            }
        }
        Ok(())
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.vertices.contains(label)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: Label + fmt::Display> fmt::Display for EdgeGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formats::render_graph(self))
    }
}

// =============================================================================
// TESTS
// =============================================================================
