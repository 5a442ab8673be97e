//! Vertex-centric representation.
//!
//! Vertices live in an arena keyed by [`VertexId`]; each one owns the
//! weights of its incoming and outgoing edges, keyed by the neighbour's id.
//! Every edge is therefore recorded twice, once on each endpoint, and both
//! records are updated inside the same `&mut self` call.
//!
//! Rep invariant:
//! - `index` and `nodes` describe the same set of vertices
//! - for every pair (A, B): `A.outgoing[B] == B.incoming[A]`, or both absent
//! - every adjacency key names a vertex in `nodes`

use super::WeightedDigraph;
use crate::error::GraphError;
use crate::{EdgeWeight, Label, VertexId};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A vertex and its two neighbour maps.
#[derive(Debug, Clone)]
struct Vertex<L> {
    label: L,
    incoming: BTreeMap<VertexId, EdgeWeight>,
    outgoing: BTreeMap<VertexId, EdgeWeight>,
}

impl<L> Vertex<L> {
    fn new(label: L) -> Self {
        Self {
            label,
            incoming: BTreeMap::new(),
            outgoing: BTreeMap::new(),
        }
    }
}

/// Weighted digraph stored as an arena of vertices with local adjacency.
#[derive(Debug, Clone)]
pub struct VertexGraph<L> {
    /// Vertex storage: VertexId -> Vertex
    nodes: BTreeMap<VertexId, Vertex<L>>,

    /// Reverse lookup: label -> VertexId
    index: BTreeMap<L, VertexId>,

    /// Next available VertexId
    next_vertex_id: u64,
}

impl<L> Default for VertexGraph<L> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            index: BTreeMap::new(),
            next_vertex_id: 0,
        }
    }
}

impl<L: Label> VertexGraph<L> {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges leaving `label` (0 if absent).
    #[must_use]
    pub fn out_degree(&self, label: &L) -> usize {
        self.node(label).map_or(0, |v| v.outgoing.len())
    }

    /// Number of edges entering `label` (0 if absent).
    #[must_use]
    pub fn in_degree(&self, label: &L) -> usize {
        self.node(label).map_or(0, |v| v.incoming.len())
    }

    fn node(&self, label: &L) -> Option<&Vertex<L>> {
        self.nodes.get(self.index.get(label)?)
    }

    fn label_of(&self, id: VertexId) -> Option<&L> {
        self.nodes.get(&id).map(|v| &v.label)
    }

    /// Return the id for `label`, allocating a vertex if needed.
    fn intern(&mut self, label: L) -> VertexId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }

        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id = self.next_vertex_id.saturating_add(1);

        self.nodes.insert(id, Vertex::new(label.clone()));
        self.index.insert(label, id);
        id
    }

    /// Record `from -> to` on both endpoints. Returns the previous weight or 0.
    fn link(&mut self, from: VertexId, to: VertexId, weight: EdgeWeight) -> u32 {
        let previous = self
            .nodes
            .get_mut(&from)
            .and_then(|v| v.outgoing.insert(to, weight));
        if let Some(target) = self.nodes.get_mut(&to) {
            target.incoming.insert(from, weight);
        }
        previous.map_or(0, EdgeWeight::get)
    }

    /// Erase `from -> to` from both endpoints. Returns the removed weight or 0.
    fn unlink(&mut self, from: VertexId, to: VertexId) -> u32 {
        let previous = self
            .nodes
            .get_mut(&from)
            .and_then(|v| v.outgoing.remove(&to));
        if let Some(target) = self.nodes.get_mut(&to) {
            target.incoming.remove(&from);
        }
        previous.map_or(0, EdgeWeight::get)
    }

    /// Translate an id-keyed adjacency map into a label-keyed copy.
    fn labelled(&self, adjacency: &BTreeMap<VertexId, EdgeWeight>) -> BTreeMap<L, u32> {
        adjacency
            .iter()
            .filter_map(|(id, weight)| self.label_of(*id).map(|l| (l.clone(), weight.get())))
            .collect()
    }
}

impl<L: Label> WeightedDigraph<L> for VertexGraph<L> {
    fn add_vertex(&mut self, label: L) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        self.intern(label);

        debug_assert!(self.check_rep().is_ok());
        true
    }

    fn set_edge(&mut self, source: L, target: L, weight: u32) -> u32 {
        let previous = match EdgeWeight::new(weight) {
            Some(weight) => {
                let from = self.intern(source);
                let to = self.intern(target);
                self.link(from, to, weight)
            }
            None => match (self.index.get(&source), self.index.get(&target)) {
                (Some(&from), Some(&to)) => self.unlink(from, to),
                _ => 0,
            },
        };

        debug_assert!(self.check_rep().is_ok());
        previous
    }

    fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(id) = self.index.remove(label) else {
            return false;
        };
        let Some(removed) = self.nodes.remove(&id) else {
            return false;
        };

        // Purge the opposite-direction record held by each former neighbour.
        for neighbor in removed.outgoing.keys() {
            if let Some(v) = self.nodes.get_mut(neighbor) {
                v.incoming.remove(&id);
            }
        }
        for neighbor in removed.incoming.keys() {
            if let Some(v) = self.nodes.get_mut(neighbor) {
                v.outgoing.remove(&id);
            }
        }

        debug_assert!(self.check_rep().is_ok());
        true
    }

    fn vertices(&self) -> BTreeSet<L> {
        self.index.keys().cloned().collect()
    }

    fn in_neighbors(&self, target: &L) -> BTreeMap<L, u32> {
        self.node(target)
            .map(|v| self.labelled(&v.incoming))
            .unwrap_or_default()
    }

    fn out_neighbors(&self, source: &L) -> BTreeMap<L, u32> {
        self.node(source)
            .map(|v| self.labelled(&v.outgoing))
            .unwrap_or_default()
    }

    fn check_rep(&self) -> Result<(), GraphError> {
        if self.index.len() != self.nodes.len() {
            let label = self
                .nodes
                .values()
                .find(|v| !self.index.contains_key(&v.label))
                .map(|v| format!("{:?}", v.label))
                .unwrap_or_default();
            return Err(GraphError::IndexMismatch { label });
        }
        for (label, id) in &self.index {
            if self.label_of(*id) != Some(label) {
                return Err(GraphError::IndexMismatch {
                    label: format!("{label:?}"),
                });
            }
        }

        for (&id, vertex) in &self.nodes {
            for (&to, &weight) in &vertex.outgoing {
                let Some(target) = self.nodes.get(&to) else {
                    return Err(GraphError::dangling(&vertex.label, &to));
                };
                let incoming = target.incoming.get(&id).copied();
                if incoming != Some(weight) {
                    return Err(asymmetric(
                        &vertex.label,
                        &target.label,
                        Some(weight),
                        incoming,
                    ));
                }
            }
            for (&from, &weight) in &vertex.incoming {
                let Some(source) = self.nodes.get(&from) else {
                    return Err(GraphError::dangling(&from, &vertex.label));
                };
                let outgoing = source.outgoing.get(&id).copied();
                if outgoing != Some(weight) {
                    return Err(asymmetric(
                        &source.label,
                        &vertex.label,
                        outgoing,
                        Some(weight),
                    ));
                }
            }
        }
        Ok(())
    }

    fn edge_weight(&self, source: &L, target: &L) -> u32 {
        let (Some(source), Some(&to)) = (self.node(source), self.index.get(target)) else {
            return 0;
        };
        source.outgoing.get(&to).map_or(0, |w| w.get())
    }

    fn contains_vertex(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.values().map(|v| v.outgoing.len()).sum()
    }
}

fn asymmetric(
    from: &impl fmt::Debug,
    to: &impl fmt::Debug,
    outgoing: Option<EdgeWeight>,
    incoming: Option<EdgeWeight>,
) -> GraphError {
    GraphError::AsymmetricEdge {
        from: format!("{from:?}"),
        to: format!("{to:?}"),
        outgoing: outgoing.map(EdgeWeight::get),
        incoming: incoming.map(EdgeWeight::get),
    }
}

impl<L: Label + fmt::Display> fmt::Display for VertexGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formats::render_graph(self))
    }
}

// =============================================================================
// TESTS
// =============================================================================
