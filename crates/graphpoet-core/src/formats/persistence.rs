//! Binary snapshot format.
//!
//! Layout: 4-byte magic `GPOE`, 1-byte format version, then the
//! [`GraphSnapshot`] encoded with postcard. Weights are decoded through
//! [`EdgeWeight`], so a snapshot carrying a zero weight is rejected.

use crate::error::{FormatError, GraphError};
use crate::graph::{Representation, WeightedDigraph};
use crate::{EdgeWeight, Label};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Magic bytes at the start of every snapshot.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"GPOE";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

const HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + 1;

/// Representation-independent copy of a graph's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<L> {
    /// Every vertex, sorted.
    pub vertices: Vec<L>,
    /// Every edge as `(source, target, weight)`, sorted.
    pub edges: Vec<(L, L, EdgeWeight)>,
}

impl<L: Label> GraphSnapshot<L> {
    /// Capture the current state of any graph.
    pub fn capture<G: WeightedDigraph<L> + ?Sized>(graph: &G) -> Self {
        let edges = graph
            .edges()
            .into_iter()
            .filter_map(|(s, t, w)| EdgeWeight::new(w).map(|w| (s, t, w)))
            .collect();
        Self {
            vertices: graph.vertices().into_iter().collect(),
            edges,
        }
    }

    /// Replay this snapshot into `graph`.
    ///
    /// Every edge endpoint must be listed as a vertex; otherwise nothing is
    /// written and the dangling edge is reported.
    pub fn restore_into<G: WeightedDigraph<L> + ?Sized>(
        &self,
        graph: &mut G,
    ) -> Result<(), GraphError> {
        let known: BTreeSet<&L> = self.vertices.iter().collect();
        if let Some((s, t, _)) = self
            .edges
            .iter()
            .find(|(s, t, _)| !known.contains(s) || !known.contains(t))
        {
            return Err(GraphError::dangling(s, t));
        }

        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for (source, target, weight) in &self.edges {
            graph.set_edge(source.clone(), target.clone(), weight.get());
        }
        graph.check_rep()
    }

    /// Build a fresh graph of the chosen representation from this snapshot.
    pub fn restore(
        &self,
        representation: Representation,
    ) -> Result<Box<dyn WeightedDigraph<L>>, GraphError>
    where
        L: 'static,
    {
        let mut graph = representation.empty();
        self.restore_into(&mut graph)?;
        Ok(graph)
    }
}

/// Encode a snapshot with the versioned header.
pub fn encode_snapshot<L: Serialize>(snapshot: &GraphSnapshot<L>) -> Result<Vec<u8>, FormatError> {
    let payload = postcard::to_allocvec(snapshot)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&SNAPSHOT_MAGIC);
    bytes.push(SNAPSHOT_VERSION);
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode a snapshot, checking magic and version first.
pub fn decode_snapshot<L: DeserializeOwned>(bytes: &[u8]) -> Result<GraphSnapshot<L>, FormatError> {
    let Some((header, payload)) = bytes.split_at_checked(HEADER_LEN) else {
        return Err(FormatError::Truncated);
    };
    let (magic, version) = header.split_at(SNAPSHOT_MAGIC.len());

    if magic != SNAPSHOT_MAGIC.as_slice() {
        return Err(FormatError::BadMagic);
    }
    match version.first() {
        Some(&SNAPSHOT_VERSION) => {}
        Some(&other) => return Err(FormatError::UnsupportedVersion(other)),
        None => return Err(FormatError::Truncated),
    }

    Ok(postcard::from_bytes(payload)?)
}

// =============================================================================
// TESTS
// =============================================================================
