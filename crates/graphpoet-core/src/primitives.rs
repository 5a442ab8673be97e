//! # Primitives
//!
//! Value types shared by both graph representations.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Any value usable as a vertex label.
///
/// `Ord` keeps every enumeration (vertex sets, neighbour maps, rendering)
/// deterministic; `Debug` is used when reporting invariant violations.
pub trait Label: Ord + Clone + fmt::Debug {}

impl<T: Ord + Clone + fmt::Debug> Label for T {}

/// A strictly positive edge weight.
///
/// A zero weight is never stored: at the API surface `0` means "no edge".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EdgeWeight(NonZeroU32);

impl EdgeWeight {
    /// The weight of a freshly observed adjacency.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Increment by 1 using saturating arithmetic.
    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for EdgeWeight {
    type Error = GraphError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(GraphError::ZeroWeight)
    }
}

impl From<EdgeWeight> for u32 {
    fn from(weight: EdgeWeight) -> Self {
        weight.get()
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena handle of a vertex in the vertex-centric representation.
///
/// Handles are allocated from a monotonic counter and never reused, so a
/// stale handle can never alias a newer vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u64);

// =============================================================================
// TESTS
// =============================================================================
