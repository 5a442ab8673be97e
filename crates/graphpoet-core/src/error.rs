//! # Errors
//!
//! Error types for the graph ADT, snapshot formats, and the poet.
//!
//! Rep-invariant violations (`GraphError`) are programmer errors and are
//! kept apart from corpus I/O failures (`PoetError::CorpusRead`).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for poet-level operations.
pub type Result<T> = std::result::Result<T, PoetError>;

/// A broken representation invariant.
///
/// Labels are carried in their `Debug` form so the error stays independent
/// of the label type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A weight of zero was offered where a stored weight was required.
    #[error("edge weight must be positive")]
    ZeroWeight,

    /// An edge names an endpoint that is not a vertex of the graph.
    #[error("edge {from} -> {to} references a vertex that is not in the graph")]
    DanglingEndpoint { from: String, to: String },

    /// The same ordered pair is stored more than once.
    #[error("edge {from} -> {to} is recorded more than once")]
    DuplicateEdge { from: String, to: String },

    /// The outgoing and incoming records of an edge disagree.
    #[error(
        "edge {from} -> {to} disagrees between endpoints: \
         outgoing {outgoing:?}, incoming {incoming:?}"
    )]
    AsymmetricEdge {
        from: String,
        to: String,
        outgoing: Option<u32>,
        incoming: Option<u32>,
    },

    /// The label index and the vertex arena are out of sync.
    #[error("label index out of sync for vertex {label}")]
    IndexMismatch { label: String },
}

impl GraphError {
    pub(crate) fn dangling(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::DanglingEndpoint {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn duplicate(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::DuplicateEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Errors raised while decoding or encoding a graph snapshot.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("not a graphpoet snapshot (bad magic bytes)")]
    BadMagic,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),

    #[error("snapshot is truncated")]
    Truncated,

    #[error("snapshot payload error: {0}")]
    Payload(#[from] postcard::Error),

    #[error("snapshot describes an invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Errors surfaced to callers of the poet.
#[derive(Debug, Error)]
pub enum PoetError {
    /// The corpus file could not be opened or read.
    #[error("failed to read corpus {}: {source}", .path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A reader-supplied corpus failed mid-stream.
    #[error("corpus I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl PoetError {
    /// Check if this error came from reading the corpus rather than from
    /// the graph itself.
    #[must_use]
    pub fn is_corpus_failure(&self) -> bool {
        matches!(self, Self::CorpusRead { .. } | Self::Io(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
