//! # GraphPoet Core
//!
//! A mutable, directed, positive-weight graph ADT with two interchangeable
//! representations, and a poet that uses a word-affinity instance of it to
//! insert bridge words between adjacent words of a phrase.
//!
//! ```
//! use graphpoet_core::{GraphPoet, Representation};
//!
//! let corpus = "This is a test of the Mugar Omni Theater sound system.";
//! let poet = GraphPoet::from_tokens(corpus.split_whitespace(), Representation::Edges);
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```
//!
//! The crate is pure and single-threaded: no async, no logging, and file
//! access only through [`GraphPoet::from_path`].

pub mod affinity;
pub mod error;
pub mod formats;
pub mod graph;
pub mod poet;
pub mod primitives;
pub mod stats;

pub use affinity::{AffinityGraphBuilder, normalize};
pub use error::{FormatError, GraphError, PoetError, Result};
pub use formats::{GraphSnapshot, decode_snapshot, encode_snapshot, render_graph};
pub use graph::{Edge, EdgeGraph, Representation, VertexGraph, WeightedDigraph};
pub use poet::{Bridge, GraphPoet, Insertion, Poem};
pub use primitives::{EdgeWeight, Label, VertexId};
pub use stats::GraphStats;
