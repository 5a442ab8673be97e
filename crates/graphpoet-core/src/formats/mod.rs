//! # Formats Module
//!
//! Textual and binary forms of a graph.
//!
//! This module contains:
//! - Diagnostic text rendering (`SOURCE-----(WEIGHT)----->TARGET`)
//! - Binary snapshot format (magic + version header, postcard payload)
//!
//! Note: File I/O operations remain in the app layer (apps/graphpoet).
//! This module only handles format conversion (pure transformations).

mod persistence;
mod render;

pub use persistence::*;
pub use render::*;
