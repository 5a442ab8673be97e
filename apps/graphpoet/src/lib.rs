//! # GraphPoet Library
//!
//! This library exposes the GraphPoet CLI modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;

// Re-export graphpoet_core for convenience
pub use graphpoet_core;
