//! # Configuration
//!
//! Runtime choices shared by every command: where the affinity graph comes
//! from and which representation holds it.

use crate::cli::CliError;
use clap::{Args, ValueEnum};
use graphpoet_core::Representation;
use serde::Serialize;
use std::path::PathBuf;

/// Command-line spelling of [`Representation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RepresentationArg {
    /// Flat list of edge records
    Edges,
    /// Per-vertex neighbour maps
    #[default]
    Vertices,
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::Edges => Self::Edges,
            RepresentationArg::Vertices => Self::Vertices,
        }
    }
}

/// Where to load the affinity graph from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Plain-text corpus to build the affinity graph from
    #[arg(long, conflicts_with = "graph")]
    pub corpus: Option<PathBuf>,

    /// Snapshot written earlier by `graphpoet build`
    #[arg(long)]
    pub graph: Option<PathBuf>,
}

/// Resolved graph source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum GraphSource {
    Corpus(PathBuf),
    Snapshot(PathBuf),
}

impl TryFrom<SourceArgs> for GraphSource {
    type Error = CliError;

    fn try_from(args: SourceArgs) -> Result<Self, Self::Error> {
        match (args.corpus, args.graph) {
            (Some(corpus), None) => Ok(Self::Corpus(corpus)),
            (None, Some(graph)) => Ok(Self::Snapshot(graph)),
            (Some(_), Some(_)) => Err(CliError::ConflictingSource),
            (None, None) => Err(CliError::MissingSource),
        }
    }
}

/// Everything a command needs to load a poet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoetConfig {
    pub source: GraphSource,
    pub representation: Representation,
}

impl PoetConfig {
    #[must_use]
    pub fn new(source: GraphSource, representation: Representation) -> Self {
        Self {
            source,
            representation,
        }
    }

    /// Resolve command-line arguments into a config.
    pub fn from_args(
        source: SourceArgs,
        representation: RepresentationArg,
    ) -> Result<Self, CliError> {
        Ok(Self::new(source.try_into()?, representation.into()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
