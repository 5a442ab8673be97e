//! # CLI Commands
//!
//! Command implementations behind the `graphpoet` binary. Each command
//! returns its output as a string so it can be tested without a terminal.

use crate::config::{GraphSource, PoetConfig};
use graphpoet_core::{
    GraphPoet, GraphSnapshot, GraphStats, PoetError, Representation, decode_snapshot,
    encode_snapshot, render_graph,
};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Poet(#[from] PoetError),

    #[error("failed to access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("either --corpus or --graph is required")]
    MissingSource,

    #[error("--corpus and --graph cannot be combined")]
    ConflictingSource,

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSource | Self::ConflictingSource | Self::AlreadyExists(_) => 2,
            _ => 1,
        }
    }

    fn file(path: &Path, source: io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Load a poet from a corpus or a snapshot.
pub fn load_poet(config: &PoetConfig) -> Result<GraphPoet, CliError> {
    let poet = match &config.source {
        GraphSource::Corpus(path) => {
            info!(
                corpus = %path.display(),
                representation = config.representation.name(),
                "building affinity graph"
            );
            GraphPoet::from_path(path, config.representation)?
        }
        GraphSource::Snapshot(path) => {
            info!(
                snapshot = %path.display(),
                representation = config.representation.name(),
                "loading snapshot"
            );
            let bytes = std::fs::read(path).map_err(|e| CliError::file(path, e))?;
            let snapshot = decode_snapshot::<String>(&bytes).map_err(PoetError::from)?;
            let graph = snapshot
                .restore(config.representation)
                .map_err(PoetError::from)?;
            GraphPoet::with_graph(graph)
        }
    };

    info!(
        vertices = poet.graph().vertex_count(),
        edges = poet.graph().edge_count(),
        "affinity graph ready"
    );
    Ok(poet)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Compose one poem per input line.
pub fn cmd_poem(config: &PoetConfig, inputs: &[String]) -> Result<Vec<String>, CliError> {
    let poet = load_poet(config)?;

    let poems = inputs
        .iter()
        .map(|input| {
            let poem = poet.compose(input);
            for insertion in &poem.insertions {
                debug!(
                    before = %insertion.before,
                    after = %insertion.after,
                    bridge = %insertion.bridge.word,
                    weight = insertion.bridge.weight,
                    "inserted bridge word"
                );
            }
            poem.text
        })
        .collect();

    Ok(poems)
}

/// Build an affinity graph from `corpus` and write it as a snapshot.
pub fn cmd_build(
    corpus: &Path,
    output: &Path,
    representation: Representation,
    force: bool,
) -> Result<GraphStats<String>, CliError> {
    if output.exists() && !force {
        return Err(CliError::AlreadyExists(output.to_path_buf()));
    }

    let config = PoetConfig::new(GraphSource::Corpus(corpus.to_path_buf()), representation);
    let poet = load_poet(&config)?;

    let bytes = encode_snapshot(&GraphSnapshot::capture(poet.graph())).map_err(PoetError::from)?;
    std::fs::write(output, &bytes).map_err(|e| CliError::file(output, e))?;

    info!(output = %output.display(), bytes = bytes.len(), "snapshot written");
    Ok(GraphStats::collect(poet.graph()))
}

/// Render the affinity graph, as arrow lines or as JSON.
pub fn cmd_show(config: &PoetConfig, json: bool) -> Result<String, CliError> {
    let poet = load_poet(config)?;

    if json {
        let snapshot = GraphSnapshot::capture(poet.graph());
        Ok(serde_json::to_string_pretty(&snapshot)?)
    } else {
        Ok(render_graph(poet.graph()))
    }
}

/// Summarize the affinity graph.
pub fn cmd_stats(config: &PoetConfig, json: bool) -> Result<String, CliError> {
    let poet = load_poet(config)?;
    let stats = GraphStats::collect(poet.graph());

    if json {
        let report = serde_json::json!({
            "config": config,
            "stats": stats,
        });
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut output = String::new();
    output.push_str(&format!("Representation: {}\n", config.representation.name()));
    output.push_str(&format!("Vertices:       {}\n", stats.vertices));
    output.push_str(&format!("Edges:          {}\n", stats.edges));
    output.push_str(&format!("Isolated:       {}\n", stats.isolated));
    output.push_str(&format!("Total weight:   {}\n", stats.total_weight));
    match &stats.heaviest_edge {
        Some((source, target, weight)) => {
            output.push_str(&format!("Heaviest edge:  {source} -> {target} ({weight})\n"));
        }
        None => output.push_str("Heaviest edge:  (none)\n"),
    }
    Ok(output)
}
