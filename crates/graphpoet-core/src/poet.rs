//! # Poet Module
//!
//! Bridge-word composition over a word-affinity graph.
//!
//! Between every adjacent pair of input words `w1 w2`, the poet inserts the
//! word `b` that maximizes `weight(w1 -> b) + weight(b -> w2)`, if any such
//! two-edge path exists. Input words keep their case; bridge words are the
//! lower-case graph labels. Ties go to the lexicographically smallest word.

use crate::affinity::{AffinityGraphBuilder, normalize};
use crate::error::{PoetError, Result};
use crate::graph::{Representation, WeightedDigraph};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The word chosen between two input words, with its path weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    pub word: String,
    /// `weight(w1 -> word) + weight(word -> w2)`.
    pub weight: u64,
}

/// One bridge inserted into a poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    /// Index of the input word the bridge follows.
    pub position: usize,
    pub before: String,
    pub after: String,
    pub bridge: Bridge,
}

/// A composed poem plus the insertions that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Poem {
    pub text: String,
    pub insertions: Vec<Insertion>,
}

/// A graph-based poetry generator.
///
/// Owns an affinity graph and only ever reads it after construction.
pub struct GraphPoet {
    graph: Box<dyn WeightedDigraph<String>>,
}

impl GraphPoet {
    /// Wrap an existing affinity graph.
    #[must_use]
    pub fn with_graph(graph: Box<dyn WeightedDigraph<String>>) -> Self {
        Self { graph }
    }

    /// Build the affinity graph from already-split tokens.
    pub fn from_tokens<I, S>(tokens: I, representation: Representation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AffinityGraphBuilder::new(representation.empty());
        builder.extend(tokens);
        Self::with_graph(builder.finish())
    }

    /// Build the affinity graph from a text stream.
    pub fn from_reader<R: BufRead>(reader: R, representation: Representation) -> Result<Self> {
        let mut builder = AffinityGraphBuilder::new(representation.empty());
        builder.read_from(reader)?;
        Ok(Self::with_graph(builder.finish()))
    }

    /// Build the affinity graph from a corpus file.
    pub fn from_path(path: impl AsRef<Path>, representation: Representation) -> Result<Self> {
        let path = path.as_ref();
        let corpus_error = |source| PoetError::CorpusRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(corpus_error)?;
        Self::from_reader(BufReader::new(file), representation).map_err(|e| match e {
            PoetError::Io(source) => corpus_error(source),
            other => other,
        })
    }

    /// Read-only view of the affinity graph.
    #[must_use]
    pub fn graph(&self) -> &dyn WeightedDigraph<String> {
        self.graph.as_ref()
    }

    /// Find the bridge word between two raw input words.
    ///
    /// Returns `None` when no two-edge path joins them.
    #[must_use]
    pub fn bridge(&self, first: &str, second: &str) -> Option<Bridge> {
        let source = normalize(first);
        let target = normalize(second);
        if source.is_empty() || target.is_empty() {
            return None;
        }

        let incoming = self.graph.in_neighbors(&target);
        let mut best: Option<Bridge> = None;

        // Sorted enumeration plus a strict comparison keeps the smallest
        // label among equal-weight candidates.
        for (candidate, first_leg) in self.graph.out_neighbors(&source) {
            let Some(&second_leg) = incoming.get(&candidate) else {
                continue;
            };
            let weight = u64::from(first_leg) + u64::from(second_leg);
            if best.as_ref().is_none_or(|b| weight > b.weight) {
                best = Some(Bridge {
                    word: candidate,
                    weight,
                });
            }
        }

        best
    }

    /// Generate a poem from `input`.
    ///
    /// Blank input is returned unchanged.
    #[must_use]
    pub fn poem(&self, input: &str) -> String {
        self.compose(input).text
    }

    /// Generate a poem and report every bridge that was inserted.
    #[must_use]
    pub fn compose(&self, input: &str) -> Poem {
        if input.trim().is_empty() {
            return Poem {
                text: input.to_string(),
                insertions: Vec::new(),
            };
        }

        let words: Vec<&str> = input.split_whitespace().collect();
        let mut text = String::with_capacity(input.len());
        let mut insertions = Vec::new();

        for (position, word) in words.iter().enumerate() {
            if let Some(previous) = position.checked_sub(1).and_then(|i| words.get(i)) {
                if let Some(bridge) = self.bridge(previous, word) {
                    text.push(' ');
                    text.push_str(&bridge.word);
                    insertions.push(Insertion {
                        position: position - 1,
                        before: (*previous).to_string(),
                        after: (*word).to_string(),
                        bridge,
                    });
                }
                text.push(' ');
            }
            text.push_str(word);
        }

        Poem { text, insertions }
    }
}

impl std::fmt::Debug for GraphPoet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphPoet")
            .field("vertices", &self.graph.vertex_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
