//! # Affinity Graph Builder
//!
//! Turns a stream of corpus tokens into a word-affinity graph: vertices are
//! normalized words, and the weight of `w1 -> w2` counts how often `w1` is
//! immediately followed by `w2`.

use crate::Label;
use crate::error::Result;
use crate::graph::WeightedDigraph;
use std::io::BufRead;

/// Normalize a raw token: drop every character that is not a letter or a
/// digit, then lower-case what remains.
///
/// Lower-casing runs over the whole stripped word so context-sensitive
/// mappings (word-final sigma) match however the word was cased.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Weight of `source -> target` as seen from both endpoints.
///
/// Returns the weight only if the incoming map of `target` and the outgoing
/// map of `source` agree on it, and `0` otherwise. Nothing here assumes a
/// particular representation.
pub fn agreed_weight<L, G>(graph: &G, source: &L, target: &L) -> u32
where
    L: Label,
    G: WeightedDigraph<L> + ?Sized,
{
    let incoming = graph.in_neighbors(target).get(source).copied();
    let outgoing = graph.out_neighbors(source).get(target).copied();
    match (incoming, outgoing) {
        (Some(i), Some(o)) if i == o => i,
        _ => 0,
    }
}

/// Incremental builder for an affinity graph.
///
/// Tokens may arrive in any number of calls; adjacency carries over between
/// calls, so a word at the end of one line is linked to the first word of
/// the next. Tokens that normalize to nothing are skipped.
#[derive(Debug)]
pub struct AffinityGraphBuilder<G> {
    graph: G,
    previous: Option<String>,
    words: usize,
}

impl<G: WeightedDigraph<String>> AffinityGraphBuilder<G> {
    /// Start building into `graph` (normally empty).
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            previous: None,
            words: 0,
        }
    }

    /// Feed one raw token.
    pub fn push(&mut self, token: &str) {
        let current = normalize(token);
        if current.is_empty() {
            return;
        }
        self.words = self.words.saturating_add(1);

        match self.previous.take() {
            Some(previous) => {
                let seen = agreed_weight(&self.graph, &previous, &current);
                self.graph
                    .set_edge(previous, current.clone(), seen.saturating_add(1));
            }
            None => {
                self.graph.add_vertex(current.clone());
            }
        }
        self.previous = Some(current);
    }

    /// Feed every token of an iterator.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.push(token.as_ref());
        }
    }

    /// Feed a whitespace-delimited text stream, one line at a time.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            self.extend(line?.split_whitespace());
        }
        Ok(())
    }

    /// Number of words accepted so far.
    #[must_use]
    pub fn words(&self) -> usize {
        self.words
    }

    /// Read-only view of the graph built so far.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Finish and hand back the graph.
    pub fn finish(self) -> G {
        self.graph
    }
}

// =============================================================================
// TESTS
// =============================================================================
