//! Evaluation of expression trees against a corpus of words
//!
//! A corpus is the word list of one candidate record (e.g. the tokens of a
//! program name). `Term` nodes match against it under [`MatchOptions`];
//! the connectives combine results with both sides always evaluated.
//!
//! Corpus words are normalized once per call, not once per term.

pub mod trace;

pub use trace::{evaluate_traced, format_trace, TraceEvent};

use crate::query::ast::Node;
use crate::query::normalize::normalize;
use serde::{Deserialize, Serialize};

/// How a term is compared with corpus words. Case is always folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Match when the term occurs anywhere inside a word; otherwise the
    /// whole word must be equal.
    pub substring: bool,
    /// Remove diacritics from both sides before comparing.
    pub strip_accents: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            substring: true,
            strip_accents: true,
        }
    }
}

impl MatchOptions {
    pub fn exact() -> Self {
        MatchOptions {
            substring: false,
            ..Self::default()
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text, true, self.strip_accents)
    }

    fn compare(&self, term: &str, word: &str) -> bool {
        if self.substring {
            word.contains(term)
        } else {
            word == term
        }
    }
}

/// A corpus with every word normalized under one set of options
pub(crate) struct NormalizedCorpus<'a, S> {
    words: &'a [S],
    normalized: Vec<String>,
    options: MatchOptions,
}

impl<'a, S: AsRef<str>> NormalizedCorpus<'a, S> {
    pub(crate) fn new(words: &'a [S], options: MatchOptions) -> Self {
        let normalized = words
            .iter()
            .map(|word| options.normalize(word.as_ref()))
            .collect();
        NormalizedCorpus {
            words,
            normalized,
            options,
        }
    }

    pub(crate) fn matches(&self, term: &str) -> bool {
        let term = self.options.normalize(term);
        let found = self
            .normalized
            .iter()
            .any(|word| self.options.compare(&term, word));
        log::trace!("term {:?} -> {}", term, found);
        found
    }

    /// Original corpus words that satisfy `term`, in corpus order
    pub(crate) fn hits(&self, term: &str) -> Vec<String> {
        let term = self.options.normalize(term);
        self.words
            .iter()
            .zip(&self.normalized)
            .filter(|(_, normalized)| self.options.compare(&term, normalized))
            .map(|(word, _)| word.as_ref().to_string())
            .collect()
    }
}

/// Evaluate a tree against a corpus.
pub fn evaluate<S: AsRef<str>>(node: &Node, corpus: &[S], options: MatchOptions) -> bool {
    let corpus = NormalizedCorpus::new(corpus, options);
    eval_node(node, &corpus)
}

fn eval_node<S: AsRef<str>>(node: &Node, corpus: &NormalizedCorpus<'_, S>) -> bool {
    match node {
        Node::Term(value) => corpus.matches(value),
        Node::Not(operand) => !eval_node(operand, corpus),
        Node::And(left, right) => {
            let left = eval_node(left, corpus);
            let right = eval_node(right, corpus);
            left && right
        }
        Node::Or(left, right) => {
            let left = eval_node(left, corpus);
            let right = eval_node(right, corpus);
            left || right
        }
    }
}

/// Corpus words matched by a single term under `options`.
pub fn matching_words<S: AsRef<str>>(term: &str, corpus: &[S], options: MatchOptions) -> Vec<String> {
    NormalizedCorpus::new(corpus, options).hits(term)
}
