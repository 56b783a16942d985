//! Composed query API
//!
//! The stages chain as tokenize -> to_postfix -> build_tree -> evaluate.
//! The free functions run the whole chain per call; [`QueryPipeline`]
//! compiles a query once into a [`CompiledQuery`] that can then be matched
//! against any number of records.
//!
//! # Examples
//!
//! ```no_run
//! use labelquery::query::pipeline::{evaluate_query, QueryPipeline};
//! use labelquery::query::evaluation::MatchOptions;
//!
//! let hit = evaluate_query(&["Ingeniería", "de", "Sistemas"], "ingenieria y sistemas", MatchOptions::default())?;
//!
//! let query = QueryPipeline::default().compile("ingenieria y no civil")?;
//! let kept: Vec<&str> = query.filter(["Ingeniería Civil", "Ingeniería de Software"]).collect();
//! ```

use crate::query::ast::Node;
use crate::query::building::{build_tree_with_limit, DEFAULT_MAX_DEPTH};
use crate::query::config::LabelQueryConfig;
use crate::query::error::QueryError;
use crate::query::evaluation::{evaluate, evaluate_traced, format_trace, MatchOptions, TraceEvent};
use crate::query::formats::{render_tree, to_infix_string};
use crate::query::lexing::tokenize;
use crate::query::parsing::to_postfix;

/// Parse a query into its expression tree.
pub fn parse_query(query: &str) -> Result<Node, QueryError> {
    QueryPipeline::default().parse(query)
}

/// Parse `query` and evaluate it against `corpus`.
pub fn evaluate_query<S: AsRef<str>>(
    corpus: &[S],
    query: &str,
    options: MatchOptions,
) -> Result<bool, QueryError> {
    Ok(evaluate(&parse_query(query)?, corpus, options))
}

/// Like [`evaluate_query`], also returning one trace event per tree node.
pub fn evaluate_query_traced<S: AsRef<str>>(
    corpus: &[S],
    query: &str,
    options: MatchOptions,
) -> Result<(bool, Vec<TraceEvent>), QueryError> {
    Ok(evaluate_traced(&parse_query(query)?, corpus, options))
}

/// Matching options plus the tree depth bound applied while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPipeline {
    options: MatchOptions,
    max_depth: usize,
}

impl Default for QueryPipeline {
    fn default() -> Self {
        QueryPipeline {
            options: MatchOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl QueryPipeline {
    pub fn new(options: MatchOptions, max_depth: usize) -> Self {
        QueryPipeline { options, max_depth }
    }

    pub fn from_config(config: &LabelQueryConfig) -> Self {
        QueryPipeline::new(config.matching.into(), config.parsing.max_depth)
    }

    pub fn parse(&self, query: &str) -> Result<Node, QueryError> {
        let tokens = tokenize(query)?;
        let postfix = to_postfix(&tokens)?;
        build_tree_with_limit(&postfix, self.max_depth)
    }

    pub fn compile(&self, query: &str) -> Result<CompiledQuery, QueryError> {
        let tree = self.parse(query)?;
        log::debug!(
            "compiled {:?} as {} ({} terms, depth {})",
            query,
            tree,
            tree.terms().len(),
            tree.depth()
        );
        Ok(CompiledQuery {
            source: query.to_string(),
            tree,
            options: self.options,
        })
    }
}

/// A parsed query bound to its matching options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    source: String,
    tree: Node,
    options: MatchOptions,
}

impl CompiledQuery {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn matches<S: AsRef<str>>(&self, corpus: &[S]) -> bool {
        evaluate(&self.tree, corpus, self.options)
    }

    /// Split a record (e.g. a program name) on whitespace and match its words.
    pub fn matches_text(&self, record: &str) -> bool {
        let words: Vec<&str> = record.split_whitespace().collect();
        self.matches(&words)
    }

    /// Keep the records whose words satisfy the query.
    pub fn filter<'q, 'r, I>(&'q self, records: I) -> impl Iterator<Item = &'r str> + 'q
    where
        I: IntoIterator<Item = &'r str>,
        I::IntoIter: 'q,
    {
        records
            .into_iter()
            .filter(move |record| self.matches_text(record))
    }

    pub fn trace<S: AsRef<str>>(&self, corpus: &[S]) -> (bool, Vec<TraceEvent>) {
        evaluate_traced(&self.tree, corpus, self.options)
    }

    /// Human-readable debug report: normalized expression, tree, per-node
    /// trace and final result.
    pub fn explain<S: AsRef<str>>(&self, corpus: &[S]) -> String {
        let (result, events) = self.trace(corpus);
        let mut lines = vec![
            format!("Expression: {}", to_infix_string(&self.tree)),
            String::new(),
            "Tree:".to_string(),
        ];
        lines.extend(render_tree(&self.tree));
        lines.push(String::new());
        lines.push("Evaluation:".to_string());
        lines.extend(format_trace(&events));
        lines.push(String::new());
        lines.push(format!("Result: {}", result));
        let mut report = lines.join("\n");
        report.push('\n');
        report
    }
}
