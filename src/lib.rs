//! # labelquery
//!
//! A boolean query language for filtering short text labels, such as the
//! words of an academic program name, by logical combinations of words.
//!
//! See the [`query`] module for the language and its processing stages.

pub mod query;

pub use query::ast::{Node, NodeKind};
pub use query::error::QueryError;
pub use query::evaluation::{evaluate, evaluate_traced, MatchOptions, TraceEvent};
pub use query::pipeline::{
    evaluate_query, evaluate_query_traced, parse_query, CompiledQuery, QueryPipeline,
};
