//! Boolean query language for filtering short text labels
//!
//! Queries combine words with `y` (and), `o` (or), `no` (not) and
//! parentheses; words containing spaces or keywords are quoted:
//!
//! ```text
//! ingenieria y (sistemas o software) y no civil
//! "ciencia de datos" o 'y'
//! ```
//!
//! The stages, leaf to root:
//!
//! - [`normalize`]: case folding and accent stripping, used only when matching
//! - [`lexing`]: query text to tokens
//! - [`parsing`]: shunting-yard reordering to postfix
//! - [`building`]: postfix tokens to an immutable [`ast::Node`] tree
//! - [`formats`]: infix text, visual tree and JSON renderings
//! - [`evaluation`]: plain and traced matching against a corpus of words
//! - [`pipeline`]: the composed entry points
//!
//! Every stage is a pure function returning `Result<_, QueryError>`.

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod formats;
pub mod lexing;
pub mod literal;
pub mod normalize;
pub mod operators;
pub mod parsing;
pub mod pipeline;
