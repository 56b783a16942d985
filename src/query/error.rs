//! Query validation errors
//!
//! Every failure is a property of the query text itself: evaluation is pure,
//! so resubmitting the same string fails the same way.

use crate::query::operators::Operator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A `)` without its `(`, or a `(` still open at end of input
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// An operator found fewer operands than its arity while building the tree
    #[error("invalid expression: missing operand for '{operator}'")]
    MissingOperand { operator: Operator },

    /// The operand stack did not reduce to exactly one expression
    #[error("invalid expression: {operands} operands left after reduction (expected 1)")]
    MalformedExpression { operands: usize },

    /// A quote character that does not open a terminated quoted literal
    #[error("unterminated quoted literal at byte {offset}")]
    UnterminatedQuote { offset: usize },

    /// The expression tree is deeper than the configured bound
    #[error("expression tree deeper than {limit} levels")]
    TreeTooDeep { limit: usize },
}
