//! Tree construction from postfix tokens
//!
//! A value stack of finished subtrees is reduced one operator at a time.
//! Each entry remembers its depth so that a tree deeper than the bound
//! is rejected before anything recursive (evaluation, rendering, drop) ever
//! walks it.

use crate::query::ast::Node;
use crate::query::error::QueryError;
use crate::query::lexing::Token;
use crate::query::literal::unquote;
use crate::query::operators::Operator;

/// Tree depth bound used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Build an expression tree from postfix tokens with the default depth bound.
pub fn build_tree(postfix: &[Token]) -> Result<Node, QueryError> {
    build_tree_with_limit(postfix, DEFAULT_MAX_DEPTH)
}

/// Build an expression tree from postfix tokens.
///
/// For a binary operator the first operand popped is the right-hand side.
/// Fails with [`QueryError::MissingOperand`] when an operator finds too few
/// operands, and with [`QueryError::MalformedExpression`] unless exactly one
/// tree remains at the end.
pub fn build_tree_with_limit(postfix: &[Token], max_depth: usize) -> Result<Node, QueryError> {
    let mut stack: Vec<(Node, usize)> = Vec::new();

    for token in postfix {
        let entry = match token {
            Token::Literal(text) => (Node::Term(unquote(text)), 1),
            Token::Operator(op) => reduce(&mut stack, *op)?,
            // to_postfix never emits parentheses
            Token::OpenParen | Token::CloseParen => {
                return Err(QueryError::UnbalancedParentheses)
            }
        };
        if entry.1 > max_depth {
            return Err(QueryError::TreeTooDeep { limit: max_depth });
        }
        stack.push(entry);
    }

    if stack.len() != 1 {
        return Err(QueryError::MalformedExpression {
            operands: stack.len(),
        });
    }
    let (root, depth) = stack.remove(0);
    log::debug!("built tree of depth {}", depth);
    Ok(root)
}

fn reduce(stack: &mut Vec<(Node, usize)>, op: Operator) -> Result<(Node, usize), QueryError> {
    if stack.len() < op.arity() {
        return Err(QueryError::MissingOperand { operator: op });
    }
    let mut pop = || stack.pop().ok_or(QueryError::MissingOperand { operator: op });

    match op {
        Operator::Not => {
            let (operand, depth) = pop()?;
            Ok((Node::not(operand), depth + 1))
        }
        Operator::And | Operator::Or => {
            let (right, right_depth) = pop()?;
            let (left, left_depth) = pop()?;
            let node = if op == Operator::And {
                Node::and(left, right)
            } else {
                Node::or(left, right)
            };
            Ok((node, left_depth.max(right_depth) + 1))
        }
    }
}
