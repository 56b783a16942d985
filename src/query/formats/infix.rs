//! Canonical infix rendering
//!
//! Every binary node is wrapped in parentheses and every negation is written
//! as `no(...)`, so the text carries the tree's grouping explicitly and does
//! not depend on operator precedence when read back.

use crate::query::ast::Node;
use crate::query::literal::quote;

pub fn to_infix_string(node: &Node) -> String {
    match node {
        Node::Term(value) => quote(value),
        Node::Not(operand) => format!("no({})", to_infix_string(operand)),
        Node::And(left, right) => {
            format!("({} y {})", to_infix_string(left), to_infix_string(right))
        }
        Node::Or(left, right) => {
            format!("({} o {})", to_infix_string(left), to_infix_string(right))
        }
    }
}
