//! Expression tree
//!
//! A parsed query is a [`Node`]: a closed sum type over the four shapes of
//! the language. Trees are built once and never mutated; evaluation and
//! rendering are exhaustive matches over the variants.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Literal text to match, already unquoted
    Term(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

/// Variant tag of a [`Node`], used in traces and tree views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Term,
    Not,
    And,
    Or,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Term => "TERM",
            NodeKind::Not => "NOT",
            NodeKind::And => "AND",
            NodeKind::Or => "OR",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Node {
    pub fn term(value: impl Into<String>) -> Self {
        Node::Term(value.into())
    }

    pub fn not(operand: Node) -> Self {
        Node::Not(Box::new(operand))
    }

    pub fn and(left: Node, right: Node) -> Self {
        Node::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Node, right: Node) -> Self {
        Node::Or(Box::new(left), Box::new(right))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Term(_) => NodeKind::Term,
            Node::Not(_) => NodeKind::Not,
            Node::And(..) => NodeKind::And,
            Node::Or(..) => NodeKind::Or,
        }
    }

    /// Children in traversal order (left before right)
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Term(_) => Vec::new(),
            Node::Not(operand) => vec![operand.as_ref()],
            Node::And(left, right) | Node::Or(left, right) => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Number of nodes, leaves included
    pub fn node_count(&self) -> usize {
        1 + self.children().into_iter().map(Node::node_count).sum::<usize>()
    }

    /// Levels from this node down to its deepest leaf; a lone term is 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Every term value, left to right
    pub fn terms(&self) -> Vec<&str> {
        match self {
            Node::Term(value) => vec![value.as_str()],
            _ => self
                .children()
                .into_iter()
                .flat_map(Node::terms)
                .collect(),
        }
    }
}
