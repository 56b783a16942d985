//! Operator metadata
//!
//! The three connectives of the query language and their static precedence
//! and arity tables. Keywords are Spanish: `no` (not), `y` (and), `o` (or).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Not,
    And,
    Or,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Not, Operator::And, Operator::Or];

    /// Binding strength: `no` > `y` > `o`
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Not => 3,
            Operator::And => 2,
            Operator::Or => 1,
        }
    }

    /// Number of operands consumed during tree construction
    pub const fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }

    /// `no` is unary and groups right to left; the binaries group left to right.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Operator::Not)
    }

    /// Canonical lowercase keyword
    pub const fn keyword(self) -> &'static str {
        match self {
            Operator::Not => "no",
            Operator::And => "y",
            Operator::Or => "o",
        }
    }

    /// Case-insensitive keyword lookup. Only whole words qualify.
    pub fn from_keyword(word: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.keyword().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
