//! Output formats for expression trees
//!
//! - `infix`: canonical, fully parenthesized query text that parses back to
//!   an equivalent tree
//! - `treeviz`: indented box-drawing tree for terminals
//! - `json`: serde representation of [`Node`]

pub mod infix;
pub mod treeviz;

pub use infix::to_infix_string;
pub use treeviz::{render_tree, to_treeviz_str};

use crate::query::ast::Node;
use std::fmt;

pub fn to_json(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(node)
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_infix_string(self))
    }
}
