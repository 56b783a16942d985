//! Treeviz formatter for expression trees

use crate::query::ast::Node;
use crate::query::literal::quote;

/// Render a tree as display lines, root first, left child before right.
pub fn render_tree(node: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    append_node(&mut lines, node, "", true);
    lines
}

pub fn to_treeviz_str(node: &Node) -> String {
    let mut result = render_tree(node).join("\n");
    result.push('\n');
    result
}

fn append_node(lines: &mut Vec<String>, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = match node {
        Node::Term(value) => format!("{}: {}", node.kind(), quote(value)),
        _ => node.kind().to_string(),
    };
    lines.push(format!("{}{} {}", prefix, connector, label));

    let new_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(lines, child, &new_prefix, is_last);
    }
}
