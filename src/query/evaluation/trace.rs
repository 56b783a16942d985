//! Traced evaluation
//!
//! Runs the same computation as [`super::evaluate`] and records one
//! [`TraceEvent`] per node, in post-order (children before their parent).

use super::{MatchOptions, NormalizedCorpus};
use crate::query::ast::{Node, NodeKind};
use crate::query::formats::to_infix_string;
use crate::query::literal::quote;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: NodeKind,
    /// Infix rendering of the evaluated subtree
    pub expression: String,
    pub result: bool,
    /// Distance from the root
    pub depth: usize,
    /// Results of the children, in order
    pub operands: Vec<bool>,
    /// Corpus words that satisfied a matching term
    pub matches: Vec<String>,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Term => {
                write!(f, "TERM {} -> {}", self.expression, self.result)?;
                if self.result {
                    let hits: Vec<String> = self.matches.iter().map(|w| quote(w)).collect();
                    write!(f, "  (match: [{}])", hits.join(", "))?;
                }
                Ok(())
            }
            NodeKind::Not => write!(
                f,
                "NOT -> {}  (inner={})",
                self.result,
                self.operands.first().copied().unwrap_or_default()
            ),
            NodeKind::And | NodeKind::Or => write!(
                f,
                "{:<3} -> {}  (left={}, right={})",
                self.kind.label(),
                self.result,
                self.operands.first().copied().unwrap_or_default(),
                self.operands.get(1).copied().unwrap_or_default()
            ),
        }
    }
}

/// Evaluate a tree and collect a trace event for every node.
pub fn evaluate_traced<S: AsRef<str>>(
    node: &Node,
    corpus: &[S],
    options: MatchOptions,
) -> (bool, Vec<TraceEvent>) {
    let corpus = NormalizedCorpus::new(corpus, options);
    let mut events = Vec::with_capacity(node.node_count());
    let result = trace_node(node, &corpus, 0, &mut events);
    (result, events)
}

fn trace_node<S: AsRef<str>>(
    node: &Node,
    corpus: &NormalizedCorpus<'_, S>,
    depth: usize,
    events: &mut Vec<TraceEvent>,
) -> bool {
    let (result, operands, matches) = match node {
        Node::Term(value) => {
            let result = corpus.matches(value);
            let matches = if result {
                corpus.hits(value)
            } else {
                Vec::new()
            };
            (result, Vec::new(), matches)
        }
        Node::Not(operand) => {
            let inner = trace_node(operand, corpus, depth + 1, events);
            (!inner, vec![inner], Vec::new())
        }
        Node::And(left, right) => {
            let left = trace_node(left, corpus, depth + 1, events);
            let right = trace_node(right, corpus, depth + 1, events);
            (left && right, vec![left, right], Vec::new())
        }
        Node::Or(left, right) => {
            let left = trace_node(left, corpus, depth + 1, events);
            let right = trace_node(right, corpus, depth + 1, events);
            (left || right, vec![left, right], Vec::new())
        }
    };

    events.push(TraceEvent {
        kind: node.kind(),
        expression: to_infix_string(node),
        result,
        depth,
        operands,
        matches,
    });
    result
}

/// Indent each event by its depth, one line per event.
pub fn format_trace(events: &[TraceEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| format!("{}{}", "  ".repeat(event.depth), event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::evaluation::evaluate;

    fn sample() -> Node {
        Node::and(Node::term("ingenieria"), Node::not(Node::term("civil")))
    }

    #[test]
    fn test_post_order_one_event_per_node() {
        let corpus = ["Ingeniería", "Civil"];
        let (result, events) = evaluate_traced(&sample(), &corpus, MatchOptions::default());
        assert!(!result);
        assert_eq!(events.len(), sample().node_count());
        let kinds: Vec<NodeKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Term, NodeKind::Term, NodeKind::Not, NodeKind::And]
        );
        assert_eq!(events[0].matches, vec!["Ingeniería"]);
        assert_eq!(events[3].depth, 0);
        assert_eq!(events[1].depth, 2);
    }

    #[test]
    fn test_agrees_with_plain_evaluation() {
        for corpus in [vec!["ingenieria"], vec!["civil"], vec![], vec!["Ingeniería", "Civil"]] {
            let (traced, _) = evaluate_traced(&sample(), &corpus, MatchOptions::default());
            assert_eq!(traced, evaluate(&sample(), &corpus, MatchOptions::default()));
        }
    }

    #[test]
    fn test_exact_mode_hit_list() {
        let corpus = ["sistemas", "sistematico"];
        let (_, events) = evaluate_traced(&Node::term("sistemas"), &corpus, MatchOptions::exact());
        assert_eq!(events[0].matches, vec!["sistemas"]);
    }

    #[test]
    fn test_formatted_lines() {
        let corpus = ["Ingeniería", "de", "Sistemas"];
        let (_, events) = evaluate_traced(&sample(), &corpus, MatchOptions::default());
        assert_eq!(
            format_trace(&events),
            vec![
                "  TERM 'ingenieria' -> true  (match: ['Ingeniería'])",
                "    TERM 'civil' -> false",
                "  NOT -> true  (inner=false)",
                "AND -> true  (left=true, right=true)",
            ]
        );
    }
}
