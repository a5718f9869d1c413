//! Token-kind transition graph.
//!
//! Nodes are the distinct kinds in first-seen order behind a synthetic
//! `start` node. Each adjacent pair of tokens adds one to the weight of the
//! edge between their kinds; `start` precedes the first token.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Start,
    Kind(TokenKind),
}

impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}

impl Node {
    pub fn label(self) -> &'static str {
        match self {
            Node::Start => "start",
            Node::Kind(kind) => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionGraph {
    pub nodes: Vec<Node>,
    /// In order of first occurrence.
    pub edges: Vec<Edge>,
}

impl TransitionGraph {
    pub fn build(tokens: &[Token]) -> Self {
        let mut graph = TransitionGraph {
            nodes: vec![Node::Start],
            edges: Vec::new(),
        };
        let mut prev = Node::Start;
        for tok in tokens {
            let node = Node::Kind(tok.kind);
            if !graph.nodes.contains(&node) {
                graph.nodes.push(node);
            }
            match graph.edges.iter_mut().find(|e| e.from == prev && e.to == node) {
                Some(edge) => edge.weight += 1,
                None => graph.edges.push(Edge { from: prev, to: node, weight: 1 }),
            }
            prev = node;
        }
        graph
    }

    pub fn weight(&self, from: Node, to: Node) -> usize {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map_or(0, |e| e.weight)
    }

    /// Graphviz rendering.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph tokens {\n    rankdir=LR;\n");
        for node in &self.nodes {
            let shape = if *node == Node::Start { "doublecircle" } else { "ellipse" };
            let _ = writeln!(out, "    \"{}\" [shape={}];", node.label(), shape);
        }
        for edge in &self.edges {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                edge.from.label(),
                edge.to.label(),
                edge.weight
            );
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::analyze;
    use crate::core::language::LanguageId;

    #[test]
    fn weights_count_adjacent_pairs() {
        let result = analyze("a = b; c = d;", LanguageId::Java);
        let g = TransitionGraph::build(&result.tokens);
        let ident = Node::Kind(TokenKind::Identifier);
        let op = Node::Kind(TokenKind::Operator);
        let sep = Node::Kind(TokenKind::Separator);
        assert_eq!(g.nodes, vec![Node::Start, ident, op, sep]);
        assert_eq!(g.weight(Node::Start, ident), 1);
        assert_eq!(g.weight(ident, op), 2);
        assert_eq!(g.weight(op, ident), 2);
        assert_eq!(g.weight(ident, sep), 2);
        assert_eq!(g.weight(sep, ident), 1);
        let total: usize = g.edges.iter().map(|e| e.weight).sum();
        assert_eq!(total, result.tokens.len());
    }

    #[test]
    fn empty_token_list_has_only_start() {
        let g = TransitionGraph::build(&[]);
        assert_eq!(g.nodes, vec![Node::Start]);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn dot_output_lists_edges() {
        let result = analyze("x", LanguageId::Python);
        let dot = TransitionGraph::build(&result.tokens).to_dot();
        assert!(dot.starts_with("digraph tokens {"));
        assert!(dot.contains("\"start\" -> \"identifier\" [label=\"1\"];"), "{dot}");
    }

    #[test]
    fn serializes_start_as_string() {
        let g = TransitionGraph::build(&[]);
        assert_eq!(serde_json::to_string(&g).unwrap(), r#"{"nodes":["start"],"edges":[]}"#);
    }
}
