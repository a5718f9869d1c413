//! Per-category counters derived from a token list and an error list.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::error::ErrorRecord;
use crate::core::token::{Token, TokenKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_tokens: usize,
    pub keywords: usize,
    pub identifiers: usize,
    /// String and number literals together.
    pub literals: usize,
    pub operators: usize,
    pub separators: usize,
    pub comments: usize,
    pub error_tokens: usize,
    /// Length of the error list (rule and scan records).
    pub errors: usize,
    pub unique_values: usize,
    pub lines_analyzed: usize,
}

/// One row of the kind distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: &'static str,
    pub count: usize,
    pub percent: f64,
}

impl Statistics {
    pub fn collect(tokens: &[Token], errors: &[ErrorRecord]) -> Self {
        let mut stats = Statistics {
            total_tokens: tokens.len(),
            errors: errors.len(),
            ..Default::default()
        };
        for tok in tokens {
            match tok.kind {
                TokenKind::Keyword => stats.keywords += 1,
                TokenKind::Identifier => stats.identifiers += 1,
                TokenKind::StringLiteral | TokenKind::NumberLiteral => stats.literals += 1,
                TokenKind::Operator => stats.operators += 1,
                TokenKind::Separator => stats.separators += 1,
                TokenKind::Comment => stats.comments += 1,
                TokenKind::Error => stats.error_tokens += 1,
            }
        }
        stats.unique_values = tokens.iter().map(|t| t.text.as_str()).collect::<HashSet<_>>().len();
        stats.lines_analyzed = tokens.iter().map(|t| t.line).collect::<HashSet<_>>().len();
        stats
    }

    /// Named counters in display order.
    pub fn counters(&self) -> [(&'static str, usize); 7] {
        [
            ("keywords", self.keywords),
            ("identifiers", self.identifiers),
            ("literals", self.literals),
            ("operators", self.operators),
            ("separators", self.separators),
            ("comments", self.comments),
            ("errors", self.errors),
        ]
    }

    /// Non-empty token categories, most common first.
    pub fn distribution(&self) -> Vec<Share> {
        let mut rows: Vec<Share> = [
            ("keywords", self.keywords),
            ("identifiers", self.identifiers),
            ("literals", self.literals),
            ("operators", self.operators),
            ("separators", self.separators),
            ("comments", self.comments),
            ("error tokens", self.error_tokens),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| Share {
            label,
            count,
            percent: count as f64 * 100.0 / self.total_tokens as f64,
        })
        .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }
}
