//! Value counters per token category and a per-line breakdown.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::core::token::{Token, TokenKind};

/// Text → occurrences, most common first (ties by text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub entries: Vec<(String, usize)>,
}

impl Counter {
    fn from_texts<'a>(texts: impl Iterator<Item = &'a str>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for t in texts {
            *counts.entry(t).or_default() += 1;
        }
        let mut entries: Vec<(String, usize)> =
            counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn get(&self, text: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == text)
            .map_or(0, |(_, n)| *n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub count: usize,
    pub kinds: BTreeSet<TokenKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    pub kinds: Vec<(TokenKind, usize)>,
    pub keywords: Counter,
    pub identifiers: Counter,
    pub operators: Counter,
    pub numbers: Counter,
    pub strings: Counter,
    pub lines: BTreeMap<usize, LineSummary>,
    pub total_tokens: usize,
    pub unique_tokens: usize,
}

impl FrequencyReport {
    pub fn collect(tokens: &[Token]) -> Self {
        let of_kind = |kind: TokenKind| {
            Counter::from_texts(tokens.iter().filter(move |t| t.kind == kind).map(|t| t.text.as_str()))
        };

        let mut kinds: Vec<(TokenKind, usize)> = TokenKind::ALL
            .into_iter()
            .map(|k| (k, tokens.iter().filter(|t| t.kind == k).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        kinds.sort_by(|a, b| b.1.cmp(&a.1));

        let mut lines: BTreeMap<usize, LineSummary> = BTreeMap::new();
        for tok in tokens {
            let entry = lines.entry(tok.line).or_insert_with(|| LineSummary {
                count: 0,
                kinds: BTreeSet::new(),
            });
            entry.count += 1;
            entry.kinds.insert(tok.kind);
        }

        Self {
            kinds,
            keywords: of_kind(TokenKind::Keyword),
            identifiers: of_kind(TokenKind::Identifier),
            operators: of_kind(TokenKind::Operator),
            numbers: of_kind(TokenKind::NumberLiteral),
            strings: of_kind(TokenKind::StringLiteral),
            lines,
            total_tokens: tokens.len(),
            unique_tokens: tokens.iter().map(|t| t.text.as_str()).collect::<HashSet<_>>().len(),
        }
    }

    /// Line with the most tokens; the earliest line wins ties.
    pub fn busiest_line(&self) -> Option<(usize, usize)> {
        self.lines
            .iter()
            .map(|(line, s)| (*line, s.count))
            .fold(None, |best, cur| match best {
                Some((_, n)) if n >= cur.1 => best,
                _ => Some(cur),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::analyze;
    use crate::core::language::LanguageId;

    #[test]
    fn counts_values_per_category() {
        let src = "if x:\n    x = x + 1\nif y:\n    pass\n";
        let result = analyze(src, LanguageId::Python);
        let report = FrequencyReport::collect(&result.tokens);
        assert_eq!(report.keywords.get("if"), 2);
        assert_eq!(report.identifiers.entries[0], ("x".to_string(), 3));
        assert_eq!(report.numbers.total(), 1);
        assert_eq!(report.kinds[0].0, TokenKind::Identifier);
        assert_eq!(report.busiest_line(), Some((2, 5)));
        assert_eq!(report.lines.len(), 4);
    }

    #[test]
    fn top_is_bounded() {
        let result = analyze("a b c", LanguageId::Java);
        let report = FrequencyReport::collect(&result.tokens);
        assert_eq!(report.identifiers.top(10).len(), 3);
        assert_eq!(report.identifiers.top(1), &[("a".to_string(), 1)]);
    }
}
