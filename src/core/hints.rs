//! Identifiers that look like misspelled keywords.

use serde::Serialize;

use crate::core::language::LanguageProfile;
use crate::core::token::{Token, TokenKind};

const SIMILARITY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordHint {
    pub identifier: String,
    pub keyword: &'static str,
    pub line: usize,
    pub column: usize,
    pub similarity: f64,
}

impl std::fmt::Display for KeywordHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: '{}' might be a misspelling of '{}'",
            self.line, self.column, self.identifier, self.keyword
        )
    }
}

/// Share of positions holding the same character; 0 when lengths differ.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    if a_len != b_len || a_len == 0 {
        return 0.0;
    }
    let same = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    same as f64 / a_len as f64
}

pub fn keyword_typos(tokens: &[Token], profile: &LanguageProfile) -> Vec<KeywordHint> {
    let keywords = profile.sorted_keywords();
    let mut hints = Vec::new();
    for tok in tokens.iter().filter(|t| t.kind == TokenKind::Identifier) {
        for kw in &keywords {
            let score = similarity(&tok.text, kw);
            if (SIMILARITY_THRESHOLD..1.0).contains(&score) {
                hints.push(KeywordHint {
                    identifier: tok.text.clone(),
                    keyword: *kw,
                    line: tok.line,
                    column: tok.column,
                    similarity: score,
                });
            }
        }
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::analyze;
    use crate::core::language::LanguageId;

    #[test]
    fn similarity_is_positional() {
        assert_eq!(similarity("retutn", "return"), 5.0 / 6.0);
        assert_eq!(similarity("whlie", "while"), 0.6);
        assert_eq!(similarity("if", "iff"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn flags_near_keywords_only() {
        let result = analyze("retutn x;\nwhlie (y) {}", LanguageId::Java);
        let hints = keyword_typos(&result.tokens, LanguageId::Java.profile());
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].keyword, "return");
        assert_eq!((hints[0].line, hints[0].column), (1, 1));
        assert_eq!(hints[0].to_string(), "1:1: 'retutn' might be a misspelling of 'return'");
    }

    #[test]
    fn exact_keywords_are_not_hints() {
        let result = analyze("def f(): return None", LanguageId::Python);
        assert!(keyword_typos(&result.tokens, LanguageId::Python.profile()).is_empty());
    }
}
