//! `analyze`: rule pass, token pass and statistics for one source text.

use serde::Serialize;

use crate::core::error::ErrorRecord;
use crate::core::error_scanner;
use crate::core::language::{LanguageId, LanguageProfile};
use crate::core::lexer::Lexer;
use crate::core::stats::Statistics;
use crate::core::token::Token;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub language: LanguageId,
    pub tokens: Vec<Token>,
    /// Rule records first, then scan records in source order.
    pub errors: Vec<ErrorRecord>,
    pub stats: Statistics,
}

pub fn analyze(source: &str, language: LanguageId) -> AnalysisResult {
    analyze_with_profile(source, language.profile())
}

pub fn analyze_with_profile(source: &str, profile: &LanguageProfile) -> AnalysisResult {
    let mut errors = error_scanner::scan(source, profile);
    let scan = Lexer::new(source, profile).tokenize();
    errors.extend(scan.errors);
    let stats = Statistics::collect(&scan.tokens, &errors);
    crate::debug_log!(
        "[analyze] {} bytes as {}: {} tokens, {} errors",
        source.len(),
        profile.id,
        stats.total_tokens,
        stats.errors
    );
    AnalysisResult {
        language: profile.id,
        tokens: scan.tokens,
        errors,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorOrigin;

    #[test]
    fn rule_records_precede_scan_records() {
        let result = analyze("f(x = \"abc", LanguageId::Java);
        let origins: Vec<_> = result.errors.iter().map(|e| e.origin).collect();
        assert_eq!(
            origins,
            vec![ErrorOrigin::Rule, ErrorOrigin::Rule, ErrorOrigin::Scan]
        );
    }

    #[test]
    fn stats_match_lists() {
        let result = analyze("x = 1 + 'a'", LanguageId::Python);
        assert_eq!(result.stats.total_tokens, result.tokens.len());
        assert_eq!(result.stats.literals, 2);
        assert_eq!(result.stats.errors, result.errors.len());
    }
}
