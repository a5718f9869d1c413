//! Plain-text views over analysis output. Color is added by the callers.

use std::fmt::Write as _;

use crate::core::error::ErrorRecord;
use crate::core::frequency::{Counter, FrequencyReport};
use crate::core::hints::KeywordHint;
use crate::core::stats::Statistics;
use crate::core::token::Token;

/// Escapes line breaks and tabs, then shortens to `width` characters.
pub fn display_value(text: &str, width: usize) -> String {
    let escaped = text
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    if escaped.chars().count() > width {
        let head: String = escaped.chars().take(width.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        escaped
    }
}

pub fn token_table(tokens: &[Token], width: usize) -> String {
    if tokens.is_empty() {
        return "No tokens found\n".to_string();
    }
    let rule = "-".repeat(width + 35);
    let mut out = String::new();
    let _ = writeln!(out, "{:<15} {:<width$} {:<8} Column", "Type", "Value", "Line");
    let _ = writeln!(out, "{rule}");
    for tok in tokens {
        let kind = match tok.error_kind {
            Some(err) => format!("error:{err}"),
            None => tok.kind.to_string(),
        };
        let _ = writeln!(
            out,
            "{:<15} {:<width$} {:<8} {}",
            kind,
            display_value(&tok.text, width),
            tok.line,
            tok.column
        );
    }
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total Tokens: {}", tokens.len());
    out
}

pub fn error_list(errors: &[ErrorRecord]) -> String {
    if errors.is_empty() {
        return "No errors found\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "ERRORS FOUND ({}):", errors.len());
    for (i, rec) in errors.iter().enumerate() {
        let _ = writeln!(out, "{}. [{}:{}] {} ({})", i + 1, rec.line, rec.column, rec.message, rec.kind);
        let _ = writeln!(out, "   suggestion: {}", rec.suggestion);
    }
    out
}

pub fn stats_report(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Tokens: {}", stats.total_tokens);
    let _ = writeln!(out, "Unique Values: {}", stats.unique_values);
    let _ = writeln!(out, "Lines Analyzed: {}", stats.lines_analyzed);
    out.push('\n');
    for (name, count) in stats.counters() {
        let _ = writeln!(out, "{:<12} {}", format!("{name}:"), count);
    }
    let dist = stats.distribution();
    if !dist.is_empty() {
        out.push_str("\nToken Type Distribution:\n");
        for share in dist {
            let _ = writeln!(out, "{}: {} ({:.1}%)", share.label, share.count, share.percent);
        }
    }
    out
}

fn counter_section(out: &mut String, title: &str, counter: &Counter, top: usize) {
    if counter.entries.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{} ({} total):", title, counter.total());
    for (text, n) in counter.top(top) {
        let _ = writeln!(out, "  {:<20} {}", display_value(text, 20), n);
    }
}

pub fn frequency_report(report: &FrequencyReport, top: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Tokens: {}", report.total_tokens);
    let _ = writeln!(out, "Unique Tokens: {}", report.unique_tokens);
    let _ = writeln!(out, "Lines With Tokens: {}", report.lines.len());
    if let Some((line, count)) = report.busiest_line() {
        let _ = writeln!(out, "Busiest Line: {line} ({count} tokens)");
    }
    counter_section(&mut out, "Keywords", &report.keywords, top);
    counter_section(&mut out, "Identifiers", &report.identifiers, top);
    counter_section(&mut out, "Operators", &report.operators, top);
    counter_section(&mut out, "Numbers", &report.numbers, top);
    counter_section(&mut out, "Strings", &report.strings, top);
    out
}

pub fn hint_list(hints: &[KeywordHint]) -> String {
    if hints.is_empty() {
        return "No suspicious identifiers\n".to_string();
    }
    let mut out = String::new();
    for hint in hints {
        let _ = writeln!(out, "{hint} ({:.0}% similar)", hint.similarity * 100.0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::analyze;
    use crate::core::language::LanguageId;

    #[test]
    fn long_values_are_shortened() {
        assert_eq!(display_value("abcdefghij", 8), "abcde...");
        assert_eq!(display_value("a\nb", 8), "a\\nb");
        assert_eq!(display_value("short", 8), "short");
        assert_eq!(display_value("\"q\"", 8), "\"q\"");
    }

    #[test]
    fn token_table_snapshot() {
        let result = analyze("if (x) {}", LanguageId::Java);
        insta::assert_snapshot!(token_table(&result.tokens, 10), @r###"
        Type            Value      Line     Column
        ---------------------------------------------
        keyword         if         1        1
        separator       (          1        4
        identifier      x          1        5
        separator       )          1        6
        separator       {          1        8
        separator       }          1        9
        ---------------------------------------------
        Total Tokens: 6
        "###);
    }

    #[test]
    fn error_list_snapshot() {
        let result = analyze("x = \"abc", LanguageId::Python);
        insta::assert_snapshot!(error_list(&result.errors), @r###"
        ERRORS FOUND (2):
        1. [1:1] Unclosed string literal (unclosed-string)
           suggestion: Add the matching closing quote to terminate the string
        2. [1:5] Unclosed string literal starting with " (unclosed-string)
           suggestion: Add a closing " to terminate the string
        "###);
    }

    #[test]
    fn empty_views() {
        assert_eq!(error_list(&[]), "No errors found\n");
        assert_eq!(token_table(&[], 10), "No tokens found\n");
        assert_eq!(hint_list(&[]), "No suspicious identifiers\n");
    }

    #[test]
    fn stats_report_lists_distribution() {
        let result = analyze("a = 1", LanguageId::Python);
        let out = stats_report(&result.stats);
        assert!(out.contains("literals:    1"), "{out}");
        assert!(out.contains("identifiers: 1 (33.3%)"), "{out}");
    }
}
