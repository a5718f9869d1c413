//! Whole-text rule pass, run once before tokenization.
//!
//! Every profile rule is evaluated against the complete source. A rule that
//! matches anywhere yields exactly one record. Records carry the scan
//! cursor's position at the start of the pass (1:1), not the match site.

use crate::core::cursor::Cursor;
use crate::core::error::{ErrorOrigin, ErrorRecord};
use crate::core::language::LanguageProfile;

pub fn scan(text: &str, profile: &LanguageProfile) -> Vec<ErrorRecord> {
    let cursor = Cursor::start();
    profile
        .error_rules
        .iter()
        .filter(|rule| rule.pattern.is_match(text, profile))
        .map(|rule| {
            crate::debug_log!("[rules] {} matched", rule.kind);
            ErrorRecord {
                kind: rule.kind,
                message: rule.message.to_string(),
                line: cursor.line,
                column: cursor.column,
                suggestion: rule.suggestion.to_string(),
                origin: ErrorOrigin::Rule,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::language::LanguageId;

    fn kinds(text: &str, lang: LanguageId) -> Vec<ErrorKind> {
        scan(text, lang.profile()).into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn clean_source_has_no_records() {
        assert!(kinds("int main() { return a[0]; }", LanguageId::Cpp).is_empty());
        assert!(kinds("def f(x):\n    return [x]\n", LanguageId::Python).is_empty());
    }

    #[test]
    fn one_record_per_rule_regardless_of_occurrences() {
        let found = kinds("f( g( h(", LanguageId::Java);
        assert_eq!(found, vec![ErrorKind::UnmatchedParenthesis]);
    }

    #[test]
    fn records_follow_profile_order() {
        let found = kinds("x = [1, (2\n  \ty = \"open", LanguageId::Python);
        assert_eq!(
            found,
            vec![
                ErrorKind::UnclosedString,
                ErrorKind::UnmatchedParenthesis,
                ErrorKind::UnmatchedBracket,
                ErrorKind::IndentationError,
            ]
        );
    }

    #[test]
    fn positions_are_scan_start() {
        let records = scan("int a;\nint b;\n/* open", LanguageId::Java.profile());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, ErrorKind::UnclosedComment);
        assert_eq!((records[0].line, records[0].column), (1, 1));
        assert_eq!(records[0].origin, ErrorOrigin::Rule);
    }

    #[test]
    fn indentation_rule_is_python_only() {
        assert!(kinds("class A {\n  \tint x;\n}", LanguageId::Java).is_empty());
        assert_eq!(kinds("if x:\n  \tpass", LanguageId::Python), vec![ErrorKind::IndentationError]);
    }

    #[test]
    fn digit_led_identifier() {
        assert_eq!(kinds("int 9lives = 1;", LanguageId::Cpp), vec![ErrorKind::InvalidIdentifier]);
    }
}
