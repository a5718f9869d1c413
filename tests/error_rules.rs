use polylex::core::error::{ErrorKind, ErrorOrigin};
use polylex::{analyze, LanguageId};

fn rule_kinds(src: &str, lang: LanguageId) -> Vec<ErrorKind> {
    analyze(src, lang)
        .errors
        .into_iter()
        .filter(|e| e.origin == ErrorOrigin::Rule)
        .map(|e| e.kind)
        .collect()
}

#[test]
fn quotes_inside_comments_are_not_strings() {
    assert!(rule_kinds("// don't\nint x;", LanguageId::Java).is_empty());
    assert!(rule_kinds("# it's fine\nx = 1", LanguageId::Python).is_empty());
}

#[test]
fn comment_openers_inside_strings_are_not_comments() {
    assert!(rule_kinds("s = \"/* not a comment\";", LanguageId::Cpp).is_empty());
}

#[test]
fn bracket_check_only_looks_at_the_last_opener() {
    assert!(rule_kinds("([)]", LanguageId::Java).is_empty());
    assert_eq!(rule_kinds("() (", LanguageId::Java), vec![ErrorKind::UnmatchedParenthesis]);
}

#[test]
fn digit_led_identifiers() {
    assert_eq!(rule_kinds("int 2x = 1;", LanguageId::Cpp), vec![ErrorKind::InvalidIdentifier]);
    assert!(rule_kinds("long n = 10L; float f = 1.5f; double d = 2e10;", LanguageId::Java).is_empty());
}

#[test]
fn rule_records_sit_at_the_start_of_input() {
    let result = analyze("int a;\n\n\nint b = (c;", LanguageId::Cpp);
    let rec = &result.errors[0];
    assert_eq!(rec.kind, ErrorKind::UnmatchedParenthesis);
    assert_eq!((rec.line, rec.column), (1, 1));
    assert_eq!(rec.suggestion, "Add a closing ')' for the open parenthesis");
}

#[test]
fn unclosed_block_comment_is_reported_once() {
    let result = analyze("x /* dangling", LanguageId::Java);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::UnclosedComment);
    assert_eq!(result.tokens.last().map(|t| t.text.as_str()), Some("/* dangling"));
}
