//! Language profiles: keyword, operator, delimiter and error-rule tables.
//!
//! - `LanguageId::profile()` → the shared, read-only table for that language
//! - `LanguageId::from_extension(ext)` → infer the language of a file
//! - Operators and string delimiters are stored longest-first.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, ErrorKind};
use crate::core::rules::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Java,
    #[value(alias = "py")]
    Python,
    #[value(alias = "c++")]
    Cpp,
}

impl LanguageId {
    pub const ALL: [LanguageId; 3] = [LanguageId::Java, LanguageId::Python, LanguageId::Cpp];

    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            LanguageId::Java => &JAVA,
            LanguageId::Python => &PYTHON,
            LanguageId::Cpp => &CPP,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LanguageId::Java => "Java",
            LanguageId::Python => "Python",
            LanguageId::Cpp => "C++",
        }
    }

    /// Extension without the dot, any case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.profile().extensions.iter().any(|e| *e == ext))
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LanguageId::Java => "java",
            LanguageId::Python => "python",
            LanguageId::Cpp => "cpp",
        };
        f.write_str(name)
    }
}

impl FromStr for LanguageId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(LanguageId::Java),
            "python" | "py" => Ok(LanguageId::Python),
            "cpp" | "c++" | "cxx" => Ok(LanguageId::Cpp),
            _ => Err(CoreError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Comment delimiters; an end of `"\n"` marks a line comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub start: &'static str,
    pub end: &'static str,
}

impl CommentStyle {
    pub const fn line(start: &'static str) -> Self {
        Self { start, end: "\n" }
    }

    pub const fn block(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    pub fn is_line(&self) -> bool {
        self.end == "\n"
    }
}

#[derive(Debug, Clone)]
pub struct ErrorRule {
    pub kind: ErrorKind,
    pub pattern: Pattern,
    pub message: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug)]
pub struct LanguageProfile {
    pub id: LanguageId,
    pub keywords: HashSet<&'static str>,
    /// Longest first.
    pub operators: Vec<&'static str>,
    pub separators: HashSet<char>,
    pub comment_styles: Vec<CommentStyle>,
    /// Longest first.
    pub string_delimiters: Vec<&'static str>,
    pub error_rules: Vec<ErrorRule>,
    pub extensions: &'static [&'static str],
}

impl LanguageProfile {
    fn new(
        id: LanguageId,
        keywords: &[&'static str],
        operators: &[&'static str],
        separators: &str,
        comment_styles: Vec<CommentStyle>,
        string_delimiters: &[&'static str],
        error_rules: Vec<ErrorRule>,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            keywords: keywords.iter().copied().collect(),
            operators: longest_first(operators),
            separators: separators.chars().collect(),
            comment_styles,
            string_delimiters: longest_first(string_delimiters),
            error_rules,
            extensions,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Longest operator that prefixes `rest` (maximal munch).
    pub fn match_operator(&self, rest: &str) -> Option<&'static str> {
        self.operators.iter().copied().find(|op| rest.starts_with(op))
    }

    pub fn match_comment(&self, rest: &str) -> Option<&CommentStyle> {
        self.comment_styles.iter().find(|s| rest.starts_with(s.start))
    }

    pub fn match_string_delimiter(&self, rest: &str) -> Option<&'static str> {
        self.string_delimiters.iter().copied().find(|d| rest.starts_with(d))
    }

    /// Keywords in alphabetical order.
    pub fn sorted_keywords(&self) -> Vec<&'static str> {
        let mut words: Vec<_> = self.keywords.iter().copied().collect();
        words.sort_unstable();
        words
    }
}

fn longest_first(items: &[&'static str]) -> Vec<&'static str> {
    let mut v = items.to_vec();
    // Stable: equal lengths keep table order.
    v.sort_by(|a, b| b.len().cmp(&a.len()));
    v
}

// ----- shared rule tables -----

fn unclosed_string() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::UnclosedString,
        pattern: Pattern::UnclosedString,
        message: "Unclosed string literal",
        suggestion: "Add the matching closing quote to terminate the string",
    }
}

fn unclosed_comment() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::UnclosedComment,
        pattern: Pattern::UnclosedBlockComment,
        message: "Unclosed block comment",
        suggestion: "Close the comment with */",
    }
}

fn invalid_identifier() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::InvalidIdentifier,
        pattern: Pattern::DigitLedIdentifier,
        message: "Invalid identifier: identifiers cannot start with a digit",
        suggestion: "Rename the identifier so it starts with a letter or underscore",
    }
}

fn unmatched_parenthesis() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::UnmatchedParenthesis,
        pattern: Pattern::UnclosedOpener { open: '(', close: ')' },
        message: "Unmatched opening parenthesis",
        suggestion: "Add a closing ')' for the open parenthesis",
    }
}

fn unmatched_brace() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::UnmatchedBrace,
        pattern: Pattern::UnclosedOpener { open: '{', close: '}' },
        message: "Unmatched opening brace",
        suggestion: "Add a closing '}' for the open block",
    }
}

fn unmatched_bracket() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::UnmatchedBracket,
        pattern: Pattern::UnclosedOpener { open: '[', close: ']' },
        message: "Unmatched opening bracket",
        suggestion: "Add a closing ']' for the open bracket",
    }
}

fn indentation_error() -> ErrorRule {
    ErrorRule {
        kind: ErrorKind::IndentationError,
        pattern: Pattern::SpacesThenTab,
        message: "Inconsistent indentation: tab character after spaces",
        suggestion: "Indent with spaces only (4 per level is conventional)",
    }
}

// ----- profiles -----

static JAVA: Lazy<LanguageProfile> = Lazy::new(|| {
    LanguageProfile::new(
        LanguageId::Java,
        &[
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
            "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
            "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
            "interface", "long", "native", "new", "package", "private", "protected", "public",
            "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
            "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
            "null", "var", "record", "yield",
        ],
        &[
            "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&",
            "|", "^", "~", "<<", ">>", ">>>", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
            "|=", "^=", "<<=", ">>=", ">>>=", "?", ":", "->", "::",
        ],
        "()[]{},;.@",
        vec![CommentStyle::line("//"), CommentStyle::block("/*", "*/")],
        &["\"\"\"", "\"", "'"],
        vec![
            unclosed_string(),
            unclosed_comment(),
            invalid_identifier(),
            unmatched_parenthesis(),
            unmatched_brace(),
            unmatched_bracket(),
        ],
        &["java"],
    )
});

static PYTHON: Lazy<LanguageProfile> = Lazy::new(|| {
    LanguageProfile::new(
        LanguageId::Python,
        &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
            "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
            "return", "try", "while", "with", "yield",
        ],
        &[
            "+", "-", "*", "/", "//", "%", "**", "=", "==", "!=", "<", ">", "<=", ">=", "&", "|",
            "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "//=", "%=", "**=", "&=", "|=", "^=",
            "<<=", ">>=", "->", ":=", "@", "@=",
        ],
        "()[]{},:;.",
        vec![CommentStyle::line("#")],
        &["\"\"\"", "'''", "\"", "'"],
        vec![
            unclosed_string(),
            invalid_identifier(),
            unmatched_parenthesis(),
            unmatched_bracket(),
            unmatched_brace(),
            indentation_error(),
        ],
        &["py", "pyw"],
    )
});

static CPP: Lazy<LanguageProfile> = Lazy::new(|| {
    LanguageProfile::new(
        LanguageId::Cpp,
        &[
            "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr",
            "continue", "default", "delete", "do", "double", "else", "enum", "explicit", "extern",
            "false", "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
            "namespace", "new", "nullptr", "operator", "private", "protected", "public",
            "register", "return", "short", "signed", "sizeof", "static", "struct", "switch",
            "template", "this", "throw", "true", "try", "typedef", "typename", "union",
            "unsigned", "using", "virtual", "void", "volatile", "while",
        ],
        &[
            "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "<=>", "&&", "||",
            "!", "&", "|", "^", "~", "<<", ">>", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
            "|=", "^=", "<<=", ">>=", "->", "->*", ".*", "::", "?", ":",
        ],
        "()[]{},;.#",
        vec![CommentStyle::line("//"), CommentStyle::block("/*", "*/")],
        &["\"", "'"],
        vec![
            unclosed_string(),
            unclosed_comment(),
            invalid_identifier(),
            unmatched_parenthesis(),
            unmatched_brace(),
            unmatched_bracket(),
        ],
        &["cpp", "cc", "cxx", "h", "hpp", "hh"],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_are_longest_first() {
        for id in LanguageId::ALL {
            let ops = &id.profile().operators;
            assert!(ops.windows(2).all(|w| w[0].len() >= w[1].len()), "{id}");
        }
    }

    #[test]
    fn maximal_munch_prefers_longest() {
        let java = LanguageId::Java.profile();
        assert_eq!(java.match_operator(">>= b"), Some(">>="));
        assert_eq!(java.match_operator(">>>= b"), Some(">>>="));
        assert_eq!(java.match_operator("> b"), Some(">"));
        assert_eq!(java.match_operator("(x"), None);
    }

    #[test]
    fn triple_quote_wins_over_single() {
        let py = LanguageId::Python.profile();
        assert_eq!(py.match_string_delimiter("\"\"\"doc\"\"\""), Some("\"\"\""));
        assert_eq!(py.match_string_delimiter("\"x\""), Some("\""));
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Java".parse::<LanguageId>().unwrap(), LanguageId::Java);
        assert_eq!("py".parse::<LanguageId>().unwrap(), LanguageId::Python);
        assert_eq!("c++".parse::<LanguageId>().unwrap(), LanguageId::Cpp);
        assert!("cobol".parse::<LanguageId>().is_err());
    }

    #[test]
    fn extensions_select_profiles() {
        assert_eq!(LanguageId::from_extension("JAVA"), Some(LanguageId::Java));
        assert_eq!(LanguageId::from_extension("hpp"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_extension("py"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_extension("txt"), None);
    }

    #[test]
    fn only_python_checks_indentation() {
        for id in LanguageId::ALL {
            let has = id
                .profile()
                .error_rules
                .iter()
                .any(|r| r.kind == ErrorKind::IndentationError);
            assert_eq!(has, id == LanguageId::Python, "{id}");
        }
    }

    #[test]
    fn python_has_no_block_comments() {
        let py = LanguageId::Python.profile();
        assert!(py.comment_styles.iter().all(CommentStyle::is_line));
        assert!(py.error_rules.iter().all(|r| r.kind != ErrorKind::UnclosedComment));
    }
}
