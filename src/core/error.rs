use std::fmt;

use serde::Serialize;

use crate::core::token::TokenErrorKind;

/// Library-level failures outside the analysis itself.
#[derive(Debug)]
pub enum CoreError {
    UnknownLanguage(String),
    UndetectedLanguage(String),
    InvalidConfig(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownLanguage(name) => {
                write!(f, "Unknown language '{}' (expected java, python or cpp)", name)
            }
            CoreError::UndetectedLanguage(path) => {
                write!(f, "Cannot infer a language for '{}'; pass --lang", path)
            }
            CoreError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    UnclosedString,
    UnclosedComment,
    InvalidIdentifier,
    UnmatchedParenthesis,
    UnmatchedBrace,
    UnmatchedBracket,
    IndentationError,
    InvalidNumber,
    UnknownCharacter,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnclosedString => "unclosed-string",
            ErrorKind::UnclosedComment => "unclosed-comment",
            ErrorKind::InvalidIdentifier => "invalid-identifier",
            ErrorKind::UnmatchedParenthesis => "unmatched-parenthesis",
            ErrorKind::UnmatchedBrace => "unmatched-brace",
            ErrorKind::UnmatchedBracket => "unmatched-bracket",
            ErrorKind::IndentationError => "indentation-error",
            ErrorKind::InvalidNumber => "invalid-number",
            ErrorKind::UnknownCharacter => "unknown-character",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TokenErrorKind> for ErrorKind {
    fn from(kind: TokenErrorKind) -> Self {
        match kind {
            TokenErrorKind::UnclosedString => ErrorKind::UnclosedString,
            TokenErrorKind::InvalidNumber => ErrorKind::InvalidNumber,
            TokenErrorKind::UnknownCharacter => ErrorKind::UnknownCharacter,
        }
    }
}

/// Which channel produced a record: whole-text rules or the token scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorOrigin {
    Rule,
    Scan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub suggestion: String,
    pub origin: ErrorOrigin,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {} ({})", self.line, self.column, self.message, self.kind)
    }
}
