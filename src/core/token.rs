// src/core/token.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    #[serde(rename = "literal-string")]
    StringLiteral,
    #[serde(rename = "literal-number")]
    NumberLiteral,
    Operator,
    Separator,
    Comment,
    Error,
}

impl TokenKind {
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::StringLiteral,
        TokenKind::NumberLiteral,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Comment,
        TokenKind::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "literal-string",
            TokenKind::NumberLiteral => "literal-number",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::Comment => "comment",
            TokenKind::Error => "error",
        }
    }

    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::StringLiteral | TokenKind::NumberLiteral)
    }
}

/// Failure attached to a `TokenKind::Error` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenErrorKind {
    UnclosedString,
    InvalidNumber,
    UnknownCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    /// Byte offset of the first character.
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<TokenErrorKind>,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, line: usize, column: usize, offset: usize) -> Self {
        Self {
            kind,
            text,
            line,
            column,
            offset,
            error_kind: None,
        }
    }

    pub fn error(kind: TokenErrorKind, text: String, line: usize, column: usize, offset: usize) -> Self {
        Self {
            kind: TokenKind::Error,
            text,
            line,
            column,
            offset,
            error_kind: Some(kind),
        }
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenErrorKind::UnclosedString => "unclosed-string",
            TokenErrorKind::InvalidNumber => "invalid-number",
            TokenErrorKind::UnknownCharacter => "unknown-character",
        };
        write!(f, "{}", name)
    }
}

// Kind plus lexeme snippet, used by the token dump
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error_kind {
            Some(err) => write!(f, "error[{}]({:?}) @{}:{}", err, self.text, self.line, self.column),
            None => write!(f, "{}({:?}) @{}:{}", self.kind, self.text, self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let tok = Token::new(TokenKind::Keyword, "if".into(), 3, 7, 20);
        assert_eq!(tok.to_string(), "keyword(\"if\") @3:7");
        assert_eq!(tok.end(), 22);
    }

    #[test]
    fn error_tokens_carry_their_kind() {
        let tok = Token::error(TokenErrorKind::InvalidNumber, "3.4.5".into(), 1, 1, 0);
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(tok.to_string(), "error[invalid-number](\"3.4.5\") @1:1");
    }

    #[test]
    fn serializes_kinds_in_kebab_case() {
        let tok = Token::new(TokenKind::StringLiteral, "\"a\"".into(), 1, 1, 0);
        let json = serde_json::to_string(&tok).unwrap();
        assert!(json.contains("\"kind\":\"literal-string\""), "{json}");
        assert!(!json.contains("error_kind"), "{json}");
    }
}
