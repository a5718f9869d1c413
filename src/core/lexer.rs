// lexer.rs

use unicode_ident::{is_xid_continue, is_xid_start};

use crate::core::cursor::Cursor;
use crate::core::error::{ErrorKind, ErrorOrigin, ErrorRecord};
use crate::core::language::LanguageProfile;
use crate::core::rules::closing_offset;
use crate::core::token::{Token, TokenErrorKind, TokenKind};

/// One token produced by a sub-scanner, with the cursor just past it.
#[derive(Debug, Clone)]
pub struct Scanned {
    pub cursor: Cursor,
    pub token: Token,
    pub error: Option<ErrorRecord>,
}

impl Scanned {
    fn token(cursor: Cursor, token: Token) -> Self {
        Self { cursor, token, error: None }
    }

    fn failed(cursor: Cursor, token: Token, message: String, suggestion: String) -> Self {
        let error = token.error_kind.map(|kind| ErrorRecord {
            kind: ErrorKind::from(kind),
            message,
            line: token.line,
            column: token.column,
            suggestion,
            origin: ErrorOrigin::Scan,
        });
        Self { cursor, token, error }
    }
}

/// Output of a full pass.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<ErrorRecord>,
}

/// Single-pass tokenizer parameterized by a language profile.
pub struct Lexer<'a> {
    source: &'a str,
    profile: &'a LanguageProfile,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, profile: &'a LanguageProfile) -> Self {
        Self { source, profile }
    }

    /// Tokenizes the entire source. Never fails; problems become error tokens.
    pub fn tokenize(&self) -> Scan {
        let mut scan = Scan::default();
        let mut cursor = Cursor::start();
        while let Some(next) = self.next_token(cursor) {
            cursor = next.cursor;
            if let Some(err) = next.error {
                crate::debug_log!("[lexer] {} at {}:{}", err.kind, err.line, err.column);
                scan.errors.push(err);
            }
            scan.tokens.push(next.token);
        }
        crate::debug_log!(
            "[lexer] {}: {} tokens, {} inline errors",
            self.profile.id,
            scan.tokens.len(),
            scan.errors.len()
        );
        scan
    }

    /// Skips whitespace, then runs the sub-scanners in priority order.
    /// `None` at end of input.
    pub fn next_token(&self, cursor: Cursor) -> Option<Scanned> {
        let cursor = cursor.advance_while(self.source, char::is_whitespace);
        let ch = cursor.peek(self.source)?;
        let scanned = self
            .scan_comment(cursor)
            .or_else(|| self.scan_string(cursor))
            .or_else(|| self.scan_number(cursor, ch))
            .or_else(|| self.scan_identifier(cursor, ch))
            .or_else(|| self.scan_operator(cursor))
            .or_else(|| self.scan_separator(cursor, ch))
            .unwrap_or_else(|| self.scan_unknown(cursor, ch));
        Some(scanned)
    }

    fn start_token(&self, start: Cursor, end: Cursor, kind: TokenKind) -> Token {
        let text = start.slice_to(self.source, end).to_string();
        Token::new(kind, text, start.line, start.column, start.offset)
    }

    fn scan_comment(&self, start: Cursor) -> Option<Scanned> {
        let rest = start.rest(self.source);
        let style = self.profile.match_comment(rest)?;
        let body = &rest[style.start.len()..];
        let len = match body.find(style.end) {
            // Line comments stop before the newline.
            Some(i) if style.is_line() => style.start.len() + i,
            Some(i) => style.start.len() + i + style.end.len(),
            // Unterminated block comments run to end of input; the rule pass reports them.
            None => rest.len(),
        };
        let end = start.advance_str(&rest[..len]);
        Some(Scanned::token(end, self.start_token(start, end, TokenKind::Comment)))
    }

    fn scan_string(&self, start: Cursor) -> Option<Scanned> {
        let rest = start.rest(self.source);
        let delim = self.profile.match_string_delimiter(rest)?;
        match closing_offset(&rest[delim.len()..], delim) {
            Some(len) => {
                let end = start.advance_str(&rest[..delim.len() + len]);
                Some(Scanned::token(end, self.start_token(start, end, TokenKind::StringLiteral)))
            }
            None => {
                let end = start.advance_str(rest);
                let token = Token::error(
                    TokenErrorKind::UnclosedString,
                    rest.to_string(),
                    start.line,
                    start.column,
                    start.offset,
                );
                Some(Scanned::failed(
                    end,
                    token,
                    format!("Unclosed string literal starting with {}", delim),
                    format!("Add a closing {} to terminate the string", delim),
                ))
            }
        }
    }

    fn scan_number(&self, start: Cursor, ch: char) -> Option<Scanned> {
        let starts_number = ch.is_ascii_digit()
            || (ch == '.' && start.advance(ch).peek(self.source).map_or(false, |c| c.is_ascii_digit()));
        if !starts_number {
            return None;
        }

        let mut end = start.advance_while(self.source, |c| c.is_ascii_digit() || c == '.');
        if let Some(marker @ ('e' | 'E')) = end.peek(self.source) {
            end = end.advance(marker);
            if let Some(sign @ ('+' | '-')) = end.peek(self.source) {
                end = end.advance(sign);
            }
            end = end.advance_while(self.source, |c| c.is_ascii_digit());
        }

        let text = start.slice_to(self.source, end);
        if is_valid_number(text) {
            return Some(Scanned::token(end, self.start_token(start, end, TokenKind::NumberLiteral)));
        }
        let token = Token::error(
            TokenErrorKind::InvalidNumber,
            text.to_string(),
            start.line,
            start.column,
            start.offset,
        );
        Some(Scanned::failed(
            end,
            token,
            format!("Invalid number literal '{}'", text),
            "Use a valid numeric format such as 42, 3.14 or 1e10".to_string(),
        ))
    }

    fn scan_identifier(&self, start: Cursor, ch: char) -> Option<Scanned> {
        if !is_identifier_start(ch) {
            return None;
        }
        let end = start.advance_while(self.source, is_identifier_part);
        let kind = if self.profile.is_keyword(start.slice_to(self.source, end)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Some(Scanned::token(end, self.start_token(start, end, kind)))
    }

    fn scan_operator(&self, start: Cursor) -> Option<Scanned> {
        let op = self.profile.match_operator(start.rest(self.source))?;
        let end = start.advance_str(op);
        Some(Scanned::token(end, self.start_token(start, end, TokenKind::Operator)))
    }

    fn scan_separator(&self, start: Cursor, ch: char) -> Option<Scanned> {
        if !self.profile.separators.contains(&ch) {
            return None;
        }
        let end = start.advance(ch);
        Some(Scanned::token(end, self.start_token(start, end, TokenKind::Separator)))
    }

    fn scan_unknown(&self, start: Cursor, ch: char) -> Scanned {
        let end = start.advance(ch);
        let token = Token::error(
            TokenErrorKind::UnknownCharacter,
            ch.to_string(),
            start.line,
            start.column,
            start.offset,
        );
        Scanned::failed(
            end,
            token,
            format!("Unknown character '{}'", ch.escape_default()),
            format!("Remove or replace the character '{}'", ch.escape_default()),
        )
    }
}

/// `digits(.digits)?([eE][+-]?digits)?`
pub fn is_valid_number(text: &str) -> bool {
    fn digits(s: &str) -> usize {
        s.bytes().take_while(u8::is_ascii_digit).count()
    }

    let int_len = digits(text);
    if int_len == 0 {
        return false;
    }
    let mut rest = &text[int_len..];
    if let Some(frac) = rest.strip_prefix('.') {
        let n = digits(frac);
        if n == 0 {
            return false;
        }
        rest = &frac[n..];
    }
    if let Some(exp) = rest.strip_prefix(|c: char| c == 'e' || c == 'E') {
        let exp = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
        let n = digits(exp);
        if n == 0 {
            return false;
        }
        rest = &exp[n..];
    }
    rest.is_empty()
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || is_xid_start(ch)
}

fn is_identifier_part(ch: char) -> bool {
    ch == '_' || is_xid_continue(ch)
}
