//! Whole-text detection patterns behind the profile error rules.
//!
//! Each pattern answers one yes/no question about the complete source text.
//! None of them look at the token stream.

use unicode_ident::is_xid_continue;

use crate::core::language::{CommentStyle, LanguageProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A string delimiter that is never closed before end of text.
    UnclosedString,
    /// A block comment opener that is never closed before end of text.
    UnclosedBlockComment,
    /// A word made of a digit run followed by letters that is not a number.
    DigitLedIdentifier,
    /// The last `open` in the text has no `close` anywhere after it.
    UnclosedOpener { open: char, close: char },
    /// A line indented with spaces followed by a tab.
    SpacesThenTab,
}

impl Pattern {
    pub fn is_match(&self, text: &str, profile: &LanguageProfile) -> bool {
        match *self {
            Pattern::UnclosedString => skim(text, profile) == Some(Unterminated::String),
            Pattern::UnclosedBlockComment => skim(text, profile) == Some(Unterminated::Comment),
            Pattern::DigitLedIdentifier => has_digit_led_identifier(text),
            Pattern::UnclosedOpener { open, close } => match text.rfind(open) {
                Some(at) => !text[at + open.len_utf8()..].contains(close),
                None => false,
            },
            Pattern::SpacesThenTab => text.lines().any(|line| {
                let rest = line.trim_start_matches(' ');
                rest.len() < line.len() && rest.starts_with('\t')
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unterminated {
    String,
    Comment,
}

/// Walks comments and string literals in order and reports the first one
/// left open at end of text.
fn skim(text: &str, profile: &LanguageProfile) -> Option<Unterminated> {
    let mut at = 0;
    while at < text.len() {
        let rest = &text[at..];
        if let Some(style) = profile.comment_styles.iter().find(|s| rest.starts_with(s.start)) {
            match comment_len(rest, style) {
                Some(len) => at += len,
                None if style.is_line() => return None,
                None => return Some(Unterminated::Comment),
            }
            continue;
        }
        if let Some(delim) = profile.string_delimiters.iter().find(|d| rest.starts_with(**d)) {
            match closing_offset(&rest[delim.len()..], delim) {
                Some(len) => at += delim.len() + len,
                None => return Some(Unterminated::String),
            }
            continue;
        }
        at += rest.chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Length of a comment including its end delimiter, `None` when the end is missing.
fn comment_len(rest: &str, style: &CommentStyle) -> Option<usize> {
    let body = &rest[style.start.len()..];
    body.find(style.end)
        .map(|i| style.start.len() + i + style.end.len())
}

/// Offset just past the first unescaped `delim` in `body`.
pub(crate) fn closing_offset(body: &str, delim: &str) -> Option<usize> {
    let mut chars = body.char_indices();
    while let Some((i, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
            continue;
        }
        if body[i..].starts_with(delim) {
            return Some(i + delim.len());
        }
    }
    None
}

fn has_digit_led_identifier(text: &str) -> bool {
    let mut prev: Option<char> = None;
    for (i, ch) in text.char_indices() {
        let at_word_start = prev.map_or(true, |p| !(p == '.' || p == '_' || is_xid_continue(p)));
        if ch.is_ascii_digit() && at_word_start {
            let word_len = text[i..]
                .find(|c: char| !(c == '_' || is_xid_continue(c)))
                .unwrap_or(text.len() - i);
            let word = &text[i..i + word_len];
            let next = text[i + word_len..].chars().next();
            let has_letters = word.chars().any(|c| c.is_alphabetic());
            if has_letters && !is_numeric_word(word, next) {
                return true;
            }
        }
        prev = Some(ch);
    }
    false
}

/// Radix literals, exponents and short type suffixes still count as numbers.
fn is_numeric_word(word: &str, next: Option<char>) -> bool {
    let lower = word.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0b", 2), ("0o", 8)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c == '_' || c.is_digit(radix));
        }
    }

    let body = lower.trim_end_matches(|c| matches!(c, 'l' | 'u' | 'f' | 'd'));
    let suffix_len = lower.len() - body.len();
    if suffix_len > 3 {
        return false;
    }
    let (mantissa, exponent) = match body.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (body, None),
    };
    let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c == '_' || c.is_ascii_digit());
    if !is_digits(mantissa) {
        return false;
    }
    match exponent {
        None => true,
        Some("") => suffix_len == 0 && matches!(next, Some('+' | '-')),
        Some(e) => is_digits(e),
    }
}
