//! Scan position threaded by value through every sub-scanner.

/// Byte offset plus the 1-based line/column of the next unread character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::start()
    }
}

impl Cursor {
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Unread part of `src`.
    #[inline]
    pub fn rest<'a>(&self, src: &'a str) -> &'a str {
        &src[self.offset..]
    }

    #[inline]
    pub fn peek(&self, src: &str) -> Option<char> {
        self.rest(src).chars().next()
    }

    #[inline]
    pub fn is_eof(&self, src: &str) -> bool {
        self.offset >= src.len()
    }

    /// Steps over one character.
    #[inline]
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            }
        }
    }

    /// Steps over every character of `s`, which must be the next text in the source.
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, Cursor::advance)
    }

    /// Advances while `pred` holds, returning the new cursor.
    pub fn advance_while(self, src: &str, mut pred: impl FnMut(char) -> bool) -> Self {
        let mut cur = self;
        while let Some(ch) = cur.peek(src) {
            if !pred(ch) {
                break;
            }
            cur = cur.advance(ch);
        }
        cur
    }

    /// Text between `self` and a later cursor.
    #[inline]
    pub fn slice_to<'a>(&self, src: &'a str, end: Cursor) -> &'a str {
        &src[self.offset..end.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_resets_column() {
        let cur = Cursor::start().advance_str("ab\ncd");
        assert_eq!(cur, Cursor { offset: 5, line: 2, column: 3 });
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let cur = Cursor::start().advance_str("é=");
        assert_eq!(cur.offset, 3);
        assert_eq!(cur.column, 3);
    }

    #[test]
    fn advance_while_stops_at_predicate() {
        let src = "123abc";
        let end = Cursor::start().advance_while(src, |c| c.is_ascii_digit());
        assert_eq!(Cursor::start().slice_to(src, end), "123");
        assert_eq!(end.peek(src), Some('a'));
    }
}
