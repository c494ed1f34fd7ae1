//! In-memory character source.
//!
//! This module provides the `Cursor` struct which walks a `&str` one
//! character at a time. It handles UTF-8 encoding correctly and tracks
//! line/column information for error reporting. Unlike
//! [`Source`](crate::Source) it cannot fail, which makes it the natural
//! choice for tests and for callers that already hold the whole program.

use std::io;

use cprlc_util::Position;

use crate::source::{CharSource, BOM};

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use cprlc_lex::{CharSource, Cursor};
///
/// let mut cursor = Cursor::new("x := 1;");
///
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.bump();
/// assert_eq!(cursor.current_char(), Some(' '));
/// assert_eq!(cursor.position(), cprlc_util::Position::new(1, 2));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    ///
    /// A leading byte order mark is skipped but still counts as column 1.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        };
        if source.starts_with(BOM) {
            cursor.bump();
        }
        cursor
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    fn peek(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.offset)?;

        // Fast path for ASCII (most common case)
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.offset..].chars().next()
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn bump(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };

        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl CharSource for Cursor<'_> {
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.peek()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) -> io::Result<()> {
        self.bump();
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("var x");
        assert_eq!(cursor.current_char(), Some('v'));
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_bump() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), Some('a'));
        cursor.bump();
        assert_eq!(cursor.current_char(), Some('b'));
        cursor.bump();
        assert_eq!(cursor.current_char(), Some('c'));
        cursor.bump();
        assert_eq!(cursor.current_char(), None);
    }

    #[test]
    fn test_bump_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), Some('α'));
        cursor.bump();
        assert_eq!(cursor.current_char(), Some('β'));
        assert_eq!(cursor.position(), Position::new(1, 2));
        cursor.bump();
        assert_eq!(cursor.current_char(), Some('γ'));
    }

    #[test]
    fn test_is_at_end() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_end());
        cursor.bump();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n");
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.position(), Position::new(1, 3));
        cursor.bump();
        assert_eq!(cursor.position(), Position::new(2, 1));
        cursor.bump();
        cursor.bump();
        cursor.bump();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), Position::new(3, 1));
    }

    #[test]
    fn test_end_position_without_trailing_newline() {
        let mut cursor = Cursor::new("end");
        for _ in 0..3 {
            cursor.advance().unwrap();
        }
        assert_eq!(cursor.position(), Position::new(1, 4));
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), None);
        cursor.bump();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn test_skips_leading_bom() {
        let cursor = Cursor::new("\u{FEFF}begin");
        assert_eq!(cursor.current_char(), Some('b'));
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn test_advance_never_fails() {
        let mut cursor = Cursor::new("x");
        assert!(cursor.advance().is_ok());
        assert!(cursor.advance().is_ok());
    }
}
