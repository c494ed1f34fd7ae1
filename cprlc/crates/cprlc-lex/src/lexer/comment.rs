//! Whitespace and comment skipping.
//!
//! CPRL only has line comments, introduced by `//`. The caller consumes both
//! slashes before calling [`Scanner::skip_line_comment`].

use std::io;

use super::scanner::Scanner;
use crate::error::ScanResult;
use crate::source::CharSource;
use crate::unicode::is_whitespace;

impl<S: CharSource> Scanner<'_, S> {
    pub(crate) fn skip_whitespace(&mut self) -> io::Result<()> {
        while self.current().is_some_and(is_whitespace) {
            self.source.advance()?;
        }
        Ok(())
    }

    /// Skips the rest of the line, including its terminating newline.
    ///
    /// A comment on the last line needs no newline.
    pub(crate) fn skip_line_comment(&mut self) -> ScanResult<()> {
        while let Some(c) = self.current() {
            self.bump()?;
            if c == '\n' {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cursor;
    use cprlc_util::{Handler, Position};

    #[test]
    fn test_skip_whitespace_stops_at_token() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(Cursor::new(" \t\r\n  x"), &handler);
        scanner.skip_whitespace().unwrap();
        assert_eq!(scanner.current(), Some('x'));
        assert_eq!(scanner.position(), Position::new(2, 3));
    }

    #[test]
    fn test_skip_line_comment_consumes_newline() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(Cursor::new(" rest of line\nnext"), &handler);
        scanner.skip_line_comment().unwrap();
        assert_eq!(scanner.current(), Some('n'));
        assert_eq!(scanner.position(), Position::new(2, 1));
    }

    #[test]
    fn test_skip_line_comment_at_end_of_input() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(Cursor::new(" no newline"), &handler);
        scanner.skip_line_comment().unwrap();
        assert!(scanner.source.is_at_end());
        assert!(!handler.has_errors());
    }
}
