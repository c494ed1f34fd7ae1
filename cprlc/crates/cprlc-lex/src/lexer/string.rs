//! Char and string literal lexing.
//!
//! Literal text keeps its quotes and its escape sequences exactly as written:
//! the source `'\n'` produces the four-character text `'\n'`, not a newline.
//! Every character between the quotes must pass the graphic check.

use super::buffer::Scan;
use super::scanner::Scanner;
use super::Lexeme;
use crate::error::{LexError, ScanResult};
use crate::source::CharSource;
use crate::token::Symbol;
use crate::unicode::is_escapable;

impl<S: CharSource> Scanner<'_, S> {
    /// Lexes a char literal such as `'a'` or `'\''`.
    ///
    /// `''` and `'''` are rejected as a whole, as is a second character
    /// before the closing quote.
    pub(crate) fn scan_char_literal(&mut self, mut scan: Scan<'_>) -> ScanResult<Lexeme> {
        scan.push('\'');
        self.bump()?;

        match self.check_graphic()? {
            '\\' => {
                self.scan_escape(&mut scan)?;
            },
            '\'' => {
                self.bump()?;
                self.eat('\'')?;
                return Err(self.error(LexError::InvalidCharLiteral));
            },
            c => {
                scan.push(c);
                self.bump()?;
            },
        }

        if self.check_graphic()? != '\'' {
            return Err(self.error(LexError::InvalidCharLiteral));
        }
        scan.push('\'');
        self.bump()?;

        Ok(Lexeme::with_text(Symbol::CharLiteral, scan.finish()))
    }

    /// Lexes a string literal such as `"hello"`.
    pub(crate) fn scan_string_literal(&mut self, mut scan: Scan<'_>) -> ScanResult<Lexeme> {
        scan.push('"');
        self.bump()?;

        loop {
            match self.check_graphic()? {
                '"' => break,
                '\\' => self.scan_escape(&mut scan)?,
                c => {
                    scan.push(c);
                    self.bump()?;
                },
            }
        }
        scan.push('"');
        self.bump()?;

        Ok(Lexeme::with_text(Symbol::StringLiteral, scan.finish()))
    }

    /// Lexes an escape sequence, appending it to `scan` unconverted.
    ///
    /// An unknown escape is reported at the backslash but does not end the
    /// literal; it is appended as written.
    fn scan_escape(&mut self, scan: &mut Scan<'_>) -> ScanResult<()> {
        let backslash = self.position();
        self.bump()?;

        let c = self.check_graphic()?;
        self.bump()?;

        if !is_escapable(c) {
            self.report(&LexError::IllegalEscape, backslash);
        }
        scan.push('\\');
        scan.push(c);
        Ok(())
    }
}
