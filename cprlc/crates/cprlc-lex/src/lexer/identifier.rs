//! Identifier, reserved word and integer literal lexing.

use super::buffer::Scan;
use super::scanner::Scanner;
use super::Lexeme;
use crate::error::ScanResult;
use crate::source::CharSource;
use crate::token::{lookup_spelling, Symbol};
use crate::unicode::{is_digit, is_ident_continue};

impl<S: CharSource> Scanner<'_, S> {
    /// Lexes an identifier or reserved word.
    ///
    /// Reads the longest run of letters and digits, then checks whether the
    /// text is a reserved word. Reserved words carry no text.
    pub(crate) fn scan_identifier(&mut self, mut scan: Scan<'_>) -> ScanResult<Lexeme> {
        while let Some(c) = self.current().filter(|&c| is_ident_continue(c)) {
            scan.push(c);
            self.bump()?;
        }

        Ok(match lookup_spelling(scan.as_str()) {
            Some(symbol) if symbol.is_reserved_word() => Lexeme::bare(symbol),
            _ => Lexeme::with_text(Symbol::Identifier, scan.finish()),
        })
    }

    /// Lexes an unsigned decimal integer literal.
    pub(crate) fn scan_integer(&mut self, mut scan: Scan<'_>) -> ScanResult<Lexeme> {
        while let Some(c) = self.current().filter(|&c| is_digit(c)) {
            scan.push(c);
            self.bump()?;
        }

        Ok(Lexeme::with_text(Symbol::IntLiteral, scan.finish()))
    }
}
