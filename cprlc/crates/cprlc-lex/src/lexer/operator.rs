//! Operator lexing.
//!
//! Each method is called with the operator's first character current and
//! decides between the one- and two-character forms.

use super::scanner::Scanner;
use crate::error::{LexError, ScanResult};
use crate::source::CharSource;
use crate::token::Symbol;

impl<S: CharSource> Scanner<'_, S> {
    /// Consumes a one-character symbol.
    pub(crate) fn single(&mut self, symbol: Symbol) -> ScanResult<Symbol> {
        self.bump()?;
        Ok(symbol)
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> ScanResult<Symbol> {
        self.bump()?;
        Ok(if self.eat('=')? {
            Symbol::LessOrEqual
        } else {
            Symbol::LessThan
        })
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> ScanResult<Symbol> {
        self.bump()?;
        Ok(if self.eat('=')? {
            Symbol::GreaterOrEqual
        } else {
            Symbol::GreaterThan
        })
    }

    /// Lexes `:` or `:=`.
    pub(crate) fn lex_colon(&mut self) -> ScanResult<Symbol> {
        self.bump()?;
        Ok(if self.eat('=')? {
            Symbol::Assign
        } else {
            Symbol::Colon
        })
    }

    /// Lexes `!=`. A lone `!` is not a CPRL operator.
    pub(crate) fn lex_bang(&mut self) -> ScanResult<Symbol> {
        self.bump()?;
        if self.eat('=')? {
            Ok(Symbol::NotEqual)
        } else {
            Err(self.error(LexError::InvalidChar('!')))
        }
    }
}
