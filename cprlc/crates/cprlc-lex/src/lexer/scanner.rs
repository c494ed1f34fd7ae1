//! Character-level primitives shared by the sub-scanners.

use cprlc_util::{DiagnosticBuilder, Handler, Position};

use crate::error::{LexError, ScanError, ScanResult};
use crate::source::CharSource;
use crate::unicode;

/// The part of the lexer that reads characters and reports errors.
///
/// Kept apart from the scan buffer so a sub-scanner can advance the source
/// while it holds the buffer.
pub(crate) struct Scanner<'a, S> {
    pub(crate) source: S,
    pub(crate) handler: &'a Handler,
    /// Position of the first character of the token being scanned.
    pub(crate) token_start: Position,
}

impl<'a, S: CharSource> Scanner<'a, S> {
    pub(crate) fn new(source: S, handler: &'a Handler) -> Self {
        Self {
            source,
            handler,
            token_start: Position::START,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source.current_char()
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.source.position()
    }

    #[inline]
    pub(crate) fn bump(&mut self) -> ScanResult<()> {
        self.source.advance()?;
        Ok(())
    }

    /// Consumes `expected` if it is the current character.
    pub(crate) fn eat(&mut self, expected: char) -> ScanResult<bool> {
        if self.current() == Some(expected) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Validates the current character as part of a literal.
    ///
    /// Failures are positioned at the offending character.
    pub(crate) fn check_graphic(&self) -> ScanResult<char> {
        unicode::check_graphic(self.current()).map_err(|error| ScanError::Lex {
            error,
            position: self.position(),
        })
    }

    /// Builds an error positioned at the start of the current token.
    pub(crate) fn error(&self, error: LexError) -> ScanError {
        ScanError::Lex {
            error,
            position: self.token_start,
        }
    }

    /// Sends a lexical error to the diagnostics sink.
    pub(crate) fn report(&self, error: &LexError, position: Position) {
        log::debug!("lexical error at {}: {}", position, error);
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .position(position)
            .emit(self.handler);
    }
}
