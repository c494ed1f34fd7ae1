//! Error types for the lexer.
//!
//! Two families of errors exist:
//!
//! - [`Error`] is the only failure a caller of the lexer can observe. It wraps
//!   an I/O error from the character source and cannot be recovered from.
//! - [`LexError`] describes a malformed token. It never reaches the caller:
//!   the lexer reports it to the diagnostics sink and degrades the current
//!   token to `Unknown` (or `Eof`).

use std::io;

use cprlc_util::{DiagnosticCode, Position};
use thiserror::Error;

/// Hard failure of the lexer.
#[derive(Debug, Error)]
pub enum Error {
    /// The character source could not be read.
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for lexer operations that may hit an I/O error.
pub type Result<T> = std::result::Result<T, Error>;

/// A lexical error, reported to the diagnostics sink.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// The character does not begin any token.
    #[error("Invalid character '{0}'")]
    InvalidChar(char),

    /// Empty (`''`), tripled (`'''`) or multi-character char literal.
    #[error("Invalid Char literal.")]
    InvalidCharLiteral,

    /// Backslash followed by a character outside `b t n f r " ' \`.
    #[error("Illegal escape character.")]
    IllegalEscape,

    /// End of input inside a char or string literal.
    #[error("End of file reached before closing quote for Char or String literal.")]
    UnterminatedLiteral,

    /// Line break inside a char or string literal.
    #[error("Char and String literals can not extend past end of line.")]
    LiteralPastEndOfLine,

    /// Character above `U+FFFF` inside a literal.
    #[error("Character not in Unicode Basic Multilingual Plane (BMP).")]
    NotInBmp,

    /// ISO control character inside a literal.
    #[error("Control characters not allowed in Char or String literal.")]
    ControlChar,
}

impl LexError {
    /// Diagnostic code used when this error is reported.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidChar(_) => DiagnosticCode::E_LEXER_INVALID_CHAR,
            LexError::InvalidCharLiteral => DiagnosticCode::E_LEXER_MALFORMED_CHAR,
            LexError::IllegalEscape => DiagnosticCode::E_LEXER_ILLEGAL_ESCAPE,
            LexError::UnterminatedLiteral | LexError::LiteralPastEndOfLine => {
                DiagnosticCode::E_LEXER_UNTERMINATED_LITERAL
            }
            LexError::NotInBmp | LexError::ControlChar => DiagnosticCode::E_LEXER_NON_GRAPHIC,
        }
    }
}

/// Internal result of the sub-scanners.
///
/// `Lex` is caught inside `Lexer::advance`; `Io` is propagated as [`Error`].
#[derive(Debug, Error)]
pub(crate) enum ScanError {
    #[error("{error} ({position})")]
    Lex { error: LexError, position: Position },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub(crate) type ScanResult<T> = std::result::Result<T, ScanError>;
