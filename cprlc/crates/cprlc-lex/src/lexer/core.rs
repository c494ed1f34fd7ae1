//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use cprlc_util::{Handler, Position};

use super::buffer::ScanBuffer;
use super::scanner::Scanner;
use super::Lexeme;
use crate::error::{Error, LexError, Result, ScanError, ScanResult};
use crate::source::CharSource;
use crate::token::{Symbol, Token};
use crate::unicode::{is_digit, is_letter};

/// Lexer for the CPRL programming language.
///
/// The lexer holds exactly one current token. [`Lexer::advance`] replaces it
/// with the next token of the source; the accessors describe it. Lexical
/// errors never stop the lexer: they are reported to the [`Handler`] and the
/// current token degrades to [`Symbol::Unknown`] (or [`Symbol::Eof`] when the
/// source is exhausted). Only a failure to read the source is returned as an
/// [`Error`].
///
/// # Example
///
/// ```
/// use cprlc_lex::{Cursor, Lexer, Symbol};
/// use cprlc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new(Cursor::new("x := 1;"), &handler).unwrap();
///
/// assert_eq!(lexer.symbol(), Symbol::Identifier);
/// assert_eq!(lexer.text(), Some("x"));
/// lexer.advance().unwrap();
/// assert_eq!(lexer.symbol(), Symbol::Assign);
/// lexer.advance_to(Symbol::Semicolon).unwrap();
/// assert_eq!(lexer.position().column, 7);
/// ```
pub struct Lexer<'a, S> {
    scanner: Scanner<'a, S>,

    /// Reused for the text of identifiers and literals.
    buffer: ScanBuffer,

    /// The current token.
    token: Token,

    /// I/O error to hand out on the next iteration step.
    pending_error: Option<Error>,

    /// Set once iteration has yielded an I/O error.
    exhausted: bool,
}

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Creates a lexer and advances to the first token.
    pub fn new(source: S, handler: &'a Handler) -> Result<Self> {
        let mut lexer = Self {
            scanner: Scanner::new(source, handler),
            buffer: ScanBuffer::new(),
            token: Token::new(Symbol::Unknown, Position::DUMMY, None),
            pending_error: None,
            exhausted: false,
        };
        lexer.advance()?;
        Ok(lexer)
    }

    /// Advances to the next token.
    ///
    /// Comments are skipped without producing a token. Once the current
    /// symbol is [`Symbol::Eof`] it stays there. If reading the source fails
    /// the current token is left unchanged.
    pub fn advance(&mut self) -> Result<()> {
        loop {
            self.scanner.skip_whitespace()?;
            let start = self.scanner.position();
            self.scanner.token_start = start;

            let (symbol, text) = match self.scan_token() {
                Ok(Some(lexeme)) => (lexeme.symbol, lexeme.text),
                Ok(None) => continue,
                Err(ScanError::Lex { error, position }) => {
                    self.scanner.report(&error, position);
                    if self.scanner.source.is_at_end() {
                        (Symbol::Eof, None)
                    } else {
                        (Symbol::Unknown, None)
                    }
                },
                Err(ScanError::Io(err)) => return Err(err.into()),
            };

            self.token = Token::new(symbol, start, text);
            break;
        }

        log::trace!(
            "{}:{} {:?} {}",
            self.token.position().line,
            self.token.position().column,
            self.token.symbol(),
            self.token.text().unwrap_or("")
        );
        Ok(())
    }

    /// Scans one token starting at the current character.
    ///
    /// Returns `None` after skipping a comment.
    fn scan_token(&mut self) -> ScanResult<Option<Lexeme>> {
        let scanner = &mut self.scanner;

        let Some(c) = scanner.current() else {
            return Ok(Some(Lexeme::bare(Symbol::Eof)));
        };

        if is_letter(c) {
            return scanner.scan_identifier(self.buffer.begin()).map(Some);
        }
        if is_digit(c) {
            return scanner.scan_integer(self.buffer.begin()).map(Some);
        }

        let symbol = match c {
            '/' => {
                scanner.bump()?;
                if scanner.eat('/')? {
                    scanner.skip_line_comment()?;
                    return Ok(None);
                }
                Symbol::Divide
            },
            '+' => scanner.single(Symbol::Plus)?,
            '-' => scanner.single(Symbol::Minus)?,
            '*' => scanner.single(Symbol::Times)?,
            '=' => scanner.single(Symbol::Equals)?,
            '(' => scanner.single(Symbol::LeftParen)?,
            ')' => scanner.single(Symbol::RightParen)?,
            '[' => scanner.single(Symbol::LeftBracket)?,
            ']' => scanner.single(Symbol::RightBracket)?,
            ',' => scanner.single(Symbol::Comma)?,
            ';' => scanner.single(Symbol::Semicolon)?,
            '.' => scanner.single(Symbol::Dot)?,
            '<' => scanner.lex_less()?,
            '>' => scanner.lex_greater()?,
            ':' => scanner.lex_colon()?,
            '!' => scanner.lex_bang()?,
            '\'' => return scanner.scan_char_literal(self.buffer.begin()).map(Some),
            '"' => return scanner.scan_string_literal(self.buffer.begin()).map(Some),
            c => {
                scanner.bump()?;
                return Err(scanner.error(LexError::InvalidChar(c)));
            },
        };

        Ok(Some(Lexeme::bare(symbol)))
    }

    /// Advances until the current symbol is `symbol` or end of input.
    ///
    /// Returns immediately if the current symbol already matches.
    pub fn advance_to(&mut self, symbol: Symbol) -> Result<()> {
        self.advance_to_any(&[symbol])
    }

    /// Advances until the current symbol is one of `symbols` or end of input.
    ///
    /// Used by a parser to resynchronize after a syntax error.
    pub fn advance_to_any(&mut self, symbols: &[Symbol]) -> Result<()> {
        while !symbols.contains(&self.symbol()) && self.symbol() != Symbol::Eof {
            self.advance()?;
        }
        Ok(())
    }

    /// The current symbol.
    pub fn symbol(&self) -> Symbol {
        self.token.symbol()
    }

    /// A snapshot of the current token.
    pub fn token(&self) -> Token {
        self.token.clone()
    }

    /// Position of the current token's first character.
    pub fn position(&self) -> Position {
        self.token.position()
    }

    /// Text of the current token, for identifiers and literals.
    pub fn text(&self) -> Option<&str> {
        self.token.text()
    }

    /// The diagnostics sink errors are reported to.
    pub fn handler(&self) -> &'a Handler {
        self.scanner.handler
    }
}

impl<S: CharSource> Iterator for Lexer<'_, S> {
    type Item = Result<Token>;

    /// Yields the current token and advances past it.
    ///
    /// Iteration ends at end of input or after an I/O error has been yielded.
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending_error.take() {
            self.exhausted = true;
            return Some(Err(err));
        }
        if self.exhausted || self.symbol() == Symbol::Eof {
            return None;
        }

        let token = self.token();
        if let Err(err) = self.advance() {
            self.pending_error = Some(err);
        }
        Some(Ok(token))
    }
}
