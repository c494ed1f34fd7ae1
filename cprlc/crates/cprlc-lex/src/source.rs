//! Character sources consumed by the lexer.
//!
//! The lexer never looks more than one character ahead. It only needs the
//! current character, where that character is, and a way to move past it.
//! [`CharSource`] captures exactly that. Two implementations exist:
//!
//! - [`Cursor`](crate::Cursor) walks an in-memory `&str` and never fails.
//! - [`Source`] pulls lines from any [`BufRead`] and reports read and UTF-8
//!   decoding failures as [`io::Error`].

use std::io::{self, BufRead};

use cprlc_util::Position;

/// Byte order mark, skipped when it is the first character of a source.
pub(crate) const BOM: char = '\u{FEFF}';

/// A one-character window over source text.
pub trait CharSource {
    /// The current character, or `None` at end of input.
    fn current_char(&self) -> Option<char>;

    /// Position of the current character.
    ///
    /// At end of input this is the position just past the last character.
    fn position(&self) -> Position;

    /// Moves past the current character. Does nothing at end of input.
    fn advance(&mut self) -> io::Result<()>;

    /// Returns true if the source is exhausted.
    fn is_at_end(&self) -> bool {
        self.current_char().is_none()
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn current_char(&self) -> Option<char> {
        (**self).current_char()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn advance(&mut self) -> io::Result<()> {
        (**self).advance()
    }
}

/// A character source that reads lines from a buffered reader.
///
/// Only the current line is held in memory.
///
/// # Example
///
/// ```
/// use cprlc_lex::source::{CharSource, Source};
///
/// let mut source = Source::new("ab\nc".as_bytes()).unwrap();
/// assert_eq!(source.current_char(), Some('a'));
/// source.advance().unwrap();
/// source.advance().unwrap();
/// source.advance().unwrap();
/// assert_eq!(source.current_char(), Some('c'));
/// assert_eq!(source.position().line, 2);
/// ```
pub struct Source<R> {
    reader: R,
    /// Characters of the current line, including its terminator.
    line: Vec<char>,
    /// Index of the current character in `line`.
    index: usize,
    /// Number of the current line (1-based, 0 before the first read).
    line_number: u32,
    /// Set once the reader is exhausted.
    end: Option<Position>,
}

impl<R: BufRead> Source<R> {
    /// Creates a source and reads its first line.
    pub fn new(reader: R) -> io::Result<Self> {
        let mut source = Self {
            reader,
            line: Vec::new(),
            index: 0,
            line_number: 0,
            end: None,
        };
        source.read_line()?;
        if source.current_char() == Some(BOM) {
            source.advance()?;
        }
        Ok(source)
    }

    fn read_line(&mut self) -> io::Result<()> {
        let mut buf = String::new();
        self.index = 0;

        if self.reader.read_line(&mut buf)? == 0 {
            let ends_line = self.line.last().map_or(true, |&c| c == '\n');
            self.end = Some(if ends_line {
                Position::new(self.line_number + 1, 1)
            } else {
                Position::new(self.line_number, self.line.len() as u32 + 1)
            });
            self.line.clear();
            return Ok(());
        }

        self.line.clear();
        self.line.extend(buf.chars());
        self.line_number += 1;
        Ok(())
    }
}

impl<R: BufRead> CharSource for Source<R> {
    fn current_char(&self) -> Option<char> {
        if self.end.is_some() {
            return None;
        }
        self.line.get(self.index).copied()
    }

    fn position(&self) -> Position {
        match self.end {
            Some(end) => end,
            None => Position::new(self.line_number, self.index as u32 + 1),
        }
    }

    fn advance(&mut self) -> io::Result<()> {
        if self.end.is_some() {
            return Ok(());
        }
        self.index += 1;
        if self.index >= self.line.len() {
            self.read_line()?;
        }
        Ok(())
    }
}
