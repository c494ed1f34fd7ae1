//! Span module - Source location tracking.
//!
//! A [`Position`] names the line and character of a single source character.
//! Tokens record the position of their *first* character, and diagnostics
//! record the position of the character that triggered them.
//!
//! # Examples
//!
//! ```
//! use cprlc_util::span::Position;
//!
//! let pos = Position::new(2, 14);
//! assert_eq!(pos.to_string(), "line 2, character 14");
//! ```

use std::fmt;

/// Source location of one character
///
/// Both fields are 1-based: the first character of a file is at
/// line 1, character 1.
///
/// # Examples
///
/// ```
/// use cprlc_util::span::Position;
///
/// let start = Position::START;
/// assert_eq!(start.line, 1);
/// assert_eq!(start.column, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Character number within the line (1-based)
    pub column: u32,
}

impl Position {
    /// Position of the first character of a source
    pub const START: Position = Position { line: 1, column: 1 };

    /// Dummy position for diagnostics that have no source location
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    /// Create a new position
    ///
    /// # Examples
    ///
    /// ```
    /// use cprlc_util::span::Position;
    ///
    /// let pos = Position::new(10, 4);
    /// assert_eq!(pos.line, 10);
    /// assert_eq!(pos.column, 4);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true if this is [`Position::DUMMY`]
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, character {}", self.line, self.column)
    }
}
