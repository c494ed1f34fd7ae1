//! Diagnostic codes for categorizing compiler errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages. Each compiler phase owns a range of numbers; the
//! lexer uses `E1xxx`.
//!
//! # Examples
//!
//! ```
//! use cprlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use cprlc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 7);
    /// assert_eq!(code.as_str(), "E0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix ("E" for error)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - character does not begin any token
    pub const E_LEXER_INVALID_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - end of input or end of line before a closing quote
    pub const E_LEXER_UNTERMINATED_LITERAL: Self = Self::new("E", 1002);
    /// E1003: Lexer - empty or multi-character char literal
    pub const E_LEXER_MALFORMED_CHAR: Self = Self::new("E", 1003);
    /// E1004: Lexer - backslash followed by an unrecognized character
    pub const E_LEXER_ILLEGAL_ESCAPE: Self = Self::new("E", 1004);
    /// E1005: Lexer - control or non-BMP character inside a literal
    pub const E_LEXER_NON_GRAPHIC: Self = Self::new("E", 1005);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
