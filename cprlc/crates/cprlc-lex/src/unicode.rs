//! Character classification for the CPRL lexer.
//!
//! Two different rules apply, depending on where a character appears:
//!
//! - **Outside literals** (token starts, identifiers, integers, whitespace):
//!   letters are Unicode `Alphabetic`, digits are ASCII `0-9` only, and
//!   whitespace is Unicode `White_Space`. None of this depends on a locale.
//! - **Inside char and string literals**: every character must be *graphic*:
//!   not end of input, within the Basic Multilingual Plane, not a line
//!   terminator and not an ISO control character.
//!
//! The rules are intentionally different. An identifier such as `größe` is
//! accepted because `ö` and `ß` are alphabetic; a literal such as `"😀"` is
//! rejected because U+1F600 lies outside the BMP.
//!
//! Whitespace follows the Unicode `White_Space` property exactly, which is
//! not the same set as a C-style or Java-style "is space" test at two edges:
//!
//! - the no-break spaces U+00A0, U+2007 and U+202F, and NEL U+0085, *are*
//!   whitespace here, so `a\u{A0}b` lexes as two identifiers;
//! - the information separators U+001C to U+001F are *not* whitespace, so
//!   they are reported as invalid characters.

use crate::error::LexError;

/// Largest code point of the Basic Multilingual Plane.
pub const BMP_MAX: u32 = 0xFFFF;

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use cprlc_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(is_letter('é'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('1'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character is a decimal digit.
///
/// Only ASCII digits count, so an integer literal's text always parses as a
/// base-10 number.
///
/// # Example
///
/// ```
/// use cprlc_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('٣')); // ARABIC-INDIC DIGIT THREE
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Checks if a character is skipped between tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character ends a line.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Checks if a character is an ISO control character
/// (`U+0000..=U+001F` or `U+007F..=U+009F`).
#[inline]
pub fn is_iso_control(c: char) -> bool {
    c.is_control()
}

/// Checks if a character lies in the Basic Multilingual Plane.
#[inline]
pub fn is_in_bmp(c: char) -> bool {
    c as u32 <= BMP_MAX
}

/// Checks if a character may follow a backslash in a literal.
///
/// # Example
///
/// ```
/// use cprlc_lex::unicode::is_escapable;
///
/// for c in ['b', 't', 'n', 'f', 'r', '"', '\'', '\\'] {
///     assert!(is_escapable(c));
/// }
/// assert!(!is_escapable('x'));
/// assert!(!is_escapable('0'));
/// ```
#[inline]
pub fn is_escapable(c: char) -> bool {
    matches!(c, 'b' | 't' | 'n' | 'f' | 'r' | '"' | '\'' | '\\')
}

/// Validates a character that appears inside a char or string literal.
///
/// `None` stands for end of input. Returns the character when it is graphic,
/// otherwise the specific reason it is not.
///
/// # Example
///
/// ```
/// use cprlc_lex::unicode::check_graphic;
/// use cprlc_lex::LexError;
///
/// assert_eq!(check_graphic(Some('x')), Ok('x'));
/// assert_eq!(check_graphic(None), Err(LexError::UnterminatedLiteral));
/// assert_eq!(check_graphic(Some('\n')), Err(LexError::LiteralPastEndOfLine));
/// assert_eq!(check_graphic(Some('\u{7}')), Err(LexError::ControlChar));
/// assert_eq!(check_graphic(Some('😀')), Err(LexError::NotInBmp));
/// ```
pub fn check_graphic(c: Option<char>) -> Result<char, LexError> {
    match c {
        None => Err(LexError::UnterminatedLiteral),
        Some(c) if !is_in_bmp(c) => Err(LexError::NotInBmp),
        Some(c) if is_line_terminator(c) => Err(LexError::LiteralPastEndOfLine),
        Some(c) if is_iso_control(c) => Err(LexError::ControlChar),
        Some(c) => Ok(c),
    }
}

/// Returns true if the character may appear inside a literal.
#[inline]
pub fn is_graphic(c: char) -> bool {
    check_graphic(Some(c)).is_ok()
}
