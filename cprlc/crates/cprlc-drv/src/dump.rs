//! Token dump.
//!
//! Scans one source and writes one line per token, followed by the
//! diagnostics the lexer reported.

use std::io::Write;

use cprlc_lex::{CharSource, Lexer, Token};
use cprlc_util::Handler;

use crate::error::Result;

/// How a dump is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Prefix each token with its `line:column`.
    pub show_positions: bool,
    /// Maximum number of diagnostics to print.
    pub max_errors: Option<usize>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            show_positions: true,
            max_errors: None,
        }
    }
}

/// Summary of one dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of tokens written, not counting end of file.
    pub tokens: usize,
    /// Number of lexical errors, including those not printed.
    pub errors: usize,
}

/// Renders a token as `line:column  Symbol  text`.
///
/// # Examples
///
/// ```
/// use cprlc_drv::dump::format_token;
/// use cprlc_lex::{Symbol, Token};
/// use cprlc_util::Position;
///
/// let token = Token::new(Symbol::Identifier, Position::new(3, 7), Some("x".into()));
/// assert_eq!(format_token(&token, true), "3:7  Identifier  x");
///
/// let token = Token::new(Symbol::Assign, Position::new(3, 9), None);
/// assert_eq!(format_token(&token, false), ":=");
/// ```
pub fn format_token(token: &Token, show_positions: bool) -> String {
    let mut line = String::new();
    if show_positions {
        let position = token.position();
        line.push_str(&format!("{}:{}  ", position.line, position.column));
    }
    line.push_str(token.symbol().label());
    if let Some(text) = token.text() {
        line.push_str("  ");
        line.push_str(text);
    }
    line
}

/// Scans `source`, writing tokens to `out` and diagnostics to `diag`.
///
/// Lexical errors do not make this fail; they are counted in the summary.
/// Only failing to read the source or to write the output is an error.
pub fn dump<S, O, D>(source: S, options: &DumpOptions, out: &mut O, diag: &mut D) -> Result<Summary>
where
    S: CharSource,
    O: Write,
    D: Write,
{
    let handler = match options.max_errors {
        Some(limit) => Handler::with_error_limit(limit),
        None => Handler::new(),
    };

    let mut tokens = 0;
    for token in Lexer::new(source, &handler)? {
        writeln!(out, "{}", format_token(&token?, options.show_positions))?;
        tokens += 1;
    }

    for diagnostic in handler.diagnostics() {
        writeln!(diag, "{}", diagnostic)?;
    }
    if handler.suppressed_count() > 0 {
        writeln!(diag, "note: {} more errors not shown", handler.suppressed_count())?;
    }

    Ok(Summary {
        tokens,
        errors: handler.error_count(),
    })
}
