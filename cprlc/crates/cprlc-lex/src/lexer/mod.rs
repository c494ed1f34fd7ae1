//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and resynchronization
//! - `scanner` - Character-level primitives shared by the sub-scanners
//! - `buffer` - Reusable text accumulator for identifiers and literals
//! - `identifier` - Identifier, reserved word and integer literal lexing
//! - `string` - Char and string literal lexing, escape sequences
//! - `operator` - Two-character operator disambiguation
//! - `comment` - Whitespace and comment skipping

mod buffer;
mod comment;
mod core;
mod identifier;
mod operator;
mod scanner;
mod string;

pub use core::Lexer;

use crate::token::Symbol;

/// Symbol and optional text produced by one sub-scanner.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub(crate) symbol: Symbol,
    pub(crate) text: Option<String>,
}

impl Lexeme {
    pub(crate) fn bare(symbol: Symbol) -> Self {
        Self { symbol, text: None }
    }

    pub(crate) fn with_text(symbol: Symbol, text: String) -> Self {
        Self {
            symbol,
            text: Some(text),
        }
    }
}
