//! cprlc-lex - Lexical Analyzer for the CPRL Programming Language
//!
//! This crate turns CPRL source text into a stream of classified tokens with
//! source positions, for consumption by a recursive-descent parser.
//!
//! # Overview
//!
//! The [`Lexer`] is pull-based: it always holds one current token, and the
//! parser calls [`Lexer::advance`] to move on. Characters come from any
//! [`CharSource`]; two are provided:
//!
//! - [`Cursor`] walks a `&str` already in memory.
//! - [`Source`] reads from a [`BufRead`](std::io::BufRead) one line at a time.
//!
//! Lexical errors are reported to a shared [`Handler`](cprlc_util::Handler)
//! and never abort the scan. Only an I/O error is returned to the caller.
//!
//! # Example Usage
//!
//! ```
//! use cprlc_lex::{Cursor, Lexer, Symbol};
//! use cprlc_util::Handler;
//!
//! let source = "var x : Integer := 42; // answer";
//! let handler = Handler::new();
//! let lexer = Lexer::new(Cursor::new(source), &handler).unwrap();
//!
//! let symbols: Vec<Symbol> = lexer.map(|t| t.unwrap().symbol()).collect();
//! assert_eq!(
//!     symbols,
//!     [
//!         Symbol::Var,
//!         Symbol::Identifier,
//!         Symbol::Colon,
//!         Symbol::Integer,
//!         Symbol::Assign,
//!         Symbol::IntLiteral,
//!         Symbol::Semicolon,
//!     ]
//! );
//! assert!(!handler.has_errors());
//! ```
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! `and array begin Boolean Char class const declare else elsif end exit
//! false for function if in is Integer loop mod not of or private procedure
//! program protected public read readln return String then true type var
//! when while write writeln`
//!
//! ## Operators and punctuation
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Relational**: `=`, `!=`, `<`, `<=`, `>`, `>=`
//! - **Assignment**: `:=`
//! - **Delimiters**: `(`, `)`, `[`, `]`, `,`, `:`, `;`, `.`
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`, `007`
//! - **Char**: `'a'`, `'\n'`
//! - **String**: `"hello"`, `"tab\there"`
//!
//! Escape sequences are kept exactly as written in the token text.
//!
//! ## Comments
//!
//! `//` to end of line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{Error, LexError, Result};
pub use lexer::Lexer;
pub use source::{CharSource, Source};
pub use token::{lookup_spelling, Symbol, Token};
