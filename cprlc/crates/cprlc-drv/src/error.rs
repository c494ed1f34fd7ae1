//! Error handling module for cprl-scan.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the tool. The binary entry point wraps them in
//! `anyhow` to attach the file being processed.

use thiserror::Error;

/// Main error type for the cprl-scan tool.
///
/// Lexical errors are not represented here: they are diagnostics, collected
/// per file and printed after the token dump.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Error when the configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the lexer cannot read its source.
    #[error(transparent)]
    Lex(#[from] cprlc_lex::Error),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
