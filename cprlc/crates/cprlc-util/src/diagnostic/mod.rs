//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the diagnostics sink shared by the compiler phases.
//! Phases never abort on a diagnostic: they emit it into the [`Handler`] and
//! keep going, and the driver decides what to do with the accumulated list
//! once the run is over.
//!
//! # Examples
//!
//! ```
//! use cprlc_util::diagnostic::{DiagnosticBuilder, Handler};
//! use cprlc_util::Position;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Invalid character '#'")
//!     .position(Position::new(1, 5))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Position;
use std::cell::{Cell, RefCell};
use std::fmt;

/// A lexical error with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub position: Position,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use cprlc_util::diagnostic::Diagnostic;
    /// use cprlc_util::Position;
    ///
    /// let diag = Diagnostic::error("Invalid Char literal.", Position::new(1, 1));
    /// assert_eq!(diag.to_string(), "error: Invalid Char literal. (line 1, character 1)");
    /// ```
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
            code: None,
        }
    }
}

/// Renders as `error[E1001]: message (line 3, character 7)`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if !self.position.is_dummy() {
            write!(f, " ({})", self.position)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` is the diagnostics sink of one compilation run. It uses
/// interior mutability so that the lexer and any later phase can all hold a
/// shared `&Handler` at the same time. It is meant to be driven from a
/// single thread.
///
/// An optional error limit caps how many errors are *stored*; errors past
/// the limit are still counted, so [`Handler::has_errors`] and
/// [`Handler::error_count`] stay accurate.
///
/// # Examples
///
/// ```
/// use cprlc_util::diagnostic::{Diagnostic, Handler};
/// use cprlc_util::Position;
///
/// let handler = Handler::with_error_limit(1);
/// handler.emit_diagnostic(Diagnostic::error("first", Position::START));
/// handler.emit_diagnostic(Diagnostic::error("second", Position::START));
///
/// assert_eq!(handler.error_count(), 2);
/// assert_eq!(handler.diagnostics().len(), 1);
/// assert_eq!(handler.suppressed_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Number of errors reported, including suppressed ones
    errors: Cell<usize>,
    /// Number of diagnostics dropped because of the error limit
    suppressed: Cell<usize>,
    /// Maximum number of errors to store
    error_limit: Option<usize>,
}

impl Handler {
    /// Create a new handler with no error limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that stores at most `limit` errors
    pub fn with_error_limit(limit: usize) -> Self {
        Self {
            error_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        let errors = self.errors.get() + 1;
        self.errors.set(errors);
        if self.error_limit.is_some_and(|limit| errors > limit) {
            self.suppressed.set(self.suppressed.get() + 1);
            return;
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.errors.get() > 0
    }

    /// Get the number of errors reported, including suppressed ones
    pub fn error_count(&self) -> usize {
        self.errors.get()
    }

    /// Get the number of errors dropped because of the error limit
    pub fn suppressed_count(&self) -> usize {
        self.suppressed.get()
    }

    /// Get all stored diagnostics, in the order they were emitted
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Get the stored error messages, in the order they were emitted
    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }
}
