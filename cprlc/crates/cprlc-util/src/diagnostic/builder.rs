//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Position;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use cprlc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use cprlc_util::Position;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Illegal escape character.")
///     .code(DiagnosticCode::E_LEXER_ILLEGAL_ESCAPE)
///     .position(Position::new(4, 12))
///     .emit(&handler);
///
/// assert!(handler.has_errors());
/// ```
pub struct DiagnosticBuilder {
    message: String,
    position: Position,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: Position::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source position
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            code: self.code,
            ..Diagnostic::error(self.message, self.position)
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
