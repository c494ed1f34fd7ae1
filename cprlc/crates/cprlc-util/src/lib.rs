//! cprlc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared foundation of the CPRL compiler crates:
//!
//! - [`span`] - source positions (`line`, `character`) attached to tokens
//!   and diagnostics
//! - [`diagnostic`] - the diagnostics sink ([`Handler`]) that accumulates
//!   errors for one compilation run, plus the fluent [`DiagnosticBuilder`]
//!   and the [`DiagnosticCode`] catalogue
//!
//! Every compiler phase (lexer, parser, constraint checker) reports into the
//! same `&Handler`. The handler is scoped to a run and passed explicitly, so
//! there is no process-wide error state.
//!
//! # Example
//!
//! ```
//! use cprlc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Position};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Invalid character '#'")
//!     .code(DiagnosticCode::E_LEXER_INVALID_CHAR)
//!     .position(Position::new(3, 7))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Position;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
