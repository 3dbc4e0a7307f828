//! wave_syntax: shared syntax types.
//!
//! Spans, the virtual file store, token kinds, diagnostics, and the
//! diagnostic renderer used by every stage of the front end.
mod diagnostic;
mod render;
mod source;
mod span;
mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use render::{emit_diagnostics, render_diagnostic, render_diagnostics};
pub use source::{FileId, SourceMap, SourceText};
pub use span::Span;
pub use token::TokenKind;
