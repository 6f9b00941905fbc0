//! Public API surface shared by the checker and its embedders.
//!
//! Everything the match checker finds is advisory: it is turned into
//! `Diagnostic`s with `Severity::Warning` and passed to a `DiagnosticSink`.

pub mod error;
pub mod options;

pub use error::{Diagnostic, DiagnosticSink, Severity};
pub use options::CheckOptions;
