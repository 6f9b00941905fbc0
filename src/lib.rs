//! quire - type schemes and match checking for a typesetting language
//!
//! # Overview
//!
//! This crate is the public face of the quire compiler front end. It
//! re-exports the engine from `quire_core` and adds terminal rendering of
//! the warnings produced while checking pattern matches.
//!
//! # Quick Start
//!
//! ```
//! use quire::{CheckOptions, Level, MonoType, Pattern, PatternBranch, Span};
//! use quire::{TypeContext, TypeDefinitions, check_match};
//!
//! let mut ctx = TypeContext::new();
//! let defs = TypeDefinitions::new();
//! let branches = vec![PatternBranch::new(Pattern::Bool(true), ())];
//!
//! let report = check_match(
//!     &mut ctx,
//!     &defs,
//!     Level::BOTTOM,
//!     &branches,
//!     &MonoType::bool(),
//!     Span::new(0, 24),
//!     &CheckOptions::default(),
//! );
//! assert_eq!(report.non_exhaustive[0].to_string(), "false");
//! ```
//!
//! # Rendering
//!
//! Diagnostics produced by [`report_match`] or [`MatchReport::to_diagnostic`]
//! can be printed with [`render_diagnostics`] or captured with
//! [`render_diagnostics_to_string`].

// Re-export public API from quire_core
pub use quire_core::api::{CheckOptions, Diagnostic, DiagnosticSink, Severity};
pub use quire_core::exhaustiveness::{
    self, GUARD_UNVERIFIED_CODE, Instance, MatchReport, NON_EXHAUSTIVE_CODE, UNUSED_BRANCH_CODE,
    check_match, report_match,
};
pub use quire_core::syntax::{Pattern, PatternBranch, Span};
pub use quire_core::types::{
    self, DefinitionError, Level, MonoType, PolyType, Quantifiability, Scheme, Ty, TypeContext,
    TypeDefinitions, TypeEnvironment,
};

mod warning_renderer;

pub use warning_renderer::{
    render_diagnostics, render_diagnostics_to, render_diagnostics_to_string,
    render_diagnostics_to_string_no_color,
};
