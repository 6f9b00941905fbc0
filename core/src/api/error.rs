//! Diagnostics reported to the user.
//!
//! The match checker never fails compilation; everything it finds is reported
//! as a `Diagnostic` with `Severity::Warning` and handed to a
//! `DiagnosticSink`.

use serde::Serialize;

use crate::syntax::Span;
use crate::{String, Vec};

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

/// A diagnostic message with its source location.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Headline of the diagnostic.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// One line per individual finding of this diagnostic.
    pub notes: Vec<String>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional code (e.g., "W0001") for documentation lookup.
    pub code: Option<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            span,
            notes: Vec::new(),
            help: None,
            code: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.span, self.message)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        for note in &self.notes {
            write!(f, "\n  {}", note)?;
        }
        if let Some(ref help) = self.help {
            write!(f, "\nhelp: {}", help)?;
        }
        Ok(())
    }
}

/// Severity level for diagnostics.
///
/// Findings of the match checker are advisory and never fail compilation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Warning - suspicious code that might be wrong.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Receiver of diagnostics produced while checking a program.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
