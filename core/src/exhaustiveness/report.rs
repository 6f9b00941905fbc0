//! Findings of one match expression and their diagnostic form.

use alloc::collections::BTreeSet;

use serde::Serialize;

use crate::api::{CheckOptions, Diagnostic};
use crate::exhaustiveness::instance::Instance;
use crate::syntax::Span;
use crate::{Vec, format};

/// Some input is handled by no branch.
pub const NON_EXHAUSTIVE_CODE: &str = "W0001";
/// Some input is handled only by guarded branches.
pub const GUARD_UNVERIFIED_CODE: &str = "W0002";
/// Some branch can never be selected.
pub const UNUSED_BRANCH_CODE: &str = "W0003";

/// Result of checking one match expression.
///
/// Branch indices are 0-based; diagnostics print them 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub span: Span,
    pub non_exhaustive: Vec<Instance>,
    pub guard_unverified: Vec<Instance>,
    /// Non-exhaustive witnesses dropped past `CheckOptions::max_witnesses`.
    pub omitted_non_exhaustive: usize,
    /// Guard-unverified witnesses dropped past `CheckOptions::max_witnesses`.
    pub omitted_guard_unverified: usize,
    pub used: BTreeSet<usize>,
    pub unused: Vec<usize>,
}

impl MatchReport {
    /// Whether every input is handled by some branch, kept or omitted
    /// witnesses alike.
    pub fn is_exhaustive(&self) -> bool {
        self.non_exhaustive.is_empty() && self.omitted_non_exhaustive == 0
    }

    /// Whether some input is handled only by guarded branches.
    pub fn relies_on_guards(&self) -> bool {
        !self.guard_unverified.is_empty() || self.omitted_guard_unverified > 0
    }

    pub fn is_clean(&self) -> bool {
        self.is_exhaustive() && !self.relies_on_guards() && self.unused.is_empty()
    }

    /// One warning block listing every finding `options` asks for, or
    /// `None` if there is nothing to report.
    pub fn to_diagnostic(&self, options: &CheckOptions) -> Option<Diagnostic> {
        let report_guards = options.report_guard_unverified && self.relies_on_guards();
        let report_unused = options.report_unused && !self.unused.is_empty();

        let (message, code) = if !self.is_exhaustive() {
            ("this pattern match is not exhaustive", NON_EXHAUSTIVE_CODE)
        } else if report_guards {
            (
                "this pattern match is exhaustive only if its guards hold",
                GUARD_UNVERIFIED_CODE,
            )
        } else if report_unused {
            ("this pattern match has unused branches", UNUSED_BRANCH_CODE)
        } else {
            return None;
        };

        let mut diagnostic = Diagnostic::warning(message, self.span.clone()).with_code(code);
        for witness in &self.non_exhaustive {
            diagnostic = diagnostic.with_note(format!("non-exhaustive: {}", witness));
        }
        if self.omitted_non_exhaustive > 0 {
            diagnostic = diagnostic.with_note(format!(
                "non-exhaustive: {} more case(s) not shown",
                self.omitted_non_exhaustive
            ));
        }
        if report_guards {
            for witness in &self.guard_unverified {
                diagnostic = diagnostic.with_note(format!("guard-unverified: {}", witness));
            }
            if self.omitted_guard_unverified > 0 {
                diagnostic = diagnostic.with_note(format!(
                    "guard-unverified: {} more case(s) not shown",
                    self.omitted_guard_unverified
                ));
            }
        }
        if report_unused {
            for index in &self.unused {
                diagnostic = diagnostic.with_note(format!("pattern #{} is unused", index + 1));
            }
        }
        if !self.is_exhaustive() {
            diagnostic = diagnostic.with_help("add branches for the missing cases or a final `_`");
        }
        Some(diagnostic)
    }
}
