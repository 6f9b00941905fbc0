//! Exhaustiveness and reachability of pattern matches.
//!
//! Branches are reduced to their shape, laid out as an obligation matrix
//! with one slot for the scrutinee, and decomposed slot by slot: each slot
//! type contributes a signature of head shapes, each shape keeps the rows
//! compatible with it, and every way of running out of rows becomes a
//! witness. The result is advisory: findings are warnings and never stop
//! compilation.
//!
//! Literal types with infinite domains are approximated by the literals
//! appearing in the match plus one element for every other value, so a match
//! listing all ten digits without a final wildcard is still reported as
//! non-exhaustive.

mod instance;
mod matrix;
mod normalize;
mod report;
mod signature;

#[cfg(test)]
mod checker_test;

pub use instance::Instance;
pub use report::{GUARD_UNVERIFIED_CODE, MatchReport, NON_EXHAUSTIVE_CODE, UNUSED_BRANCH_CODE};

use alloc::collections::BTreeSet;

use crate::api::{CheckOptions, DiagnosticSink};
use crate::syntax::{PatternBranch, Span};
use crate::types::{Level, MonoType, TypeContext, TypeEnvironment};
use crate::{Vec, vec};

use matrix::{Checker, GapKind, Row};
use normalize::normalize;

/// Check the branches of one match expression against the scrutinee type.
///
/// `level` and the context are used to instantiate constructor payloads and
/// alias definitions met while decomposing the scrutinee type.
///
/// # Panics
///
/// On input no well-typed program produces: a constructor not declared by
/// the variant it is matched against, a literal or constructor pattern
/// against a type without a signature, or a malformed tuple pattern.
pub fn check_match<E, T: TypeEnvironment + ?Sized>(
    ctx: &mut TypeContext,
    env: &T,
    level: Level,
    branches: &[PatternBranch<E>],
    scrutinee: &MonoType,
    span: Span,
    options: &CheckOptions,
) -> MatchReport {
    let rows: Vec<Row> = branches
        .iter()
        .enumerate()
        .map(|(index, branch)| Row {
            pats: vec![normalize(&branch.pattern)],
            branch: index,
            guarded: branch.is_guarded(),
        })
        .collect();

    let mut checker = Checker::new(ctx, env, level);
    let gaps = checker.check(rows, core::slice::from_ref(scrutinee));
    let used = checker.into_used();

    let mut non_exhaustive = Vec::new();
    let mut guard_unverified = Vec::new();
    for mut gap in gaps {
        let witness = gap.row.remove(0);
        let list = match gap.kind {
            GapKind::NonExhaustive => &mut non_exhaustive,
            GapKind::GuardUnverified => &mut guard_unverified,
        };
        if !list.contains(&witness) {
            list.push(witness);
        }
    }
    let omitted_non_exhaustive = truncate(&mut non_exhaustive, options.max_witnesses);
    let omitted_guard_unverified = truncate(&mut guard_unverified, options.max_witnesses);

    let unused = complement(branches.len(), &used);

    tracing::debug!(
        %span,
        branches = branches.len(),
        non_exhaustive = non_exhaustive.len() + omitted_non_exhaustive,
        guard_unverified = guard_unverified.len() + omitted_guard_unverified,
        unused = unused.len(),
        "checked match"
    );

    MatchReport {
        span,
        non_exhaustive,
        guard_unverified,
        omitted_non_exhaustive,
        omitted_guard_unverified,
        used,
        unused,
    }
}

/// `check_match`, then emit the report's warning block, if any, to `sink`.
#[allow(clippy::too_many_arguments)]
pub fn report_match<E, T: TypeEnvironment + ?Sized>(
    ctx: &mut TypeContext,
    env: &T,
    level: Level,
    branches: &[PatternBranch<E>],
    scrutinee: &MonoType,
    span: Span,
    options: &CheckOptions,
    sink: &mut dyn DiagnosticSink,
) -> MatchReport {
    let report = check_match(ctx, env, level, branches, scrutinee, span, options);
    if let Some(diagnostic) = report.to_diagnostic(options) {
        sink.emit(diagnostic);
    }
    report
}

/// Keep at most `max` witnesses and return how many were dropped.
fn truncate(witnesses: &mut Vec<Instance>, max: usize) -> usize {
    let omitted = witnesses.len().saturating_sub(max);
    witnesses.truncate(max);
    omitted
}

/// Indices in `0..count` missing from `used`.
fn complement(count: usize, used: &BTreeSet<usize>) -> Vec<usize> {
    (0..count).filter(|index| !used.contains(index)).collect()
}
