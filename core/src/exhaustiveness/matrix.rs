//! The obligation matrix and its recursive decomposition.

use alloc::collections::BTreeSet;

use crate::exhaustiveness::instance::{Instance, WitnessRow};
use crate::exhaustiveness::normalize::Pat;
use crate::exhaustiveness::signature::signature;
use crate::types::{Level, MonoType, TypeContext, TypeEnvironment};
use crate::{Vec, vec};

/// One alive branch: its pending slot patterns and where it came from.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub(crate) pats: Vec<Pat>,
    pub(crate) branch: usize,
    pub(crate) guarded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GapKind {
    /// No branch handles the witness.
    NonExhaustive,
    /// Only guarded branches handle the witness.
    GuardUnverified,
}

/// A witness for the slots of the matrix that produced it.
#[derive(Debug, Clone)]
pub(crate) struct Gap {
    pub(crate) kind: GapKind,
    pub(crate) row: WitnessRow,
}

pub(crate) struct Checker<'a, T: ?Sized> {
    ctx: &'a mut TypeContext,
    env: &'a T,
    level: Level,
    used: BTreeSet<usize>,
}

impl<'a, T: TypeEnvironment + ?Sized> Checker<'a, T> {
    pub(crate) fn new(ctx: &'a mut TypeContext, env: &'a T, level: Level) -> Self {
        Checker {
            ctx,
            env,
            level,
            used: BTreeSet::new(),
        }
    }

    /// Indices of the branches reached at some leaf.
    pub(crate) fn into_used(self) -> BTreeSet<usize> {
        self.used
    }

    /// Every gap of `rows` against slots of `types`.
    pub(crate) fn check(&mut self, rows: Vec<Row>, types: &[MonoType]) -> Vec<Gap> {
        let Some((ty, rest_types)) = types.split_first() else {
            return self.leaf(&rows);
        };

        if rows.is_empty() {
            return vec![Gap {
                kind: GapKind::NonExhaustive,
                row: types.iter().map(|_| Instance::Wildcard).collect(),
            }];
        }

        if rows.iter().all(|row| row.pats[0].is_wildcard()) {
            tracing::trace!(slots = types.len(), "skipping wildcard column");
            let rows = rows
                .into_iter()
                .map(|mut row| {
                    row.pats.remove(0);
                    row
                })
                .collect();
            let mut gaps = self.check(rows, rest_types);
            for gap in &mut gaps {
                gap.row.insert(0, Instance::Wildcard);
            }
            return gaps;
        }

        let elements = signature(
            self.ctx,
            self.env,
            self.level,
            ty,
            rows.iter().map(|row| &row.pats[0]),
        );
        tracing::trace!(
            elements = elements.len(),
            rows = rows.len(),
            "specializing column"
        );

        let mut gaps = Vec::new();
        for element in &elements {
            let specialized: Vec<Row> = rows
                .iter()
                .filter_map(|row| {
                    let mut pats = element.specialize(&row.pats[0])?;
                    pats.extend_from_slice(&row.pats[1..]);
                    Some(Row {
                        pats,
                        branch: row.branch,
                        guarded: row.guarded,
                    })
                })
                .collect();
            let mut sub_types = element.sub_types();
            sub_types.extend_from_slice(rest_types);

            let arity = element.arity();
            for mut gap in self.check(specialized, &sub_types) {
                let args: Vec<Instance> = gap.row.drain(..arity).collect();
                gap.row.insert(0, element.instance(args));
                gaps.push(gap);
            }
        }
        gaps
    }

    /// No slot left: the first unguarded row takes every value reaching
    /// here, and guarded rows before it may.
    ///
    /// Guards are only judged here. A value that no row reaches at all is
    /// non-exhaustive even when the rows dropped on the way were guarded, so
    /// `[true when g]` on `bool` reports `false` as non-exhaustive and `true`
    /// as guard-unverified.
    fn leaf(&mut self, rows: &[Row]) -> Vec<Gap> {
        for row in rows {
            self.used.insert(row.branch);
            if !row.guarded {
                return Vec::new();
            }
        }
        let kind = if rows.is_empty() {
            GapKind::NonExhaustive
        } else {
            GapKind::GuardUnverified
        };
        vec![Gap {
            kind,
            row: WitnessRow::new(),
        }]
    }
}
