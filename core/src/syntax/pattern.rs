//! Patterns of the object language, as produced by the parser.

use ecow::EcoString;

use crate::{Box, Vec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Unit,
    Bool(bool),
    Int(i64),
    Str(EcoString),
    /// `head :: tail`
    ListCons(Box<Pattern>, Box<Pattern>),
    /// `[]`
    EndOfList,
    /// One component of a tuple followed by the rest of the chain.
    TupleCons(Box<Pattern>, Box<Pattern>),
    EndOfTuple,
    Wildcard,
    Variable(EcoString),
    /// `pattern as name`
    As(EcoString, Box<Pattern>),
    /// `Ctor(payload)`; a constructor without arguments carries `Unit`.
    Constructor(EcoString, Box<Pattern>),
}

impl Pattern {
    pub fn var(name: impl Into<EcoString>) -> Self {
        Pattern::Variable(name.into())
    }

    pub fn str(value: impl Into<EcoString>) -> Self {
        Pattern::Str(value.into())
    }

    pub fn cons(head: Pattern, tail: Pattern) -> Self {
        Pattern::ListCons(Box::new(head), Box::new(tail))
    }

    /// `[p1; p2; ...]`, desugared to a cons chain ending in `EndOfList`.
    pub fn list(items: impl IntoIterator<Item = Pattern>) -> Self {
        let items: Vec<Pattern> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Pattern::EndOfList, |tail, head| Pattern::cons(head, tail))
    }

    /// `(p1, p2, ...)`, as a tuple-cons chain ending in `EndOfTuple`.
    pub fn tuple(components: impl IntoIterator<Item = Pattern>) -> Self {
        let components: Vec<Pattern> = components.into_iter().collect();
        components
            .into_iter()
            .rev()
            .fold(Pattern::EndOfTuple, |rest, component| {
                Pattern::TupleCons(Box::new(component), Box::new(rest))
            })
    }

    pub fn ctor(name: impl Into<EcoString>, payload: Pattern) -> Self {
        Pattern::Constructor(name.into(), Box::new(payload))
    }

    /// A constructor applied to no argument.
    pub fn nullary(name: impl Into<EcoString>) -> Self {
        Pattern::ctor(name, Pattern::Unit)
    }

    pub fn as_binding(self, name: impl Into<EcoString>) -> Self {
        Pattern::As(name.into(), Box::new(self))
    }
}

/// One arm of a match expression.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternBranch<E> {
    pub pattern: Pattern,
    /// Evaluated only when the pattern matches.
    pub guard: Option<E>,
    pub body: E,
}

impl<E> PatternBranch<E> {
    pub fn new(pattern: Pattern, body: E) -> Self {
        PatternBranch {
            pattern,
            guard: None,
            body,
        }
    }

    pub fn guarded(pattern: Pattern, guard: E, body: E) -> Self {
        PatternBranch {
            pattern,
            guard: Some(guard),
            body,
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }
}
