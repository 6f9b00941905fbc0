//! Erasure of bindings before coverage checking.

use ecow::EcoString;

use crate::syntax::Pattern;
use crate::{Box, Vec};

/// A pattern reduced to its shape.
///
/// Variables are wildcards, as-bindings are their inner pattern and tuple
/// chains are flattened into one n-ary tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Pat {
    Wildcard,
    Unit,
    Bool(bool),
    Int(i64),
    Str(EcoString),
    Nil,
    Cons(Box<Pat>, Box<Pat>),
    Tuple(Vec<Pat>),
    Constructor(EcoString, Box<Pat>),
}

impl Pat {
    pub(crate) fn is_wildcard(&self) -> bool {
        matches!(self, Pat::Wildcard)
    }
}

pub(crate) fn normalize(pattern: &Pattern) -> Pat {
    match pattern {
        Pattern::Wildcard | Pattern::Variable(_) => Pat::Wildcard,
        Pattern::As(_, inner) => normalize(inner),
        Pattern::Unit => Pat::Unit,
        Pattern::Bool(b) => Pat::Bool(*b),
        Pattern::Int(n) => Pat::Int(*n),
        Pattern::Str(s) => Pat::Str(s.clone()),
        Pattern::EndOfList => Pat::Nil,
        Pattern::ListCons(head, tail) => {
            Pat::Cons(Box::new(normalize(head)), Box::new(normalize(tail)))
        }
        Pattern::TupleCons(first, rest) => {
            let mut components = Vec::from([normalize(first)]);
            flatten_tuple(rest, &mut components);
            Pat::Tuple(components)
        }
        Pattern::EndOfTuple => panic!("empty tuple pattern"),
        Pattern::Constructor(name, payload) => {
            Pat::Constructor(name.clone(), Box::new(normalize(payload)))
        }
    }
}

fn flatten_tuple(mut rest: &Pattern, components: &mut Vec<Pat>) {
    loop {
        match rest {
            Pattern::EndOfTuple => return,
            Pattern::TupleCons(component, next) => {
                components.push(normalize(component));
                rest = next;
            }
            other => panic!("unterminated tuple pattern: {:?}", other),
        }
    }
}
