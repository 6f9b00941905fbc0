//! Witness values reported for coverage gaps.

use core::fmt;

use ecow::EcoString;
use serde::Serialize;
use smallvec::SmallVec;

use crate::{Box, Vec};

/// A sketch of a value that some branch set fails to handle.
///
/// Only ever rendered into diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Instance {
    Wildcard,
    Unit,
    Bool(bool),
    Int(i64),
    Str(EcoString),
    Nil,
    Cons(Box<Instance>, Box<Instance>),
    Tuple(Vec<Instance>),
    /// A constructor and its payload; `None` for constructors without one.
    Constructor(EcoString, Option<Box<Instance>>),
}

/// Instances for consecutive slots of the obligation matrix.
pub(crate) type WitnessRow = SmallVec<[Instance; 4]>;

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instance::Wildcard => write!(f, "_"),
            Instance::Unit => write!(f, "()"),
            Instance::Bool(b) => write!(f, "{}", b),
            Instance::Int(n) => write!(f, "{}", n),
            Instance::Str(s) => write!(f, "{:?}", s.as_str()),
            Instance::Nil => write!(f, "[]"),
            Instance::Cons(head, tail) => {
                if matches!(head.as_ref(), Instance::Cons(..)) {
                    write!(f, "({}) :: {}", head, tail)
                } else {
                    write!(f, "{} :: {}", head, tail)
                }
            }
            Instance::Tuple(components) => {
                write!(f, "(")?;
                write_separated(f, components)?;
                write!(f, ")")
            }
            Instance::Constructor(name, None) => write!(f, "{}", name),
            Instance::Constructor(name, Some(payload)) => match payload.as_ref() {
                Instance::Tuple(components) => {
                    write!(f, "{}(", name)?;
                    write_separated(f, components)?;
                    write!(f, ")")
                }
                other => write!(f, "{}({})", name, other),
            },
        }
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Instance]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToString;
    use pretty_assertions::assert_eq;

    fn cons(head: Instance, tail: Instance) -> Instance {
        Instance::Cons(Box::new(head), Box::new(tail))
    }

    #[test]
    fn test_literals() {
        assert_eq!(Instance::Unit.to_string(), "()");
        assert_eq!(Instance::Bool(false).to_string(), "false");
        assert_eq!(Instance::Int(-3).to_string(), "-3");
        assert_eq!(Instance::Str("a\"b".into()).to_string(), r#""a\"b""#);
    }

    #[test]
    fn test_cons_parenthesizes_nested_head() {
        let inner = cons(Instance::Int(1), Instance::Nil);
        let outer = cons(inner, cons(Instance::Wildcard, Instance::Wildcard));
        assert_eq!(outer.to_string(), "(1 :: []) :: _ :: _");
    }

    #[test]
    fn test_constructor_payloads() {
        assert_eq!(Instance::Constructor("None".into(), None).to_string(), "None");
        assert_eq!(
            Instance::Constructor("Some".into(), Some(Box::new(Instance::Wildcard))).to_string(),
            "Some(_)"
        );
        let pair = Instance::Tuple(vec![Instance::Int(0), Instance::Nil]);
        assert_eq!(
            Instance::Constructor("Pair".into(), Some(Box::new(pair))).to_string(),
            "Pair(0, [])"
        );
    }
}
