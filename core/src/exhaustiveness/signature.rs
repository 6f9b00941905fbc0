//! Head shapes partitioning the values of a slot type.

use ecow::EcoString;

use crate::exhaustiveness::instance::Instance;
use crate::exhaustiveness::normalize::Pat;
use crate::types::{
    BaseType, Level, MonoType, Quantifiability, Ty, TypeContext, TypeEnvironment,
};
use crate::{Box, Vec, vec};

/// One element of a signature.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Unit,
    Bool(bool),
    Int(i64),
    Str(EcoString),
    /// Every int not listed.
    OtherInt(Vec<i64>),
    /// Every string not listed.
    OtherStr(Vec<EcoString>),
    Nil,
    /// A non-empty list of the given element type.
    Cons(MonoType),
    Tuple(Vec<MonoType>),
    Constructor {
        name: EcoString,
        /// `None` when the payload type is unit.
        payload: Option<MonoType>,
    },
}

impl Element {
    /// Types of the slots replacing the consumed one.
    pub(crate) fn sub_types(&self) -> Vec<MonoType> {
        match self {
            Element::Cons(elem) => vec![elem.clone(), MonoType::list(elem.clone())],
            Element::Tuple(components) => components.clone(),
            Element::Constructor {
                payload: Some(payload),
                ..
            } => vec![payload.clone()],
            _ => Vec::new(),
        }
    }

    pub(crate) fn arity(&self) -> usize {
        match self {
            Element::Cons(_) => 2,
            Element::Tuple(components) => components.len(),
            Element::Constructor {
                payload: Some(_), ..
            } => 1,
            _ => 0,
        }
    }

    /// Sub-patterns of `pat` under this element, or `None` if a value of
    /// this shape never matches `pat`.
    pub(crate) fn specialize(&self, pat: &Pat) -> Option<Vec<Pat>> {
        match (self, pat) {
            (_, Pat::Wildcard) => Some(vec![Pat::Wildcard; self.arity()]),
            (Element::Unit, Pat::Unit) => Some(Vec::new()),
            (Element::Bool(expected), Pat::Bool(b)) if expected == b => Some(Vec::new()),
            (Element::Int(expected), Pat::Int(n)) if expected == n => Some(Vec::new()),
            (Element::Str(expected), Pat::Str(s)) if expected == s => Some(Vec::new()),
            (Element::Nil, Pat::Nil) => Some(Vec::new()),
            (Element::Cons(_), Pat::Cons(head, tail)) => {
                Some(vec![head.as_ref().clone(), tail.as_ref().clone()])
            }
            (Element::Tuple(types), Pat::Tuple(components)) => {
                assert_eq!(
                    types.len(),
                    components.len(),
                    "tuple pattern does not match the arity of its type"
                );
                Some(components.clone())
            }
            (Element::Constructor { name, payload }, Pat::Constructor(tag, inner))
                if name == tag =>
            {
                match payload {
                    Some(_) => Some(vec![inner.as_ref().clone()]),
                    None => Some(Vec::new()),
                }
            }
            _ => None,
        }
    }

    /// Rebuild the witness for this shape from the witnesses of its slots.
    pub(crate) fn instance(&self, mut args: Vec<Instance>) -> Instance {
        match self {
            Element::Unit => Instance::Unit,
            Element::Bool(b) => Instance::Bool(*b),
            Element::Int(n) => Instance::Int(*n),
            Element::Str(s) => Instance::Str(s.clone()),
            Element::OtherInt(seen) => Instance::Int(unseen_int(seen)),
            Element::OtherStr(seen) => Instance::Str(unseen_str(seen)),
            Element::Nil => Instance::Nil,
            Element::Cons(_) => {
                let tail = args.pop().unwrap_or(Instance::Wildcard);
                let head = args.pop().unwrap_or(Instance::Wildcard);
                Instance::Cons(Box::new(head), Box::new(tail))
            }
            Element::Tuple(_) => Instance::Tuple(args),
            Element::Constructor { name, payload } => {
                let payload = payload
                    .as_ref()
                    .map(|_| Box::new(args.pop().unwrap_or(Instance::Wildcard)));
                Instance::Constructor(name.clone(), payload)
            }
        }
    }
}

/// The smallest non-negative int not in `seen`.
fn unseen_int(seen: &[i64]) -> i64 {
    (0..).find(|n| !seen.contains(n)).unwrap_or(i64::MIN)
}

/// The shortest string of `x`s not in `seen`.
fn unseen_str(seen: &[EcoString]) -> EcoString {
    let mut candidate = EcoString::new();
    while seen.contains(&candidate) {
        candidate.push('x');
    }
    candidate
}

/// Look through links, synonyms and alias identities.
pub(crate) fn expand_slot_type<T: TypeEnvironment + ?Sized>(
    ctx: &mut TypeContext,
    env: &T,
    level: Level,
    ty: &MonoType,
) -> MonoType {
    let mut ty = ctx.resolve_synonyms(ty).clone();
    loop {
        let expanded = match &ty {
            Ty::Variant(args, id) if env.is_alias(id) => env
                .expand_alias(ctx, Quantifiability::Quantifiable, level, id, args)
                .unwrap_or_else(|| panic!("alias `{}` has no definition", id)),
            _ => return ty,
        };
        tracing::trace!(alias = ?ty, "expanded alias identity");
        ty = ctx.resolve_synonyms(&expanded).clone();
    }
}

/// The signature of `ty` for a column containing at least one
/// non-wildcard pattern.
pub(crate) fn signature<'p, T: TypeEnvironment + ?Sized>(
    ctx: &mut TypeContext,
    env: &T,
    level: Level,
    ty: &MonoType,
    column: impl Iterator<Item = &'p Pat>,
) -> Vec<Element> {
    let ty = expand_slot_type(ctx, env, level, ty);
    match &ty {
        Ty::Base(BaseType::Unit) => vec![Element::Unit],
        Ty::Base(BaseType::Bool) => vec![Element::Bool(true), Element::Bool(false)],
        Ty::Base(BaseType::Int) => {
            let mut seen: Vec<i64> = Vec::new();
            for pat in column {
                if let Pat::Int(n) = pat {
                    if !seen.contains(n) {
                        seen.push(*n);
                    }
                }
            }
            let mut elements: Vec<Element> = seen.iter().copied().map(Element::Int).collect();
            elements.push(Element::OtherInt(seen));
            elements
        }
        Ty::Base(BaseType::String) => {
            let mut seen: Vec<EcoString> = Vec::new();
            for pat in column {
                if let Pat::Str(s) = pat {
                    if !seen.contains(s) {
                        seen.push(s.clone());
                    }
                }
            }
            let mut elements: Vec<Element> = seen.iter().cloned().map(Element::Str).collect();
            elements.push(Element::OtherStr(seen));
            elements
        }
        Ty::List(elem) => vec![Element::Cons(elem.as_ref().clone()), Element::Nil],
        Ty::Product(components) => vec![Element::Tuple(components.clone())],
        Ty::Variant(args, id) => {
            let builders = env
                .enumerate_constructors(Quantifiability::Quantifiable, level, id)
                .unwrap_or_else(|| panic!("type `{}` is not a declared variant", id));
            for pat in column {
                if let Pat::Constructor(name, _) = pat {
                    if !builders.iter().any(|b| b.name() == name) {
                        panic!("constructor `{}` is not declared by type `{}`", name, id);
                    }
                }
            }
            builders
                .iter()
                .map(|builder| {
                    let payload = builder.build(ctx, args);
                    let is_unit =
                        matches!(ctx.resolve_synonyms(&payload), Ty::Base(BaseType::Unit));
                    Element::Constructor {
                        name: builder.name().clone(),
                        payload: (!is_unit).then_some(payload),
                    }
                })
                .collect()
        }
        other => panic!(
            "pattern against type `{}` which has no signature",
            ctx.display_type(other)
        ),
    }
}
