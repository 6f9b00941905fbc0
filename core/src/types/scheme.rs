//! Level-based let-polymorphism.
//!
//! `generalize` turns a mono type into a `Scheme` by binding the variables
//! created strictly deeper than the current level; `instantiate` turns a
//! scheme back into a mono type with fresh variables for its bound ones.
//! Both keep a per-call memo so that repeated occurrences of one variable map
//! to one variable on the other side.

use hashbrown::HashMap;

use crate::Vec;
use crate::types::context::{FreeTypeVar, TypeContext, TypeVarCell};
use crate::types::identity::{BoundId, FreeId};
use crate::types::level::{Level, Quantifiability};
use crate::types::traits::TypeTransformer;
use crate::types::types::{Kind, MonoType, PolyKind, PolyType, PolyVar, Ty};

/// A variable owned by a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundTypeVar {
    pub id: BoundId,
    /// May mention other bound variables of the same scheme.
    pub kind: PolyKind,
}

/// A polymorphic type: a body plus the bound variables it owns.
///
/// Variables tagged `StillFree` in the body are shared with the ambient
/// context and are not listed in `bound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    bound: Vec<BoundTypeVar>,
    body: PolyType,
}

impl Scheme {
    pub fn new(bound: Vec<BoundTypeVar>, body: PolyType) -> Self {
        Scheme { bound, body }
    }

    /// A scheme binding nothing.
    pub fn mono(ty: &MonoType) -> Self {
        Scheme {
            bound: Vec::new(),
            body: PolyType::from_mono(ty),
        }
    }

    pub fn body(&self) -> &PolyType {
        &self.body
    }

    pub fn bound_vars(&self) -> &[BoundTypeVar] {
        &self.bound
    }

    pub fn bound_var(&self, id: BoundId) -> Option<&BoundTypeVar> {
        self.bound.iter().find(|var| var.id == id)
    }

    pub fn is_monomorphic(&self) -> bool {
        self.bound.is_empty()
    }
}

impl TypeContext {
    /// Instantiate `scheme` with fresh variables at `level`.
    ///
    /// Every bound variable gets exactly one fresh free variable per call,
    /// reused for all of its occurrences (including occurrences inside other
    /// variables' kinds). `StillFree` occurrences are returned unchanged.
    pub fn instantiate(
        &mut self,
        level: Level,
        quantifiability: Quantifiability,
        scheme: &Scheme,
    ) -> MonoType {
        let mut instantiator = Instantiator {
            ctx: self,
            scheme,
            level,
            quantifiability,
            memo: HashMap::new(),
        };
        let ty = instantiator.transform(&scheme.body);
        tracing::trace!(
            level = level.depth(),
            fresh = instantiator.memo.len(),
            "instantiated scheme"
        );
        ty
    }

    /// Instantiate `scheme` with `params[i]` replaced by `args[i]`.
    ///
    /// Bound variables not listed in `params` are instantiated fresh, as in
    /// `instantiate`.
    pub fn instantiate_with_args(
        &mut self,
        level: Level,
        quantifiability: Quantifiability,
        params: &[BoundId],
        args: &[MonoType],
        scheme: &Scheme,
    ) -> MonoType {
        if params.len() != args.len() {
            panic!(
                "expected {} type arguments, got {}",
                params.len(),
                args.len()
            );
        }
        let memo = params.iter().copied().zip(args.iter().cloned()).collect();
        let mut instantiator = Instantiator {
            ctx: self,
            scheme,
            level,
            quantifiability,
            memo,
        };
        instantiator.transform(&scheme.body)
    }

    /// Generalize `ty` at `level`.
    ///
    /// A free variable is bound iff it is quantifiable and was created at a
    /// level strictly deeper than `level`. Everything else stays `StillFree`.
    pub fn generalize(&mut self, level: Level, ty: &MonoType) -> Scheme {
        let scheme = Generalizer::new(self, Some(level)).run(ty);
        tracing::debug!(
            level = level.depth(),
            bound = scheme.bound.len(),
            "generalized type"
        );
        scheme
    }

    /// Generalize every free variable of `ty`, regardless of level or
    /// quantifiability. Only meant for types known to be closed.
    pub fn lift_poly(&mut self, ty: &MonoType) -> Scheme {
        Generalizer::new(self, None).run(ty)
    }
}

struct Instantiator<'c, 's> {
    ctx: &'c mut TypeContext,
    scheme: &'s Scheme,
    level: Level,
    quantifiability: Quantifiability,
    memo: HashMap<BoundId, MonoType>,
}

impl TypeTransformer<PolyVar, FreeId> for Instantiator<'_, '_> {
    fn transform_var(&mut self, var: &PolyVar) -> MonoType {
        match *var {
            PolyVar::StillFree(id) => Ty::Var(id),
            PolyVar::Bound(bound_id) => {
                if let Some(ty) = self.memo.get(&bound_id) {
                    return ty.clone();
                }
                // Registered before the kind is walked so that a kind
                // mentioning this same variable sees the fresh one.
                let fresh = self
                    .ctx
                    .fresh_free(Kind::Universal, self.quantifiability, self.level);
                self.memo.insert(bound_id, Ty::Var(fresh));

                let scheme = self.scheme;
                if let Some(bound) = scheme.bound_var(bound_id) {
                    let kind = self.transform_kind(&bound.kind);
                    self.ctx.set_kind(fresh, kind);
                }
                Ty::Var(fresh)
            }
        }
    }
}

struct Generalizer<'c> {
    ctx: &'c mut TypeContext,
    // `None` lifts every variable.
    level: Option<Level>,
    memo: HashMap<FreeId, PolyVar>,
    bound: Vec<BoundTypeVar>,
}

impl<'c> Generalizer<'c> {
    fn new(ctx: &'c mut TypeContext, level: Option<Level>) -> Self {
        Generalizer {
            ctx,
            level,
            memo: HashMap::new(),
            bound: Vec::new(),
        }
    }

    fn run(mut self, ty: &MonoType) -> Scheme {
        let body = self.transform(ty);
        Scheme {
            bound: self.bound,
            body,
        }
    }

    fn is_eligible(&self, var: &FreeTypeVar) -> bool {
        match self.level {
            None => true,
            Some(level) => {
                var.quantifiability == Quantifiability::Quantifiable
                    && level.less_than(var.level)
            }
        }
    }
}

impl TypeTransformer<FreeId, PolyVar> for Generalizer<'_> {
    fn transform_var(&mut self, id: &FreeId) -> PolyType {
        if let Some(var) = self.memo.get(id) {
            return Ty::Var(*var);
        }
        match self.ctx.cell(*id).clone() {
            TypeVarCell::Linked(linked) => self.transform(&linked),
            TypeVarCell::Free(var) if self.is_eligible(&var) => {
                let bound_id = self.ctx.fresh_bound();
                self.memo.insert(*id, PolyVar::Bound(bound_id));
                let kind = self.transform_kind(&var.kind);
                self.bound.push(BoundTypeVar { id: bound_id, kind });
                Ty::Var(PolyVar::Bound(bound_id))
            }
            TypeVarCell::Free(_) => {
                self.memo.insert(*id, PolyVar::StillFree(*id));
                Ty::Var(PolyVar::StillFree(*id))
            }
        }
    }
}
