//! Declared variant and alias types.
//!
//! The match checker only needs to enumerate the constructors of a variant
//! and to see through aliases; `TypeEnvironment` is that seam. The in-memory
//! `TypeDefinitions` registry implements it for tests and embedders that do
//! not carry their own environment.

use ecow::EcoString;
use hashbrown::HashMap;

use crate::Vec;
use crate::types::context::TypeContext;
use crate::types::identity::{BoundId, TypeId};
use crate::types::level::{Level, Quantifiability};
use crate::types::scheme::{BoundTypeVar, Scheme};
use crate::types::types::{Kind, MonoType, PolyType, PolyVar, Ty};

/// Errors raised while registering or applying type declarations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("unknown type `{0}`")]
    UnknownType(EcoString),
    #[error("constructor `{name}` is already defined by type `{owner}`")]
    DuplicateConstructor { name: EcoString, owner: EcoString },
    #[error("type `{0}` is not a variant type")]
    NotAVariant(EcoString),
    #[error("type `{0}` is not an alias")]
    NotAnAlias(EcoString),
    #[error("type `{name}` expects {expected} type argument(s), got {found}")]
    ArityMismatch {
        name: EcoString,
        expected: usize,
        found: usize,
    },
}

/// Builds the payload type of one constructor for concrete type arguments.
#[derive(Debug, Clone)]
pub struct ConstructorBuilder {
    name: EcoString,
    params: Vec<BoundId>,
    payload: Scheme,
    level: Level,
    quantifiability: Quantifiability,
}

impl ConstructorBuilder {
    pub fn name(&self) -> &EcoString {
        &self.name
    }

    /// Payload type with the variant's parameters replaced by `args`.
    pub fn build(&self, ctx: &mut TypeContext, args: &[MonoType]) -> MonoType {
        ctx.instantiate_with_args(
            self.level,
            self.quantifiability,
            &self.params,
            args,
            &self.payload,
        )
    }
}

/// Read access to declared types, as needed by the match checker.
pub trait TypeEnvironment {
    /// Constructors of the variant `id`, in declaration order. `None` if `id`
    /// is not a variant type known to this environment.
    fn enumerate_constructors(
        &self,
        quantifiability: Quantifiability,
        level: Level,
        id: &TypeId,
    ) -> Option<Vec<ConstructorBuilder>>;

    fn is_alias(&self, id: &TypeId) -> bool;

    /// The definition of alias `id` applied to `args`.
    fn expand_alias(
        &self,
        ctx: &mut TypeContext,
        quantifiability: Quantifiability,
        level: Level,
        id: &TypeId,
        args: &[MonoType],
    ) -> Option<MonoType>;
}

/// Identity and parameters of a newly declared type.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub id: TypeId,
    pub params: Vec<BoundId>,
}

impl TypeDeclaration {
    /// The `i`-th type parameter, for use in payload and alias bodies.
    pub fn param(&self, i: usize) -> PolyType {
        Ty::Var(PolyVar::Bound(self.params[i]))
    }
}

#[derive(Debug, Clone)]
enum Definition {
    Variant {
        params: Vec<BoundId>,
        constructors: Vec<(EcoString, Scheme)>,
    },
    Alias {
        params: Vec<BoundId>,
        body: Scheme,
    },
}

/// In-memory registry of declared types.
#[derive(Debug, Default)]
pub struct TypeDefinitions {
    types: HashMap<TypeId, Definition>,
    constructors: HashMap<EcoString, TypeId>,
}

impl TypeDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variant type with `arity` parameters and no constructors yet.
    pub fn declare_variant(
        &mut self,
        ctx: &mut TypeContext,
        name: impl Into<EcoString>,
        arity: usize,
    ) -> TypeDeclaration {
        let id = ctx.fresh_type_id(name);
        let params: Vec<BoundId> = (0..arity).map(|_| ctx.fresh_bound()).collect();
        tracing::debug!(name = id.name(), arity, "declared variant type");
        self.types.insert(
            id.clone(),
            Definition::Variant {
                params: params.clone(),
                constructors: Vec::new(),
            },
        );
        TypeDeclaration { id, params }
    }

    /// Add a constructor to a declared variant. `payload` may mention the
    /// variant's parameters through `TypeDeclaration::param`.
    ///
    /// Names only clash within one variant. A constructor of a later
    /// declaration shadows an earlier one of the same name for
    /// `constructor_owner`; matches still check against the variant
    /// their scrutinee has.
    pub fn add_constructor(
        &mut self,
        id: &TypeId,
        name: impl Into<EcoString>,
        payload: PolyType,
    ) -> Result<(), DefinitionError> {
        let name = name.into();
        match self.types.get_mut(id) {
            Some(Definition::Variant {
                params,
                constructors,
            }) => {
                if constructors.iter().any(|(existing, _)| *existing == name) {
                    return Err(DefinitionError::DuplicateConstructor {
                        name,
                        owner: id.name().into(),
                    });
                }
                let scheme = Scheme::new(universal_vars(params), payload);
                constructors.push((name.clone(), scheme));
            }
            Some(Definition::Alias { .. }) => {
                return Err(DefinitionError::NotAVariant(id.name().into()));
            }
            None => return Err(DefinitionError::UnknownType(id.name().into())),
        }
        if let Some(previous) = self.constructors.insert(name.clone(), id.clone()) {
            tracing::debug!(
                constructor = name.as_str(),
                shadowed = previous.name(),
                "constructor shadows an earlier declaration"
            );
        }
        Ok(())
    }

    /// Declare an alias whose body is produced from its parameters.
    pub fn declare_alias(
        &mut self,
        ctx: &mut TypeContext,
        name: impl Into<EcoString>,
        arity: usize,
        body: impl FnOnce(&[BoundId]) -> PolyType,
    ) -> TypeDeclaration {
        let id = ctx.fresh_type_id(name);
        let params: Vec<BoundId> = (0..arity).map(|_| ctx.fresh_bound()).collect();
        let body = Scheme::new(universal_vars(&params), body(&params));
        tracing::debug!(name = id.name(), arity, "declared alias type");
        self.types.insert(
            id.clone(),
            Definition::Alias {
                params: params.clone(),
                body,
            },
        );
        TypeDeclaration { id, params }
    }

    /// The most recently declared variant type with a constructor `name`.
    pub fn constructor_owner(&self, name: &str) -> Option<&TypeId> {
        self.constructors.get(name)
    }

    /// `args id`, checked against the declared arity.
    pub fn variant_type(
        &self,
        id: &TypeId,
        args: Vec<MonoType>,
    ) -> Result<MonoType, DefinitionError> {
        match self.types.get(id) {
            Some(Definition::Variant { params, .. }) => {
                check_arity(id, params.len(), args.len())?;
                Ok(Ty::Variant(args, id.clone()))
            }
            Some(Definition::Alias { .. }) => {
                Err(DefinitionError::NotAVariant(id.name().into()))
            }
            None => Err(DefinitionError::UnknownType(id.name().into())),
        }
    }

    /// `args id` for an alias, carrying its expansion.
    pub fn alias_type(
        &self,
        ctx: &mut TypeContext,
        level: Level,
        id: &TypeId,
        args: Vec<MonoType>,
    ) -> Result<MonoType, DefinitionError> {
        match self.types.get(id) {
            Some(Definition::Alias { params, body }) => {
                check_arity(id, params.len(), args.len())?;
                let expansion = ctx.instantiate_with_args(
                    level,
                    Quantifiability::Quantifiable,
                    params,
                    &args,
                    body,
                );
                Ok(Ty::Synonym(args, id.clone(), crate::Box::new(expansion)))
            }
            Some(Definition::Variant { .. }) => {
                Err(DefinitionError::NotAnAlias(id.name().into()))
            }
            None => Err(DefinitionError::UnknownType(id.name().into())),
        }
    }
}

impl TypeEnvironment for TypeDefinitions {
    fn enumerate_constructors(
        &self,
        quantifiability: Quantifiability,
        level: Level,
        id: &TypeId,
    ) -> Option<Vec<ConstructorBuilder>> {
        match self.types.get(id)? {
            Definition::Variant {
                params,
                constructors,
            } => Some(
                constructors
                    .iter()
                    .map(|(name, payload)| ConstructorBuilder {
                        name: name.clone(),
                        params: params.clone(),
                        payload: payload.clone(),
                        level,
                        quantifiability,
                    })
                    .collect(),
            ),
            Definition::Alias { .. } => None,
        }
    }

    fn is_alias(&self, id: &TypeId) -> bool {
        matches!(self.types.get(id), Some(Definition::Alias { .. }))
    }

    fn expand_alias(
        &self,
        ctx: &mut TypeContext,
        quantifiability: Quantifiability,
        level: Level,
        id: &TypeId,
        args: &[MonoType],
    ) -> Option<MonoType> {
        match self.types.get(id)? {
            Definition::Alias { params, body } => {
                Some(ctx.instantiate_with_args(level, quantifiability, params, args, body))
            }
            Definition::Variant { .. } => None,
        }
    }
}

fn universal_vars(params: &[BoundId]) -> Vec<BoundTypeVar> {
    params
        .iter()
        .map(|&id| BoundTypeVar {
            id,
            kind: Kind::Universal,
        })
        .collect()
}

fn check_arity(id: &TypeId, expected: usize, found: usize) -> Result<(), DefinitionError> {
    if expected == found {
        Ok(())
    } else {
        Err(DefinitionError::ArityMismatch {
            name: id.name().into(),
            expected,
            found,
        })
    }
}
