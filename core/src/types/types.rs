use alloc::collections::BTreeMap;

use ecow::EcoString;

use crate::{Box, Vec};
use crate::types::identity::{BoundId, FreeId, TypeId};

/// Primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Unit,
    Bool,
    Int,
    Float,
    Length,
    String,
    InlineText,
    BlockText,
    MathText,
    InlineBoxes,
    BlockBoxes,
    Context,
    PrePath,
    Path,
    Graphics,
    Image,
    Document,
    Regexp,
    TextInfo,
    InputPosition,
}

impl BaseType {
    pub fn name(self) -> &'static str {
        match self {
            BaseType::Unit => "unit",
            BaseType::Bool => "bool",
            BaseType::Int => "int",
            BaseType::Float => "float",
            BaseType::Length => "length",
            BaseType::String => "string",
            BaseType::InlineText => "inline-text",
            BaseType::BlockText => "block-text",
            BaseType::MathText => "math",
            BaseType::InlineBoxes => "inline-boxes",
            BaseType::BlockBoxes => "block-boxes",
            BaseType::Context => "context",
            BaseType::PrePath => "pre-path",
            BaseType::Path => "path",
            BaseType::Graphics => "graphics",
            BaseType::Image => "image",
            BaseType::Document => "document",
            BaseType::Regexp => "regexp",
            BaseType::TextInfo => "text-info",
            BaseType::InputPosition => "input-position",
        }
    }
}

/// Argument of a command type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArg<V> {
    Mandatory(Ty<V>),
    Optional(Ty<V>),
}

impl<V> CommandArg<V> {
    pub fn ty(&self) -> &Ty<V> {
        match self {
            CommandArg::Mandatory(ty) | CommandArg::Optional(ty) => ty,
        }
    }
}

/// A type tree whose variable leaves are `V`.
///
/// Mono types use `FreeId` leaves (cells in the `TypeContext` arena);
/// scheme bodies use `PolyVar` leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty<V> {
    Base(BaseType),
    Function {
        optional: Vec<Ty<V>>,
        domain: Box<Ty<V>>,
        codomain: Box<Ty<V>>,
    },
    List(Box<Ty<V>>),
    Ref(Box<Ty<V>>),
    // At least two components.
    Product(Vec<Ty<V>>),
    Var(V),
    Variant(Vec<Ty<V>>, TypeId),
    Synonym(Vec<Ty<V>>, TypeId, Box<Ty<V>>),
    Record(BTreeMap<EcoString, Ty<V>>),
    HorzCommand(Vec<CommandArg<V>>),
    VertCommand(Vec<CommandArg<V>>),
    MathCommand(Vec<CommandArg<V>>),
}

impl<V> Ty<V> {
    pub fn unit() -> Self {
        Ty::Base(BaseType::Unit)
    }

    pub fn bool() -> Self {
        Ty::Base(BaseType::Bool)
    }

    pub fn int() -> Self {
        Ty::Base(BaseType::Int)
    }

    pub fn string() -> Self {
        Ty::Base(BaseType::String)
    }

    pub fn list(elem: Ty<V>) -> Self {
        Ty::List(Box::new(elem))
    }

    pub fn reference(content: Ty<V>) -> Self {
        Ty::Ref(Box::new(content))
    }

    pub fn function(domain: Ty<V>, codomain: Ty<V>) -> Self {
        Ty::Function {
            optional: Vec::new(),
            domain: Box::new(domain),
            codomain: Box::new(codomain),
        }
    }

    pub fn product(components: Vec<Ty<V>>) -> Self {
        debug_assert!(components.len() >= 2, "product types have at least two components");
        Ty::Product(components)
    }

    pub fn record<L: Into<EcoString>>(fields: impl IntoIterator<Item = (L, Ty<V>)>) -> Self {
        Ty::Record(
            fields
                .into_iter()
                .map(|(label, ty)| (label.into(), ty))
                .collect(),
        )
    }
}

/// Structural constraint on a type variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind<V> {
    Universal,
    /// The variable must be a record with at least these fields.
    Record(BTreeMap<EcoString, Ty<V>>),
}

/// Variable leaf of a scheme body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolyVar {
    /// Shared with the ambient context; not owned by the scheme.
    StillFree(FreeId),
    /// Owned by the scheme.
    Bound(BoundId),
}

pub type MonoType = Ty<FreeId>;
pub type MonoKind = Kind<FreeId>;
pub type PolyType = Ty<PolyVar>;
pub type PolyKind = Kind<PolyVar>;

impl From<BaseType> for MonoType {
    fn from(base: BaseType) -> Self {
        Ty::Base(base)
    }
}

impl PolyType {
    /// Embed a mono type as a scheme body with every variable still free.
    pub fn from_mono(ty: &MonoType) -> PolyType {
        struct Embed;
        impl crate::types::traits::TypeTransformer<FreeId, PolyVar> for Embed {
            fn transform_var(&mut self, id: &FreeId) -> PolyType {
                Ty::Var(PolyVar::StillFree(*id))
            }
        }
        crate::types::traits::TypeTransformer::transform(&mut Embed, ty)
    }
}
