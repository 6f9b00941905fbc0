pub mod context;
pub mod definitions;
pub mod display;
pub mod identity;
pub mod level;
pub mod scheme;
pub mod traits;
mod types;


pub use context::{FreeTypeVar, TypeContext, TypeVarCell};
pub use definitions::{
    ConstructorBuilder, DefinitionError, TypeDeclaration, TypeDefinitions, TypeEnvironment,
};
pub use identity::{BoundId, FreeId, IdGenerator, TypeId};
pub use level::{Level, Quantifiability};
pub use scheme::{BoundTypeVar, Scheme};
pub use types::{
    BaseType, CommandArg, Kind, MonoKind, MonoType, PolyKind, PolyType, PolyVar, Ty,
};
