//! Arena of type-variable cells.
//!
//! A `MonoType` refers to a variable only through its `FreeId`; the state of
//! that variable (still free, or linked to a type by unification) lives here.
//! Several positions of one or more type trees may mention the same id, which
//! is how sharing between type trees is expressed without shared pointers.

use ecow::EcoString;
use hashbrown::HashMap;

use crate::types::identity::{BoundId, FreeId, IdGenerator, TypeId};
use crate::types::level::{Level, Quantifiability};
use crate::types::types::{MonoKind, MonoType, Ty};

/// A free type variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTypeVar {
    pub id: FreeId,
    pub kind: MonoKind,
    pub quantifiability: Quantifiability,
    pub level: Level,
}

/// Current state of a type variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeVarCell {
    Free(FreeTypeVar),
    Linked(MonoType),
}

/// Identity generators plus the cells of every free variable minted during
/// one compilation run.
#[derive(Debug, Default)]
pub struct TypeContext {
    ids: IdGenerator,
    cells: HashMap<FreeId, TypeVarCell>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run: resets every counter and forgets every cell.
    pub fn initialize(&mut self) {
        self.ids.initialize();
        self.cells.clear();
    }

    pub fn fresh_type_id(&mut self, name: impl Into<EcoString>) -> TypeId {
        self.ids.fresh_type_id(name)
    }

    /// Create a new free variable and return its handle.
    pub fn fresh_free(
        &mut self,
        kind: MonoKind,
        quantifiability: Quantifiability,
        level: Level,
    ) -> FreeId {
        let id = self.ids.fresh_free_id();
        self.cells.insert(
            id,
            TypeVarCell::Free(FreeTypeVar {
                id,
                kind,
                quantifiability,
                level,
            }),
        );
        id
    }

    /// Same as `fresh_free`, wrapped as a type.
    pub fn fresh_var(
        &mut self,
        kind: MonoKind,
        quantifiability: Quantifiability,
        level: Level,
    ) -> MonoType {
        Ty::Var(self.fresh_free(kind, quantifiability, level))
    }

    pub fn fresh_bound(&mut self) -> BoundId {
        self.ids.fresh_bound_id()
    }

    /// The cell of a variable minted by this context.
    pub fn cell(&self, id: FreeId) -> &TypeVarCell {
        match self.cells.get(&id) {
            Some(cell) => cell,
            None => panic!("type variable {:?} does not belong to this context", id),
        }
    }

    /// The variable record if the cell is still free.
    pub fn free_var(&self, id: FreeId) -> Option<&FreeTypeVar> {
        match self.cell(id) {
            TypeVarCell::Free(var) => Some(var),
            TypeVarCell::Linked(_) => None,
        }
    }

    /// Replace the kind of a still-free variable.
    pub fn set_kind(&mut self, id: FreeId, kind: MonoKind) {
        if let Some(TypeVarCell::Free(var)) = self.cells.get_mut(&id) {
            var.kind = kind;
        }
    }

    /// Link a free variable to a type.
    ///
    /// This is the primitive an external unifier uses; it performs no occurs
    /// check and no kind checking.
    pub fn link(&mut self, id: FreeId, ty: MonoType) {
        tracing::trace!(var = id.number(), "linking type variable");
        self.cells.insert(id, TypeVarCell::Linked(ty));
    }

    /// Follow links until reaching a non-variable type or a free variable.
    pub fn resolve<'t>(&'t self, mut ty: &'t MonoType) -> &'t MonoType {
        while let Ty::Var(id) = ty {
            match self.cell(*id) {
                TypeVarCell::Linked(linked) => ty = linked,
                TypeVarCell::Free(_) => break,
            }
        }
        ty
    }

    /// Follow links and then expand synonym types to their definitions.
    pub fn resolve_synonyms<'t>(&'t self, mut ty: &'t MonoType) -> &'t MonoType {
        loop {
            ty = self.resolve(ty);
            match ty {
                Ty::Synonym(_, _, expansion) => ty = expansion.as_ref(),
                _ => return ty,
            }
        }
    }
}
