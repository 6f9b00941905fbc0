//! Identity generators for declared types and type variables.
//!
//! Three independent numbering spaces are kept here: declared type names
//! (`TypeId`), free type variables (`FreeId`) and scheme-bound type variables
//! (`BoundId`). Ids from different spaces are never compared with each other.

use core::fmt;
use core::hash::{Hash, Hasher};

use ecow::EcoString;

/// Identity of a declared variant or alias type.
///
/// Equality and hashing only look at the number, so two declarations with the
/// same name in different scopes remain distinct types.
#[derive(Debug, Clone)]
pub struct TypeId {
    number: u32,
    name: EcoString,
}

impl TypeId {
    /// Name used for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl PartialEq for TypeId {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for TypeId {}

impl Hash for TypeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Identity of a free type variable. Also the key of its cell in the
/// `TypeContext` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FreeId(u32);

impl FreeId {
    pub fn number(self) -> u32 {
        self.0
    }
}

/// Identity of a variable bound by a type scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundId(u32);

impl BoundId {
    pub fn number(self) -> u32 {
        self.0
    }
}

/// Monotonic counters for the three identity spaces.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next_type: u32,
    next_free: u32,
    next_bound: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters. Must be called at the start of every independent
    /// compilation run.
    pub fn initialize(&mut self) {
        *self = Self::default();
    }

    pub fn fresh_type_id(&mut self, name: impl Into<EcoString>) -> TypeId {
        let number = bump(&mut self.next_type, "TypeId");
        TypeId {
            number,
            name: name.into(),
        }
    }

    pub fn fresh_free_id(&mut self) -> FreeId {
        FreeId(bump(&mut self.next_free, "FreeId"))
    }

    pub fn fresh_bound_id(&mut self) -> BoundId {
        BoundId(bump(&mut self.next_bound, "BoundId"))
    }
}

fn bump(counter: &mut u32, what: &str) -> u32 {
    let id = *counter;
    *counter = match id.checked_add(1) {
        Some(next) => next,
        None => panic!("{} counter overflowed", what),
    };
    id
}
