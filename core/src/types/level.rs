use core::fmt;

use serde::Serialize;

/// Depth of let/lambda nesting at which a type variable was created.
///
/// Levels only grow as scopes nest. A variable is eligible for
/// generalization at level `l` only if its own level is strictly deeper.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u32);

impl Level {
    pub const BOTTOM: Level = Level(0);

    pub fn succ(self) -> Level {
        match self.0.checked_add(1) {
            Some(next) => Level(next),
            None => panic!("Level counter overflowed"),
        }
    }

    /// Strict order on levels.
    pub fn less_than(self, other: Level) -> bool {
        self.0 < other.0
    }

    pub fn depth(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Whether a free variable may ever be generalized.
///
/// Variables standing for the contents of mutable storage are created
/// `Unquantifiable` (the value restriction).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifiability {
    Quantifiable,
    Unquantifiable,
}
