pub mod pattern;
mod span;

pub use pattern::{Pattern, PatternBranch};
pub use span::Span;
