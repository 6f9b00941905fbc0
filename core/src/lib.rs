//! Type-scheme engine and pattern-match checker of the quire compiler.
//!
//! - [`types`]: type representation, the arena of type-variable cells,
//!   let-polymorphism (`instantiate`, `generalize`) and declared types.
//! - [`syntax`]: patterns and match branches as produced by the parser.
//! - [`exhaustiveness`]: coverage and reachability of match expressions.
//! - [`api`]: diagnostics and checker options.
//!
//! The crate is `no_std` (with `alloc`) unless the `std` feature is enabled.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod exhaustiveness;
pub mod syntax;
pub mod types;

pub use exhaustiveness::{Instance, MatchReport, check_match, report_match};
