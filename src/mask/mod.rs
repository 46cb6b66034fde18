//! Boolean predicates over `(extent, position)` that gate writes
//!
//! Masks are a closed set of combinators. They hold no mutable state; a
//! combinator owns the masks, regions or templates it is built from.

/// Mask combinators and their evaluation
pub mod predicate;

pub use predicate::Mask;
