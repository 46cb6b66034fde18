//! Integer coordinates shared by every other module

/// Immutable 2-D integer vector with component-wise arithmetic
pub mod vector;

pub use vector::Vector;
