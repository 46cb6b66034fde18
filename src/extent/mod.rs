//! Bounded tile grids and the decorators that intercept writes to them
//!
//! An edit session stacks the decorators in a fixed order on top of a world:
//! `TileWorld -> LoggedExtent -> LimitedExtent -> MaskedExtent`. Reads pass
//! straight through; each decorator may refuse a write, and only writes the
//! world accepted reach the change log.

use crate::geometry::Vector;
use crate::tile::Tile;

/// Records every accepted write into a change set
pub mod logged;
/// Caps the number of accepted writes
pub mod limited;
/// Gates writes through a mask
pub mod masked;
/// In-memory world backed by a dense array
pub mod world;

pub use limited::LimitedExtent;
pub use logged::LoggedExtent;
pub use masked::MaskedExtent;
pub use world::TileWorld;

/// Bounded, readable and writable grid of tiles
///
/// Bounds are inclusive and satisfy `lower_bound <= upper_bound` on both
/// axes. Reading or writing outside them is implementation-defined, so
/// callers filter positions with [`Extent::is_in_bounds`] first.
pub trait Extent {
    /// Inclusive lower corner
    fn lower_bound(&self) -> Vector;

    /// Inclusive upper corner
    fn upper_bound(&self) -> Vector;

    /// Read the tile at `position`
    fn tile(&self, position: Vector) -> Tile;

    /// Write `tile` at `position`, returning whether the write was accepted
    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool;

    /// Test whether `position` lies within the inclusive bounds
    fn is_in_bounds(&self, position: Vector) -> bool {
        let lower = self.lower_bound();
        let upper = self.upper_bound();
        (lower.x..=upper.x).contains(&position.x) && (lower.y..=upper.y).contains(&position.y)
    }
}

impl<E: Extent + ?Sized> Extent for &mut E {
    fn lower_bound(&self) -> Vector {
        (**self).lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        (**self).upper_bound()
    }

    fn tile(&self, position: Vector) -> Tile {
        (**self).tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        (**self).set_tile(position, tile)
    }

    fn is_in_bounds(&self, position: Vector) -> bool {
        (**self).is_in_bounds(position)
    }
}
