//! One accepted tile write with the state on either side of it

use crate::geometry::Vector;
use crate::tile::Tile;

/// Tile mutation captured by a logged extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Position that was written
    pub position: Vector,
    /// Tile before the write
    pub before: Tile,
    /// Tile after the write
    pub after: Tile,
}

impl Change {
    /// Create a change record
    pub const fn new(position: Vector, before: Tile, after: Tile) -> Self {
        Self {
            position,
            before,
            after,
        }
    }

    /// Test whether the write left the tile as it was
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}
