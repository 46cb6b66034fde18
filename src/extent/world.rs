//! Dense in-memory world used as the root of every decorator chain

use ndarray::Array2;

use crate::extent::Extent;
use crate::geometry::Vector;
use crate::tile::Tile;

/// Fixed-size world with its lower bound at the origin
///
/// Tiles are stored row-major as `[y, x]`. Reads outside the bounds yield an
/// empty tile and writes outside them are refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileWorld {
    tiles: Array2<Tile>,
}

impl TileWorld {
    /// Create a world of `width` x `height` empty tiles
    ///
    /// Zero-sized dimensions are widened to one so the bounds invariant holds.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Array2::default((height.max(1), width.max(1))),
        }
    }

    /// Wrap an existing `[y, x]` tile array
    pub fn from_tiles(tiles: Array2<Tile>) -> Self {
        if tiles.is_empty() {
            return Self::new(1, 1);
        }
        Self { tiles }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Borrow the underlying `[y, x]` array
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    fn index(&self, position: Vector) -> Option<(usize, usize)> {
        self.is_in_bounds(position)
            .then_some((position.y as usize, position.x as usize))
    }
}

impl Extent for TileWorld {
    fn lower_bound(&self) -> Vector {
        Vector::ZERO
    }

    fn upper_bound(&self) -> Vector {
        Vector::new(self.width() as i32 - 1, self.height() as i32 - 1)
    }

    fn tile(&self, position: Vector) -> Tile {
        self.index(position)
            .and_then(|index| self.tiles.get(index).copied())
            .unwrap_or_default()
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        self.tiles.get_mut(index).is_some_and(|cell| {
            *cell = tile;
            true
        })
    }
}
