//! Extent decorator that gates writes through a mask

use crate::extent::Extent;
use crate::geometry::Vector;
use crate::mask::Mask;
use crate::tile::Tile;

/// Delegates a write only when the mask accepts its position
#[derive(Debug)]
pub struct MaskedExtent<E> {
    inner: E,
    mask: Mask,
}

impl<E: Extent> MaskedExtent<E> {
    /// Wrap `inner`, testing every write against `mask`
    pub const fn new(inner: E, mask: Mask) -> Self {
        Self { inner, mask }
    }

    /// Borrow the wrapped extent
    pub const fn inner(&self) -> &E {
        &self.inner
    }

    /// Mutably borrow the wrapped extent
    pub const fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    /// Borrow the gating mask
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }
}

impl<E: Extent> Extent for MaskedExtent<E> {
    fn lower_bound(&self) -> Vector {
        self.inner.lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        self.inner.upper_bound()
    }

    fn tile(&self, position: Vector) -> Tile {
        self.inner.tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        if !self.mask.test(&*self, position) {
            return false;
        }
        self.inner.set_tile(position, tile)
    }
}
