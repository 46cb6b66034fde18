//! Extent decorator that enforces a write quota

use log::debug;

use crate::extent::Extent;
use crate::geometry::Vector;
use crate::tile::Tile;

/// Accepts at most `limit` writes, then refuses every further one
///
/// Only writes the inner extent accepted count toward the quota. Reads are
/// never limited.
#[derive(Debug)]
pub struct LimitedExtent<E> {
    inner: E,
    limit: usize,
    count: usize,
}

impl<E: Extent> LimitedExtent<E> {
    /// Wrap `inner` with a quota of `limit` accepted writes
    pub const fn new(inner: E, limit: usize) -> Self {
        Self {
            inner,
            limit,
            count: 0,
        }
    }

    /// Borrow the wrapped extent
    pub const fn inner(&self) -> &E {
        &self.inner
    }

    /// Mutably borrow the wrapped extent
    pub const fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    /// Configured quota
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Writes accepted so far
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Writes still allowed
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.count)
    }
}

impl<E: Extent> Extent for LimitedExtent<E> {
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
        if self.count >= self.limit {
            return false;
        }
        if !self.inner.set_tile(position, tile) {
            return false;
        }
        self.count += 1;
        if self.count == self.limit {
            debug!("change limit of {} reached", self.limit);
        }
        true
    }
}
