//! Extent decorator that records accepted writes

use crate::extent::Extent;
use crate::geometry::Vector;
use crate::history::{Change, ChangeSet};
use crate::tile::Tile;

/// Records a [`Change`] for every write the inner extent accepts
///
/// The tile is read before delegating; a refused write records nothing.
#[derive(Debug)]
pub struct LoggedExtent<E> {
    inner: E,
    change_set: ChangeSet,
}

impl<E: Extent> LoggedExtent<E> {
    /// Wrap `inner`, appending to `change_set`
    pub const fn new(inner: E, change_set: ChangeSet) -> Self {
        Self { inner, change_set }
    }

    /// Borrow the wrapped extent
    pub const fn inner(&self) -> &E {
        &self.inner
    }

    /// Borrow the change log
    pub const fn change_set(&self) -> &ChangeSet {
        &self.change_set
    }

    /// Borrow the wrapped extent and the change log together
    ///
    /// History replay writes to the wrapped extent directly, bypassing this
    /// decorator so the replay is not logged again.
    pub const fn parts_mut(&mut self) -> (&mut E, &mut ChangeSet) {
        (&mut self.inner, &mut self.change_set)
    }

    /// Unwrap into the inner extent and the change log
    pub fn into_parts(self) -> (E, ChangeSet) {
        (self.inner, self.change_set)
    }
}

impl<E: Extent> Extent for LoggedExtent<E> {
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
        let before = self.inner.tile(position);
        if !self.inner.set_tile(position, tile) {
            return false;
        }
        self.change_set.record(Change::new(position, before, tile));
        true
    }
}
