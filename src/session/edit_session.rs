//! Edit session binding a world, a mask and a change limit
//!
//! The session borrows the world and owns everything stacked on top of it:
//! `world -> LoggedExtent -> LimitedExtent -> MaskedExtent`. Writes travel
//! down the chain, so the log only sees writes that passed the mask and the
//! limit and that the world accepted. Undo and redo replay the log directly
//! against the world, bypassing mask and limit.

use log::debug;

use crate::extent::{Extent, LimitedExtent, LoggedExtent, MaskedExtent};
use crate::geometry::Vector;
use crate::history::ChangeSet;
use crate::io::configuration::DEFAULT_CHANGE_LIMIT;
use crate::io::error::{Result, missing_argument};
use crate::mask::Mask;
use crate::region::Region;
use crate::tile::{Block, Template, Tile};

type Chain<'w, W> = MaskedExtent<LimitedExtent<LoggedExtent<&'w mut W>>>;

/// Set of edits to one world that are limited, masked and undone together
#[derive(Debug)]
pub struct EditSession<'w, W: Extent + ?Sized> {
    extent: Chain<'w, W>,
}

impl<'w, W: Extent + ?Sized> EditSession<'w, W> {
    /// Wrap `world` so at most `limit` writes passing `mask` are applied
    pub fn new(world: &'w mut W, mask: Mask, limit: usize) -> Self {
        debug!("edit session opened with limit {limit} and mask {mask:?}");
        let logged = LoggedExtent::new(world, ChangeSet::new());
        let limited = LimitedExtent::new(logged, limit);
        Self {
            extent: MaskedExtent::new(limited, mask),
        }
    }

    /// Start building a session whose collaborators are supplied one by one
    pub fn builder() -> EditSessionBuilder<'w, W> {
        EditSessionBuilder::new()
    }

    /// Apply `template` to every in-bounds position of `region`
    ///
    /// Positions outside the session's bounds are skipped without counting.
    /// Returns the number of positions whose write was accepted.
    pub fn apply_template<T: Template + ?Sized>(&mut self, template: &T, region: &Region) -> usize {
        let mut count = 0;
        for position in region.positions_within(self.lower_bound(), self.upper_bound()) {
            let tile = template.apply(self.tile(position));
            if self.set_tile(position, tile) {
                count += 1;
            }
        }
        debug!("applied {template:?} to {count} positions");
        count
    }

    /// Remove terrain and liquid from every in-bounds position of `region`
    pub fn clear(&mut self, region: &Region) -> usize {
        self.apply_template(&Block::Air, region)
    }

    /// Revert every change made through this session
    ///
    /// Returns the number of changes undone.
    pub fn undo(&mut self) -> usize {
        let (world, change_set) = self.extent.inner_mut().inner_mut().parts_mut();
        let undone = change_set.undo(world);
        debug!("undid {undone} changes");
        undone
    }

    /// Re-apply every change reverted by [`EditSession::undo`]
    ///
    /// Returns the number of changes redone.
    pub fn redo(&mut self) -> usize {
        let (world, change_set) = self.extent.inner_mut().inner_mut().parts_mut();
        let redone = change_set.redo(world);
        debug!("redid {redone} changes");
        redone
    }

    /// Borrow the session's change log
    pub const fn change_set(&self) -> &ChangeSet {
        self.extent.inner().inner().change_set()
    }

    /// Borrow the mask gating writes
    pub const fn mask(&self) -> &Mask {
        self.extent.mask()
    }

    /// Writes still allowed before the limit is reached
    pub const fn remaining(&self) -> usize {
        self.extent.inner().remaining()
    }
}

impl<W: Extent + ?Sized> Extent for EditSession<'_, W> {
    fn lower_bound(&self) -> Vector {
        self.extent.lower_bound()
    }

    fn upper_bound(&self) -> Vector {
        self.extent.upper_bound()
    }

    fn tile(&self, position: Vector) -> Tile {
        self.extent.tile(position)
    }

    fn set_tile(&mut self, position: Vector, tile: Tile) -> bool {
        self.extent.set_tile(position, tile)
    }
}

/// Collects a session's collaborators before building it
///
/// Building fails with [`EditError::MissingArgument`](crate::EditError::MissingArgument) if the world or the mask
/// was never supplied. The limit defaults to [`DEFAULT_CHANGE_LIMIT`].
#[derive(Debug)]
pub struct EditSessionBuilder<'w, W: ?Sized> {
    world: Option<&'w mut W>,
    mask: Option<Mask>,
    limit: usize,
}

impl<'w, W: Extent + ?Sized> EditSessionBuilder<'w, W> {
    /// Create a builder with nothing supplied
    pub const fn new() -> Self {
        Self {
            world: None,
            mask: None,
            limit: DEFAULT_CHANGE_LIMIT,
        }
    }

    /// Supply the world to edit
    #[must_use]
    pub fn world(mut self, world: &'w mut W) -> Self {
        self.world = Some(world);
        self
    }

    /// Supply the mask gating writes
    #[must_use]
    pub fn mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the maximum number of accepted writes
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Build the session
    ///
    /// # Errors
    ///
    /// Returns [`EditError::MissingArgument`](crate::EditError::MissingArgument) if the world or mask is missing
    pub fn build(self) -> Result<EditSession<'w, W>> {
        let world = self.world.ok_or(missing_argument("world"))?;
        let mask = self.mask.ok_or(missing_argument("mask"))?;
        Ok(EditSession::new(world, mask, self.limit))
    }
}

impl<W: Extent + ?Sized> Default for EditSessionBuilder<'_, W> {
    fn default() -> Self {
        Self::new()
    }
}
