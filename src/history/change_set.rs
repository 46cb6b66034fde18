//! Ordered change log with a cursor separating undoable from redoable entries
//!
//! Entries below the cursor have been applied and can be undone; entries at
//! or above it were undone and can be redone. Recording while entries are
//! redoable discards them first, so the log never branches.
//!
//! One `undo` call reverts the whole applied run and one `redo` call
//! re-applies the whole redoable run. Replay writes straight to the extent
//! it is given, so callers pass the world rather than a decorated chain.

use log::{trace, warn};

use crate::extent::Extent;
use crate::history::Change;

/// Undo/redo log of tile mutations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<Change>,
    cursor: usize,
}

impl ChangeSet {
    /// Create an empty change set
    pub const fn new() -> Self {
        Self {
            changes: Vec::new(),
            cursor: 0,
        }
    }

    /// Append a change, discarding any redoable tail first
    pub fn record(&mut self, change: Change) {
        if self.cursor < self.changes.len() {
            trace!(
                "discarding {} redoable changes",
                self.changes.len() - self.cursor
            );
            self.changes.truncate(self.cursor);
        }
        trace!("recording change at {}", change.position);
        self.changes.push(change);
        self.cursor = self.changes.len();
    }

    /// Revert every applied change, newest first
    ///
    /// Each change writes its `before` tile directly to `world`. Returns the
    /// number of changes undone; zero when there is nothing to undo.
    pub fn undo<E: Extent + ?Sized>(&mut self, world: &mut E) -> usize {
        let undone = self.cursor;
        for change in self.changes.iter().take(self.cursor).rev() {
            if !world.set_tile(change.position, change.before) {
                warn!("world refused undo of change at {}", change.position);
            }
        }
        self.cursor = 0;
        undone
    }

    /// Re-apply every undone change, oldest first
    ///
    /// Each change writes its `after` tile directly to `world`. Returns the
    /// number of changes redone; zero when there is nothing to redo.
    pub fn redo<E: Extent + ?Sized>(&mut self, world: &mut E) -> usize {
        let redone = self.changes.len() - self.cursor;
        for change in self.changes.iter().skip(self.cursor) {
            if !world.set_tile(change.position, change.after) {
                warn!("world refused redo of change at {}", change.position);
            }
        }
        self.cursor = self.changes.len();
        redone
    }

    /// Number of recorded changes, applied or not
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Test whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Index separating applied changes from redoable ones
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of changes an `undo` would revert
    pub const fn undoable(&self) -> usize {
        self.cursor
    }

    /// Number of changes a `redo` would re-apply
    pub fn redoable(&self) -> usize {
        self.changes.len() - self.cursor
    }

    /// All recorded changes in recording order
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Forget every recorded change
    pub fn clear(&mut self) {
        self.changes.clear();
        self.cursor = 0;
    }
}
