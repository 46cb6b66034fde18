//! Detached snapshot of a region's tiles, pastable at any origin
//!
//! The origin of a snapshot is the lower corner of the copied region's
//! bounding box. Only the part of that box inside the source extent is
//! buffered, and a validity bit per buffered cell records which cells the
//! region actually enumerated, so pasting an ellipse does not stamp its
//! bounding box corners.

use bitvec::prelude::*;
use log::{debug, warn};
use ndarray::Array2;

use crate::extent::Extent;
use crate::geometry::Vector;
use crate::region::Region;
use crate::session::EditSession;
use crate::tile::Tile;

/// Immutable tile snapshot taken relative to an origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    /// Buffered tiles indexed `[y, x]`
    tiles: Array2<Tile>,
    /// Row-major validity bit per buffered tile
    captured: BitVec,
    /// Position of buffer cell `[0, 0]` relative to the origin
    offset: Vector,
}

impl Clipboard {
    /// Snapshot holding no tiles
    pub fn empty() -> Self {
        Self {
            tiles: Array2::default((0, 0)),
            captured: BitVec::new(),
            offset: Vector::ZERO,
        }
    }

    /// Copy every in-bounds position of `region` out of `extent`
    ///
    /// Positions the region enumerates outside the extent are skipped.
    pub fn copy_from<E: Extent + ?Sized>(extent: &E, region: &Region) -> Self {
        let Some((origin, upper)) = region.bounds() else {
            return Self::empty();
        };

        // Buffer only the overlap of the region's box with the extent
        let lower = origin.max(extent.lower_bound());
        let upper = upper.min(extent.upper_bound());
        if lower.x > upper.x || lower.y > upper.y {
            return Self::empty();
        }
        let Some(offset) = lower.checked_sub(origin) else {
            warn!("region at {origin} lies too far from {lower} to copy");
            return Self::empty();
        };

        let width = (i64::from(upper.x) - i64::from(lower.x) + 1) as usize;
        let height = (i64::from(upper.y) - i64::from(lower.y) + 1) as usize;
        let mut tiles = Array2::default((height, width));
        let mut captured = bitvec![0; width * height];

        for position in region.positions_within(lower, upper) {
            let cell = position - lower;
            let (x, y) = (cell.x as usize, cell.y as usize);
            if let Some(slot) = tiles.get_mut((y, x)) {
                *slot = extent.tile(position);
                captured.set(y * width + x, true);
            }
        }

        let clipboard = Self {
            tiles,
            captured,
            offset,
        };
        debug!(
            "copied {} tiles into a {width}x{height} clipboard",
            clipboard.len()
        );
        clipboard
    }

    /// Copy `region` out of `session`, then clear it through the session
    ///
    /// The clearing is masked, limited and recorded like any other session
    /// edit. Returns the snapshot and the number of positions cleared.
    pub fn cut_from<W: Extent + ?Sized>(
        session: &mut EditSession<'_, W>,
        region: &Region,
    ) -> (Self, usize) {
        let clipboard = Self::copy_from(&*session, region);
        let cleared = session.clear(region);
        (clipboard, cleared)
    }

    /// Write every buffered tile at `origin` plus its offset
    ///
    /// Destinations outside `extent` are skipped, and writes the extent
    /// refuses are skipped too. Returns the number of writes accepted.
    pub fn paste_to<E: Extent + ?Sized>(&self, extent: &mut E, origin: Vector) -> usize {
        let mut count = 0;
        for (cell, tile) in self.cells() {
            let Some(destination) = origin.checked_add(cell) else {
                continue;
            };
            if extent.is_in_bounds(destination) && extent.set_tile(destination, tile) {
                count += 1;
            }
        }
        debug!("pasted {count} of {} tiles at {origin}", self.len());
        count
    }

    /// Captured tiles with their position relative to the origin, row-major
    ///
    /// Cells whose relative position does not fit in a [`Vector`] are skipped.
    pub fn cells(&self) -> impl Iterator<Item = (Vector, Tile)> + '_ {
        let width = self.width();
        self.captured.iter_ones().filter_map(move |index| {
            let (x, y) = (index % width, index / width);
            let tile = self.tiles.get((y, x)).copied()?;
            let cell = self.offset.checked_add(Vector::new(x as i32, y as i32))?;
            Some((cell, tile))
        })
    }

    /// Captured tile at `offset` from the origin, if any
    pub fn tile_at(&self, offset: Vector) -> Option<Tile> {
        let cell = offset.checked_sub(self.offset)?;
        let (x, y) = (usize::try_from(cell.x).ok()?, usize::try_from(cell.y).ok()?);
        if x >= self.width() {
            return None;
        }
        if self.captured.get(y * self.width() + x).as_deref() != Some(&true) {
            return None;
        }
        self.tiles.get((y, x)).copied()
    }

    /// Width of the buffered area
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Height of the buffered area
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Position of the buffered area's lower corner relative to the origin
    pub const fn offset(&self) -> Vector {
        self.offset
    }

    /// Number of captured tiles
    pub fn len(&self) -> usize {
        self.captured.count_ones()
    }

    /// Test whether no tile was captured
    pub fn is_empty(&self) -> bool {
        self.captured.not_any()
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::empty()
    }
}
