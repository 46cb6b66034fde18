//! Composable tile-grid editing engine
//!
//! Worlds are bounded grids of tiles. Edits flow through a fixed chain of
//! decorators that log, limit and mask writes, driven by regions built from
//! two-point selections. Every accepted write lands in a change set that can
//! be undone and redone as a whole, and clipboards snapshot regions for
//! pasting elsewhere.

#![forbid(unsafe_code)]

/// Bounded tile grids and write-intercepting decorators
pub mod extent;
/// Integer coordinates
pub mod geometry;
/// Undo/redo change log
pub mod history;
/// Command-line front end, world images, configuration and errors
pub mod io;
/// Write-gating predicates
pub mod mask;
/// Position sets and two-point selection
pub mod region;
/// Edit sessions and clipboards
pub mod session;
/// Cell state and templates
pub mod tile;

pub use extent::{Extent, TileWorld};
pub use geometry::Vector;
pub use io::error::{EditError, Result};
pub use mask::Mask;
pub use region::{Region, RegionSelector};
pub use session::{Clipboard, EditSession};
pub use tile::{Block, Template, Tile};
