//! Editing defaults and command-line constants

// Session limits
/// Default maximum number of accepted writes per edit session
pub const DEFAULT_CHANGE_LIMIT: usize = 1_000_000;

// World image conversion
/// Alpha at or below which a pixel is read as an empty tile
pub const TRANSPARENT_ALPHA: u8 = 0;
/// Colour written for empty tiles on export
pub const EMPTY_TILE_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Largest accepted world dimension in either axis
pub const MAX_WORLD_DIMENSION: u32 = 8_400;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_edited";

// Progress display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
