//! PNG import and export of worlds through a colour palette
//!
//! Each distinct opaque colour of the source image becomes a terrain type.
//! Colours are sorted before numbering so the same image always yields the
//! same terrain types. Transparent pixels load as empty tiles. Only the
//! terrain layer round-trips through an image.

use std::collections::HashMap;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::extent::TileWorld;
use crate::io::configuration::{EMPTY_TILE_COLOR, MAX_WORLD_DIMENSION, TRANSPARENT_ALPHA};
use crate::io::error::{EditError, Result, invalid_argument};
use crate::tile::Tile;

/// Mapping between terrain types and RGBA colours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// Colour of terrain type `index + 1`
    colors: Vec<[u8; 4]>,
    lookup: HashMap<[u8; 4], u16>,
}

impl Palette {
    /// Number terrain types from 1 in sorted colour order
    ///
    /// Duplicates are dropped. Colours beyond the terrain type range are
    /// ignored.
    pub fn from_colors(colors: impl IntoIterator<Item = [u8; 4]>) -> Self {
        let mut colors: Vec<[u8; 4]> = colors.into_iter().collect();
        colors.sort_unstable();
        colors.dedup();
        colors.truncate(usize::from(u16::MAX));

        let lookup = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| (color, index as u16 + 1))
            .collect();

        Self { colors, lookup }
    }

    /// Terrain type for `color`, if the palette knows it
    pub fn terrain_for(&self, color: [u8; 4]) -> Option<u16> {
        self.lookup.get(&color).copied()
    }

    /// Colour to draw `terrain_type` with
    ///
    /// Empty tiles are transparent; terrain types the palette does not know
    /// get a deterministic opaque colour derived from the type.
    pub fn color_for(&self, terrain_type: u16) -> [u8; 4] {
        if terrain_type == 0 {
            return EMPTY_TILE_COLOR;
        }
        self.colors
            .get(usize::from(terrain_type) - 1)
            .copied()
            .unwrap_or_else(|| fallback_color(terrain_type))
    }

    /// Number of known terrain colours
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Test whether the palette has no colours
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// Spreads consecutive types across the colour cube
const fn fallback_color(terrain_type: u16) -> [u8; 4] {
    let t = terrain_type as u32;
    [
        (t.wrapping_mul(67) % 256) as u8,
        (t.wrapping_mul(151) % 256) as u8,
        (t.wrapping_mul(29) % 256) as u8,
        255,
    ]
}

/// Convert an RGBA image into a world and the palette that describes it
pub fn world_from_image(img: &RgbaImage) -> (TileWorld, Palette) {
    let opaque = img
        .pixels()
        .filter(|pixel| pixel.0[3] > TRANSPARENT_ALPHA)
        .map(|pixel| pixel.0);
    let palette = Palette::from_colors(opaque);

    let (width, height) = (img.width() as usize, img.height() as usize);
    let mut tiles = Array2::<Tile>::default((height, width));
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] <= TRANSPARENT_ALPHA {
            continue;
        }
        if let (Some(terrain_type), Some(tile)) = (
            palette.terrain_for(pixel.0),
            tiles.get_mut((y as usize, x as usize)),
        ) {
            *tile = Tile::with_terrain(terrain_type);
        }
    }

    (TileWorld::from_tiles(tiles), palette)
}

/// Render the terrain layer of `world` through `palette`
pub fn world_to_image(world: &TileWorld, palette: &Palette) -> RgbaImage {
    let mut img = ImageBuffer::new(world.width() as u32, world.height() as u32);
    for ((y, x), tile) in world.tiles().indexed_iter() {
        img.put_pixel(
            x as u32,
            y as u32,
            Rgba(palette.color_for(tile.terrain_type)),
        );
    }
    img
}

/// Load a world from a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Either image dimension exceeds [`MAX_WORLD_DIMENSION`]
pub fn load_world(path: &Path) -> Result<(TileWorld, Palette)> {
    let img = image::open(path).map_err(|e| EditError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    if img.width() > MAX_WORLD_DIMENSION || img.height() > MAX_WORLD_DIMENSION {
        return Err(invalid_argument(
            "world",
            &path.display(),
            &format!(
                "{}x{} exceeds the {MAX_WORLD_DIMENSION} tile limit",
                img.width(),
                img.height()
            ),
        ));
    }

    Ok(world_from_image(&img.to_rgba8()))
}

/// Export the terrain layer of a world as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_world(world: &TileWorld, palette: &Palette, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EditError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create output directory",
            source: e,
        })?;
    }

    world_to_image(world, palette)
        .save(path)
        .map_err(|e| EditError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
