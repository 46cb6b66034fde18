//! Template capability and the built-in block catalog
//!
//! A template answers two questions about a tile: does it match, and what
//! does the tile become when the template is applied. Masks use the first,
//! bulk edits use the second.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{EditError, invalid_argument};
use crate::tile::Tile;

/// Tests and transforms a single tile
///
/// Both operations must be pure and total over valid tiles.
pub trait Template: fmt::Debug {
    /// Test whether `tile` already holds this template's content
    fn matches(&self, tile: &Tile) -> bool;

    /// Produce the tile that results from applying this template to `tile`
    fn apply(&self, tile: Tile) -> Tile;
}

/// Built-in catalog of templates, one per tile layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Removes terrain and liquid, keeping the wall
    Air,
    /// Foreground terrain of the given type
    Terrain(u16),
    /// Background wall of the given type
    Wall(u16),
    /// Water at the given level
    Liquid(u8),
}

impl Template for Block {
    fn matches(&self, tile: &Tile) -> bool {
        match *self {
            Self::Air => tile.terrain_type == 0 && tile.liquid_level == 0,
            Self::Terrain(terrain_type) => tile.terrain_type == terrain_type,
            Self::Wall(wall_type) => tile.wall_type == wall_type,
            Self::Liquid(level) => tile.liquid_level == level,
        }
    }

    fn apply(&self, tile: Tile) -> Tile {
        match *self {
            Self::Air => Tile {
                terrain_type: 0,
                liquid_level: 0,
                flags: 0,
                ..tile
            },
            Self::Terrain(terrain_type) => Tile {
                terrain_type,
                ..tile
            }
            .with_flag(Tile::FLAG_ACTUATED, false),
            Self::Wall(wall_type) => Tile { wall_type, ..tile },
            Self::Liquid(liquid_level) => Tile {
                liquid_level,
                ..tile
            }
            .with_flag(Tile::FLAG_LAVA | Tile::FLAG_HONEY, false),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "air"),
            Self::Terrain(n) => write!(f, "terrain:{n}"),
            Self::Wall(n) => write!(f, "wall:{n}"),
            Self::Liquid(n) => write!(f, "liquid:{n}"),
        }
    }
}

/// Parses `air`, `terrain:N`, `wall:N` or `liquid:N`
impl FromStr for Block {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("air") {
            return Ok(Self::Air);
        }

        let (layer, value) = trimmed
            .split_once(':')
            .ok_or_else(|| invalid_argument("block", &s, &"expected `layer:value` or `air`"))?;
        let value = value.trim();

        match layer.trim().to_ascii_lowercase().as_str() {
            "terrain" => value
                .parse()
                .map(Self::Terrain)
                .map_err(|e| invalid_argument("block", &s, &e)),
            "wall" => value
                .parse()
                .map(Self::Wall)
                .map_err(|e| invalid_argument("block", &s, &e)),
            "liquid" => value
                .parse()
                .map(Self::Liquid)
                .map_err(|e| invalid_argument("block", &s, &e)),
            other => Err(invalid_argument(
                "block",
                &s,
                &format!("unknown layer `{other}`"),
            )),
        }
    }
}
