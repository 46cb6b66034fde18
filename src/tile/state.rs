//! Plain cell state: terrain, wall, liquid and flag bits

use std::fmt;

/// State of a single grid cell
///
/// A terrain or wall type of 0 means "none"; `Tile::default()` is an empty
/// cell with no liquid and no flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Foreground block type (0 = empty)
    pub terrain_type: u16,
    /// Background wall type (0 = none)
    pub wall_type: u16,
    /// Liquid amount from 0 (dry) to 255 (full)
    pub liquid_level: u8,
    /// Bit set of the `FLAG_*` constants
    pub flags: u8,
}

impl Tile {
    /// Liquid in this cell is lava rather than water
    pub const FLAG_LAVA: u8 = 1;
    /// Liquid in this cell is honey rather than water
    pub const FLAG_HONEY: u8 = 1 << 1;
    /// Terrain is actuated and does not collide
    pub const FLAG_ACTUATED: u8 = 1 << 2;
    /// Terrain is a half block
    pub const FLAG_HALF_BRICK: u8 = 1 << 3;

    /// Create an empty tile
    pub const fn empty() -> Self {
        Self {
            terrain_type: 0,
            wall_type: 0,
            liquid_level: 0,
            flags: 0,
        }
    }

    /// Create a tile holding only the given terrain
    pub const fn with_terrain(terrain_type: u16) -> Self {
        Self {
            terrain_type,
            ..Self::empty()
        }
    }

    /// Create a tile holding only the given wall
    pub const fn with_wall(wall_type: u16) -> Self {
        Self {
            wall_type,
            ..Self::empty()
        }
    }

    /// Test whether the cell has no terrain, wall or liquid
    pub const fn is_empty(&self) -> bool {
        self.terrain_type == 0 && self.wall_type == 0 && self.liquid_level == 0
    }

    /// Test whether every bit of `flag` is set
    pub const fn has_flag(&self, flag: u8) -> bool {
        self.flags & flag == flag
    }

    /// Copy of this tile with `flag` set or cleared
    #[must_use]
    pub const fn with_flag(mut self, flag: u8, enabled: bool) -> Self {
        if enabled {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
        self
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "terrain {} wall {} liquid {} flags {:#04x}",
            self.terrain_type, self.wall_type, self.liquid_level, self.flags
        )
    }
}
