//! Tests for the built-in block templates and their parsing

#[cfg(test)]
mod tests {
    use tiledit::EditError;
    use tiledit::tile::{Block, Template, Tile};

    fn sample_tile() -> Tile {
        Tile {
            terrain_type: 5,
            wall_type: 7,
            liquid_level: 100,
            flags: Tile::FLAG_LAVA | Tile::FLAG_ACTUATED,
        }
    }

    // Tests each block matches only its own layer
    // Verified by comparing wall_type in Terrain::matches
    #[test]
    fn test_matches_tests_single_layer() {
        let tile = sample_tile();

        assert!(Block::Terrain(5).matches(&tile));
        assert!(!Block::Terrain(7).matches(&tile));
        assert!(Block::Wall(7).matches(&tile));
        assert!(!Block::Wall(5).matches(&tile));
        assert!(Block::Liquid(100).matches(&tile));
        assert!(!Block::Air.matches(&tile));
        assert!(Block::Air.matches(&Tile::with_wall(3)));
    }

    // Tests apply overwrites only the targeted layer
    // Verified by resetting the wall in Terrain::apply
    #[test]
    fn test_apply_overwrites_single_layer() {
        let tile = sample_tile();

        let terrain = Block::Terrain(9).apply(tile);
        assert_eq!(terrain.terrain_type, 9);
        assert_eq!(terrain.wall_type, 7);
        assert_eq!(terrain.liquid_level, 100);
        assert!(!terrain.has_flag(Tile::FLAG_ACTUATED));

        let wall = Block::Wall(2).apply(tile);
        assert_eq!(wall.wall_type, 2);
        assert_eq!(wall.terrain_type, 5);

        let liquid = Block::Liquid(255).apply(tile);
        assert_eq!(liquid.liquid_level, 255);
        assert!(!liquid.has_flag(Tile::FLAG_LAVA));
    }

    // Tests air removes terrain and liquid but keeps the wall
    #[test]
    fn test_air_keeps_wall() {
        let cleared = Block::Air.apply(sample_tile());
        assert_eq!(cleared, Tile::with_wall(7));
        assert!(Block::Air.matches(&cleared));
    }

    // Tests applying a block always yields a tile the block matches
    #[test]
    fn test_apply_then_matches() {
        let blocks = [Block::Air, Block::Terrain(3), Block::Wall(1), Block::Liquid(8)];
        for block in blocks {
            assert!(block.matches(&block.apply(sample_tile())), "{block}");
        }
    }

    // Tests textual block forms parse and display symmetrically
    // Verified by mapping `wall` to Terrain
    #[test]
    fn test_parse_blocks() {
        assert_eq!("air".parse::<Block>().ok(), Some(Block::Air));
        assert_eq!("terrain:12".parse::<Block>().ok(), Some(Block::Terrain(12)));
        assert_eq!("Wall: 4".parse::<Block>().ok(), Some(Block::Wall(4)));
        assert_eq!("liquid:255".parse::<Block>().ok(), Some(Block::Liquid(255)));
        assert_eq!(Block::Wall(4).to_string(), "wall:4");
    }

    // Tests unknown layers and out-of-range values are rejected
    #[test]
    fn test_parse_rejects_invalid_blocks() {
        for input in ["stone", "lava:3", "liquid:256", "terrain:-1", "terrain:"] {
            assert!(
                matches!(
                    input.parse::<Block>(),
                    Err(EditError::InvalidArgument { argument: "block", .. })
                ),
                "`{input}` should not parse"
            );
        }
    }
}
