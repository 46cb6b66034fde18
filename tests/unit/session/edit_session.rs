//! Tests for decorated edit sessions

#[cfg(test)]
mod tests {
    use tiledit::EditError;
    use tiledit::extent::{Extent, TileWorld};
    use tiledit::geometry::Vector;
    use tiledit::mask::Mask;
    use tiledit::region::{RectangularRegion, Region};
    use tiledit::session::{EditSession, EditSessionBuilder};
    use tiledit::tile::{Block, Tile};

    fn rectangle(x1: i32, y1: i32, x2: i32, y2: i32) -> Region {
        RectangularRegion::new(Vector::new(x1, y1), Vector::new(x2, y2)).into()
    }

    // Tests applying a block to a region writes every position and counts them
    #[test]
    fn test_apply_template_counts_writes() {
        let mut world = TileWorld::new(10, 10);
        let mut session = EditSession::new(&mut world, Mask::Always, 1000);

        let count = session.apply_template(&Block::Terrain(1), &rectangle(0, 0, 2, 2));

        assert_eq!(count, 9);
        assert_eq!(session.change_set().len(), 9);
        assert_eq!(session.remaining(), 991);
        drop(session);
        assert_eq!(world.tile(Vector::new(2, 2)).terrain_type, 1);
        assert_eq!(world.tile(Vector::new(3, 3)).terrain_type, 0);
    }

    // Tests positions outside the world are skipped without counting
    // Verified by removing the bounds check before writing
    #[test]
    fn test_apply_template_skips_out_of_bounds() {
        let mut world = TileWorld::new(4, 4);
        let mut session = EditSession::new(&mut world, Mask::Always, 1000);

        let count = session.apply_template(&Block::Wall(3), &rectangle(-2, -2, 1, 1));

        assert_eq!(count, 4);
        assert_eq!(session.remaining(), 996);
    }

    // Tests the mask restricts writes and rejected writes are not logged
    #[test]
    fn test_mask_gates_writes() {
        let mut world = TileWorld::new(6, 6);
        let mask = Mask::region(rectangle(0, 0, 1, 5));
        let mut session = EditSession::new(&mut world, mask, 1000);

        let count = session.apply_template(&Block::Terrain(2), &rectangle(0, 0, 5, 0));

        assert_eq!(count, 2);
        assert_eq!(session.change_set().len(), 2);
        assert!(matches!(session.mask(), Mask::Region(_)));
        drop(session);
        assert_eq!(world.tile(Vector::new(1, 0)).terrain_type, 2);
        assert_eq!(world.tile(Vector::new(2, 0)).terrain_type, 0);
    }

    // Tests the limit stops writes once exhausted
    // Verified by counting refused writes against the limit
    #[test]
    fn test_limit_caps_writes() {
        let mut world = TileWorld::new(10, 10);
        let mut session = EditSession::new(&mut world, Mask::Always, 5);

        let count = session.apply_template(&Block::Terrain(1), &rectangle(0, 0, 9, 9));

        assert_eq!(count, 5);
        assert_eq!(session.remaining(), 0);
        assert!(!session.set_tile(Vector::new(9, 9), Tile::with_terrain(4)));
        drop(session);
        assert_eq!(world.tile(Vector::new(4, 0)).terrain_type, 1);
        assert_eq!(world.tile(Vector::new(5, 0)).terrain_type, 0);
    }

    // Tests a masked-out write does not consume the limit
    #[test]
    fn test_masked_write_keeps_budget() {
        let mut world = TileWorld::new(4, 4);
        let mask = Mask::negated(Mask::Always);
        let mut session = EditSession::new(&mut world, mask, 3);

        assert_eq!(session.apply_template(&Block::Terrain(1), &rectangle(0, 0, 3, 3)), 0);
        assert_eq!(session.remaining(), 3);
        assert!(session.change_set().is_empty());
    }

    // Tests undo restores the world and redo re-applies the edit
    // Verified by replaying undo oldest-first
    #[test]
    fn test_undo_redo_round_trip() {
        let mut world = TileWorld::new(5, 5);
        world.set_tile(Vector::new(1, 1), Tile::with_wall(8));
        let original = world.clone();

        let mut session = EditSession::new(&mut world, Mask::Always, 1000);
        session.apply_template(&Block::Terrain(3), &rectangle(0, 0, 2, 2));
        session.apply_template(&Block::Liquid(200), &rectangle(1, 1, 3, 3));

        let undone = session.undo();
        assert_eq!(undone, 18);
        assert_eq!(session.tile(Vector::new(1, 1)), Tile::with_wall(8));
        assert_eq!(session.change_set().redoable(), 18);

        let redone = session.redo();
        assert_eq!(redone, 18);
        assert_eq!(session.tile(Vector::new(2, 2)).terrain_type, 3);
        assert_eq!(session.tile(Vector::new(2, 2)).liquid_level, 200);

        session.undo();
        drop(session);
        assert_eq!(world, original);
    }

    // Tests undo bypasses an exhausted limit and a rejecting mask
    #[test]
    fn test_undo_bypasses_decorators() {
        let mut world = TileWorld::new(3, 3);
        let mut session = EditSession::new(&mut world, Mask::template(Block::Air), 2);

        assert_eq!(session.apply_template(&Block::Terrain(5), &rectangle(0, 0, 2, 0)), 2);
        assert_eq!(session.undo(), 2);
        assert_eq!(session.tile(Vector::new(0, 0)), Tile::empty());
        assert_eq!(session.remaining(), 0);
    }

    // Tests clearing removes terrain but keeps walls
    #[test]
    fn test_clear() {
        let mut world = TileWorld::new(3, 3);
        world.set_tile(Vector::new(1, 1), Tile { wall_type: 5, ..Tile::with_terrain(2) });
        let mut session = EditSession::new(&mut world, Mask::Always, 100);

        assert_eq!(session.clear(&rectangle(1, 1, 1, 1)), 1);
        assert_eq!(session.tile(Vector::new(1, 1)), Tile::with_wall(5));
    }

    // Tests the builder reports a missing world
    // Verified by defaulting the world to an empty one
    #[test]
    fn test_builder_missing_world() {
        let result = EditSessionBuilder::<TileWorld>::new().mask(Mask::Always).build();

        assert!(matches!(result, Err(EditError::MissingArgument { argument: "world" })));
    }

    // Tests the builder reports a missing mask
    #[test]
    fn test_builder_missing_mask() {
        let mut world = TileWorld::new(2, 2);
        let result = EditSession::builder().world(&mut world).build();

        assert!(matches!(result, Err(EditError::MissingArgument { argument: "mask" })));
    }

    // Tests a fully supplied builder honours the limit
    #[test]
    fn test_builder_builds() {
        let mut world = TileWorld::new(2, 2);
        let session = EditSession::builder()
            .world(&mut world)
            .mask(Mask::Always)
            .limit(3)
            .build();

        assert!(matches!(session, Ok(ref session) if session.remaining() == 3));
    }

    // Tests a region far larger than the world writes only the world's tiles
    // Verified by enumerating the whole region before the bounds check
    #[test]
    fn test_apply_template_huge_region() {
        let mut world = TileWorld::new(4, 4);
        let mut session = EditSession::new(&mut world, Mask::Always, usize::MAX);
        let region: Region = RectangularRegion::new(
            Vector::new(i32::MIN, i32::MIN),
            Vector::new(i32::MAX, i32::MAX),
        )
        .into();

        assert_eq!(session.apply_template(&Block::Terrain(6), &region), 16);
        assert_eq!(session.change_set().len(), 16);
    }
}
