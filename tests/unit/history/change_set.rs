//! Tests for the cursor-based undo/redo log

#[cfg(test)]
mod tests {
    use tiledit::extent::{Extent, TileWorld};
    use tiledit::geometry::Vector;
    use tiledit::history::{Change, ChangeSet};
    use tiledit::tile::Tile;

    fn write(world: &mut TileWorld, change_set: &mut ChangeSet, position: Vector, tile: Tile) {
        let before = world.tile(position);
        assert!(world.set_tile(position, tile));
        change_set.record(Change::new(position, before, tile));
    }

    // Tests recording advances the cursor to the end
    #[test]
    fn test_record_moves_cursor_to_end() {
        let mut change_set = ChangeSet::new();
        assert!(change_set.is_empty());

        change_set.record(Change::new(Vector::ZERO, Tile::empty(), Tile::with_terrain(1)));
        change_set.record(Change::new(Vector::ONE, Tile::empty(), Tile::with_terrain(2)));

        assert_eq!(change_set.len(), 2);
        assert_eq!(change_set.cursor(), 2);
        assert_eq!(change_set.undoable(), 2);
        assert_eq!(change_set.redoable(), 0);
    }

    // Tests undo and redo with nothing to do return zero and touch nothing
    #[test]
    fn test_empty_undo_and_redo_are_noops() {
        let mut world = TileWorld::new(2, 2);
        let mut change_set = ChangeSet::new();

        assert_eq!(change_set.undo(&mut world), 0);
        assert_eq!(change_set.redo(&mut world), 0);
        assert!(world.tiles().iter().all(Tile::is_empty));
    }

    // Tests repeated writes to one position undo to the oldest tile and redo to the newest
    // Verified by undoing in recording order
    #[test]
    fn test_overlapping_writes_round_trip() {
        let mut world = TileWorld::new(3, 3);
        let mut change_set = ChangeSet::new();
        let position = Vector::new(1, 1);
        assert!(world.set_tile(position, Tile::with_wall(9)));

        write(&mut world, &mut change_set, position, Tile::with_terrain(1));
        write(&mut world, &mut change_set, position, Tile::with_terrain(2));
        write(&mut world, &mut change_set, Vector::ZERO, Tile::with_terrain(3));

        assert_eq!(change_set.undo(&mut world), 3);
        assert_eq!(world.tile(position), Tile::with_wall(9));
        assert_eq!(world.tile(Vector::ZERO), Tile::empty());
        assert_eq!(change_set.cursor(), 0);

        assert_eq!(change_set.redo(&mut world), 3);
        assert_eq!(world.tile(position), Tile::with_terrain(2));
        assert_eq!(world.tile(Vector::ZERO), Tile::with_terrain(3));
        assert_eq!(change_set.cursor(), 3);
    }

    // Tests a second undo after a full undo is a no-op
    #[test]
    fn test_undo_twice() {
        let mut world = TileWorld::new(2, 2);
        let mut change_set = ChangeSet::new();
        write(&mut world, &mut change_set, Vector::ZERO, Tile::with_terrain(1));

        assert_eq!(change_set.undo(&mut world), 1);
        assert_eq!(change_set.undo(&mut world), 0);
        assert_eq!(change_set.redoable(), 1);
    }

    // Tests recording after an undo discards the redo tail
    // Verified by appending without truncating
    #[test]
    fn test_record_discards_redo_tail() {
        let mut world = TileWorld::new(3, 1);
        let mut change_set = ChangeSet::new();
        write(&mut world, &mut change_set, Vector::new(0, 0), Tile::with_terrain(1));
        write(&mut world, &mut change_set, Vector::new(1, 0), Tile::with_terrain(2));
        assert_eq!(change_set.undo(&mut world), 2);

        write(&mut world, &mut change_set, Vector::new(2, 0), Tile::with_terrain(3));

        assert_eq!(change_set.len(), 1);
        assert_eq!(change_set.redoable(), 0);
        assert_eq!(change_set.redo(&mut world), 0);
        assert_eq!(world.tile(Vector::new(0, 0)), Tile::empty());
        assert_eq!(change_set.changes()[0].position, Vector::new(2, 0));
    }

    // Tests a change the world refuses during replay still moves the cursor
    #[test]
    fn test_refused_replay_still_counts() {
        let mut world = TileWorld::new(1, 1);
        let mut change_set = ChangeSet::new();
        change_set.record(Change::new(Vector::new(5, 5), Tile::empty(), Tile::with_terrain(1)));

        assert_eq!(change_set.undo(&mut world), 1);
        assert_eq!(change_set.cursor(), 0);
        assert_eq!(change_set.redo(&mut world), 1);
        assert_eq!(change_set.cursor(), 1);
    }

    // Tests clearing forgets every change
    #[test]
    fn test_clear() {
        let mut change_set = ChangeSet::new();
        change_set.record(Change::new(Vector::ZERO, Tile::empty(), Tile::with_terrain(1)));
        change_set.clear();

        assert!(change_set.is_empty());
        assert_eq!(change_set.cursor(), 0);
        assert_eq!(change_set, ChangeSet::default());
    }
}
