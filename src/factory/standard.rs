use super::MazeFactory;

/// The plain family: rooms, walls and doors with no special behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMazeFactory;

impl StandardMazeFactory {
    /// Creates a new `StandardMazeFactory`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MazeFactory for StandardMazeFactory {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::site::{DoorKind, RoomKind, SiteStore};

    #[test]
    fn products_are_plain() {
        let factory = StandardMazeFactory::new();
        let mut store = SiteStore::new();

        let room = factory.make_room(4).unwrap();
        assert_eq!(room.number(), 4);
        assert_eq!(room.kind(), RoomKind::Plain);
        assert!(room.sides().is_empty());

        let r1 = store.add_room(room);
        let r2 = store.add_room(factory.make_room(5).unwrap());
        let door = factory.make_door(r1, r2).unwrap();
        assert_eq!(door.kind(), DoorKind::Plain);
        assert_eq!(door.rooms(), [Some(r1), Some(r2)]);
        assert!(!door.is_open());

        let maze = factory.make_maze().unwrap();
        assert!(maze.rooms().is_empty());
    }
}
