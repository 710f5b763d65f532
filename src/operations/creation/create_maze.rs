use tracing::{debug, trace};

use crate::error::Result;
use crate::factory::MazeFactory;
use crate::maze::Maze;
use crate::site::{Direction, RoomId, SiteId};

const WIRING_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Assembles the two-room maze from whatever family `factory` produces.
///
/// Room 1 and room 2 share a single door on room 1's east side and room 2's
/// west side. Every other side gets its own wall.
pub struct CreateMaze<'a> {
    factory: &'a dyn MazeFactory,
}

impl<'a> CreateMaze<'a> {
    /// Creates a new `CreateMaze` operation.
    #[must_use]
    pub fn new(factory: &'a dyn MazeFactory) -> Self {
        Self { factory }
    }

    /// Executes the assembly, returning the finished maze.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the factory. The maze under
    /// construction is discarded, so no partially wired maze is returned.
    pub fn execute(&self) -> Result<Maze> {
        let factory = self.factory;

        let mut maze = factory.make_maze()?;
        let r1 = maze.store_mut().add_room(factory.make_room(1)?);
        let r2 = maze.store_mut().add_room(factory.make_room(2)?);
        let door = SiteId::Door(maze.store_mut().add_door(factory.make_door(r1, r2)?));
        debug!(?r1, ?r2, ?door, "created rooms and connecting door");

        maze.add_room(r1)?;
        maze.add_room(r2)?;

        self.wire(&mut maze, r1, Direction::East, door)?;
        self.wire(&mut maze, r2, Direction::West, door)?;

        debug!(rooms = maze.rooms().len(), "maze assembled");
        Ok(maze)
    }

    /// Puts `door` on the `door_side` of `room` and a fresh wall on every
    /// other side, visiting sides in North, East, South, West order.
    fn wire(
        &self,
        maze: &mut Maze,
        room: RoomId,
        door_side: Direction,
        door: SiteId,
    ) -> Result<()> {
        for direction in WIRING_ORDER {
            let site = if direction == door_side {
                door
            } else {
                SiteId::Wall(maze.store_mut().add_wall(self.factory.make_wall()?))
            };
            trace!(?room, ?direction, ?site, "set side");
            maze.store_mut().room_mut(room)?.set_side(direction, site);
        }
        Ok(())
    }
}
