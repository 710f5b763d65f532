use tracing::debug;

use crate::error::Result;
use crate::maze::Maze;
use crate::site::DoorId;

/// Opens a door of a maze.
pub struct OpenDoor {
    door: DoorId,
}

impl OpenDoor {
    /// Creates a new `OpenDoor` operation.
    #[must_use]
    pub fn new(door: DoorId) -> Self {
        Self { door }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the door is not in the maze.
    pub fn execute(&self, maze: &mut Maze) -> Result<()> {
        maze.store_mut().door_mut(self.door)?.open();
        debug!(door = ?self.door, "door opened");
        Ok(())
    }
}

/// Closes a door of a maze.
pub struct CloseDoor {
    door: DoorId,
}

impl CloseDoor {
    /// Creates a new `CloseDoor` operation.
    #[must_use]
    pub fn new(door: DoorId) -> Self {
        Self { door }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the door is not in the maze.
    pub fn execute(&self, maze: &mut Maze) -> Result<()> {
        maze.store_mut().door_mut(self.door)?.close();
        debug!(door = ?self.door, "door closed");
        Ok(())
    }
}
