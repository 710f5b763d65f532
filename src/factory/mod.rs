mod enchanted;
mod standard;

pub use enchanted::EnchantedMazeFactory;
pub use standard::StandardMazeFactory;

use crate::error::Result;
use crate::maze::Maze;
use crate::site::{DoorData, RoomData, RoomId, RoomNumber, WallData};

/// Creates the products of one maze family.
///
/// Every method has a default body producing the plain family, so a variant
/// family only overrides the products it changes. Callers go through this
/// trait and never name the concrete factory.
///
/// Products live in one [`SiteStore`](crate::site::SiteStore), so a family
/// distinguishes its rooms and doors by [`RoomKind`](crate::site::RoomKind)
/// and [`DoorKind`](crate::site::DoorKind) rather than by separate types.
/// A family outside this crate can only choose among the kinds defined here.
pub trait MazeFactory {
    /// Makes an empty maze.
    ///
    /// # Errors
    ///
    /// Returns an error if the family cannot produce a maze.
    fn make_maze(&self) -> Result<Maze> {
        Ok(Maze::new())
    }

    /// Makes a wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the family cannot produce a wall.
    fn make_wall(&self) -> Result<WallData> {
        Ok(WallData::new())
    }

    /// Makes a room with the given number and no sides.
    ///
    /// # Errors
    ///
    /// Returns an error if the family cannot produce a room.
    fn make_room(&self, number: RoomNumber) -> Result<RoomData> {
        Ok(RoomData::new(number))
    }

    /// Makes a closed door joining two rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the family cannot produce a door.
    fn make_door(&self, room1: RoomId, room2: RoomId) -> Result<DoorData> {
        Ok(DoorData::new(Some(room1), Some(room2)))
    }
}
