use crate::error::SiteError;
use crate::site::{RoomData, RoomId, RoomNumber, SiteStore};

/// An assembled maze: the store owning every product plus the rooms in the
/// order they were added.
#[derive(Debug, Default)]
pub struct Maze {
    store: SiteStore,
    rooms: Vec<RoomId>,
}

impl Maze {
    /// Creates an empty maze.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a room to the maze.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in this maze's store.
    pub fn add_room(&mut self, room: RoomId) -> Result<(), SiteError> {
        self.store.room(room)?;
        self.rooms.push(room);
        Ok(())
    }

    /// Rooms in the order they were added.
    #[must_use]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Finds the first room added with the given number.
    #[must_use]
    pub fn room_no(&self, number: RoomNumber) -> Option<RoomId> {
        self.rooms.iter().copied().find(|&id| {
            self.store
                .room(id)
                .is_ok_and(|room: &RoomData| room.number() == number)
        })
    }

    #[must_use]
    pub fn store(&self) -> &SiteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SiteStore {
        &mut self.store
    }
}
