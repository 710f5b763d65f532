use crate::maze::Maze;
use crate::site::SiteId;

/// Validates the wiring of a maze.
///
/// A maze is valid when every listed room is in the store, every side refers
/// to a product in the store, and every door on a room's side joins that room.
#[derive(Debug, Default)]
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning `true` if the maze is valid.
    #[must_use]
    pub fn execute(&self, maze: &Maze) -> bool {
        let store = maze.store();
        maze.rooms().iter().all(|&room| {
            let Ok(data) = store.room(room) else {
                return false;
            };
            data.sides().iter().all(|(_, site)| match site {
                SiteId::Door(door) => store.door(door).is_ok_and(|d| d.connects(room)),
                other => store.contains(other),
            })
        })
    }
}
