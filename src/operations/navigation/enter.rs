use tracing::debug;

use crate::error::Result;
use crate::maze::Maze;
use crate::site::{Passage, RoomId, SiteId};

/// Enters a site of a maze, optionally from a room the visitor stands in.
///
/// Rooms can be entered from anywhere. Walls always block. A door must be
/// approached from one of the two rooms it joins: a closed door blocks, an
/// open one leads to the room on its other side.
pub struct Enter {
    site: SiteId,
    from: Option<RoomId>,
}

impl Enter {
    /// Creates a new `Enter` operation.
    #[must_use]
    pub fn new(site: SiteId, from: Option<RoomId>) -> Self {
        Self { site, from }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the site is not in the maze, or if a door is
    /// approached from a room it does not join (open or closed).
    pub fn execute(&self, maze: &Maze) -> Result<Passage> {
        let passage = maze.store().site(self.site)?.enter(self.from)?;
        debug!(site = ?self.site, from = ?self.from, ?passage, "entered site");
        Ok(passage)
    }
}
