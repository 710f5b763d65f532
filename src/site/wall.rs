use crate::error::SiteError;

use super::{Obstacle, Passage, RoomId, Site};

slotmap::new_key_type! {
    /// Unique identifier for a wall in the site store.
    pub struct WallId;
}

/// A side of a room that leads nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallData;

impl WallData {
    /// Creates a new wall.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Site for WallData {
    fn enter(&self, _from: Option<RoomId>) -> Result<Passage, SiteError> {
        Ok(Passage::Blocked(Obstacle::Wall))
    }
}
