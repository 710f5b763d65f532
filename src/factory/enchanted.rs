use crate::error::Result;
use crate::site::{DoorData, DoorKind, RoomData, RoomId, RoomKind, RoomNumber};

use super::MazeFactory;

/// A variant family producing enchanted rooms and doors that need a spell.
///
/// Only rooms and doors differ from the plain family; mazes and walls come
/// from the default bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnchantedMazeFactory;

impl EnchantedMazeFactory {
    /// Creates a new `EnchantedMazeFactory`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MazeFactory for EnchantedMazeFactory {
    fn make_room(&self, number: RoomNumber) -> Result<RoomData> {
        Ok(RoomData::with_kind(number, RoomKind::Enchanted))
    }

    fn make_door(&self, room1: RoomId, room2: RoomId) -> Result<DoorData> {
        Ok(DoorData::with_kind(
            Some(room1),
            Some(room2),
            DoorKind::NeedingSpell,
        ))
    }
}
