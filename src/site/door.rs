use crate::error::SiteError;

use super::{Obstacle, Passage, RoomId, Site};

slotmap::new_key_type! {
    /// Unique identifier for a door in the site store.
    pub struct DoorId;
}

/// Which family a door was produced by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DoorKind {
    #[default]
    Plain,
    NeedingSpell,
}

/// Data associated with a door.
///
/// A door joins two rooms, either of which may be absent. The rooms are
/// fixed at construction; only the open state changes afterwards.
#[derive(Debug, Clone)]
pub struct DoorData {
    rooms: [Option<RoomId>; 2],
    kind: DoorKind,
    is_open: bool,
}

impl DoorData {
    /// Creates a closed plain door between two rooms.
    #[must_use]
    pub fn new(room1: Option<RoomId>, room2: Option<RoomId>) -> Self {
        Self::with_kind(room1, room2, DoorKind::Plain)
    }

    /// Creates a closed door of the given kind between two rooms.
    #[must_use]
    pub fn with_kind(room1: Option<RoomId>, room2: Option<RoomId>, kind: DoorKind) -> Self {
        Self {
            rooms: [room1, room2],
            kind,
            is_open: false,
        }
    }

    /// The two rooms this door joins, in construction order.
    #[must_use]
    pub fn rooms(&self) -> [Option<RoomId>; 2] {
        self.rooms
    }

    #[must_use]
    pub fn kind(&self) -> DoorKind {
        self.kind
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Returns `true` if `room` is one of the two rooms this door joins.
    #[must_use]
    pub fn connects(&self, room: RoomId) -> bool {
        self.rooms.contains(&Some(room))
    }

    /// Returns the room on the other side of the door from `room`.
    ///
    /// A door joining a room to itself leads back to that room.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotAdjacent`] if `room` is neither of the two
    /// rooms, or [`SiteError::Unconnected`] if the other side is absent.
    pub fn other_side_from(&self, room: RoomId) -> Result<RoomId, SiteError> {
        let other = match self.rooms {
            [Some(a), b] if a == room => b,
            [a, Some(b)] if b == room => a,
            _ => return Err(SiteError::NotAdjacent),
        };
        other.ok_or(SiteError::Unconnected)
    }
}

/// A door is entered from one of the rooms it joins, whether it is open or
/// closed. Approaching from any other room, or from nowhere, is
/// [`SiteError::NotAdjacent`].
impl Site for DoorData {
    fn enter(&self, from: Option<RoomId>) -> Result<Passage, SiteError> {
        let from = from
            .filter(|&room| self.connects(room))
            .ok_or(SiteError::NotAdjacent)?;
        if !self.is_open {
            return Ok(Passage::Blocked(Obstacle::ClosedDoor));
        }
        self.other_side_from(from).map(Passage::Arrived)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::site::{RoomData, SiteStore};

    fn three_rooms() -> (RoomId, RoomId, RoomId) {
        let mut store = SiteStore::new();
        (
            store.add_room(RoomData::new(1)),
            store.add_room(RoomData::new(2)),
            store.add_room(RoomData::new(3)),
        )
    }

    #[test]
    fn new_door_is_closed() {
        let (r1, r2, _) = three_rooms();
        let door = DoorData::new(Some(r1), Some(r2));
        assert!(!door.is_open());
        assert_eq!(door.kind(), DoorKind::Plain);
    }

    #[test]
    fn other_side_in_both_directions() {
        let (r1, r2, _) = three_rooms();
        let door = DoorData::new(Some(r1), Some(r2));
        assert_eq!(door.other_side_from(r1).unwrap(), r2);
        assert_eq!(door.other_side_from(r2).unwrap(), r1);
    }

    #[test]
    fn other_side_from_a_stranger_is_an_error() {
        let (r1, r2, r3) = three_rooms();
        let door = DoorData::new(Some(r1), Some(r2));
        assert_eq!(door.other_side_from(r3), Err(SiteError::NotAdjacent));
        assert!(!door.connects(r3));
    }

    #[test]
    fn half_connected_door_reports_unconnected() {
        let (r1, _, _) = three_rooms();
        let door = DoorData::new(Some(r1), None);
        assert_eq!(door.other_side_from(r1), Err(SiteError::Unconnected));
    }

    #[test]
    fn self_loop_leads_back() {
        let (r1, _, _) = three_rooms();
        let door = DoorData::new(Some(r1), Some(r1));
        assert_eq!(door.other_side_from(r1).unwrap(), r1);
    }

    #[test]
    fn closed_door_blocks_and_open_door_passes() {
        let (r1, r2, _) = three_rooms();
        let mut door = DoorData::new(Some(r1), Some(r2));
        assert_eq!(
            door.enter(Some(r1)).unwrap(),
            Passage::Blocked(Obstacle::ClosedDoor)
        );

        door.open();
        assert_eq!(door.enter(Some(r1)).unwrap(), Passage::Arrived(r2));
        assert_eq!(door.enter(Some(r2)).unwrap(), Passage::Arrived(r1));

        door.close();
        assert!(!door.is_open());
    }

    #[test]
    fn stranger_cannot_enter_open_or_closed() {
        let (r1, r2, r3) = three_rooms();
        let mut door = DoorData::new(Some(r1), Some(r2));
        assert_eq!(door.enter(Some(r3)), Err(SiteError::NotAdjacent));
        assert_eq!(door.enter(None), Err(SiteError::NotAdjacent));

        door.open();
        assert_eq!(door.enter(Some(r3)), Err(SiteError::NotAdjacent));
        assert_eq!(door.enter(None), Err(SiteError::NotAdjacent));
    }
}
