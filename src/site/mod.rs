pub mod direction;
pub mod door;
pub mod room;
pub mod wall;

pub use direction::{Direction, Sides};
pub use door::{DoorData, DoorId, DoorKind};
pub use room::{RoomData, RoomId, RoomKind, RoomNumber};
pub use wall::{WallData, WallId};

use crate::error::SiteError;
use slotmap::SlotMap;

/// Reference to any product that can occupy the side of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteId {
    Room(RoomId),
    Wall(WallId),
    Door(DoorId),
}

/// What stops a visitor from entering a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Wall,
    ClosedDoor,
}

/// Where a visitor ends up after entering a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passage {
    /// The visitor is now in this room.
    Arrived(RoomId),
    /// The visitor stayed where they were.
    Blocked(Obstacle),
}

/// Capability shared by every product that can be entered.
pub trait Site {
    /// Attempts to enter this site, approaching from `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot resolve where the visitor
    /// ends up, e.g. an open door approached from a room it does not join.
    fn enter(&self, from: Option<RoomId>) -> Result<Passage, SiteError>;
}

/// Central arena that owns every room, wall and door of a maze.
///
/// Products reference each other via typed IDs (generational indices), so a
/// door can be shared by two rooms without either of them owning it.
#[derive(Debug, Default)]
pub struct SiteStore {
    rooms: SlotMap<RoomId, RoomData>,
    walls: SlotMap<WallId, WallData>,
    doors: SlotMap<DoorId, DoorData>,
}

impl SiteStore {
    /// Creates a new, empty site store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Room operations ---

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, mut data: RoomData) -> RoomId {
        self.rooms.insert_with_key(|id| {
            data.assign_id(id);
            data
        })
    }

    /// Returns a reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room(&self, id: RoomId) -> Result<&RoomData, SiteError> {
        self.rooms
            .get(id)
            .ok_or_else(|| SiteError::EntityNotFound("room".into()))
    }

    /// Returns a mutable reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut RoomData, SiteError> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| SiteError::EntityNotFound("room".into()))
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, data: WallData) -> WallId {
        self.walls.insert(data)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&WallData, SiteError> {
        self.walls
            .get(id)
            .ok_or_else(|| SiteError::EntityNotFound("wall".into()))
    }

    // --- Door operations ---

    /// Inserts a door and returns its ID.
    pub fn add_door(&mut self, data: DoorData) -> DoorId {
        self.doors.insert(data)
    }

    /// Returns a reference to the door data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn door(&self, id: DoorId) -> Result<&DoorData, SiteError> {
        self.doors
            .get(id)
            .ok_or_else(|| SiteError::EntityNotFound("door".into()))
    }

    /// Returns a mutable reference to the door data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn door_mut(&mut self, id: DoorId) -> Result<&mut DoorData, SiteError> {
        self.doors
            .get_mut(id)
            .ok_or_else(|| SiteError::EntityNotFound("door".into()))
    }

    // --- Any site ---

    /// Looks up any site through its shared capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn site(&self, id: SiteId) -> Result<&dyn Site, SiteError> {
        let site: &dyn Site = match id {
            SiteId::Room(room) => self.room(room)?,
            SiteId::Wall(wall) => self.wall(wall)?,
            SiteId::Door(door) => self.door(door)?,
        };
        Ok(site)
    }

    /// Returns `true` if the referenced product is still in the store.
    #[must_use]
    pub fn contains(&self, id: SiteId) -> bool {
        match id {
            SiteId::Room(room) => self.rooms.contains_key(room),
            SiteId::Wall(wall) => self.walls.contains_key(wall),
            SiteId::Door(door) => self.doors.contains_key(door),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_ids_are_reported() {
        let mut other = SiteStore::new();
        let room = other.add_room(RoomData::new(1));
        let wall = other.add_wall(WallData::new());
        let door = other.add_door(DoorData::new(Some(room), None));

        let store = SiteStore::new();
        let missing = |result: Result<&dyn Site, SiteError>| {
            matches!(result, Err(SiteError::EntityNotFound(_)))
        };
        assert!(missing(store.site(SiteId::Room(room))));
        assert!(missing(store.site(SiteId::Wall(wall))));
        assert!(missing(store.site(SiteId::Door(door))));
        assert!(!store.contains(SiteId::Door(door)));
    }

    #[test]
    fn site_dispatches_by_kind() {
        let mut store = SiteStore::new();
        let room = store.add_room(RoomData::new(1));
        let wall = store.add_wall(WallData::new());

        let inside = store.site(SiteId::Room(room)).unwrap();
        assert_eq!(inside.enter(None).unwrap(), Passage::Arrived(room));

        let blocked = store.site(SiteId::Wall(wall)).unwrap();
        assert_eq!(
            blocked.enter(Some(room)).unwrap(),
            Passage::Blocked(Obstacle::Wall)
        );
    }
}
