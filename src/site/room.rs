use crate::error::SiteError;

use super::direction::{Direction, Sides};
use super::{Passage, Site, SiteId};

slotmap::new_key_type! {
    /// Unique identifier for a room in the site store.
    pub struct RoomId;
}

/// Caller-assigned room number.
pub type RoomNumber = u32;

/// Which family a room was produced by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RoomKind {
    #[default]
    Plain,
    Enchanted,
}

/// Data associated with a room.
///
/// The number is fixed at creation; sides are assigned afterwards.
#[derive(Debug, Clone)]
pub struct RoomData {
    id: RoomId,
    number: RoomNumber,
    kind: RoomKind,
    sides: Sides,
}

impl RoomData {
    /// Creates a plain room with no sides assigned.
    #[must_use]
    pub fn new(number: RoomNumber) -> Self {
        Self::with_kind(number, RoomKind::Plain)
    }

    /// Creates a room of the given kind with no sides assigned.
    #[must_use]
    pub fn with_kind(number: RoomNumber, kind: RoomKind) -> Self {
        Self {
            id: RoomId::default(),
            number,
            kind,
            sides: Sides::new(),
        }
    }

    /// The room's ID in the store that owns it.
    ///
    /// This is the null key until the room is added to a [`SiteStore`].
    ///
    /// [`SiteStore`]: super::SiteStore
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    pub(super) fn assign_id(&mut self, id: RoomId) {
        self.id = id;
    }

    #[must_use]
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    #[must_use]
    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Returns the site on the given side, or `None` if that side is unassigned.
    #[must_use]
    pub fn side(&self, direction: Direction) -> Option<SiteId> {
        self.sides.get(direction)
    }

    /// Assigns a site to a side, replacing any previous occupant.
    pub fn set_side(&mut self, direction: Direction, site: SiteId) -> Option<SiteId> {
        self.sides.set(direction, site)
    }

    #[must_use]
    pub fn sides(&self) -> &Sides {
        &self.sides
    }
}

impl Site for RoomData {
    fn enter(&self, _from: Option<RoomId>) -> Result<Passage, SiteError> {
        Ok(Passage::Arrived(self.id))
    }
}
