use super::SiteId;

/// One of the four sides of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

/// The sites occupying the sides of a room, keyed by [`Direction`].
///
/// Each direction holds at most one site. Assigning a direction that is
/// already occupied replaces the previous site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sides {
    slots: [Option<SiteId>; 4],
}

impl Sides {
    /// Creates an empty set of sides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the site on the given side, or `None` if nothing was assigned.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<SiteId> {
        self.slots[direction.index()]
    }

    /// Assigns a site to the given side, returning the site it replaced.
    pub fn set(&mut self, direction: Direction, site: SiteId) -> Option<SiteId> {
        self.slots[direction.index()].replace(site)
    }

    /// Iterates over assigned sides in North, South, East, West order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, SiteId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|site| (d, site)))
    }

    /// Number of assigned sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no side has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::site::{SiteStore, WallData};

    #[test]
    fn unassigned_side_is_none() {
        let sides = Sides::new();
        for d in Direction::ALL {
            assert_eq!(sides.get(d), None);
        }
        assert!(sides.is_empty());
    }

    #[test]
    fn reassigning_a_side_overwrites() {
        let mut store = SiteStore::new();
        let first = SiteId::Wall(store.add_wall(WallData::new()));
        let second = SiteId::Wall(store.add_wall(WallData::new()));

        let mut sides = Sides::new();
        assert_eq!(sides.set(Direction::East, first), None);
        assert_eq!(sides.set(Direction::East, second), Some(first));
        assert_eq!(sides.get(Direction::East), Some(second));
        assert_eq!(sides.len(), 1);
    }

    #[test]
    fn iter_follows_direction_order() {
        let mut store = SiteStore::new();
        let a = SiteId::Wall(store.add_wall(WallData::new()));
        let b = SiteId::Wall(store.add_wall(WallData::new()));

        let mut sides = Sides::new();
        sides.set(Direction::West, a);
        sides.set(Direction::North, b);

        let order: Vec<Direction> = sides.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![Direction::North, Direction::West]);
    }
}
