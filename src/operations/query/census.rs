use std::collections::HashSet;

use crate::error::Result;
use crate::maze::Maze;
use crate::site::SiteId;

/// Product counts of a maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CensusReport {
    pub rooms: usize,
    pub walls: usize,
    pub doors: usize,
    pub open_doors: usize,
}

/// Counts the distinct products reachable from a maze's rooms.
///
/// A door shared by two rooms is counted once.
#[derive(Debug, Default)]
pub struct Census;

impl Census {
    /// Creates a new `Census` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a room or door referenced by the maze is missing.
    pub fn execute(&self, maze: &Maze) -> Result<CensusReport> {
        let store = maze.store();
        let mut seen = HashSet::new();
        let mut report = CensusReport::default();

        for &room in maze.rooms() {
            if seen.insert(SiteId::Room(room)) {
                report.rooms += 1;
            }
            for (_, site) in store.room(room)?.sides().iter() {
                if !seen.insert(site) {
                    continue;
                }
                match site {
                    SiteId::Room(_) => {}
                    SiteId::Wall(_) => report.walls += 1,
                    SiteId::Door(door) => {
                        report.doors += 1;
                        if store.door(door)?.is_open() {
                            report.open_doors += 1;
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}
