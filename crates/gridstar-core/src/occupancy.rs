//! Occupancy: which cells are currently not traversable.
//!
//! The [`Grid`](crate::Grid) never decides occupancy itself; it asks an
//! injected [`Occupancy`] capability. Hosts can back it with whatever spatial
//! query they have, pass a closure, or use the bundled [`OccupancyMap`].

use std::collections::{HashMap, HashSet};

use crate::geom::Point;

/// Capability answering whether a cell is occupied.
///
/// Implementations must be side-effect free from the grid's point of view.
pub trait Occupancy {
    fn is_occupied(&self, p: Point) -> bool;
}

impl<F> Occupancy for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_occupied(&self, p: Point) -> bool {
        self(p)
    }
}

/// Nothing is ever occupied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Open;

impl Occupancy for Open {
    #[inline]
    fn is_occupied(&self, _p: Point) -> bool {
        false
    }
}

/// Identifier of a movable occupant (an agent, a crate, a door...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u64);

/// Occupancy bookkeeping: static obstacles plus one cell per occupant.
///
/// An occupant holds at most one cell at a time; placing it again releases
/// its previous cell.
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    blocked: HashSet<Point>,
    occupants: HashMap<OccupantId, Point>,
    cells: HashMap<Point, OccupantId>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a set of static obstacles.
    pub fn with_blocked(cells: impl IntoIterator<Item = Point>) -> Self {
        Self {
            blocked: cells.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Mark `p` as a static obstacle. Returns `false` if it already was.
    pub fn block(&mut self, p: Point) -> bool {
        self.blocked.insert(p)
    }

    /// Clear the static obstacle at `p`. Returns `false` if there was none.
    pub fn unblock(&mut self, p: Point) -> bool {
        self.blocked.remove(&p)
    }

    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    /// Number of static obstacles.
    pub fn blocked_len(&self) -> usize {
        self.blocked.len()
    }

    /// Put `occupant` on `p`, returning the cell it held before, if any.
    ///
    /// A different occupant already standing on `p` is not displaced from
    /// its own record; `occupant_at(p)` reports the most recent one.
    pub fn place(&mut self, occupant: OccupantId, p: Point) -> Option<Point> {
        let previous = self.release(occupant);
        self.occupants.insert(occupant, p);
        self.cells.insert(p, occupant);
        previous
    }

    /// Remove `occupant` from the map, returning the cell it held.
    pub fn release(&mut self, occupant: OccupantId) -> Option<Point> {
        let p = self.occupants.remove(&occupant)?;
        if self.cells.get(&p) == Some(&occupant) {
            self.cells.remove(&p);
            // Another occupant may still stand on the same cell.
            if let Some((&other, _)) = self.occupants.iter().find(|&(_, &q)| q == p) {
                self.cells.insert(p, other);
            }
        }
        Some(p)
    }

    pub fn occupant_at(&self, p: Point) -> Option<OccupantId> {
        self.cells.get(&p).copied()
    }

    pub fn position_of(&self, occupant: OccupantId) -> Option<Point> {
        self.occupants.get(&occupant).copied()
    }

    /// Drop every obstacle and occupant.
    pub fn clear(&mut self) {
        self.blocked.clear();
        self.occupants.clear();
        self.cells.clear();
    }
}

impl Occupancy for OccupancyMap {
    #[inline]
    fn is_occupied(&self, p: Point) -> bool {
        self.blocked.contains(&p) || self.cells.contains_key(&p)
    }
}
