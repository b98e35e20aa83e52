//! **gridstar-core**: grid geometry and occupancy for tile-based pathfinding.
//!
//! This crate provides the leaf types used by `gridstar-paths`: integer cell
//! coordinates, bounded grids with an injected occupancy capability, a
//! ready-made occupancy map with static obstacles and movable occupants, and
//! a world-space layout for hosts that think in world coordinates.

pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod occupancy;

pub use error::GridError;
pub use geom::{Direction, MoveKind, Point, Range};
pub use grid::{Grid, Neighbors};
pub use layout::{Axes, Layout, WorldPos};
pub use occupancy::{Occupancy, OccupancyMap, OccupantId, Open};
