//! Tile-grid A* pathfinding.
//!
//! This crate runs A* over a [`gridstar_core::Grid`]:
//!
//! - **Cost model** ([`CostModel`]): linear and diagonal move costs plus a
//!   heuristic in the same units.
//! - **Open sets** ([`OpenSet`]): a sorted vector ([`SortedOpenSet`]) and an
//!   indexed binary heap ([`HeapOpenSet`]), both with decrease-key and FIFO
//!   tie-breaking.
//! - **Search engine** ([`SearchEngine`]): the expansion loop as a state
//!   machine that can run to completion or one step at a time.
//! - **Observers** ([`SearchObserver`]): optional hooks for visualizing the
//!   frontier and expanded cells.
//!
//! ```
//! use gridstar_core::{Grid, OccupancyMap, Point};
//! use gridstar_paths::{find_path, PathOutcome, SearchConfig};
//!
//! let mut occupancy = OccupancyMap::new();
//! occupancy.block(Point::new(1, 1));
//! let grid = Grid::new(5, 5, occupancy).unwrap();
//!
//! let out = find_path(&grid, SearchConfig::default(), Point::new(0, 0), Point::new(4, 4), 0.0)
//!     .unwrap();
//! assert!(matches!(out, PathOutcome::Path(ref p) if p.last() == Some(&Point::new(4, 4))));
//! ```

mod config;
mod cost;
mod distance;
mod engine;
mod error;
mod node;
mod observer;
mod open_set;

pub use config::{CostConfig, DiagonalPolicy, Heuristic, SearchConfig};
pub use cost::CostModel;
pub use distance::{chebyshev, euclidean, manhattan, squared_euclidean};
pub use engine::{PathOutcome, SearchEngine, SearchState, find_path};
pub use error::SearchError;
pub use node::{NodeId, SearchNode};
pub use observer::{SearchEvent, SearchObserver, SearchTrace};
pub use open_set::{HeapOpenSet, OpenSet, SortedOpenSet};
