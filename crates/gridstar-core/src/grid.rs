//! The [`Grid`] type: bounded 2D cell space with injected occupancy.
//!
//! A grid answers three questions for the search: is a coordinate inside,
//! which cells are adjacent to it (and how), and is a cell occupied. It owns
//! no per-search state, so any number of searches may borrow it at once.

use crate::error::GridError;
use crate::geom::{Direction, MoveKind, Point, Range};
use crate::layout::{Layout, WorldPos};
use crate::occupancy::{Occupancy, OccupancyMap};

/// A bounded grid of cells starting at `(0, 0)`.
#[derive(Debug, Clone)]
pub struct Grid<O = OccupancyMap> {
    bounds: Range,
    layout: Layout,
    occupancy: O,
}

impl<O: Occupancy> Grid<O> {
    /// Create a `width` × `height` grid.
    ///
    /// Fails with [`GridError::MalformedGridConfiguration`] unless both
    /// dimensions are positive.
    pub fn new(width: i32, height: i32, occupancy: O) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::MalformedGridConfiguration { width, height });
        }
        Ok(Self {
            bounds: Range::new(0, 0, width, height),
            layout: Layout::default(),
            occupancy,
        })
    }

    /// Place the grid in world space.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Always `false`: a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Return `p` if it lies inside the grid.
    pub fn check(&self, p: Point) -> Result<Point, GridError> {
        if self.contains(p) {
            Ok(p)
        } else {
            Err(GridError::InvalidCoordinate {
                point: p,
                bounds: self.bounds,
            })
        }
    }

    /// Whether `p` is occupied, as reported by the occupancy capability.
    ///
    /// Out-of-bounds cells are not asked about and report `false`; callers
    /// filter them with [`contains`](Grid::contains) or
    /// [`neighbors`](Grid::neighbors).
    #[inline]
    pub fn is_occupied(&self, p: Point) -> bool {
        self.contains(p) && self.occupancy.is_occupied(p)
    }

    /// In-bounds cells adjacent to `p`: four linear moves, then four diagonal.
    pub fn neighbors(&self, p: Point) -> Neighbors {
        Neighbors {
            origin: p,
            bounds: self.bounds,
            next: 0,
        }
    }

    /// The adjacent cell in direction `dir`, or `None` at the edge.
    pub fn adjacent(&self, p: Point, dir: Direction) -> Option<Point> {
        let n = p.step(dir);
        self.contains(n).then_some(n)
    }

    /// Row-major flat index of `p`.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Inverse of [`index_of`](Grid::index_of).
    pub fn point_at(&self, index: usize) -> Option<Point> {
        if index >= self.len() {
            return None;
        }
        let w = self.width() as usize;
        Some(Point::new((index % w) as i32, (index / w) as i32))
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        self.bounds.iter()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// World-space centre of cell `p`.
    pub fn world_center(&self, p: Point) -> Result<WorldPos, GridError> {
        self.check(p).map(|p| self.layout.cell_center(p))
    }

    /// The cell under world position `pos`.
    pub fn cell_at_world(&self, pos: WorldPos) -> Result<Point, GridError> {
        self.check(self.layout.cell_at(pos))
    }

    pub fn occupancy(&self) -> &O {
        &self.occupancy
    }

    /// Mutable access to the occupancy source, for editing obstacles between
    /// searches.
    pub fn occupancy_mut(&mut self) -> &mut O {
        &mut self.occupancy
    }
}

/// Iterator over the in-bounds neighbours of a cell, see [`Grid::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors {
    origin: Point,
    bounds: Range,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = (Point, MoveKind);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = Direction::ALL.get(self.next) {
            self.next += 1;
            let n = self.origin.step(dir);
            if self.bounds.contains(n) {
                return Some((n, dir.kind()));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Direction::ALL.len() - self.next.min(Direction::ALL.len())))
    }
}
