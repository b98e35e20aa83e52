//! ASCII maps: loading, random generation and rendering.
//!
//! ```text
//! S..#....
//! .#.#.##.
//! ...#...T
//! ```
//!
//! `.` is free, `#` is blocked, `S` and `T` mark the start and target (both
//! free). Every row must have the same width.

use gridstar_core::{Grid, GridError, Occupancy, OccupancyMap, Point};
use rand::Rng;

/// Problems found while reading a map.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {col}")]
    UnknownTile { tile: char, row: usize, col: usize },

    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),

    #[error("blocked fraction must lie in [0, 1], got {0}")]
    InvalidDensity(f64),
}

/// A parsed or generated map, ready to become a [`Grid`].
#[derive(Debug, Clone)]
pub struct AsciiMap {
    pub width: i32,
    pub height: i32,
    pub occupancy: OccupancyMap,
    pub start: Option<Point>,
    pub target: Option<Point>,
}

impl AsciiMap {
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();

        let mut occupancy = OccupancyMap::new();
        let mut start = None;
        let mut target = None;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, tile) in line.chars().enumerate() {
                let p = Point::new(col as i32, row as i32);
                match tile {
                    '.' => {}
                    '#' => {
                        occupancy.block(p);
                    }
                    'S' => set_marker(&mut start, p, tile)?,
                    'T' => set_marker(&mut target, p, tile)?,
                    _ => return Err(MapError::UnknownTile { tile, row, col }),
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            occupancy,
            start,
            target,
        })
    }

    /// A `width` × `height` map with each cell blocked with probability
    /// `density`, start in the top-left and target in the bottom-right corner.
    pub fn random<R: Rng>(
        width: i32,
        height: i32,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, MapError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(MapError::InvalidDensity(density));
        }
        let start = Point::new(0, 0);
        let target = Point::new(width - 1, height - 1);
        let mut occupancy = OccupancyMap::new();
        for y in 0..height {
            for x in 0..width {
                let p = Point::new(x, y);
                if p != start && p != target && rng.random_bool(density) {
                    occupancy.block(p);
                }
            }
        }
        Ok(Self {
            width,
            height,
            occupancy,
            start: Some(start),
            target: Some(target),
        })
    }

    pub fn into_grid(self) -> Result<Grid, GridError> {
        Grid::new(self.width, self.height, self.occupancy)
    }
}

fn set_marker(slot: &mut Option<Point>, p: Point, tile: char) -> Result<(), MapError> {
    if slot.replace(p).is_some() {
        return Err(MapError::DuplicateMarker(tile));
    }
    Ok(())
}

/// Draw `grid` with the path marked by `*`, start `S` and target `T`.
pub fn render<O: Occupancy>(grid: &Grid<O>, path: &[Point], start: Point, target: Point) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let tile = if p == start {
                'S'
            } else if p == target {
                'T'
            } else if path.contains(&p) {
                '*'
            } else if grid.is_occupied(p) {
                '#'
            } else {
                '.'
            };
            out.push(tile);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn parse_markers_and_walls() {
        let m = AsciiMap::parse("S.#\n.#.\n..T\n").unwrap();
        assert_eq!((m.width, m.height), (3, 3));
        assert_eq!(m.start, Some(Point::new(0, 0)));
        assert_eq!(m.target, Some(Point::new(2, 2)));
        assert!(m.occupancy.is_blocked(Point::new(2, 0)));
        assert!(m.occupancy.is_blocked(Point::new(1, 1)));
        assert_eq!(m.occupancy.blocked_len(), 2);
    }

    #[test]
    fn parse_ignores_blank_lines_and_trailing_space() {
        let m = AsciiMap::parse("\n...  \n...\n\n").unwrap();
        assert_eq!((m.width, m.height), (3, 2));
        assert_eq!(m.start, None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(AsciiMap::parse("\n\n").unwrap_err(), MapError::Empty);
        assert_eq!(
            AsciiMap::parse("...\n..\n").unwrap_err(),
            MapError::Ragged { row: 1, expected: 3, found: 2 }
        );
        assert_eq!(
            AsciiMap::parse("..x\n").unwrap_err(),
            MapError::UnknownTile { tile: 'x', row: 0, col: 2 }
        );
        assert_eq!(AsciiMap::parse("S.S\n").unwrap_err(), MapError::DuplicateMarker('S'));
    }

    #[test]
    fn random_map_keeps_endpoints_free() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let m = AsciiMap::random(6, 4, 1.0, &mut rng).unwrap();
        assert_eq!(m.occupancy.blocked_len(), 6 * 4 - 2);
        assert!(!m.occupancy.is_blocked(Point::new(0, 0)));
        assert!(!m.occupancy.is_blocked(Point::new(5, 3)));
        assert_eq!(
            AsciiMap::random(3, 3, 1.5, &mut rng).unwrap_err(),
            MapError::InvalidDensity(1.5)
        );
    }

    #[test]
    fn random_map_is_seeded() {
        let a = AsciiMap::random(10, 10, 0.3, &mut rand::rngs::StdRng::seed_from_u64(3)).unwrap();
        let b = AsciiMap::random(10, 10, 0.3, &mut rand::rngs::StdRng::seed_from_u64(3)).unwrap();
        let ga = a.into_grid().unwrap();
        let gb = b.into_grid().unwrap();
        assert!(ga.cells().all(|p| ga.is_occupied(p) == gb.is_occupied(p)));
    }

    #[test]
    fn render_marks_path() {
        let m = AsciiMap::parse("S.#\n.#.\n..T\n").unwrap();
        let (s, t) = (m.start.unwrap(), m.target.unwrap());
        let g = m.into_grid().unwrap();
        let path = [s, Point::new(0, 1), Point::new(1, 2), t];
        assert_eq!(render(&g, &path, s, t), "S.#\n*#.\n.*T\n");
    }
}
