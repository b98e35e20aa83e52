//! World-space placement of a grid.
//!
//! A [`Layout`] lays the grid plane on two world axes. Cell `(x, y)` spans
//! `cell_width` along the plane's width axis and `cell_length` along its
//! length axis, starting at `origin` (the outer corner of cell `(0, 0)`).

use crate::error::GridError;
use crate::geom::Point;

/// A position in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The pair of world axes the grid plane lies on: (width axis, length axis).
///
/// The remaining axis is the depth axis and is taken from the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axes {
    XY,
    /// Horizontal ground plane.
    #[default]
    XZ,
    ZY,
}

/// Placement of a grid in world space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    axes: Axes,
    origin: WorldPos,
    cell_width: f32,
    cell_length: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            axes: Axes::XZ,
            origin: WorldPos::default(),
            cell_width: 1.0,
            cell_length: 1.0,
        }
    }
}

impl Layout {
    /// Create a layout. Cell sizes must be finite and positive.
    pub fn new(
        axes: Axes,
        origin: WorldPos,
        cell_width: f32,
        cell_length: f32,
    ) -> Result<Self, GridError> {
        for (name, v) in [("cell_width", cell_width), ("cell_length", cell_length)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(GridError::InvalidLayout(format!(
                    "{name} must be finite and positive, got {v}"
                )));
            }
        }
        if ![origin.x, origin.y, origin.z].iter().all(|c| c.is_finite()) {
            return Err(GridError::InvalidLayout(format!(
                "origin must be finite, got {origin:?}"
            )));
        }
        Ok(Self {
            axes,
            origin,
            cell_width,
            cell_length,
        })
    }

    /// A layout whose `(0, 0)` cell is centred on `center`.
    pub fn centered(
        axes: Axes,
        center: WorldPos,
        cell_width: f32,
        cell_length: f32,
    ) -> Result<Self, GridError> {
        let layout = Self::new(axes, center, cell_width, cell_length)?;
        let (w, l) = layout.plane(center);
        let origin = layout.compose(w - cell_width / 2.0, l - cell_length / 2.0, center);
        Ok(Self { origin, ..layout })
    }

    pub fn axes(&self) -> Axes {
        self.axes
    }

    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    /// World position of the centre of cell `p`.
    pub fn cell_center(&self, p: Point) -> WorldPos {
        let (w0, l0) = self.plane(self.origin);
        let w = w0 + (p.x as f32 + 0.5) * self.cell_width;
        let l = l0 + (p.y as f32 + 0.5) * self.cell_length;
        self.compose(w, l, self.origin)
    }

    /// The cell containing world position `pos`, ignoring the depth axis.
    pub fn cell_at(&self, pos: WorldPos) -> Point {
        let (w0, l0) = self.plane(self.origin);
        let (w, l) = self.plane(pos);
        Point::new(
            ((w - w0) / self.cell_width).floor() as i32,
            ((l - l0) / self.cell_length).floor() as i32,
        )
    }

    /// Project `pos` onto (width, length) plane coordinates.
    fn plane(&self, pos: WorldPos) -> (f32, f32) {
        match self.axes {
            Axes::XY => (pos.x, pos.y),
            Axes::XZ => (pos.x, pos.z),
            Axes::ZY => (pos.z, pos.y),
        }
    }

    /// Build a world position from plane coordinates, taking depth from `depth`.
    fn compose(&self, w: f32, l: f32, depth: WorldPos) -> WorldPos {
        match self.axes {
            Axes::XY => WorldPos::new(w, l, depth.z),
            Axes::XZ => WorldPos::new(w, depth.y, l),
            Axes::ZY => WorldPos::new(depth.x, l, w),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_round_trip() {
        let l = Layout::new(Axes::ZY, WorldPos::new(1.0, 2.0, 3.0), 0.5, 2.0).unwrap();
        let json = serde_json::to_string(&l).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }

    #[test]
    fn point_is_a_plain_object() {
        let json = serde_json::to_string(&Point::new(3, -4)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-4}"#);
    }
}
