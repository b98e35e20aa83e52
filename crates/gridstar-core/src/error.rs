use crate::geom::{Point, Range};

/// Errors raised when building or addressing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// The grid would have no cells.
    #[error("malformed grid configuration: {width}x{height} has no cells")]
    MalformedGridConfiguration { width: i32, height: i32 },

    /// A coordinate lies outside the grid bounds.
    #[error("coordinate {point} is outside grid bounds {bounds}")]
    InvalidCoordinate { point: Point, bounds: Range },

    /// Cell sizes or origin of a [`Layout`](crate::Layout) are unusable.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
