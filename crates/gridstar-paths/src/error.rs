use gridstar_core::GridError;

/// Errors that stop a search before it starts.
///
/// Running out of frontier is *not* an error: it is reported as
/// [`PathOutcome::NoPathFound`](crate::PathOutcome::NoPathFound).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Start or target is outside the grid, or the grid itself is malformed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A cost configuration value is unusable.
    #[error("invalid cost configuration: {0}")]
    InvalidCostConfig(String),

    /// The arrival radius is negative or not a number.
    #[error("invalid arrival radius {0}: must be finite and non-negative")]
    InvalidArrivalRadius(f64),

    /// `run` was called on an engine with no search begun.
    #[error("no search has been begun on this engine")]
    NotStarted,
}
