//! Move costs and heuristic estimates in one shared unit.

use gridstar_core::{MoveKind, Point};

use crate::config::{CostConfig, Heuristic, SearchConfig};
use crate::distance::squared_euclidean;
use crate::error::SearchError;

/// Prices moves and estimates remaining cost.
///
/// Both quantities are scaled by the same unit multiplier so that path cost
/// and heuristic can be summed into a node's total cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    unit: f64,
    linear: f64,
    diagonal: f64,
    heuristic: Heuristic,
}

impl CostModel {
    pub fn new(cost: CostConfig, heuristic: Heuristic) -> Result<Self, SearchError> {
        cost.validate()?;
        let linear = cost.linear_cost_factor * cost.linear_cost_factor * cost.move_unit_multiplier;
        let diagonal =
            cost.diagonal_cost_factor * cost.diagonal_cost_factor * cost.move_unit_multiplier;
        Ok(Self {
            unit: cost.move_unit_multiplier,
            linear,
            diagonal,
            heuristic,
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Self::new(config.cost, config.heuristic)
    }

    /// Fixed cost of a single move.
    #[inline]
    pub fn move_cost(&self, kind: MoveKind) -> f64 {
        match kind {
            MoveKind::Linear => self.linear,
            MoveKind::Diagonal => self.diagonal,
        }
    }

    /// Estimated cost from `cell` to `target`.
    pub fn heuristic(&self, cell: Point, target: Point) -> f64 {
        match self.heuristic {
            Heuristic::SquaredEuclidean => squared_euclidean(cell, target) as f64 * self.unit,
            Heuristic::Octile => {
                let dx = f64::from((cell.x - target.x).abs());
                let dy = f64::from((cell.y - target.y).abs());
                let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
                // Two linear moves can stand in for one diagonal.
                let diagonal = self.diagonal.min(2.0 * self.linear);
                self.linear * (hi - lo) + diagonal * lo
            }
        }
    }

    pub fn heuristic_kind(&self) -> Heuristic {
        self.heuristic
    }
}
