//! Plain configuration values supplied when a search engine is built.

use crate::error::SearchError;

/// Move-cost constants.
///
/// A linear move costs `linear_cost_factor² × move_unit_multiplier` and a
/// diagonal move `diagonal_cost_factor² × move_unit_multiplier`. The squares
/// keep move costs in the same units as the squared-distance heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostConfig {
    pub move_unit_multiplier: f64,
    pub linear_cost_factor: f64,
    pub diagonal_cost_factor: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            move_unit_multiplier: 10.0,
            linear_cost_factor: 1.0,
            diagonal_cost_factor: 1.4,
        }
    }
}

impl CostConfig {
    /// Check that every value is finite and strictly positive.
    pub fn validate(&self) -> Result<(), SearchError> {
        let fields = [
            ("move_unit_multiplier", self.move_unit_multiplier),
            ("linear_cost_factor", self.linear_cost_factor),
            ("diagonal_cost_factor", self.diagonal_cost_factor),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v <= 0.0 {
                return Err(SearchError::InvalidCostConfig(format!(
                    "{name} must be finite and positive, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Remaining-cost estimate used to order the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Squared straight-line distance times the unit multiplier.
    ///
    /// Strongly goal-directed but not admissible: paths are reasonable, not
    /// guaranteed shortest.
    #[default]
    SquaredEuclidean,
    /// Diagonal distance priced with the configured move costs.
    ///
    /// Consistent, so returned paths are cost-optimal.
    Octile,
}

/// Whether a diagonal move may squeeze past occupied cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagonalPolicy {
    /// A diagonal move needs both orthogonally adjacent cells free.
    #[default]
    NoCornerCutting,
    /// Diagonal moves only look at the destination cell.
    AllowCornerCutting,
}

/// Everything a [`SearchEngine`](crate::SearchEngine) needs besides the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub cost: CostConfig,
    pub heuristic: Heuristic,
    pub diagonals: DiagonalPolicy,
}

impl SearchConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_diagonals(mut self, diagonals: DiagonalPolicy) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub fn with_cost(mut self, cost: CostConfig) -> Self {
        self.cost = cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CostConfig::default().validate().is_ok());
        let c = SearchConfig::default();
        assert_eq!(c.heuristic, Heuristic::SquaredEuclidean);
        assert_eq!(c.diagonals, DiagonalPolicy::NoCornerCutting);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            CostConfig { move_unit_multiplier: 0.0, ..CostConfig::default() },
            CostConfig { linear_cost_factor: -1.0, ..CostConfig::default() },
            CostConfig { diagonal_cost_factor: f64::NAN, ..CostConfig::default() },
            CostConfig { move_unit_multiplier: f64::INFINITY, ..CostConfig::default() },
        ];
        for c in bad {
            assert!(matches!(c.validate(), Err(SearchError::InvalidCostConfig(_))), "{c:?}");
        }
    }

    #[test]
    fn builders_set_fields() {
        let c = SearchConfig::default()
            .with_heuristic(Heuristic::Octile)
            .with_diagonals(DiagonalPolicy::AllowCornerCutting);
        assert_eq!(c.heuristic, Heuristic::Octile);
        assert_eq!(c.diagonals, DiagonalPolicy::AllowCornerCutting);
    }
}
