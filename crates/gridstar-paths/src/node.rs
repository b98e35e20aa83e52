use gridstar_core::Point;

/// Index of a [`SearchNode`] in the engine's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered cell together with the best known way to reach it.
///
/// Nodes are owned by the engine. `came_from` links to the predecessor on
/// the best known path and is rewritten whenever a cheaper path is found.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub cell: Point,
    /// Accumulated move cost from the start.
    pub path_cost: f64,
    /// `path_cost` plus the heuristic estimate to the target.
    pub total_cost: f64,
    pub came_from: Option<NodeId>,
}
