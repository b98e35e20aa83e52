//! Frontier containers ordered by total estimated cost.
//!
//! An open set holds [`NodeId`]s, not nodes: the engine's arena owns the
//! nodes and the open set only tracks their priority. Among equal costs the
//! entry that was inserted (or repositioned) first comes out first, so two
//! searches over the same input always expand cells in the same order.

mod heap;
mod sorted;

use std::cmp::Ordering;

use gridstar_core::Point;

use crate::node::NodeId;

pub use heap::HeapOpenSet;
pub use sorted::SortedOpenSet;

/// Priority queue operations needed by the search loop.
pub trait OpenSet {
    /// Add a node that is not yet in the set.
    fn insert(&mut self, node: NodeId, cell: Point, cost: f64);

    /// The minimum-cost node, or `None` when the set is empty.
    fn peek_min(&self) -> Option<NodeId>;

    /// Remove and return the minimum-cost node, or `None` when empty.
    fn pop_min(&mut self) -> Option<NodeId>;

    /// The node currently queued for `cell`, if any.
    fn find_by_cell(&self, cell: Point) -> Option<NodeId>;

    /// The queued cost of `node`, if it is in the set.
    fn cost_of(&self, node: NodeId) -> Option<f64>;

    /// Lower the cost of a queued node and reposition it.
    ///
    /// Only ever decreases: returns `false` and leaves the set untouched if
    /// `new_cost` is not strictly below the current cost, or the node is not
    /// queued.
    fn update_priority(&mut self, node: NodeId, new_cost: f64) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove everything and restart the tie-break sequence.
    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) node: NodeId,
    pub(crate) cell: Point,
    pub(crate) cost: f64,
    pub(crate) seq: u64,
}

impl Entry {
    /// Total order on (cost, seq); sequence numbers are unique.
    #[inline]
    pub(crate) fn key_cmp(&self, other: &Entry) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.seq.cmp(&other.seq))
    }
}
