use gridstar_core::Point;

use super::{Entry, OpenSet};
use crate::node::NodeId;

/// Open set kept as a sorted vector.
///
/// Entries are stored from highest to lowest priority key so the minimum
/// sits at the end and pops in O(1). Insertion is a single ordered pass;
/// lookup by cell and repositioning are linear. Fine for small tactical
/// grids; use [`HeapOpenSet`](super::HeapOpenSet) for large ones.
#[derive(Debug, Clone, Default)]
pub struct SortedOpenSet {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl SortedOpenSet {
    fn place(&mut self, entry: Entry) {
        let at = self
            .entries
            .partition_point(|e| e.key_cmp(&entry).is_gt());
        self.entries.insert(at, entry);
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.entries.iter().position(|e| e.node == node)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl OpenSet for SortedOpenSet {
    fn insert(&mut self, node: NodeId, cell: Point, cost: f64) {
        debug_assert!(self.find_by_cell(cell).is_none(), "{cell} queued twice");
        let seq = self.bump_seq();
        self.place(Entry {
            node,
            cell,
            cost,
            seq,
        });
    }

    fn peek_min(&self) -> Option<NodeId> {
        self.entries.last().map(|e| e.node)
    }

    fn pop_min(&mut self) -> Option<NodeId> {
        self.entries.pop().map(|e| e.node)
    }

    fn find_by_cell(&self, cell: Point) -> Option<NodeId> {
        self.entries.iter().find(|e| e.cell == cell).map(|e| e.node)
    }

    fn cost_of(&self, node: NodeId) -> Option<f64> {
        self.position(node).map(|i| self.entries[i].cost)
    }

    fn update_priority(&mut self, node: NodeId, new_cost: f64) -> bool {
        let Some(i) = self.position(node) else {
            return false;
        };
        if new_cost >= self.entries[i].cost {
            return false;
        }
        let mut entry = self.entries.remove(i);
        entry.cost = new_cost;
        entry.seq = self.bump_seq();
        self.place(entry);
        true
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }
}
