use std::collections::HashMap;

use gridstar_core::Point;

use super::{Entry, OpenSet};
use crate::node::NodeId;

/// Open set backed by an indexed binary min-heap.
///
/// Each node's heap slot is tracked so decrease-key is O(log n) and lookup
/// by cell is O(1).
#[derive(Debug, Clone, Default)]
pub struct HeapOpenSet {
    heap: Vec<Entry>,
    slots: HashMap<NodeId, usize>,
    cells: HashMap<Point, NodeId>,
    next_seq: u64,
}

impl HeapOpenSet {
    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].key_cmp(&self.heap[b]).is_lt()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].node, a);
        self.slots.insert(self.heap[b].node, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl OpenSet for HeapOpenSet {
    fn insert(&mut self, node: NodeId, cell: Point, cost: f64) {
        debug_assert!(!self.cells.contains_key(&cell), "{cell} queued twice");
        let seq = self.bump_seq();
        let i = self.heap.len();
        self.heap.push(Entry {
            node,
            cell,
            cost,
            seq,
        });
        self.slots.insert(node, i);
        self.cells.insert(cell, node);
        self.sift_up(i);
    }

    fn peek_min(&self) -> Option<NodeId> {
        self.heap.first().map(|e| e.node)
    }

    fn pop_min(&mut self) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.node);
        self.cells.remove(&entry.cell);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.node)
    }

    fn find_by_cell(&self, cell: Point) -> Option<NodeId> {
        self.cells.get(&cell).copied()
    }

    fn cost_of(&self, node: NodeId) -> Option<f64> {
        self.slots.get(&node).map(|&i| self.heap[i].cost)
    }

    fn update_priority(&mut self, node: NodeId, new_cost: f64) -> bool {
        let Some(&i) = self.slots.get(&node) else {
            return false;
        };
        if new_cost >= self.heap[i].cost {
            return false;
        }
        let seq = self.bump_seq();
        let entry = &mut self.heap[i];
        entry.cost = new_cost;
        entry.seq = seq;
        // Children were keyed at or above the old cost, so only move up.
        self.sift_up(i);
        true
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.cells.clear();
        self.next_seq = 0;
    }
}
