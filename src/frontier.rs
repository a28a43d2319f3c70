use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::NodeId;
use crate::Position;

/// Heap entry. Replaced nodes are not removed from the heap; their entries go
/// stale and are skipped when popped.
struct SmallestSumHolder {
    cost_distance_sum: f32,
    sequence: u64,
    position: Position,
    node: NodeId,
}

impl Eq for SmallestSumHolder {}

impl PartialEq for SmallestSumHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestSumHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestSumHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest sum first, then the earliest insertion among equal sums.
        match other.cost_distance_sum.total_cmp(&self.cost_distance_sum) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// The open list: nodes waiting to be expanded, ordered ascending by
/// `cost_distance_sum`. Holds at most one live node per position.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<SmallestSumHolder>,
    members: FxHashMap<Position, NodeId>,
    next_sequence: u64,
    high_water: usize,
}

impl Frontier {
    /// Adds `node` behind every node with a smaller or equal sum, replacing
    /// whatever node was open at the same position.
    pub fn push(&mut self, node: NodeId, position: Position, cost_distance_sum: f32) {
        self.members.insert(position, node);
        self.heap.push(SmallestSumHolder {
            cost_distance_sum,
            sequence: self.next_sequence,
            position,
            node,
        });
        self.next_sequence += 1;
        self.high_water = self.high_water.max(self.members.len());
    }

    /// Removes and returns the open node with the smallest sum.
    pub fn pop(&mut self) -> Option<NodeId> {
        while let Some(SmallestSumHolder { position, node, .. }) = self.heap.pop() {
            if self.members.get(&position) == Some(&node) {
                self.members.remove(&position);
                return Some(node);
            }
        }
        None
    }

    pub fn find(&self, position: &Position) -> Option<NodeId> {
        self.members.get(position).copied()
    }

    pub fn remove(&mut self, position: &Position) -> Option<NodeId> {
        self.members.remove(position)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.members.clear();
        self.next_sequence = 0;
    }

    /// Clears the frontier and forgets its high water mark.
    pub fn reset(&mut self) {
        self.clear();
        self.high_water = 0;
    }
}
