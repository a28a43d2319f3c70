use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::node::NodeId;
use crate::Position;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The closed list: expanded nodes keyed by position, iterated in expansion
/// order.
#[derive(Default)]
pub(crate) struct ClosedSet {
    nodes: FxIndexMap<Position, NodeId>,
    high_water: usize,
}

impl ClosedSet {
    pub fn insert(&mut self, position: Position, node: NodeId) {
        self.nodes.insert(position, node);
        self.high_water = self.high_water.max(self.nodes.len());
    }

    pub fn find(&self, position: &Position) -> Option<NodeId> {
        self.nodes.get(position).copied()
    }

    /// Drops the node closed at `position` so a cheaper one can be reopened.
    pub fn remove(&mut self, position: &Position) -> Option<NodeId> {
        self.nodes.shift_remove(position)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn reset(&mut self) {
        self.clear();
        self.high_water = 0;
    }
}
