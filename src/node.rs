use crate::Position;

/// Handle of a [SearchNode] inside a [NodePool]. Only valid for the search that
/// allocated it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A grid position annotated with the A* bookkeeping of one search.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SearchNode {
    pub position: Position,
    /// Accumulated cost from the start (g).
    pub cost: f32,
    /// Heuristic distance to the goal (h).
    pub distance: f32,
    /// `cost + distance` (f), the frontier key.
    pub cost_distance_sum: f32,
    pub parent: Option<NodeId>,
    /// Only set once a solution has been found.
    pub child: Option<NodeId>,
}

impl SearchNode {
    fn new(position: Position) -> SearchNode {
        SearchNode {
            position,
            cost: 0.0,
            distance: 0.0,
            cost_distance_sum: 0.0,
            parent: None,
            child: None,
        }
    }
}

/// Arena owning every node of the current search. [reset](Self::reset) drops
/// the nodes but keeps the allocation, so repeated searches of similar size do
/// not reallocate.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodePool {
    nodes: Vec<SearchNode>,
    capacity: Option<usize>,
}

/// Most nodes reserved up front; a larger capacity is only a limit and the
/// storage grows towards it on demand.
const MAX_INITIAL_RESERVE: usize = 1 << 12;

impl NodePool {
    pub fn new(capacity: Option<usize>) -> NodePool {
        let reserve = capacity.map_or(0, |c| c.min(MAX_INITIAL_RESERVE));
        NodePool {
            nodes: Vec::with_capacity(reserve),
            capacity,
        }
    }

    /// Hands out a fresh node at `position`, or `None` if the pool is full.
    pub fn allocate(&mut self, position: Position) -> Option<NodeId> {
        if self.capacity.is_some_and(|c| self.nodes.len() >= c) {
            return None;
        }
        let id = NodeId(u32::try_from(self.nodes.len()).ok()?);
        self.nodes.push(SearchNode::new(position));
        Some(id)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
