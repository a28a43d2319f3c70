use itertools::Itertools;

use crate::node::{NodeId, NodePool};
use crate::oracle::GridOracle;
use crate::Position;

/// Follows the child links set after a successful search, from the start node
/// to the goal node inclusive.
pub(crate) fn follow_children(pool: &NodePool, start: NodeId) -> Vec<Position> {
    std::iter::successors(Some(start), |&id| pool.get(id).child)
        .map(|id| pool.get(id).position)
        .collect()
}

/// Total cost of walking `path`: the oracle cost of every cell after the first,
/// with negative costs counted as zero, the same way the search counts them.
pub fn path_cost<O: GridOracle + ?Sized>(oracle: &O, path: &[Position]) -> i64 {
    path.iter()
        .skip(1)
        .map(|p| i64::from(oracle.cost_at(p).max(0)))
        .sum()
}

/// Checks that every consecutive pair of positions is one cardinal step apart.
pub fn is_cardinal_path(path: &[Position]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| {
            let dx = i64::from(a.x) - i64::from(b.x);
            let dy = i64::from(a.y) - i64::from(b.y);
            dx.abs() + dy.abs() == 1
        })
}
