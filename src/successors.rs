use crate::oracle::GridOracle;
use crate::Position;

/// Cardinal offsets in expansion order. The order decides which of several
/// equally good paths is returned, so it must stay fixed.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Fills `buf` with the walkable cardinal neighbours of `node` and the cost of
/// entering each. The cell the node was reached from is left out, which stops
/// the search from bouncing straight back; the start node has no such cell.
/// Neighbours past the edge of the `i32` plane do not exist.
pub(crate) fn neighbourhood_and_cost<O: GridOracle + ?Sized>(
    oracle: &O,
    threshold: i32,
    node: &Position,
    came_from: Option<&Position>,
    buf: &mut Vec<(Position, i32)>,
) {
    buf.clear();
    for (dx, dy) in NEUMANN_OFFSETS {
        let (Some(x), Some(y)) = (node.x.checked_add(dx), node.y.checked_add(dy)) else {
            continue;
        };
        let candidate = Position::new(x, y);
        let cost = oracle.cost(candidate.x, candidate.y);
        if cost >= threshold || came_from == Some(&candidate) {
            continue;
        }
        buf.push((candidate, cost.max(0)));
    }
}
