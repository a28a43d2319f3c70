use grid_astar::{CostGrid, GridOracle, Position, NON_WALKABLE_THRESHOLD};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Cheapest cost from `start` to `goal` over 4-connected walkable cells, or
/// `None` if the goal is not reachable. Plain Dijkstra over the grid, used as
/// ground truth for the A* results.
#[allow(dead_code)]
pub fn dijkstra_cost(grid: &CostGrid, start: Position, goal: Position) -> Option<i64> {
    if grid.cost_at(&goal) >= NON_WALKABLE_THRESHOLD {
        return None;
    }
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    let ix = |p: Position| (p.y * w + p.x) as usize;
    let mut best = vec![i64::MAX; (w * h) as usize];
    let mut heap = BinaryHeap::new();
    best[ix(start)] = 0;
    heap.push(Reverse((0_i64, start.x, start.y)));
    while let Some(Reverse((cost, x, y))) = heap.pop() {
        let p = Position::new(x, y);
        if p == goal {
            return Some(cost);
        }
        if cost > best[ix(p)] {
            continue;
        }
        for (dx, dy) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
            let n = Position::new(x + dx, y + dy);
            let c = grid.cost_at(&n);
            if c >= NON_WALKABLE_THRESHOLD {
                continue;
            }
            let new_cost = cost + i64::from(c);
            if new_cost < best[ix(n)] {
                best[ix(n)] = new_cost;
                heap.push(Reverse((new_cost, n.x, n.y)));
            }
        }
    }
    None
}

#[allow(dead_code)]
pub fn visualize_grid(grid: &CostGrid, start: &Position, end: &Position) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Position::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.cost(x, y) >= NON_WALKABLE_THRESHOLD {
                print!("#");
            } else {
                print!("{}", grid.cost(x, y));
            }
        }
        println!();
    }
}

/// The 20x20 map of the reference test application, rows top to bottom.
#[allow(dead_code)]
pub fn reference_map() -> CostGrid {
    CostGrid::from_rows(&[
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 1],
        [1, 9, 9, 1, 1, 9, 9, 9, 1, 9, 1, 9, 1, 9, 1, 9, 9, 9, 1, 1],
        [1, 9, 9, 1, 1, 9, 9, 9, 1, 9, 1, 9, 1, 9, 1, 9, 9, 9, 1, 1],
        [1, 9, 1, 1, 1, 1, 9, 9, 1, 9, 1, 9, 1, 1, 1, 1, 9, 9, 1, 1],
        [1, 9, 1, 1, 9, 1, 1, 1, 1, 9, 1, 1, 1, 1, 9, 1, 1, 1, 1, 1],
        [1, 9, 9, 9, 9, 1, 1, 1, 1, 1, 1, 9, 9, 9, 9, 1, 1, 1, 1, 1],
        [1, 9, 9, 9, 9, 9, 9, 9, 9, 1, 1, 1, 9, 9, 9, 9, 9, 9, 9, 1],
        [1, 9, 1, 1, 1, 1, 1, 1, 1, 1, 1, 9, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 9, 1, 9, 9, 9, 9, 9, 9, 9, 1, 1, 9, 9, 9, 9, 9, 9, 9, 1],
        [1, 9, 1, 1, 1, 1, 9, 1, 1, 9, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 9, 9, 9, 9, 9, 1, 9, 1, 9, 1, 9, 9, 9, 9, 9, 1, 1, 1, 1],
        [1, 9, 1, 9, 1, 9, 9, 9, 1, 9, 1, 9, 1, 9, 1, 9, 9, 9, 1, 1],
        [1, 9, 1, 9, 1, 9, 9, 9, 1, 9, 1, 9, 1, 9, 1, 9, 9, 9, 1, 1],
        [1, 9, 1, 1, 1, 1, 9, 9, 1, 9, 1, 9, 1, 1, 1, 1, 9, 9, 1, 1],
        [1, 9, 1, 1, 9, 1, 1, 1, 1, 9, 1, 1, 1, 1, 9, 1, 1, 1, 1, 1],
        [1, 9, 9, 9, 9, 1, 1, 1, 1, 1, 1, 9, 9, 9, 9, 1, 1, 1, 1, 1],
        [1, 1, 9, 9, 9, 9, 9, 9, 9, 1, 1, 1, 9, 9, 9, 1, 9, 9, 9, 9],
        [1, 9, 1, 1, 1, 1, 1, 1, 1, 1, 1, 9, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ])
}
