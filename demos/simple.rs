use grid_astar::{CostGrid, Position, SearchEngine};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S   3|
// |###3 |
// |  5  |
// | ### |
// |    E|
//  _____
// where
// - # marks an obstacle (cost 9)
// - digits mark cells that are more expensive to enter than the default cost of 1
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let grid = CostGrid::from_rows(&[
        [1, 1, 1, 1, 3],
        [9, 9, 9, 3, 1],
        [1, 1, 5, 1, 1],
        [1, 9, 9, 9, 1],
        [1, 1, 1, 1, 1],
    ]);
    println!("{}", grid);
    let mut engine = SearchEngine::new(grid);
    let start = Position::new(0, 0);
    let end = Position::new(4, 4);
    let path = engine.calculate(start, end);
    if path.is_empty() {
        println!("No path from {:?} to {:?}", start, end);
        return;
    }
    println!("Path (cost {:?}):", engine.solution_cost());
    for p in path {
        println!("{:?}", p);
    }
    println!("{:?}", engine.stats());
}
