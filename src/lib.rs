//! # grid_astar
//!
//! A* search on a 4-connected grid whose cells carry a traversal cost. The grid
//! itself is never owned by the search: it is queried through a [GridOracle],
//! which returns the cost of entering a cell, or a value at or above the
//! non-walkable threshold if the cell cannot be entered. The heuristic is the
//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) to the
//! goal.
//!
//! The [SearchEngine] can be driven in one blocking call through
//! [calculate](SearchEngine::calculate), or step by step through
//! [seed](SearchEngine::seed) and [step](SearchEngine::step), which makes it
//! possible to interleave a search with other work and to cancel it.
//!
//! ```
//! use grid_astar::{CostGrid, Position, SearchEngine};
//!
//! //  _____
//! // |S    |
//! // |#### |
//! // |G    |
//! //  _____
//! let mut grid = CostGrid::new(5, 3, 1);
//! for x in 0..4 {
//!     grid.set(x, 1, 9);
//! }
//! let mut engine = SearchEngine::new(grid);
//! let path = engine.calculate(Position::new(0, 0), Position::new(0, 2));
//! assert_eq!(path.len(), 11);
//! ```
mod closed;
mod config;
mod engine;
mod error;
mod frontier;
mod node;
mod oracle;
mod path;
mod successors;

pub use config::SearchConfig;
pub use engine::{CancelHandle, FailReason, SearchEngine, SearchState, SearchStats};
pub use error::SearchError;
pub use oracle::{CostGrid, GridOracle};
pub use path::{is_cardinal_path, path_cost};

/// Integer grid coordinate. Positions outside the grid are valid values; the
/// oracle reports them as non-walkable.
pub type Position = grid_util::Point;

/// Oracle values at or above this are impassable, values below it are the cost
/// of entering the cell.
pub const NON_WALKABLE_THRESHOLD: i32 = 9;
