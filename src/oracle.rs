use core::fmt;
use grid_util::{Grid, Rect, SimpleGrid};

use crate::{Position, NON_WALKABLE_THRESHOLD};

/// Read-only view of the grid being searched. Implementations must be pure and
/// must answer for any coordinate, including coordinates off the grid, which
/// should report a value at or above the non-walkable threshold.
pub trait GridOracle {
    /// Cost of entering the cell at (x, y).
    fn cost(&self, x: i32, y: i32) -> i32;

    fn cost_at(&self, position: &Position) -> i32 {
        self.cost(position.x, position.y)
    }
}

impl<F> GridOracle for F
where
    F: Fn(i32, i32) -> i32,
{
    fn cost(&self, x: i32, y: i32) -> i32 {
        self(x, y)
    }
}

/// A flat grid of cell costs. Reads outside the grid return
/// [NON_WALKABLE_THRESHOLD].
#[derive(Clone, Debug)]
pub struct CostGrid {
    grid: SimpleGrid<i32>,
}

impl CostGrid {
    pub fn new(width: usize, height: usize, default_cost: i32) -> CostGrid {
        CostGrid {
            grid: SimpleGrid::new(width, height, default_cost),
        }
    }

    /// Builds a grid from rows of costs, `rows[y][x]`. Rows shorter than the
    /// first one are padded with non-walkable cells.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> CostGrid {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cost_grid = CostGrid::new(width, height, NON_WALKABLE_THRESHOLD);
        for (y, row) in rows.iter().enumerate() {
            for (x, &cost) in row.as_ref().iter().take(width).enumerate() {
                cost_grid.set(x as i32, y as i32, cost);
            }
        }
        cost_grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.point_in_bounds(Position::new(x, y))
    }

    pub fn get(&self, x: i32, y: i32) -> i32 {
        if self.in_bounds(x, y) {
            self.grid.get(x as usize, y as usize)
        } else {
            NON_WALKABLE_THRESHOLD
        }
    }

    /// Writes a cost. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, cost: i32) {
        if self.in_bounds(x, y) {
            self.grid.set(x as usize, y as usize, cost);
        }
    }

    /// Fills `rect` with `cost`, clipped to the grid.
    pub fn set_rect(&mut self, rect: &Rect, cost: i32) {
        for x in rect.x1..rect.x2 {
            for y in rect.y1..rect.y2 {
                self.set(x, y, cost);
            }
        }
    }
}

impl GridOracle for CostGrid {
    fn cost(&self, x: i32, y: i32) -> i32 {
        self.get(x, y)
    }
}

// A blanket impl over references would overlap with the closure impl.
impl GridOracle for &CostGrid {
    fn cost(&self, x: i32, y: i32) -> i32 {
        self.get(x, y)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() as i32 {
            let values = (0..self.width() as i32)
                .map(|x| self.get(x, y))
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
