//! Small grids shared by the search and delivery tests

use crate::geometry::Position;
use crate::grid::Grid;


/// Grid with every segment set to `level`
pub(crate) fn open_grid(width: i32, height: i32, level: u32) -> Grid {
    let mut grid = Grid::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let pos = Position::new(x, y);
            if x + 1 < width {
                grid.set_traffic(pos, pos.offset(1, 0), level);
            }
            if y + 1 < height {
                grid.set_traffic(pos, pos.offset(0, 1), level);
            }
        }
    }
    grid
}

/// Single row of `length` cells
pub(crate) fn line_grid(length: i32, level: u32) -> Grid {
    open_grid(length, 1, level)
}

/// 2x2 grid where (0,0)-(1,0) costs 4 and the three step detour through row 1 costs 3
pub(crate) fn detour_grid() -> Grid {
    let mut grid = open_grid(2, 2, 1);
    grid.set_traffic(Position::new(0, 0), Position::new(1, 0), 4);
    grid
}

/// 5x5 grid with the customer at (2,2) cut off by blocked segments
/// Returns (grid, store, customer)
pub(crate) fn walled_in_customer() -> (Grid, Position, Position) {
    let mut grid = open_grid(5, 5, 1);
    let customer = Position::new(2, 2);
    for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
        grid.set_traffic(customer, customer.offset(dx, dy), 0);
    }
    (grid, Position::new(0, 0), customer)
}

/// 6x6 grid at level 2 with three stores, six customers, one expensive and one
/// blocked segment, and a tunnel between (0,5) and (5,0)
pub(crate) fn city_grid() -> Grid {
    let mut grid = open_grid(6, 6, 2);
    grid.set_traffic(Position::new(2, 2), Position::new(3, 2), 5);
    grid.set_traffic(Position::new(2, 3), Position::new(3, 3), 0);
    grid.add_tunnel(Position::new(0, 5), Position::new(5, 0));

    for store in [(0, 0), (5, 5), (0, 5)] {
        grid.add_store(store.into());
    }
    for customer in [(1, 1), (4, 4), (2, 3), (5, 0), (3, 2), (0, 3)] {
        grid.add_customer(customer.into());
    }
    grid
}
