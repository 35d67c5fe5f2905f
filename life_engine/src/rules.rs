// rules.rs - Conway's transition rule over a pair of grids

use crate::grid::{Cell, Grid};

/// Relative positions of the eight neighbours.
const NEIGHBOURS: [(i64, i64); 8] = [
    ( 0, -1), ( 0, 1), ( 1, 0), (-1, 0),      // up, down, right, left
    (-1, -1), ( 1, -1), (-1, 1), ( 1, 1),     // up-left, up-right, down-left, down-right
];

/// Number of alive cells around (x, y). Off-grid neighbours count as dead.
pub fn alive_neighbours(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as i64, y as i64);
    NEIGHBOURS
        .iter()
        .filter(|&&(dx, dy)| grid.get_or_dead(x + dx, y + dy).is_alive())
        .count() as u8
}

/// Next state for a cell given its current state and live neighbour count.
pub fn next_state(current: Cell, alive_neighbours: u8) -> Cell {
    match alive_neighbours {
        0..=1 => Cell::Dead,     // Underpopulation
        2     => current,        // Unchanged
        3     => Cell::Alive,    // Survival or birth
        _     => Cell::Dead,     // Overpopulation
    }
}

/// Computes one generation: reads only `current`, writes every cell of `next`.
pub fn step(current: &Grid, next: &mut Grid) {
    debug_assert_eq!((current.width(), current.height()), (next.width(), next.height()));

    for y in 0..current.height() {
        for x in 0..current.width() {
            let count = alive_neighbours(current, x, y);
            next.set(x, y, next_state(current.get(x, y), count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y).is_alive() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn rule_table() {
        for current in [Cell::Dead, Cell::Alive] {
            assert_eq!(next_state(current, 0), Cell::Dead);
            assert_eq!(next_state(current, 1), Cell::Dead);
            assert_eq!(next_state(current, 2), current);
            assert_eq!(next_state(current, 3), Cell::Alive);
            for n in 4..=8 {
                assert_eq!(next_state(current, n), Cell::Dead);
            }
        }
    }

    #[test]
    fn counts_all_eight_neighbours() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(alive_neighbours(&grid, 1, 1), 8);
        assert_eq!(alive_neighbours(&grid, 0, 0), 3);
        assert_eq!(alive_neighbours(&grid, 1, 0), 5);
    }

    #[test]
    fn lone_corners_die() {
        let current = grid_with(5, 4, &[(0, 0), (4, 0), (0, 3), (4, 3)]);
        let mut next = Grid::new(5, 4);
        for &(x, y) in &[(0, 0), (4, 0), (0, 3), (4, 3)] {
            assert_eq!(alive_neighbours(&current, x, y), 0);
        }
        step(&current, &mut next);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let mut current = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let mut next = Grid::new(6, 6);
        for _ in 0..5 {
            step(&current, &mut next);
            assert_eq!(next, current);
            current.copy_from(&next);
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut next = Grid::new(5, 5);

        step(&horizontal, &mut next);
        assert_eq!(alive_cells(&next), vec![(2, 1), (2, 2), (2, 3)]);

        let vertical = next.clone();
        step(&vertical, &mut next);
        assert_eq!(next, horizontal);
    }

    #[test]
    fn step_overwrites_stale_next() {
        let current = Grid::new(4, 4);
        let mut next = grid_with(4, 4, &[(0, 0), (3, 3)]);
        step(&current, &mut next);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn blinker_against_edge_is_absorbed() {
        // Vertical blinker on the left edge loses the off-grid births.
        let current = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        let mut next = Grid::new(3, 3);
        step(&current, &mut next);
        assert_eq!(alive_cells(&next), vec![(0, 1), (1, 1)]);
    }
}
