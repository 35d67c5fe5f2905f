// grid.rs - Grid buffer types for Conway's Game of Life

/// RGB triple written to the pixel buffer for a cell.
pub type Rgb = [u8; 3];

pub const DEAD_RGB: Rgb  = [0, 0, 0];
pub const ALIVE_RGB: Rgb = [255, 255, 255];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Cell::Dead  => DEAD_RGB,
            Cell::Alive => ALIVE_RGB,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size row-major buffer of cells. Dimensions never change after `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width  : usize,
    height : usize,
    cells  : Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when signed coordinates fall inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "cell ({x}, {y}) outside {}x{} grid", self.width, self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// Off-grid positions read as dead.
    #[inline]
    pub fn get_or_dead(&self, x: i64, y: i64) -> Cell {
        if self.contains(x, y) {
            self.get(x as usize, y as usize)
        } else {
            Cell::Dead
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrites the whole buffer with `other` in one block copy.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.cells.copy_from_slice(&other.cells);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(8, 5);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.cells().len(), 40);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn set_get_is_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 1, Cell::Alive);
        assert_eq!(grid.get(3, 1), Cell::Alive);
        assert_eq!(grid.cells()[7], Cell::Alive);
        assert_eq!(grid.get(1, 2), Cell::Dead);
    }

    #[test]
    fn off_grid_reads_dead() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, Cell::Alive);
        assert_eq!(grid.get_or_dead(0, 0), Cell::Alive);
        assert_eq!(grid.get_or_dead(-1, 0), Cell::Dead);
        assert_eq!(grid.get_or_dead(0, -1), Cell::Dead);
        assert_eq!(grid.get_or_dead(3, 0), Cell::Dead);
        assert_eq!(grid.get_or_dead(0, 3), Cell::Dead);
    }

    #[test]
    fn copy_from_replaces_everything() {
        let mut a = Grid::new(5, 5);
        let mut b = Grid::new(5, 5);
        a.set(1, 1, Cell::Alive);
        b.set(4, 4, Cell::Alive);
        a.copy_from(&b);
        assert_eq!(a, b);
        assert_eq!(a.get(1, 1), Cell::Dead);
    }

    #[test]
    fn clear_kills_all() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 2, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        assert_eq!(grid.population(), 2);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn cell_colours() {
        assert_eq!(Cell::Alive.rgb(), [255, 255, 255]);
        assert_eq!(Cell::Dead.rgb(), [0, 0, 0]);
        assert_eq!(Cell::from(true), Cell::Alive);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_panics_in_debug() {
        let grid = Grid::new(2, 2);
        let _ = grid.get(2, 0);
    }
}
