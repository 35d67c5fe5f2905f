// pixels.rs - RGB frame handed to the renderer

use crate::grid::{Grid, Rgb};

/// Tightly packed RGB8 rows, one pixel per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelData {
    width  : usize,
    height : usize,
    raw    : Vec<u8>,
}

impl PixelData {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, raw: vec![0; width * height * 3] }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 3;
        [self.raw[i], self.raw[i + 1], self.raw[i + 2]]
    }

    /// Replaces the whole frame with the colours of `grid`.
    pub fn copy_from_grid(&mut self, grid: &Grid) {
        debug_assert_eq!(self.size(), [grid.width(), grid.height()]);
        for (dst, cell) in self.raw.chunks_exact_mut(3).zip(grid.cells()) {
            dst.copy_from_slice(&cell.rgb());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, ALIVE_RGB, DEAD_RGB};

    #[test]
    fn frame_mirrors_grid() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, Cell::Alive);
        let mut pixels = PixelData::new(3, 2);
        pixels.copy_from_grid(&grid);

        assert_eq!(pixels.raw().len(), 18);
        assert_eq!(pixels.pixel(2, 1), ALIVE_RGB);
        assert_eq!(pixels.pixel(0, 0), DEAD_RGB);
        assert_eq!(&pixels.raw()[15..18], &[255, 255, 255]);
    }

    #[test]
    fn dead_cells_overwrite_old_frame() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Alive);
        let mut pixels = PixelData::new(2, 2);
        pixels.copy_from_grid(&grid);
        grid.clear();
        pixels.copy_from_grid(&grid);
        assert!(pixels.raw().iter().all(|&b| b == 0));
    }
}
