// edit.rs - Mouse painting into the next generation while editing

use crate::config::LifeConfig;
use crate::grid::{Cell, Grid};
use crate::input::MouseButton;

/// Button flags and the last in-bounds cursor cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    pub left  : bool,
    pub right : bool,
    pub cell  : Option<(usize, usize)>,
}

impl PointerState {
    pub fn press(&mut self, button: MouseButton) {
        self.set_held(button, true);
    }

    pub fn release(&mut self, button: MouseButton) {
        self.set_held(button, false);
    }

    fn set_held(&mut self, button: MouseButton, held: bool) {
        match button {
            MouseButton::Left  => self.left = held,
            MouseButton::Right => self.right = held,
        }
    }

    /// Cell the held buttons paint with. Left wins when both are down.
    pub fn brush(&self) -> Option<Cell> {
        if self.left {
            Some(Cell::Alive)
        } else if self.right {
            Some(Cell::Dead)
        } else {
            None
        }
    }

    /// Records a cursor move and paints the cell under it, if any button is held.
    /// Positions outside the window are ignored entirely.
    pub fn moved(&mut self, config: &LifeConfig, x: f32, y: f32, next: &mut Grid) {
        let Some((cx, cy)) = cell_at(config, x, y) else { return };
        self.cell = Some((cx, cy));

        if let Some(cell) = self.brush() {
            next.set(cx, cy, cell);
        }
    }
}

/// Maps a window-space pixel position to grid coordinates.
pub fn cell_at(config: &LifeConfig, x: f32, y: f32) -> Option<(usize, usize)> {
    if !(x >= 0.0 && y >= 0.0) {
        return None;                                       // also rejects NaN
    }
    let (px, py) = (x as u64, y as u64);
    if px >= config.window_width as u64 || py >= config.window_height as u64 {
        return None;
    }

    let scale = config.pixel_scale as u64;
    let (cx, cy) = ((px / scale) as usize, (py / scale) as usize);
    (cx < config.grid_width() && cy < config.grid_height()).then_some((cx, cy))
}
