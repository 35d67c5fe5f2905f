//! Conway's Game of Life on a fixed grid with absorbing edges, edited with the
//! mouse and run at the press of a key. The window layer feeds `InputEvent`s
//! and calls the per-frame hooks on `GameOfLife`.

pub mod config;
pub mod edit;
pub mod game;
pub mod grid;
pub mod input;
pub mod mode;
pub mod patterns;
pub mod pixels;
pub mod rules;

pub use config::{ConfigError, LifeConfig, WINDOW_TITLE};
pub use game::{GameOfLife, Host};
pub use grid::{Cell, Grid};
pub use input::{InputEvent, Key, MouseButton};
pub use mode::{FrameRates, Mode};
pub use pixels::PixelData;
