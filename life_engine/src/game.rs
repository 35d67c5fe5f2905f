// game.rs - Double-buffered simulation driven by the window's hooks

use log::{debug, info, trace};

use crate::config::{ConfigError, LifeConfig};
use crate::edit::PointerState;
use crate::grid::Grid;
use crate::input::{InputEvent, Key};
use crate::mode::Mode;
use crate::patterns::{self, PATTERNS};
use crate::pixels::PixelData;
use crate::rules;

/// The window side of the simulation: focus reporting and the frame cap.
pub trait Host {
    fn has_focus(&self) -> bool;
    fn set_framerate_limit(&mut self, fps: u32);
}

/// Game state. `current` is the generation entering a tick, `next` the one
/// being produced (by the rule in running mode, by the mouse in editing mode).
pub struct GameOfLife {
    config     : LifeConfig,
    current    : Grid,
    next       : Grid,
    mode       : Mode,
    pointer    : PointerState,
    generation : u64,
    stepped    : bool,    // `next` holds an unpublished generation
    soups      : u64,
}

impl GameOfLife {
    /// Allocates both buffers and applies the editing framerate.
    pub fn on_load(config: LifeConfig, host: &mut dyn Host) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = (config.grid_width(), config.grid_height());

        info!(
            "loaded {}x{} grid (scale {}, editing {} fps, running {} fps)",
            width, height, config.pixel_scale, config.editing_framerate, config.running_framerate
        );
        host.set_framerate_limit(config.frame_rates().for_mode(Mode::Editing));

        Ok(Self {
            config,
            current    : Grid::new(width, height),
            next       : Grid::new(width, height),
            mode       : Mode::Editing,
            pointer    : PointerState::default(),
            generation : 0,
            stepped    : false,
            soups      : 0,
        })
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn next(&self) -> &Grid {
        &self.next
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle_event(&mut self, event: InputEvent, host: &mut dyn Host) {
        match event {
            InputEvent::KeyReleased(Key::Enter) => self.toggle_mode(host),
            InputEvent::KeyReleased(key)        => self.edit_key(key),
            InputEvent::ButtonPressed(button)   => self.pointer.press(button),
            InputEvent::ButtonReleased(button)  => self.pointer.release(button),
            InputEvent::PointerMoved { x, y }   => {
                if self.mode.is_editing() {
                    self.pointer.moved(&self.config, x, y, &mut self.next);
                }
            }
        }
    }

    pub fn toggle_mode(&mut self, host: &mut dyn Host) {
        self.mode = self.mode.toggled();
        let fps = self.config.frame_rates().for_mode(self.mode);
        host.set_framerate_limit(fps);
        info!(
            "{} at generation {} ({} fps, population {})",
            self.mode, self.generation, fps, self.next.population()
        );
    }

    fn edit_key(&mut self, key: Key) {
        if !self.mode.is_editing() {
            return;
        }
        match key {
            Key::Delete => {
                self.next.clear();
                self.generation = 0;
                debug!("grid cleared");
            }
            Key::R => {
                self.soups += 1;
                patterns::random_soup(&mut self.next, self.generation ^ (self.soups << 32));
                debug!("random soup, population {}", self.next.population());
            }
            Key::Digit(n) => {
                let pattern = (n as usize).checked_sub(1).and_then(|i| PATTERNS.get(i));
                if let (Some(pattern), Some((x, y))) = (pattern, self.pointer.cell) {
                    patterns::stamp(&mut self.next, pattern, x, y);
                    debug!("stamped {} at ({x}, {y})", pattern.name);
                }
            }
            Key::Enter | Key::Other => {}
        }
    }

    /// Runs the rule while running; edits already in `next` stand while editing.
    pub fn update(&mut self, _frame_time: f32) {
        if self.mode.is_editing() {
            return;
        }
        rules::step(&self.current, &mut self.next);
        self.stepped = true;
    }

    pub fn fixed_update(&mut self, _time_step: f32) {}

    /// Publishes `next` and makes it the new `current`. Does nothing while
    /// the window is unfocused. Returns whether a frame was published.
    pub fn render(&mut self, pixels: &mut PixelData, _frame_time: f32, host: &dyn Host) -> bool {
        if !host.has_focus() {
            return false;
        }
        pixels.copy_from_grid(&self.next);
        self.current.copy_from(&self.next);

        if self.stepped {
            self.stepped = false;
            self.generation += 1;
            trace!("generation {}", self.generation);
        }
        true
    }

    /// One frame: the three per-tick hooks in order.
    pub fn tick(&mut self, pixels: &mut PixelData, frame_time: f32, host: &dyn Host) -> bool {
        self.update(frame_time);
        self.fixed_update(frame_time);
        self.render(pixels, frame_time, host)
    }
}
