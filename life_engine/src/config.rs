// config.rs - Build-time window and simulation settings

use crate::mode::{FrameRates, Mode};

pub const WINDOW_TITLE: &str = "Game of life";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub pixel_scale       : u32,    // Window pixels per cell edge
    pub window_width      : u32,
    pub window_height     : u32,
    pub editing_framerate : u32,
    pub running_framerate : u32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Pixel scale must be non-zero")]
    ZeroPixelScale,
    #[error("Framerate for {0} mode must be non-zero")]
    ZeroFramerate(Mode),
    #[error("Window {width}x{height} is smaller than one {scale}px cell")]
    WindowTooSmall { width: u32, height: u32, scale: u32 },
}

impl LifeConfig {
    pub const DEFAULT: LifeConfig = LifeConfig {
        pixel_scale       : 1,
        window_width      : 800,
        window_height     : 450,
        editing_framerate : 500,
        running_framerate : 500,
    };

    pub fn grid_width(&self) -> usize {
        (self.window_width / self.pixel_scale) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.window_height / self.pixel_scale) as usize
    }

    pub fn frame_rates(&self) -> FrameRates {
        FrameRates {
            editing: self.editing_framerate,
            running: self.running_framerate,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_scale == 0 {
            return Err(ConfigError::ZeroPixelScale);
        }
        if self.editing_framerate == 0 {
            return Err(ConfigError::ZeroFramerate(Mode::Editing));
        }
        if self.running_framerate == 0 {
            return Err(ConfigError::ZeroFramerate(Mode::Running));
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                scale: self.pixel_scale,
            });
        }
        Ok(())
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
