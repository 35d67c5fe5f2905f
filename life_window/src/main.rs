// main.rs - Pixel window for Conway's Game of Life
// Enter toggles editing/running. While editing: left drag paints, right drag
// erases, 1-7 stamp a pattern at the cursor, R seeds a soup, Delete clears.

use eframe::egui;
use life_engine::{LifeConfig, WINDOW_TITLE};

mod limiter;
mod ui;

use ui::PixelWindow;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = LifeConfig::DEFAULT;
    let app = match PixelWindow::new(config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}
