// ui.rs - eframe front end: input translation, tick pacing, texture output

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, TextureHandle, TextureOptions};
use life_engine::{ConfigError, GameOfLife, Host, InputEvent, Key, LifeConfig, MouseButton, PixelData};

use crate::limiter::{FrameLimiter, Tick};

/// Focus flag and frame cap as seen by the simulation.
pub struct WindowHost {
    focused : bool,
    limiter : FrameLimiter,
}

impl Host for WindowHost {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_framerate_limit(&mut self, fps: u32) {
        self.limiter.set_fps(fps);
        log::debug!("frame cap now {} fps", self.limiter.fps());
    }
}

pub struct PixelWindow {
    game    : GameOfLife,
    host    : WindowHost,
    pixels  : PixelData,
    texture : Option<TextureHandle>,
}

impl PixelWindow {
    pub fn new(config: LifeConfig) -> Result<Self, ConfigError> {
        let mut host = WindowHost {
            focused : true,
            limiter : FrameLimiter::new(config.editing_framerate),
        };
        let game = GameOfLife::on_load(config, &mut host)?;
        let pixels = PixelData::new(config.grid_width(), config.grid_height());

        Ok(Self { game, host, pixels, texture: None })
    }

    fn upload(&mut self, ctx: &egui::Context) {
        let image = egui::ColorImage::from_rgb(self.pixels.size(), self.pixels.raw());
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("life-frame", image, TextureOptions::NEAREST)),
        }
    }
}

impl eframe::App for PixelWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (events, focused) = ctx.input(|i| (i.events.clone(), i.focused));
        self.host.focused = focused;

        egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;

            for event in &events {
                if let Some(event) = translate(event, rect, self.game.config()) {
                    self.game.handle_event(event, &mut self.host);
                }
            }

            match self.host.limiter.poll(Instant::now()) {
                Tick::Due { frame_time } => {
                    if self.game.tick(&mut self.pixels, frame_time.as_secs_f32(), &self.host) {
                        self.upload(ctx);
                    }
                    ctx.request_repaint_after(self.host.limiter.interval());
                }
                Tick::Wait(remaining) => ctx.request_repaint_after(remaining),
            }

            if let Some(texture) = &self.texture {
                let uv = Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
        });
    }
}

/// Maps an egui event to the simulation's vocabulary. Pointer positions are
/// rescaled from the painted area to window pixels.
pub fn translate(event: &egui::Event, rect: Rect, config: &LifeConfig) -> Option<InputEvent> {
    match event {
        egui::Event::Key { key, pressed: false, .. } => Some(InputEvent::KeyReleased(map_key(*key))),
        egui::Event::PointerButton { button, pressed, .. } => {
            let button = map_button(*button)?;
            Some(if *pressed {
                InputEvent::ButtonPressed(button)
            } else {
                InputEvent::ButtonReleased(button)
            })
        }
        egui::Event::PointerMoved(pos) => {
            let x = (pos.x - rect.min.x) * config.window_width as f32 / rect.width();
            let y = (pos.y - rect.min.y) * config.window_height as f32 / rect.height();
            Some(InputEvent::PointerMoved { x, y })
        }
        _ => None,
    }
}

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary   => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        _                              => None,
    }
}

fn map_key(key: egui::Key) -> Key {
    use egui::Key as K;
    match key {
        K::Enter                 => Key::Enter,
        K::Delete | K::Backspace => Key::Delete,
        K::R                     => Key::R,
        K::Num1                  => Key::Digit(1),
        K::Num2                  => Key::Digit(2),
        K::Num3                  => Key::Digit(3),
        K::Num4                  => Key::Digit(4),
        K::Num5                  => Key::Digit(5),
        K::Num6                  => Key::Digit(6),
        K::Num7                  => Key::Digit(7),
        _                        => Key::Other,
    }
}
