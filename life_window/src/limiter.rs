// limiter.rs - Caps how often the simulation ticks

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Tick now; `frame_time` is the time since the previous tick.
    Due { frame_time: Duration },
    /// Not yet; try again after this long.
    Wait(Duration),
}

pub struct FrameLimiter {
    fps       : u32,
    interval  : Duration,
    last_tick : Option<Instant>,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let mut limiter = Self { fps: 0, interval: Duration::ZERO, last_tick: None };
        limiter.set_fps(fps);
        limiter
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
        self.interval = Duration::from_secs(1) / self.fps;
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn poll(&mut self, now: Instant) -> Tick {
        match self.last_tick {
            Some(last) if now.duration_since(last) < self.interval => {
                Tick::Wait(self.interval - now.duration_since(last))
            }
            last => {
                self.last_tick = Some(now);
                Tick::Due { frame_time: last.map_or(Duration::ZERO, |l| now.duration_since(l)) }
            }
        }
    }
}
