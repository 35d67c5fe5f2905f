// mode.rs - Editing/Running toggle and the per-mode framerate

use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Editing,
    Running,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Editing => Mode::Running,
            Mode::Running => Mode::Editing,
        }
    }

    pub fn is_editing(self) -> bool {
        self == Mode::Editing
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Editing => f.write_str("editing"),
            Mode::Running => f.write_str("running"),
        }
    }
}

/// Framerate cap for each mode, in frames per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRates {
    pub editing : u32,
    pub running : u32,
}

impl FrameRates {
    pub fn for_mode(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Editing => self.editing,
            Mode::Running => self.running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_editing() {
        assert_eq!(Mode::default(), Mode::Editing);
    }

    #[test]
    fn toggle_flips_and_pairs_cancel() {
        assert_eq!(Mode::Editing.toggled(), Mode::Running);
        assert_eq!(Mode::Running.toggled(), Mode::Editing);
        assert_eq!(Mode::Running.toggled().toggled(), Mode::Running);
    }

    #[test]
    fn rate_follows_mode() {
        let rates = FrameRates { editing: 30, running: 500 };
        assert_eq!(rates.for_mode(Mode::Editing), 30);
        assert_eq!(rates.for_mode(Mode::Running), 500);
    }
}
