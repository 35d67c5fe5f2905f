// input.rs - Input events delivered by the window layer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Keys the simulation reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,                // Mode toggle
    Delete,               // Clear the grid
    R,                    // Random soup
    Digit(u8),            // Stamp pattern `n - 1`
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyReleased(Key),
    ButtonPressed(MouseButton),
    ButtonReleased(MouseButton),
    /// Absolute cursor position in window pixels.
    PointerMoved { x: f32, y: f32 },
}
