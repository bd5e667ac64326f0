//! Mouse Input Module
//!
//! Pointer state sampled by the host each frame: position, buttons, scroll
//! wheel, and whether a UI element currently claims the pointer.
//! Decoupled from winit to use generic types.

use glam::Vec2;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of the buttons the orbit controller cares about.
///
/// `primary` drags rotate the camera; `secondary` is the optional
/// modifier button some configurations require to be held alongside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub primary: bool,
    pub secondary: bool,
}

impl ButtonState {
    /// Create a new button state with all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update button state for a specific button. Left maps to primary,
    /// right to secondary; other buttons are ignored.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.primary = pressed,
            MouseButton::Right => self.secondary = pressed,
            MouseButton::Middle | MouseButton::Other(_) => {}
        }
    }

    /// Check if any tracked button is pressed.
    pub fn any_pressed(&self) -> bool {
        self.primary || self.secondary
    }

    /// Reset all buttons to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Scroll wheel delta, can be line-based or pixel-based.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollDelta {
    /// Horizontal scroll (positive = right)
    pub x: f32,
    /// Vertical scroll (positive = up/forward)
    pub y: f32,
}

impl ScrollDelta {
    /// Create a new scroll delta.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create from line delta (common for mouse wheels).
    pub fn from_lines(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create from pixel delta (common for trackpads).
    /// Normalizes by dividing by 100 to get approximate line equivalents.
    pub fn from_pixels(x: f64, y: f64) -> Self {
        Self {
            x: (x / 100.0) as f32,
            y: (y / 100.0) as f32,
        }
    }

    /// Check if there's any scroll movement.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Complete pointer state for one frame.
///
/// Positions are in window pixels with a bottom-left origin so they can be
/// tested directly against camera viewport rects. The host accumulates
/// events into this between frames and calls [`MouseState::end_frame`]
/// after the controller step consumed the snapshot.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Current pointer position in pixels, `None` while outside the window.
    pub position: Option<Vec2>,

    /// Position at the previous update, for delta calculations.
    pub last_position: Option<Vec2>,

    /// Current button states.
    pub buttons: ButtonState,

    /// Scroll accumulated since the last frame.
    pub scroll: ScrollDelta,

    /// Whether a UI element currently claims the pointer. While set, the
    /// orbit controller ignores drags and scroll at this position.
    pub over_ui: bool,
}

impl MouseState {
    /// Create a new mouse state with no position and all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update pointer position from raw window coordinates (origin at top).
    pub fn set_position(&mut self, x: f64, y: f64, window_height: u32) {
        self.last_position = self.position;
        // Flip Y so the position matches viewport rects (bottom-left origin)
        self.position = Some(Vec2::new(x as f32, window_height as f32 - y as f32));
    }

    /// Pointer movement since the previous update, in pixels.
    /// `None` until two positions have been seen.
    pub fn delta(&self) -> Option<Vec2> {
        match (self.position, self.last_position) {
            (Some(current), Some(last)) => Some(current - last),
            _ => None,
        }
    }

    /// Handle a mouse button press/release event.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button, pressed);

        // Drop the stale previous position when the drag button releases so
        // the next press does not see a jump-sized delta
        if !pressed && matches!(button, MouseButton::Left) {
            self.last_position = None;
        }
    }

    /// Accumulate a scroll wheel event.
    pub fn add_scroll(&mut self, delta: ScrollDelta) {
        self.scroll.x += delta.x;
        self.scroll.y += delta.y;
    }

    /// Handle the pointer leaving the window.
    pub fn leave_window(&mut self) {
        self.position = None;
        self.last_position = None;
        self.over_ui = false;
    }

    /// End-of-frame bookkeeping: the current position becomes the delta
    /// baseline and the consumed scroll is cleared.
    pub fn end_frame(&mut self) {
        self.last_position = self.position;
        self.scroll = ScrollDelta::default();
    }

    /// Reset all mouse state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
