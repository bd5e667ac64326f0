//! Input Module
//!
//! Provides platform-agnostic input handling for mouse and touch.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use habitat_engine::input::{InputSnapshot, MouseButton, MouseState, TouchTracker};
//!
//! let mut mouse = MouseState::new();
//! let mut touches = TouchTracker::new();
//!
//! // Accumulate events between frames
//! mouse.set_position(100.0, 50.0, 600);
//! mouse.set_button(MouseButton::Left, true);
//!
//! // Once per frame: hand a snapshot to the camera controller
//! let snapshot = InputSnapshot::capture(&mouse, &touches);
//! // controller.step(dt, &snapshot);
//! mouse.end_frame();
//! touches.end_frame();
//! ```

pub mod mouse;
pub mod snapshot;
pub mod touch;

// Re-export commonly used types at module level
pub use mouse::{ButtonState, MouseButton, MouseState, ScrollDelta};
pub use snapshot::InputSnapshot;
pub use touch::{TouchPhase, TouchSample, TouchTracker};
