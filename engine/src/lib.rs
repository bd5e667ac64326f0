//! Habitat Engine Library
//!
//! Window-system-agnostic core of the habitat table scene: the orbit camera
//! with gesture disambiguation and smoothing, the per-frame input model, and
//! viewport geometry. The game glue (drag-drop placement, viewport split,
//! UI effects) lives in `src/game/` and is mounted here.
//!
//! # Modules
//!
//! - [`camera`] - Orbit controller, gesture disambiguator, smoothing, raycast
//! - [`input`] - Platform-agnostic mouse/touch state and per-frame snapshots
//! - [`viewport`] - Screen rectangles for ownership tests and split layout
//! - [`game`] - Scene glue: drag-drop, activation, viewport split, effects
//!
//! # Example
//!
//! ```ignore
//! use habitat_engine::camera::{OrbitCameraController, OrbitConfig};
//! use habitat_engine::input::{InputSnapshot, MouseState, TouchTracker};
//! use habitat_engine::viewport::Rect;
//!
//! let mut controller = OrbitCameraController::new(OrbitConfig::default());
//! controller.set_viewport(Some(Rect::from_window(1280, 720)));
//!
//! let mut mouse = MouseState::new();
//! let mut touches = TouchTracker::new();
//!
//! // Per frame:
//! let snapshot = InputSnapshot::capture(&mouse, &touches);
//! controller.step(1.0 / 60.0, &snapshot);
//! let pose = controller.pose();
//! mouse.end_frame();
//! touches.end_frame();
//! ```

pub mod camera;
pub mod input;
pub mod viewport;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used camera types
pub use camera::{CameraPose, OrbitCameraController, OrbitConfig, ZoomDirection};
// Re-export commonly used input types
pub use input::{InputSnapshot, MouseButton, MouseState, TouchTracker};
// Re-export viewport geometry
pub use viewport::Rect;
