//! Game Module
//!
//! Contains scene-specific systems that build on top of the engine: the
//! placement exercise (drag-drop, activation, audio cues), the dual
//! viewport layout, button feedback, billboards, and configuration.

pub mod activation;
pub mod audio;
pub mod billboard;
pub mod config;
pub mod drag_drop;
pub mod ui_effects;
pub mod viewport_split;

pub use activation::{ActivationManager, Slot, SlotState};
pub use audio::{AudioCue, AudioDirector};
pub use billboard::face_camera;
pub use config::{ActivationConfig, ConfigError, SceneConfig};
pub use drag_drop::{DragItem, DropOutcome};
pub use ui_effects::{HoverClickConfig, HoverClickEffect};
pub use viewport_split::{DualViewportController, FullscreenIcon, SplitConfig, SplitState};
