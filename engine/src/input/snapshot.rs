//! Input Snapshot Module
//!
//! The per-frame input bundle handed to the orbit controller. The host
//! assembles one snapshot per frame from the accumulated mouse and touch
//! state; the controller only ever reads it.

use super::mouse::MouseState;
use super::touch::{TouchSample, TouchTracker};

/// Everything the camera controller may consult in one frame.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub mouse: MouseState,
    pub touches: Vec<TouchSample>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the frame's snapshot from the host's accumulated state.
    pub fn capture(mouse: &MouseState, touches: &TouchTracker) -> Self {
        Self {
            mouse: mouse.clone(),
            touches: touches.samples(),
        }
    }

    /// Touch input takes priority over the mouse whenever any finger is down.
    pub fn has_touches(&self) -> bool {
        !self.touches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_capture_copies_current_state() {
        let mut mouse = MouseState::new();
        mouse.set_position(10.0, 10.0, 100);
        let mut tracker = TouchTracker::new();
        tracker.begin(1, Vec2::new(5.0, 5.0), false);

        let snapshot = InputSnapshot::capture(&mouse, &tracker);
        assert!(snapshot.mouse.position.is_some());
        assert!(snapshot.has_touches());
        assert_eq!(snapshot.touches[0].id, 1);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = InputSnapshot::new();
        assert!(!snapshot.has_touches());
        assert!(snapshot.mouse.position.is_none());
    }
}
