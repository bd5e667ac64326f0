//! Gesture Disambiguation Module
//!
//! Decides, once per frame, whether the current touch set means "rotate"
//! or "pinch zoom". A short debounce window after the first finger lands
//! keeps a slightly-staggered two-finger pinch from producing one frame of
//! spurious rotation. A second finger arriving cancels the window and pinch
//! processing runs the same frame.

use crate::input::{TouchPhase, TouchSample};
use crate::viewport::Rect;

/// What the touch set asks of the camera this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    /// Nothing actionable (no touches, debouncing, UI-claimed, or off-viewport).
    None,
    /// One-finger drag, in pixels.
    Rotate { dx: f32, dy: f32 },
    /// Two-finger pinch: change in finger separation since last frame,
    /// in pixels (positive = spreading apart).
    Pinch { dist_delta: f32 },
}

/// Per-camera touch-count state machine.
#[derive(Debug, Clone)]
pub struct GestureDisambiguator {
    /// Time until which single-touch rotation stays locked out.
    lock_end: f32,
    prev_touch_count: usize,
    /// Id of the finger that armed the debounce window.
    armed_touch_id: Option<u64>,
    /// Debounce window length in seconds.
    multi_touch_delay: f32,
}

impl GestureDisambiguator {
    pub fn new(multi_touch_delay: f32) -> Self {
        Self {
            lock_end: 0.0,
            prev_touch_count: 0,
            armed_touch_id: None,
            multi_touch_delay,
        }
    }

    pub fn set_multi_touch_delay(&mut self, delay: f32) {
        self.multi_touch_delay = delay.max(0.0);
    }

    /// Evaluate the frame's touch set and return the resulting intent.
    ///
    /// `now` is the controller's accumulated time; `viewport` is the pixel
    /// rect owning this camera. Ownership is decided by the gating finger's
    /// position, and UI-claimed fingers contribute nothing.
    pub fn update(&mut self, now: f32, touches: &[TouchSample], viewport: Rect) -> GestureIntent {
        let count = touches.len();

        match count {
            0 => {
                self.lock_end = 0.0;
                self.armed_touch_id = None;
            }
            1 => {
                let touch = &touches[0];
                if self.prev_touch_count == 0 {
                    // First finger down: arm the debounce window
                    self.lock_end = now + self.multi_touch_delay;
                    self.armed_touch_id = Some(touch.id);
                } else if self.armed_touch_id != Some(touch.id) {
                    // Single finger replaced by a different one: re-arm
                    self.lock_end = now + self.multi_touch_delay;
                    self.armed_touch_id = Some(touch.id);
                }
            }
            _ => {
                // Second finger arrived: cancel the window so the pinch
                // runs this same frame
                self.lock_end = now;
                self.armed_touch_id = None;
            }
        }
        self.prev_touch_count = count;

        match count {
            1 => self.single_touch_intent(now, &touches[0], viewport),
            n if n >= 2 => self.pinch_intent(touches, viewport),
            _ => GestureIntent::None,
        }
    }

    fn single_touch_intent(
        &self,
        now: f32,
        touch: &TouchSample,
        viewport: Rect,
    ) -> GestureIntent {
        if !viewport.contains(touch.position) {
            return GestureIntent::None;
        }
        if touch.over_ui {
            return GestureIntent::None;
        }
        if now < self.lock_end {
            return GestureIntent::None;
        }
        if touch.phase != TouchPhase::Moved {
            return GestureIntent::None;
        }
        GestureIntent::Rotate {
            dx: touch.delta.x,
            dy: touch.delta.y,
        }
    }

    fn pinch_intent(&self, touches: &[TouchSample], viewport: Rect) -> GestureIntent {
        // First two enumeration-order fingers over this viewport and not
        // claimed by UI
        let mut pair: [Option<&TouchSample>; 2] = [None, None];
        let mut found = 0;
        for touch in touches {
            if touch.over_ui || !viewport.contains(touch.position) {
                continue;
            }
            pair[found] = Some(touch);
            found += 1;
            if found == 2 {
                break;
            }
        }
        let (Some(a), Some(b)) = (pair[0], pair[1]) else {
            return GestureIntent::None;
        };

        let prev_dist = prev_distance(a, b);
        let curr_dist = a.position.distance(b.position);
        GestureIntent::Pinch {
            dist_delta: curr_dist - prev_dist,
        }
    }
}

fn prev_distance(a: &TouchSample, b: &TouchSample) -> f32 {
    a.previous_position().distance(b.previous_position())
}
