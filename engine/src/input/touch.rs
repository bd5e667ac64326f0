//! Touch Input Module
//!
//! Touch tracking for the orbit camera's one-finger rotate and two-finger
//! pinch gestures. The host feeds raw touch events in, and the tracker
//! maintains per-finger samples with frame deltas and lifecycle phases.
//! Decoupled from winit to use generic types.

use std::collections::BTreeMap;

use glam::Vec2;

/// Lifecycle phase of a touch within the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger made contact this frame.
    Began,
    /// Finger moved since the previous frame.
    Moved,
    /// Finger is down but has not moved this frame.
    Stationary,
    /// Finger lifted this frame.
    Ended,
    /// Touch was cancelled by the system this frame.
    Cancelled,
}

/// One finger's state for the current frame.
///
/// `position` is in window pixels (bottom-left origin, same space as
/// viewport rects); `position - delta` recovers the previous frame's
/// position, which the pinch handler relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    pub id: u64,
    pub position: Vec2,
    pub delta: Vec2,
    pub phase: TouchPhase,
    /// Whether a UI element claims this touch; claimed touches never
    /// rotate or pinch the camera.
    pub over_ui: bool,
}

impl TouchSample {
    /// The finger's position on the previous frame.
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Tracks live touches across frames and produces per-frame samples.
///
/// A `BTreeMap` keyed on touch id keeps enumeration order stable, so "the
/// first two touches" means the same pair from frame to frame while both
/// stay down.
#[derive(Debug, Default)]
pub struct TouchTracker {
    touches: BTreeMap<u64, TouchSample>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new finger contact.
    pub fn begin(&mut self, id: u64, position: Vec2, over_ui: bool) {
        self.touches.insert(
            id,
            TouchSample {
                id,
                position,
                delta: Vec2::ZERO,
                phase: TouchPhase::Began,
                over_ui,
            },
        );
    }

    /// Update a finger's position. Unknown ids are ignored.
    pub fn moved(&mut self, id: u64, position: Vec2) {
        if let Some(touch) = self.touches.get_mut(&id) {
            touch.delta += position - touch.position;
            touch.position = position;
            if touch.phase != TouchPhase::Began {
                touch.phase = TouchPhase::Moved;
            }
        }
    }

    /// Mark a finger as lifted; it is removed at end of frame.
    pub fn end(&mut self, id: u64) {
        if let Some(touch) = self.touches.get_mut(&id) {
            touch.phase = TouchPhase::Ended;
        }
    }

    /// Mark a finger as cancelled; it is removed at end of frame.
    pub fn cancel(&mut self, id: u64) {
        if let Some(touch) = self.touches.get_mut(&id) {
            touch.phase = TouchPhase::Cancelled;
        }
    }

    /// Update the UI-claim flag for a finger.
    pub fn set_over_ui(&mut self, id: u64, over_ui: bool) {
        if let Some(touch) = self.touches.get_mut(&id) {
            touch.over_ui = over_ui;
        }
    }

    /// Current samples in stable id order.
    pub fn samples(&self) -> Vec<TouchSample> {
        self.touches.values().copied().collect()
    }

    /// Number of live touches.
    pub fn count(&self) -> usize {
        self.touches.len()
    }

    /// End-of-frame bookkeeping: ended/cancelled fingers are dropped,
    /// survivors reset their delta and settle to `Stationary`.
    pub fn end_frame(&mut self) {
        self.touches.retain(|_, touch| {
            !matches!(touch.phase, TouchPhase::Ended | TouchPhase::Cancelled)
        });
        for touch in self.touches.values_mut() {
            touch.delta = Vec2::ZERO;
            touch.phase = TouchPhase::Stationary;
        }
    }

    /// Drop all touches (window focus loss).
    pub fn clear(&mut self) {
        self.touches.clear();
    }
}
