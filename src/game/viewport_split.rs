//! Viewport Split Module
//!
//! The two side-by-side camera viewports and their fullscreen toggles.
//! Expanding one side grows its rect over the whole screen and pushes the
//! other off the edge; both slides ease in and out and are driven by
//! `step(dt)`, so a toggle mid-flight simply retargets from wherever the
//! rects currently are.

use serde::{Deserialize, Serialize};

use crate::viewport::Rect;

/// Default slide duration in seconds.
const DEFAULT_TRANSITION_TIME: f32 = 0.4;

/// Settings for the split layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub transition_time: f32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            transition_time: DEFAULT_TRANSITION_TIME,
        }
    }
}

/// Which layout the viewports are in (or heading toward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitState {
    Split,
    LeftFull,
    RightFull,
}

/// Icon a fullscreen button should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Expand,
    Minimize,
}

/// In-flight slide of both viewport rects.
#[derive(Debug, Clone, Copy)]
struct Slide {
    left_from: Rect,
    left_to: Rect,
    right_from: Rect,
    right_to: Rect,
    elapsed: f32,
}

/// Controls the two normalized viewport rects and their fullscreen toggles.
#[derive(Debug)]
pub struct DualViewportController {
    left: Rect,
    right: Rect,
    left_home: Rect,
    right_home: Rect,
    state: SplitState,
    slide: Option<Slide>,
    transition_time: f32,
}

impl DualViewportController {
    /// Standard half-and-half split in normalized coordinates.
    pub fn new(config: &SplitConfig) -> Self {
        Self::with_rects(
            Rect::new(0.0, 0.0, 0.5, 1.0),
            Rect::new(0.5, 0.0, 0.5, 1.0),
            config.transition_time,
        )
    }

    pub fn with_rects(left: Rect, right: Rect, transition_time: f32) -> Self {
        Self {
            left_home: left,
            right_home: right,
            left,
            right,
            state: SplitState::Split,
            slide: None,
            transition_time: transition_time.max(0.0),
        }
    }

    /// Toggle the left viewport between fullscreen and the split layout.
    /// Ignored while the right side is fullscreen.
    pub fn toggle_left(&mut self) {
        match self.state {
            SplitState::Split => self.enter(SplitState::LeftFull),
            SplitState::LeftFull => self.enter(SplitState::Split),
            SplitState::RightFull => {}
        }
    }

    /// Toggle the right viewport between fullscreen and the split layout.
    /// Ignored while the left side is fullscreen.
    pub fn toggle_right(&mut self) {
        match self.state {
            SplitState::Split => self.enter(SplitState::RightFull),
            SplitState::RightFull => self.enter(SplitState::Split),
            SplitState::LeftFull => {}
        }
    }

    /// Jump straight back to the split layout, no animation.
    pub fn restore(&mut self) {
        self.state = SplitState::Split;
        self.slide = None;
        self.left = self.left_home;
        self.right = self.right_home;
    }

    fn enter(&mut self, state: SplitState) {
        let (left_to, right_to) = match state {
            SplitState::Split => (self.left_home, self.right_home),
            // Expanded side grows over the whole screen, the other slides
            // off its edge
            SplitState::LeftFull => (
                Rect::new(0.0, self.left_home.y, 1.0, self.left_home.height),
                self.right_home.with_x(1.0),
            ),
            SplitState::RightFull => (
                self.left_home.with_x(-self.left_home.width),
                Rect::new(0.0, self.right_home.y, 1.0, self.right_home.height),
            ),
        };
        self.state = state;
        // Retarget from the current rects, mid-flight or not
        self.slide = Some(Slide {
            left_from: self.left,
            left_to,
            right_from: self.right,
            right_to,
            elapsed: 0.0,
        });
    }

    /// Advance the slide, if one is in flight.
    pub fn step(&mut self, dt: f32) {
        let Some(mut slide) = self.slide else {
            return;
        };
        slide.elapsed += dt;

        let t = if self.transition_time <= 0.0 {
            1.0
        } else {
            (slide.elapsed / self.transition_time).clamp(0.0, 1.0)
        };
        let eased = ease_in_out_sine(t);
        self.left = lerp_rect(slide.left_from, slide.left_to, eased);
        self.right = lerp_rect(slide.right_from, slide.right_to, eased);

        self.slide = if t >= 1.0 { None } else { Some(slide) };
    }

    pub fn left_rect(&self) -> Rect {
        self.left
    }

    pub fn right_rect(&self) -> Rect {
        self.right
    }

    pub fn state(&self) -> SplitState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Whether the left fullscreen button responds right now.
    pub fn left_button_interactable(&self) -> bool {
        self.state != SplitState::RightFull
    }

    /// Whether the right fullscreen button responds right now.
    pub fn right_button_interactable(&self) -> bool {
        self.state != SplitState::LeftFull
    }

    pub fn left_icon(&self) -> FullscreenIcon {
        if self.state == SplitState::LeftFull {
            FullscreenIcon::Minimize
        } else {
            FullscreenIcon::Expand
        }
    }

    pub fn right_icon(&self) -> FullscreenIcon {
        if self.state == SplitState::RightFull {
            FullscreenIcon::Minimize
        } else {
            FullscreenIcon::Expand
        }
    }
}

fn ease_in_out_sine(t: f32) -> f32 {
    0.5 - 0.5 * (std::f32::consts::PI * t).cos()
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_rect(a: Rect, b: Rect, t: f32) -> Rect {
    Rect::new(
        lerp(a.x, b.x, t),
        lerp(a.y, b.y, t),
        lerp(a.width, b.width, t),
        lerp(a.height, b.height, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn controller() -> DualViewportController {
        DualViewportController::new(&SplitConfig::default())
    }

    fn settle(controller: &mut DualViewportController) {
        for _ in 0..60 {
            controller.step(0.016);
        }
    }

    #[test]
    fn test_initial_split() {
        let c = controller();
        assert_eq!(c.state(), SplitState::Split);
        assert_eq!(c.left_rect().x, 0.0);
        assert_eq!(c.right_rect().x, 0.5);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_left_fullscreen_covers_screen_and_evicts() {
        let mut c = controller();
        c.toggle_left();
        assert_eq!(c.state(), SplitState::LeftFull);
        assert!(c.is_animating());
        settle(&mut c);
        assert!(!c.is_animating());
        // The expanded rect spans the whole screen
        let left = c.left_rect();
        assert!((left.x - 0.0).abs() < 1e-4);
        assert!((left.width - 1.0).abs() < 1e-4);
        assert!(left.contains(Vec2::new(0.99, 0.5)));
        // The other rect is fully off the right edge
        assert!((c.right_rect().x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_right_fullscreen_covers_screen_and_evicts() {
        let mut c = controller();
        c.toggle_right();
        settle(&mut c);
        let right = c.right_rect();
        assert!((right.x - 0.0).abs() < 1e-4);
        assert!((right.width - 1.0).abs() < 1e-4);
        // Left rect slid fully off the left edge
        assert!((c.left_rect().x + 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_toggle_back_restores_split() {
        let mut c = controller();
        c.toggle_left();
        settle(&mut c);
        c.toggle_left();
        settle(&mut c);
        assert_eq!(c.state(), SplitState::Split);
        assert!((c.left_rect().x - 0.0).abs() < 1e-4);
        assert!((c.left_rect().width - 0.5).abs() < 1e-4);
        assert!((c.right_rect().x - 0.5).abs() < 1e-4);
        assert!((c.right_rect().width - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_other_button_locked_while_fullscreen() {
        let mut c = controller();
        c.toggle_left();
        settle(&mut c);
        assert!(!c.right_button_interactable());
        assert!(c.left_button_interactable());

        // The locked toggle does nothing
        c.toggle_right();
        assert_eq!(c.state(), SplitState::LeftFull);
    }

    #[test]
    fn test_icons_follow_state() {
        let mut c = controller();
        assert_eq!(c.left_icon(), FullscreenIcon::Expand);
        c.toggle_left();
        assert_eq!(c.left_icon(), FullscreenIcon::Minimize);
        assert_eq!(c.right_icon(), FullscreenIcon::Expand);
    }

    #[test]
    fn test_midflight_toggle_retargets_from_current() {
        let mut c = controller();
        c.toggle_left();
        c.step(0.1); // partway there
        let mid_width = c.left_rect().width;
        assert!(mid_width > 0.5 && mid_width < 1.0);

        c.toggle_left(); // head back before arriving
        c.step(0.016);
        assert!(c.left_rect().width <= mid_width + 1e-4);
        settle(&mut c);
        assert!((c.left_rect().width - 0.5).abs() < 1e-4);
        assert!((c.left_rect().x - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_restore_is_instant() {
        let mut c = controller();
        c.toggle_right();
        c.step(0.1);
        c.restore();
        assert_eq!(c.state(), SplitState::Split);
        assert!(!c.is_animating());
        assert_eq!(c.left_rect().x, 0.0);
        assert_eq!(c.right_rect().x, 0.5);
        assert_eq!(c.right_rect().width, 0.5);
    }

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_in_out_sine(0.0).abs() < 1e-6);
        assert!((ease_in_out_sine(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-6);
    }
}
