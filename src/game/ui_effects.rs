//! UI Effects Module
//!
//! Hover and click feedback for scene buttons: a gentle scale-up while the
//! pointer hovers and a quick pulse on click, both eased with smoothstep
//! and advanced by `step(dt)`. Buttons marked non-interactable stay at
//! their base scale.

use serde::{Deserialize, Serialize};

/// Tunables for the hover/click feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverClickConfig {
    /// Scale while hovered.
    pub hover_scale: f32,
    /// Seconds to reach the hover scale.
    pub hover_time: f32,
    /// Peak scale of the click pulse.
    pub click_scale: f32,
    /// Total seconds of the click pulse (up and back).
    pub click_time: f32,
    /// Play the click pulse even on non-interactable buttons.
    pub click_always_plays: bool,
}

impl Default for HoverClickConfig {
    fn default() -> Self {
        Self {
            hover_scale: 1.08,
            hover_time: 0.12,
            click_scale: 1.15,
            click_time: 0.18,
            click_always_plays: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Anim {
    Idle,
    /// Easing toward a hover target scale.
    Hover { from: f32, to: f32, elapsed: f32 },
    /// Click pulse: up for half the time, back for the other half.
    Pulse { from: f32, elapsed: f32 },
}

/// Per-button effect state.
#[derive(Debug)]
pub struct HoverClickEffect {
    config: HoverClickConfig,
    scale: f32,
    hovered: bool,
    interactable: bool,
    anim: Anim,
}

impl HoverClickEffect {
    pub fn new(config: HoverClickConfig) -> Self {
        Self {
            config,
            scale: 1.0,
            hovered: false,
            interactable: true,
            anim: Anim::Idle,
        }
    }

    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
        if !interactable {
            // Snap back, no feedback on a dead button
            self.hovered = false;
            self.anim = Anim::Idle;
            self.scale = 1.0;
        }
    }

    /// Pointer entered the button.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.interactable {
            self.anim = Anim::Hover {
                from: self.scale,
                to: self.config.hover_scale,
                elapsed: 0.0,
            };
        }
    }

    /// Pointer left the button.
    pub fn pointer_exit(&mut self) {
        self.hovered = false;
        if self.interactable {
            self.anim = Anim::Hover {
                from: self.scale,
                to: 1.0,
                elapsed: 0.0,
            };
        }
    }

    /// Button was clicked; starts the pulse when allowed.
    pub fn click(&mut self) {
        if self.interactable || self.config.click_always_plays {
            self.anim = Anim::Pulse {
                from: self.scale,
                elapsed: 0.0,
            };
        }
    }

    /// Advance the animation and return the scale to render with.
    pub fn step(&mut self, dt: f32) -> f32 {
        match self.anim {
            Anim::Idle => {}
            Anim::Hover { from, to, elapsed } => {
                let elapsed = elapsed + dt;
                let t = (elapsed / self.config.hover_time.max(1e-4)).clamp(0.0, 1.0);
                self.scale = lerp(from, to, smoothstep(t));
                self.anim = if t >= 1.0 {
                    Anim::Idle
                } else {
                    Anim::Hover { from, to, elapsed }
                };
            }
            Anim::Pulse { from, elapsed } => {
                let elapsed = elapsed + dt;
                let half = (self.config.click_time * 0.5).max(1e-4);
                // After the pulse, land on the hover scale if still hovered
                let rest = if self.hovered && self.interactable {
                    self.config.hover_scale
                } else {
                    1.0
                };
                if elapsed < half {
                    let t = elapsed / half;
                    self.scale = lerp(from, self.config.click_scale, smoothstep(t));
                    self.anim = Anim::Pulse { from, elapsed };
                } else if elapsed < half * 2.0 {
                    let t = (elapsed - half) / half;
                    self.scale = lerp(self.config.click_scale, rest, smoothstep(t));
                    self.anim = Anim::Pulse { from, elapsed };
                } else {
                    self.scale = rest;
                    self.anim = Anim::Idle;
                }
            }
        }
        self.scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.anim, Anim::Idle)
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn effect() -> HoverClickEffect {
        HoverClickEffect::new(HoverClickConfig::default())
    }

    fn settle(effect: &mut HoverClickEffect) -> f32 {
        let mut scale = effect.scale();
        for _ in 0..60 {
            scale = effect.step(DT);
        }
        scale
    }

    #[test]
    fn test_hover_reaches_target_scale() {
        let mut e = effect();
        e.pointer_enter();
        let scale = settle(&mut e);
        assert!((scale - 1.08).abs() < 1e-4);
        assert!(!e.is_animating());
    }

    #[test]
    fn test_exit_returns_to_base() {
        let mut e = effect();
        e.pointer_enter();
        settle(&mut e);
        e.pointer_exit();
        let scale = settle(&mut e);
        assert!((scale - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_click_pulse_peaks_then_settles() {
        let mut e = effect();
        e.click();
        let mut peak: f32 = 1.0;
        for _ in 0..30 {
            peak = peak.max(e.step(DT));
        }
        assert!((peak - 1.15).abs() < 0.02);
        assert!((e.scale() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_click_while_hovered_settles_on_hover_scale() {
        let mut e = effect();
        e.pointer_enter();
        settle(&mut e);
        e.click();
        let scale = settle(&mut e);
        assert!((scale - 1.08).abs() < 1e-4);
    }

    #[test]
    fn test_non_interactable_is_inert() {
        let mut e = effect();
        e.set_interactable(false);
        e.pointer_enter();
        e.click();
        let scale = settle(&mut e);
        assert_eq!(scale, 1.0);
        assert!(!e.is_animating());
    }

    #[test]
    fn test_click_always_plays_override() {
        let config = HoverClickConfig {
            click_always_plays: true,
            ..HoverClickConfig::default()
        };
        let mut e = HoverClickEffect::new(config);
        e.set_interactable(false);
        e.click();
        assert!(e.is_animating());
    }

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }
}
