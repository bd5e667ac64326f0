//! Viewport Module
//!
//! Screen-space rectangles used for camera viewport ownership tests and for
//! the dual-viewport split layout. A camera only reacts to pointer or touch
//! input whose screen position falls inside its viewport rect.

use glam::Vec2;

/// An axis-aligned screen rectangle.
///
/// Units are whatever the caller feeds in: the input sampler uses pixel
/// rects (window coordinates), while the dual-viewport split controller
/// animates normalized rects in the 0..1 range. Origin is the lower-left
/// corner in both cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rect from origin and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Full-window pixel rect for a window of the given size.
    pub fn from_window(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Whether the point lies inside the rect (edges inclusive on the
    /// min side, exclusive on the max side, matching pixel-rect semantics).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Aspect ratio (width / height). Returns 1.0 for degenerate rects.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Convert a point inside this rect to normalized UV coordinates
    /// (0-1, origin bottom-left). Not clamped; callers that need a
    /// containment guarantee should check [`Rect::contains`] first.
    pub fn to_uv(&self, point: Vec2) -> (f32, f32) {
        let u = (point.x - self.x) / self.width.max(f32::EPSILON);
        let v = (point.y - self.y) / self.height.max(f32::EPSILON);
        (u, v)
    }

    /// The rect translated so its origin X becomes `x` (size unchanged).
    /// Used by the viewport split controller when animating a camera
    /// across the screen.
    pub fn with_x(&self, x: f32) -> Self {
        Self { x, ..*self }
    }
}
