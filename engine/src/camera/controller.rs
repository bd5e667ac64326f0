//! Orbit Camera Controller Module
//!
//! The frame-driven orbit camera: target angles and distance accumulate
//! from mouse, touch, and scripted retargeting; critically damped smoothing
//! chases the targets; the compositor turns the smoothed state into a world
//! pose around the look-at target. All behavior runs inside a single
//! `step(dt, input)` call per frame.

use glam::{EulerRot, Quat, Vec2, Vec3};
use rand::Rng;

use crate::camera::gesture::{GestureDisambiguator, GestureIntent};
use crate::camera::smoothing::smooth_damp;
use crate::input::InputSnapshot;
use crate::viewport::Rect;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Converts pointer pixels to degrees before the rotation speed multiplier.
const MOUSE_ROTATE_SCALE: f32 = 0.1;

/// Scroll magnitudes below this are treated as noise.
const SCROLL_DEADZONE: f32 = 0.01;

/// Pitch the zoom-out sequence settles on.
const ZOOM_OUT_END_PITCH: f32 = 20.0;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// All orbit camera tunables, loadable from the scene config.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Distance the camera starts at and returns to on reset.
    pub default_zoom: f32,
    /// Horizontal angle in degrees at start/reset.
    pub default_yaw: f32,
    /// Vertical angle in degrees at start/reset (positive looks down).
    pub default_pitch: f32,

    /// Degrees of rotation per unit of drag.
    pub rotation_speed: f32,
    /// Zoom distance per scroll line.
    pub zoom_speed: f32,
    /// Closest allowed distance to the target.
    pub min_zoom: f32,
    /// Farthest allowed distance from the target.
    pub max_zoom: f32,

    /// Whether pitch is clamped to `pitch_min..pitch_max`.
    pub restrict_pitch: bool,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Whether yaw is clamped to `yaw_min..yaw_max`.
    pub restrict_yaw: bool,
    pub yaw_min: f32,
    pub yaw_max: f32,

    /// Flip the vertical drag direction.
    pub invert_y: bool,
    /// Require the secondary button to be held for mouse rotation.
    pub require_secondary_button: bool,

    /// Smoothing time constant in seconds; smaller tracks tighter.
    pub smooth_time: f32,

    /// Degrees per touch-drag pixel, before `rotation_speed`.
    pub touch_rotate_scale: f32,
    /// Zoom distance per pixel of pinch separation change.
    pub pinch_zoom_scale: f32,
    /// Debounce window after the first finger lands, in seconds.
    pub multi_touch_delay: f32,

    /// Distance change per discrete zoom button press.
    pub zoom_step: f32,
    /// Distance change per second while a zoom button is held.
    pub zoom_hold_speed: f32,

    /// Whether the scripted zoom-out sequence is available.
    pub dynamic_zoom_out: bool,
    /// Fraction of the zoom-out sequence completed per second.
    pub zoom_out_rate: f32,

    /// Recoil shake length in seconds.
    pub shake_duration: f32,
    /// Recoil shake backward distance at full strength.
    pub shake_magnitude: f32,

    /// Remap the look-at target's X with zoom level.
    pub map_target_x: bool,
    pub target_x_at_min_zoom: f32,
    pub target_x_at_max_zoom: f32,
    /// Remap the look-at target's Y (height) with zoom level.
    pub map_target_y: bool,
    pub target_y_at_min_zoom: f32,
    pub target_y_at_max_zoom: f32,

    /// World-space offset added to the look-at target.
    pub target_offset: Vec3,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            default_zoom: 10.0,
            default_yaw: 0.0,
            default_pitch: 20.0,
            rotation_speed: 5.0,
            zoom_speed: 5.0,
            min_zoom: 3.0,
            max_zoom: 20.0,
            restrict_pitch: true,
            pitch_min: -20.0,
            pitch_max: 80.0,
            restrict_yaw: false,
            yaw_min: -360.0,
            yaw_max: 360.0,
            invert_y: false,
            require_secondary_button: false,
            smooth_time: 0.15,
            touch_rotate_scale: 0.02,
            pinch_zoom_scale: 0.01,
            multi_touch_delay: 0.08,
            zoom_step: 1.0,
            zoom_hold_speed: 2.0,
            dynamic_zoom_out: false,
            zoom_out_rate: 0.5,
            shake_duration: 0.5,
            shake_magnitude: 0.2,
            map_target_x: false,
            target_x_at_min_zoom: 0.0,
            target_x_at_max_zoom: 0.0,
            map_target_y: false,
            target_y_at_min_zoom: 0.0,
            target_y_at_max_zoom: 0.0,
            target_offset: Vec3::ZERO,
        }
    }
}

// ============================================================================
// STATE
// ============================================================================

/// The smoothed orbit state: where the camera wants to be, where it is,
/// and the spring velocities carrying it between the two.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraState {
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
    pub current_yaw: f32,
    pub current_pitch: f32,
    pub current_distance: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
    pub distance_velocity: f32,
}

/// The composed world-space result of a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Which way a held zoom button moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Time-decaying backward kick with 2D jitter, in camera-local space.
#[derive(Debug, Clone, Copy, Default)]
struct RecoilShake {
    timer: f32,
    local_offset: Vec3,
}

impl RecoilShake {
    fn trigger(&mut self, duration: f32) {
        self.timer = duration;
    }

    fn update(&mut self, dt: f32, duration: f32, magnitude: f32) {
        if self.timer <= 0.0 {
            self.local_offset = Vec3::ZERO;
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            // Force-zero at expiry so no residual offset lingers
            self.timer = 0.0;
            self.local_offset = Vec3::ZERO;
            return;
        }
        let strength = magnitude * (self.timer / duration.max(1e-4)).clamp(0.0, 1.0);
        let jitter = in_unit_circle() * 0.2 * strength;
        self.local_offset = Vec3::new(jitter.x, jitter.y, -strength);
    }
}

/// Uniform sample inside the unit circle.
fn in_unit_circle() -> Vec2 {
    let mut rng = rand::thread_rng();
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius = rng.gen_range(0.0f32..1.0).sqrt();
    Vec2::new(angle.cos(), angle.sin()) * radius
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Window-agnostic orbit camera controller.
///
/// The host owns the frame loop: it builds an [`InputSnapshot`], calls
/// [`OrbitCameraController::step`] once per frame, and reads the resulting
/// [`CameraPose`]. Scene systems retarget the camera through the public
/// setters between frames.
#[derive(Debug)]
pub struct OrbitCameraController {
    config: OrbitConfig,
    state: CameraState,
    gesture: GestureDisambiguator,
    recoil: RecoilShake,
    /// Staged default overrides; a reset ignores them until committed.
    pending_zoom: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    /// Fraction of the scripted zoom-out completed, when one is running.
    zoom_out_t: Option<f32>,
    holding_zoom_in: bool,
    holding_zoom_out: bool,
    can_orbit: bool,
    viewport: Option<Rect>,
    target_position: Vec3,
    pose: CameraPose,
    time: f32,
}

impl OrbitCameraController {
    pub fn new(config: OrbitConfig) -> Self {
        let gesture = GestureDisambiguator::new(config.multi_touch_delay);
        let mut controller = Self {
            pending_zoom: config.default_zoom,
            pending_yaw: config.default_yaw,
            pending_pitch: config.default_pitch,
            config,
            state: CameraState::default(),
            gesture,
            recoil: RecoilShake::default(),
            zoom_out_t: None,
            holding_zoom_in: false,
            holding_zoom_out: false,
            can_orbit: true,
            viewport: None,
            target_position: Vec3::ZERO,
            pose: CameraPose::default(),
            time: 0.0,
        };
        controller.apply_initial_view();
        controller.compose_pose();
        controller
    }

    /// Advance one frame. A no-op while no viewport is assigned.
    ///
    /// Smoothing, recoil decay, and pose composition always run; input is
    /// only consulted while orbiting is enabled.
    pub fn step(&mut self, dt: f32, input: &InputSnapshot) {
        self.time += dt;
        let Some(viewport) = self.viewport else {
            return;
        };

        if self.can_orbit {
            self.handle_input(input, viewport);
        }
        self.advance_zoom_out(dt);
        self.apply_held_zoom(dt);
        self.clamp_targets();
        self.apply_smoothing(dt);
        self.recoil
            .update(dt, self.config.shake_duration, self.config.shake_magnitude);
        self.compose_pose();
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    fn handle_input(&mut self, input: &InputSnapshot, viewport: Rect) {
        if input.has_touches() {
            let intent = self.gesture.update(self.time, &input.touches, viewport);
            self.apply_touch_intent(intent);
        } else {
            // Keep the gesture machine in sync while no fingers are down
            self.gesture.update(self.time, &[], viewport);
            self.handle_mouse(&input.mouse, viewport);
        }
    }

    fn apply_touch_intent(&mut self, intent: GestureIntent) {
        match intent {
            GestureIntent::None => {}
            GestureIntent::Rotate { dx, dy } => {
                let step = self.config.rotation_speed * self.config.touch_rotate_scale;
                self.state.target_yaw += dx * step;
                self.state.target_pitch += self.pitch_sign() * dy * step;
            }
            GestureIntent::Pinch { dist_delta } => {
                // Fingers spreading apart zooms in
                self.state.target_distance -=
                    dist_delta * self.config.zoom_speed * self.config.pinch_zoom_scale;
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &crate::input::MouseState, viewport: Rect) {
        let Some(position) = mouse.position else {
            return;
        };
        if !viewport.contains(position) {
            return;
        }

        // Scroll zoom runs even while a UI element claims the pointer;
        // only rotation honors the claim
        if mouse.scroll.y.abs() > SCROLL_DEADZONE {
            self.state.target_distance -= mouse.scroll.y * self.config.zoom_speed;
        }

        if mouse.over_ui {
            return;
        }

        let rotating_allowed = !self.config.require_secondary_button || mouse.buttons.secondary;
        if mouse.buttons.primary && rotating_allowed {
            if let Some(delta) = mouse.delta() {
                let step = self.config.rotation_speed * MOUSE_ROTATE_SCALE;
                self.state.target_yaw += delta.x * step;
                self.state.target_pitch += self.pitch_sign() * delta.y * step;
            }
        }
    }

    /// Dragging up raises the pitch unless the Y axis is inverted.
    fn pitch_sign(&self) -> f32 {
        if self.config.invert_y { -1.0 } else { 1.0 }
    }

    // ------------------------------------------------------------------
    // Retargeting
    // ------------------------------------------------------------------

    /// Stage a new default zoom; committed by [`Self::apply_pending_defaults`].
    /// A reset through [`Self::apply_initial_view`] ignores staged values.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.pending_zoom = zoom;
    }

    /// Stage a new default yaw in degrees.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.pending_yaw = yaw;
    }

    /// Stage a new default pitch in degrees.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pending_pitch = pitch;
    }

    /// Commit the staged defaults: they become the configured defaults
    /// (clamped) and the smoothing targets. The camera glides there over
    /// the following frames.
    pub fn apply_pending_defaults(&mut self) {
        self.config.default_zoom = self.pending_zoom;
        self.config.default_yaw = self.pending_yaw;
        self.config.default_pitch = self.pending_pitch;
        self.clamp_defaults();
        self.state.target_yaw = self.config.default_yaw;
        self.state.target_pitch = self.config.default_pitch;
        self.state.target_distance = self.config.default_zoom;
    }

    /// Clamp the staged defaults and snap both target and current state to
    /// them, zeroing the spring velocities. The next composed pose is the
    /// default view exactly.
    pub fn apply_initial_view(&mut self) {
        self.clamp_defaults();
        self.state.target_yaw = self.config.default_yaw;
        self.state.target_pitch = self.config.default_pitch;
        self.state.target_distance = self.config.default_zoom;
        self.state.current_yaw = self.config.default_yaw;
        self.state.current_pitch = self.config.default_pitch;
        self.state.current_distance = self.config.default_zoom;
        self.state.yaw_velocity = 0.0;
        self.state.pitch_velocity = 0.0;
        self.state.distance_velocity = 0.0;
    }

    fn clamp_defaults(&mut self) {
        let c = &mut self.config;
        c.default_zoom = c.default_zoom.clamp(c.min_zoom, c.max_zoom);
        if c.restrict_pitch {
            c.default_pitch = c.default_pitch.clamp(c.pitch_min, c.pitch_max);
        }
        if c.restrict_yaw {
            c.default_yaw = c.default_yaw.clamp(c.yaw_min, c.yaw_max);
        }
    }

    // ------------------------------------------------------------------
    // Discrete zoom controls
    // ------------------------------------------------------------------

    /// One step closer, clamped.
    pub fn zoom_step_in(&mut self) {
        self.state.target_distance = (self.state.target_distance - self.config.zoom_step)
            .clamp(self.config.min_zoom, self.config.max_zoom);
    }

    /// One step farther, clamped.
    pub fn zoom_step_out(&mut self) {
        self.state.target_distance = (self.state.target_distance + self.config.zoom_step)
            .clamp(self.config.min_zoom, self.config.max_zoom);
    }

    /// Press or release a held zoom button. Held zoom keeps running even
    /// while orbiting is disabled.
    pub fn set_zoom_held(&mut self, direction: ZoomDirection, held: bool) {
        match direction {
            ZoomDirection::In => self.holding_zoom_in = held,
            ZoomDirection::Out => self.holding_zoom_out = held,
        }
    }

    fn apply_held_zoom(&mut self, dt: f32) {
        if self.holding_zoom_in {
            self.state.target_distance -= self.config.zoom_hold_speed * dt;
        }
        if self.holding_zoom_out {
            self.state.target_distance += self.config.zoom_hold_speed * dt;
        }
    }

    // ------------------------------------------------------------------
    // Zoom-out sequence
    // ------------------------------------------------------------------

    /// Begin the scripted pull-back to the farthest view. Restarting while
    /// one is running replaces it. Ignored unless `dynamic_zoom_out` is
    /// configured.
    pub fn start_zoom_out_sequence(&mut self) {
        if !self.config.dynamic_zoom_out {
            return;
        }
        log::debug!("zoom-out sequence started");
        self.zoom_out_t = Some(0.0);
    }

    /// Whether a zoom-out sequence is currently running.
    pub fn zoom_out_active(&self) -> bool {
        self.zoom_out_t.is_some()
    }

    fn advance_zoom_out(&mut self, dt: f32) {
        let Some(t) = self.zoom_out_t else {
            return;
        };
        let t = (t + dt * self.config.zoom_out_rate).min(1.0);

        self.config.default_zoom = lerp(self.config.min_zoom, self.config.max_zoom, t);
        self.config.default_pitch = lerp(0.0, ZOOM_OUT_END_PITCH, t);
        self.config.default_yaw = 0.0;
        // The sequence drives the camera directly, no smoothing lag
        self.apply_initial_view();

        self.zoom_out_t = if t >= 1.0 { None } else { Some(t) };
    }

    // ------------------------------------------------------------------
    // Recoil
    // ------------------------------------------------------------------

    /// Kick the camera backward with decaying jitter.
    pub fn trigger_recoil_shake(&mut self) {
        self.recoil.trigger(self.config.shake_duration);
    }

    // ------------------------------------------------------------------
    // Clamping, smoothing, composition
    // ------------------------------------------------------------------

    fn clamp_targets(&mut self) {
        let c = &self.config;
        let s = &mut self.state;
        s.target_distance = s.target_distance.clamp(c.min_zoom, c.max_zoom);
        if c.restrict_pitch {
            s.target_pitch = s.target_pitch.clamp(c.pitch_min, c.pitch_max);
        }
        if c.restrict_yaw {
            s.target_yaw = s.target_yaw.clamp(c.yaw_min, c.yaw_max);
        }
    }

    fn apply_smoothing(&mut self, dt: f32) {
        let smooth_time = self.config.smooth_time;
        let s = &mut self.state;
        s.current_yaw = smooth_damp(s.current_yaw, s.target_yaw, &mut s.yaw_velocity, smooth_time, dt);
        s.current_pitch = smooth_damp(
            s.current_pitch,
            s.target_pitch,
            &mut s.pitch_velocity,
            smooth_time,
            dt,
        );
        s.current_distance = smooth_damp(
            s.current_distance,
            s.target_distance,
            &mut s.distance_velocity,
            smooth_time,
            dt,
        );
    }

    fn compose_pose(&mut self) {
        let c = &self.config;
        let s = &self.state;

        // Zoom level remaps the look-at target before the orbit is applied
        let zoom_t = inverse_lerp(c.min_zoom, c.max_zoom, s.current_distance).clamp(0.0, 1.0);
        if c.map_target_x {
            self.target_position.x = lerp(c.target_x_at_min_zoom, c.target_x_at_max_zoom, zoom_t);
        }
        if c.map_target_y {
            self.target_position.y = lerp(c.target_y_at_min_zoom, c.target_y_at_max_zoom, zoom_t);
        }

        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            s.current_yaw.to_radians(),
            s.current_pitch.to_radians(),
            0.0,
        );
        let forward = rotation * Vec3::Z;
        let focus = self.target_position + c.target_offset;

        self.pose.position =
            focus - forward * s.current_distance + rotation * self.recoil.local_offset;
        self.pose.look_at = focus;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Enable or disable orbit input. Smoothing and composition continue
    /// while disabled, so in-flight motion settles instead of freezing
    /// mid-glide. Collaborators toggle this between frames (the loop is
    /// single-threaded).
    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.can_orbit = enabled;
    }

    pub fn orbit_enabled(&self) -> bool {
        self.can_orbit
    }

    /// Assign or clear the owning viewport. With no viewport the controller
    /// is inert.
    pub fn set_viewport(&mut self, viewport: Option<Rect>) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    pub fn set_target_position(&mut self, position: Vec3) {
        self.target_position = position;
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn current_yaw(&self) -> f32 {
        self.state.current_yaw
    }

    pub fn current_pitch(&self) -> f32 {
        self.state.current_pitch
    }

    pub fn current_zoom(&self) -> f32 {
        self.state.current_distance
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}
