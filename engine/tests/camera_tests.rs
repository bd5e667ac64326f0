//! Camera Tests - Orbit Controller End to End
//!
//! Integration tests driving the orbit controller through whole frames:
//! input snapshots in, composed poses out. Covers the gesture debounce
//! sequences, the numeric zoom scenarios, clamp saturation under random
//! input, and the freeze semantics of disabled orbiting.

use glam::Vec2;
use habitat_engine::camera::{OrbitCameraController, OrbitConfig};
use habitat_engine::input::{InputSnapshot, ScrollDelta, TouchPhase, TouchSample};
use habitat_engine::viewport::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DT: f32 = 0.016;

fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

fn controller() -> OrbitCameraController {
    let mut controller = OrbitCameraController::new(OrbitConfig::default());
    controller.set_viewport(Some(viewport()));
    controller
}

fn touch(id: u64, position: Vec2, delta: Vec2, phase: TouchPhase) -> TouchSample {
    TouchSample {
        id,
        position,
        delta,
        phase,
        over_ui: false,
    }
}

fn touch_snapshot(touches: Vec<TouchSample>) -> InputSnapshot {
    InputSnapshot {
        mouse: Default::default(),
        touches,
    }
}

fn scroll_snapshot(lines: f32) -> InputSnapshot {
    let mut snapshot = InputSnapshot::new();
    snapshot.mouse.set_position(400.0, 300.0, 600);
    snapshot.mouse.add_scroll(ScrollDelta::from_lines(0.0, lines));
    snapshot
}

// ============================================================================
// Initial view and smoothing
// ============================================================================

#[test]
fn test_initial_view_is_exact_not_smoothed() {
    let controller = controller();
    let state = controller.state();
    assert_eq!(state.current_yaw, 0.0);
    assert_eq!(state.current_pitch, 20.0);
    assert_eq!(state.current_distance, 10.0);
    assert_eq!(state.target_yaw, 0.0);
    assert_eq!(state.target_pitch, 20.0);
    assert_eq!(state.target_distance, 10.0);
    assert_eq!(state.yaw_velocity, 0.0);
    assert_eq!(state.pitch_velocity, 0.0);
    assert_eq!(state.distance_velocity, 0.0);
}

#[test]
fn test_settled_camera_is_a_fixed_point() {
    let mut controller = controller();
    let pose = controller.pose();
    for _ in 0..100 {
        controller.step(DT, &InputSnapshot::new());
    }
    assert_eq!(controller.pose().position, pose.position);
    assert_eq!(controller.pose().look_at, pose.look_at);
}

#[test]
fn test_smoothing_converges_to_retarget() {
    let mut controller = controller();
    controller.set_zoom(15.0);
    controller.set_yaw(45.0);
    controller.apply_pending_defaults();

    for _ in 0..600 {
        controller.step(DT, &InputSnapshot::new());
    }
    assert!(approx_eq(controller.current_zoom(), 15.0, 0.001));
    assert!(approx_eq(controller.current_yaw(), 45.0, 0.001));
}

// ============================================================================
// Gesture debounce
// ============================================================================

/// Touch counts [0, 1, 1, 2] across frames: the single-touch frames fall
/// inside the debounce window and produce no rotation, and the pinch runs
/// on the very frame the second finger arrives.
#[test]
fn test_debounce_sequence_zero_one_one_two() {
    let mut controller = controller();

    // Frame 1: no touches
    controller.step(DT, &InputSnapshot::new());
    // Frame 2: first finger lands (moving already)
    controller.step(
        DT,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(100.0, 100.0),
            Vec2::new(8.0, 0.0),
            TouchPhase::Began,
        )]),
    );
    // Frame 3: still one finger, still inside the 80 ms window
    controller.step(
        DT,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(108.0, 100.0),
            Vec2::new(8.0, 0.0),
            TouchPhase::Moved,
        )]),
    );
    assert_eq!(controller.state().target_yaw, 0.0, "debounce must hold");

    // Frame 4: second finger arrives, fingers 100 -> 150 px apart
    controller.step(
        DT,
        &touch_snapshot(vec![
            touch(1, Vec2::new(83.0, 100.0), Vec2::new(-25.0, 0.0), TouchPhase::Moved),
            touch(2, Vec2::new(233.0, 100.0), Vec2::new(25.0, 0.0), TouchPhase::Moved),
        ]),
    );
    assert_eq!(controller.state().target_yaw, 0.0, "no rotation leaked");
    // Pinch applied this same frame: 10 - 50 * zoom_speed(5) * 0.01 = 7.5
    assert!(approx_eq(controller.state().target_distance, 7.5, 1e-4));
}

/// A single finger that outlives the debounce window rotates normally.
#[test]
fn test_debounce_expires_into_rotation() {
    let mut controller = controller();
    let big_dt = 0.1; // each frame is longer than the 80 ms window

    controller.step(
        big_dt,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Began,
        )]),
    );
    assert_eq!(controller.state().target_yaw, 0.0);

    controller.step(
        big_dt,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(110.0, 100.0),
            Vec2::new(10.0, 0.0),
            TouchPhase::Moved,
        )]),
    );
    // 10 px * rotation_speed(5) * touch scale(0.02) = 1 degree
    assert!(approx_eq(controller.state().target_yaw, 1.0, 1e-4));
}

#[test]
fn test_lone_finger_lift_resets_window() {
    let mut controller = controller();

    controller.step(
        0.1,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Began,
        )]),
    );
    controller.step(0.1, &InputSnapshot::new());

    // A fresh finger gets a fresh window
    controller.step(
        DT,
        &touch_snapshot(vec![touch(
            2,
            Vec2::new(100.0, 100.0),
            Vec2::new(10.0, 0.0),
            TouchPhase::Moved,
        )]),
    );
    assert_eq!(controller.state().target_yaw, 0.0);
}

// ============================================================================
// Numeric zoom scenarios
// ============================================================================

/// One scroll line at zoom speed 5 retargets 10 -> 5; the smoothed distance
/// follows over subsequent frames without overshooting.
#[test]
fn test_scroll_retargets_ten_to_five() {
    let mut controller = controller();
    controller.step(DT, &scroll_snapshot(1.0));
    assert_eq!(controller.state().target_distance, 5.0);
    assert!(controller.current_zoom() > 5.0);

    let mut previous = controller.current_zoom();
    for _ in 0..600 {
        controller.step(DT, &InputSnapshot::new());
        let current = controller.current_zoom();
        assert!(current <= previous + 1e-5, "zoom must descend monotonically");
        assert!(current >= 5.0 - 1e-4, "zoom must not overshoot");
        previous = current;
    }
    assert!(approx_eq(controller.current_zoom(), 5.0, 0.001));
}

/// At unit zoom speed, fingers spreading 50 px retarget the distance by
/// exactly -0.5; the pinch scale alone converts pixels to distance.
#[test]
fn test_pinch_fifty_pixels_is_half_a_unit() {
    let mut controller = OrbitCameraController::new(OrbitConfig {
        zoom_speed: 1.0,
        ..OrbitConfig::default()
    });
    controller.set_viewport(Some(viewport()));
    controller.step(
        DT,
        &touch_snapshot(vec![
            touch(1, Vec2::new(75.0, 300.0), Vec2::new(-25.0, 0.0), TouchPhase::Moved),
            touch(2, Vec2::new(225.0, 300.0), Vec2::new(25.0, 0.0), TouchPhase::Moved),
        ]),
    );
    assert!(approx_eq(controller.state().target_distance, 9.5, 1e-4));
}

/// The configured zoom speed multiplies pinch deltas just like scroll lines.
#[test]
fn test_pinch_scales_with_zoom_speed() {
    let mut controller = controller();
    controller.step(
        DT,
        &touch_snapshot(vec![
            touch(1, Vec2::new(75.0, 300.0), Vec2::new(-25.0, 0.0), TouchPhase::Moved),
            touch(2, Vec2::new(225.0, 300.0), Vec2::new(25.0, 0.0), TouchPhase::Moved),
        ]),
    );
    // 10 - 50 * zoom_speed(5) * 0.01 = 7.5
    assert!(approx_eq(controller.state().target_distance, 7.5, 1e-4));
}

// ============================================================================
// Clamp saturation
// ============================================================================

/// Random scroll and drag storms never push targets past their limits.
#[test]
fn test_random_input_storm_respects_clamps() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut controller = controller();

    for _ in 0..500 {
        let mut snapshot = InputSnapshot::new();
        snapshot.mouse.set_position(390.0, 310.0, 600);
        snapshot.mouse.set_position(
            390.0 + rng.gen_range(-200.0..200.0),
            310.0 + rng.gen_range(-200.0..200.0),
            600,
        );
        snapshot.mouse.buttons.primary = true;
        snapshot
            .mouse
            .add_scroll(ScrollDelta::from_lines(0.0, rng.gen_range(-20.0..20.0)));
        controller.step(DT, &snapshot);

        let state = controller.state();
        assert!(state.target_distance >= 3.0 && state.target_distance <= 20.0);
        assert!(state.target_pitch >= -20.0 && state.target_pitch <= 80.0);
        assert!(state.current_distance >= 3.0 - 1e-3 && state.current_distance <= 20.0 + 1e-3);
    }
}

// ============================================================================
// Ownership and freeze
// ============================================================================

#[test]
fn test_disabled_orbit_ignores_input_but_keeps_gliding() {
    let mut controller = controller();
    controller.step(DT, &scroll_snapshot(1.0));
    let in_flight = controller.current_zoom();

    controller.set_orbit_enabled(false);
    for _ in 0..10 {
        controller.step(DT, &scroll_snapshot(1.0));
    }
    // Target unchanged by the blocked scrolls, glide continued
    assert_eq!(controller.state().target_distance, 5.0);
    assert!(controller.current_zoom() < in_flight);

    controller.set_orbit_enabled(true);
    controller.step(DT, &scroll_snapshot(0.2));
    assert!(controller.state().target_distance < 5.0);
}

#[test]
fn test_touch_outside_viewport_does_nothing() {
    let mut controller = controller();
    controller.step(
        0.1,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(900.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Began,
        )]),
    );
    controller.step(
        0.1,
        &touch_snapshot(vec![touch(
            1,
            Vec2::new(910.0, 100.0),
            Vec2::new(10.0, 0.0),
            TouchPhase::Moved,
        )]),
    );
    assert_eq!(controller.state().target_yaw, 0.0);
}

#[test]
fn test_ui_claimed_touch_does_nothing() {
    let mut controller = controller();
    let mut claimed = touch(1, Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0), TouchPhase::Moved);
    claimed.over_ui = true;
    controller.step(0.1, &touch_snapshot(vec![claimed]));
    controller.step(0.1, &touch_snapshot(vec![claimed]));
    assert_eq!(controller.state().target_yaw, 0.0);
}

// ============================================================================
// Pose composition
// ============================================================================

#[test]
fn test_pose_orbits_at_current_distance() {
    let mut controller = controller();
    controller.step(DT, &InputSnapshot::new());
    let pose = controller.pose();
    assert!(approx_eq(
        pose.position.distance(pose.look_at),
        controller.current_zoom(),
        1e-3
    ));
    // Default pitch 20 puts the camera above the target
    assert!(pose.position.y > pose.look_at.y);
}

#[test]
fn test_yaw_sweep_keeps_distance() {
    let mut controller = OrbitCameraController::new(OrbitConfig {
        default_yaw: 135.0,
        ..OrbitConfig::default()
    });
    controller.set_viewport(Some(viewport()));
    controller.step(DT, &InputSnapshot::new());
    let pose = controller.pose();
    assert!(approx_eq(
        pose.position.distance(pose.look_at),
        controller.current_zoom(),
        1e-3
    ));
}
