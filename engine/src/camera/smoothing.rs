//! Camera Smoothing Module
//!
//! Critically damped spring smoothing for the orbit camera. Each smoothed
//! scalar carries its own velocity accumulator across frames, so motion
//! eases in and out without overshoot and stays frame-rate independent.

/// Advance `current` toward `target` over one frame.
///
/// `smooth_time` is roughly the time to cover most of the remaining
/// distance; smaller values track tighter. `velocity` must persist between
/// calls for the same scalar. Returns the new current value.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);

    // Polynomial approximation of exp(-omega * dt) for the critically
    // damped spring response
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Clamp overshoot past the target
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}
