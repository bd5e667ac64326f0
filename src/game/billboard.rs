//! Billboard Module
//!
//! Orients scene labels toward the camera. The upright variant only spins
//! around Y so text stays level; the free variant also pitches. Degenerate
//! cases (camera on top of the label) leave the orientation unchanged.

use glam::{EulerRot, Quat, Vec3};

/// Squared distance below which the facing direction is meaningless.
const MIN_DISTANCE_SQ: f32 = 0.001;

/// Orientation that turns an object at `position` toward `camera_position`.
///
/// With `upright` the result only rotates around Y. Returns `None` when the
/// camera is too close to define a direction; callers keep the previous
/// orientation in that case.
pub fn face_camera(position: Vec3, camera_position: Vec3, upright: bool) -> Option<Quat> {
    let mut dir = camera_position - position;
    if upright {
        dir.y = 0.0;
    }
    if dir.length_squared() <= MIN_DISTANCE_SQ {
        return None;
    }

    let yaw = dir.x.atan2(dir.z);
    if upright {
        return Some(Quat::from_rotation_y(yaw));
    }

    let pitch = -(dir.normalize().y).asin();
    Some(Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0))
}
