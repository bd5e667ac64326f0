//! Raycast Module
//!
//! Screen-point to world raycasting against horizontal planes, used to snap
//! dropped items onto the table surface.

use glam::Vec3;

/// Raycast from screen UV coordinates to a horizontal plane at a given height.
///
/// # Arguments
/// * `camera_pos` - Camera position in world space
/// * `camera_target` - Point the camera is looking at
/// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
/// * `aspect_ratio` - Screen aspect ratio (width / height)
/// * `fov` - Vertical field of view in radians
/// * `plane_height` - Y coordinate of the horizontal plane
///
/// # Returns
/// * `Some(Vec3)` - The intersection point on the plane
/// * `None` - If the ray is parallel to the plane or the hit is behind the camera
pub fn raycast_to_plane(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
    plane_height: f32,
) -> Option<Vec3> {
    let ray_dir = get_ray_direction(camera_pos, camera_target, uv, aspect_ratio, fov);

    // Ray: P = camera_pos + t * ray_dir
    // Plane: y = plane_height
    if ray_dir.y.abs() < 0.0001 {
        return None;
    }

    let t = (plane_height - camera_pos.y) / ray_dir.y;
    if t < 0.0 {
        return None;
    }

    Some(camera_pos + ray_dir * t)
}

/// Calculate the world-space ray direction through a screen point.
pub fn get_ray_direction(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
) -> Vec3 {
    // UV to NDC (-1 to 1)
    let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
    let half_fov = (fov * 0.5_f32).tan();

    let forward = (camera_target - camera_pos).normalize();
    let up_world = Vec3::Y;

    // Looking straight up/down needs a different reference axis
    let (right, up) = if forward.y.abs() > 0.99 {
        let right = Vec3::X;
        let up = forward.cross(right).normalize();
        (right, up)
    } else {
        let right = forward.cross(up_world).normalize();
        let up = right.cross(forward);
        (right, up)
    };

    (forward + right * ndc.0 * aspect_ratio * half_fov + up * ndc.1 * half_fov).normalize()
}

/// Projection parameters bundled for repeated raycasts.
#[derive(Clone, Copy, Debug)]
pub struct RaycastConfig {
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Vertical field of view in radians
    pub fov: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov: 1.2, // ~69 degrees
        }
    }
}

impl RaycastConfig {
    /// Create a new raycast config with the given aspect ratio.
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }

    /// Raycast to a plane at a given height using this config.
    pub fn raycast_to_plane(
        &self,
        camera_pos: Vec3,
        camera_target: Vec3,
        uv: (f32, f32),
        plane_height: f32,
    ) -> Option<Vec3> {
        raycast_to_plane(
            camera_pos,
            camera_target,
            uv,
            self.aspect_ratio,
            self.fov,
            plane_height,
        )
    }
}
