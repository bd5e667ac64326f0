//! Camera Module
//!
//! Provides orbit camera control, gesture disambiguation, and raycasting.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;
pub mod gesture;
pub mod raycast;
pub mod smoothing;

pub use controller::{
    CameraPose, CameraState, OrbitCameraController, OrbitConfig, ZoomDirection,
};
pub use gesture::{GestureDisambiguator, GestureIntent};
pub use raycast::{get_ray_direction, raycast_to_plane, RaycastConfig};
pub use smoothing::smooth_damp;
