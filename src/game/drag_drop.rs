//! Drag and Drop Module
//!
//! Lifecycle of dragging a UI item onto the world. Beginning a drag hands
//! the pointer to the item (orbiting pauses, one drop area goes exclusive);
//! ending it either raycasts the release point onto the drop plane and
//! places the item there, or returns it to its home position.

use glam::{Vec2, Vec3};

use crate::camera::{OrbitCameraController, RaycastConfig};
use crate::game::activation::ActivationManager;
use crate::game::audio::{AudioCue, AudioDirector};

/// Result of releasing a dragged item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Accepted: the item now sits at this world position.
    Placed(Vec3),
    /// Refused: the item went back to its home position.
    Returned,
}

/// One draggable UI item tied to an activation slot.
#[derive(Debug)]
pub struct DragItem {
    slot: usize,
    /// Anchored screen position the item returns to on a refused drop.
    home_position: Vec2,
    /// Current screen position while dragging (home otherwise).
    position: Vec2,
    dragging: bool,
    /// World position once placed.
    placed_at: Option<Vec3>,
}

impl DragItem {
    pub fn new(slot: usize, home_position: Vec2) -> Self {
        Self {
            slot,
            home_position,
            position: home_position,
            dragging: false,
            placed_at: None,
        }
    }

    /// Start dragging: pause orbiting and make this item's drop area the
    /// only one that accepts. Ignored if already placed.
    pub fn begin_drag(
        &mut self,
        camera: &mut OrbitCameraController,
        activation: &mut ActivationManager,
    ) {
        if self.placed_at.is_some() {
            return;
        }
        self.dragging = true;
        camera.set_orbit_enabled(false);
        activation.begin_exclusive(self.slot);
        log::debug!("drag started on slot {}", self.slot);
    }

    /// Track the pointer while dragging.
    pub fn drag(&mut self, position: Vec2) {
        if self.dragging {
            self.position = position;
        }
    }

    /// Release the item. Orbiting resumes in every case.
    ///
    /// The drop is accepted when the release point is inside this item's
    /// exclusive drop area and the raycast onto the drop plane hits; the
    /// item then snaps to the hit point. Otherwise it returns home.
    pub fn end_drag(
        &mut self,
        position: Vec2,
        camera: &mut OrbitCameraController,
        activation: &mut ActivationManager,
        audio: &mut AudioDirector,
        projection: &RaycastConfig,
        plane_height: f32,
    ) -> DropOutcome {
        self.dragging = false;
        camera.set_orbit_enabled(true);

        let outcome = self.try_place(position, camera, activation, projection, plane_height);
        activation.end_exclusive();

        match outcome {
            Some(world) => {
                self.placed_at = Some(world);
                self.position = position;
                audio.play(AudioCue::RightAnswer);
                activation.notify_snapped(self.slot);
                DropOutcome::Placed(world)
            }
            None => {
                self.position = self.home_position;
                audio.play(AudioCue::WrongAnswer);
                DropOutcome::Returned
            }
        }
    }

    fn try_place(
        &self,
        position: Vec2,
        camera: &OrbitCameraController,
        activation: &ActivationManager,
        projection: &RaycastConfig,
        plane_height: f32,
    ) -> Option<Vec3> {
        if !activation.area_accepts(self.slot, position) {
            return None;
        }
        let viewport = camera.viewport()?;
        if !viewport.contains(position) {
            return None;
        }
        let pose = camera.pose();
        let uv = viewport.to_uv(position);
        projection.raycast_to_plane(pose.position, pose.look_at, uv, plane_height)
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn placed_at(&self) -> Option<Vec3> {
        self.placed_at
    }
}
