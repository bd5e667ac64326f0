//! Drag Activation Module
//!
//! Bookkeeping for the placement exercise: which draggable items are live,
//! which drop area accepts the current drag, and when every item has been
//! snapped into place. A random subset starts active and each successful
//! snap activates one more, so the player always works a small set.

use rand::seq::SliceRandom;

use crate::viewport::Rect;

/// Lifecycle of one draggable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Not yet offered to the player.
    Inactive,
    /// Visible and draggable.
    Active,
    /// Placed on its drop area.
    Snapped,
}

/// One draggable item with its screen-space drop area.
#[derive(Debug, Clone)]
pub struct Slot {
    pub state: SlotState,
    pub drop_area: Rect,
}

/// Tracks slot states and the exclusive drop area of an in-flight drag.
#[derive(Debug)]
pub struct ActivationManager {
    slots: Vec<Slot>,
    /// Index of the slot whose drop area currently accepts, if a drag is
    /// in flight. All other areas refuse while this is set.
    exclusive: Option<usize>,
}

impl ActivationManager {
    /// Create the manager and activate `initial_active` random slots.
    pub fn new(drop_areas: Vec<Rect>, initial_active: usize) -> Self {
        let mut manager = Self {
            slots: drop_areas
                .into_iter()
                .map(|drop_area| Slot {
                    state: SlotState::Inactive,
                    drop_area,
                })
                .collect(),
            exclusive: None,
        };

        let mut indices: Vec<usize> = (0..manager.slots.len()).collect();
        indices.shuffle(&mut rand::thread_rng());
        for &index in indices.iter().take(initial_active) {
            manager.slots[index].state = SlotState::Active;
        }
        log::info!(
            "activation: {} of {} slots active",
            manager.active_count(),
            manager.slots.len()
        );
        manager
    }

    /// A drag began on `index`: only its drop area accepts until the drag
    /// ends. Ignored for unknown or non-active slots.
    pub fn begin_exclusive(&mut self, index: usize) {
        if matches!(self.slots.get(index), Some(slot) if slot.state == SlotState::Active) {
            self.exclusive = Some(index);
        }
    }

    /// The in-flight drag ended (either way); all areas go back to refusing.
    pub fn end_exclusive(&mut self) {
        self.exclusive = None;
    }

    /// Whether dropping at `point` lands on the accepting area for `index`.
    pub fn area_accepts(&self, index: usize, point: glam::Vec2) -> bool {
        if self.exclusive != Some(index) {
            return false;
        }
        match self.slots.get(index) {
            Some(slot) => slot.state == SlotState::Active && slot.drop_area.contains(point),
            None => false,
        }
    }

    /// Mark `index` snapped and activate one more random inactive slot.
    /// Returns true when every slot is now snapped.
    pub fn notify_snapped(&mut self, index: usize) -> bool {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.state = SlotState::Snapped;
        }

        let inactive: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.state == SlotState::Inactive)
            .map(|(i, _)| i)
            .collect();
        if let Some(&next) = inactive.choose(&mut rand::thread_rng()) {
            self.slots[next].state = SlotState::Active;
        }

        let complete = self.is_complete();
        if complete {
            log::info!("activation: all {} slots snapped", self.slots.len());
        }
        complete
    }

    /// Whether every slot has been snapped.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.state == SlotState::Snapped)
    }

    pub fn slot_state(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).map(|slot| slot.state)
    }

    pub fn active_count(&self) -> usize {
        self.count(SlotState::Active)
    }

    pub fn snapped_count(&self) -> usize {
        self.count(SlotState::Snapped)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn count(&self, state: SlotState) -> usize {
        self.slots.iter().filter(|slot| slot.state == state).count()
    }
}
