use crate::landmarks::HandLandmarks;
use glam::{Vec2, Vec3};

/// Per-hand engine state. There are exactly two slots, addressed by the
/// provider's hand index and never reordered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandSlot {
    /// Smoothed landmarks for this frame; `None` while the hand is absent.
    pub landmarks: Option<HandLandmarks>,
    /// Projected wrist position.
    pub anchor_screen: Option<Vec2>,
    pub is_pinching: bool,
    /// Midpoint of the projected thumb and index tips.
    pub pinch_screen: Option<Vec2>,
    pub is_fist_closed: bool,
    /// Rotation reference while a fist is held.
    pub last_fist_screen: Option<Vec2>,
}

impl HandSlot {
    pub fn visible(&self) -> bool {
        self.landmarks.is_some()
    }

    pub fn landmark(&self, index: usize) -> Option<Vec3> {
        self.landmarks.as_ref()?.get(index).copied()
    }

    pub fn clear_pinch(&mut self) {
        self.is_pinching = false;
        self.pinch_screen = None;
    }

    pub fn clear_fist(&mut self) {
        self.is_fist_closed = false;
        self.last_fist_screen = None;
    }

    /// Drop everything tracked for this hand; used when the provider loses it.
    pub fn lose(&mut self) {
        *self = Self::default();
    }
}
