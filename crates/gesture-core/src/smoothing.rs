//! Exponential smoothing of raw per-hand landmarks.

use crate::constants::HAND_SLOTS;
use crate::landmarks::HandLandmarks;
use glam::Vec3;

/// Per-slot exponential filter. A slot is re-seeded from the raw input when the
/// landmark count no longer matches the stored state, which includes the empty
/// state left by [`LandmarkSmoother::reset_slot`] after a hand is lost.
#[derive(Clone, Debug)]
pub struct LandmarkSmoother {
    alpha: f32,
    previous: [HandLandmarks; HAND_SLOTS],
}

impl LandmarkSmoother {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            previous: Default::default(),
        }
    }

    /// Smooth `raw` for hand `slot`, updating the stored state in place.
    pub fn smooth(&mut self, slot: usize, raw: &[Vec3]) -> HandLandmarks {
        let Some(previous) = self.previous.get_mut(slot) else {
            return raw.iter().copied().collect();
        };
        if previous.len() != raw.len() {
            log::debug!(
                "[smooth] hand {} (re)acquired with {} landmarks, seeding",
                slot,
                raw.len()
            );
            *previous = raw.iter().copied().collect();
            return previous.clone();
        }
        let a = self.alpha;
        for (prev, r) in previous.iter_mut().zip(raw) {
            *prev = *r * a + *prev * (1.0 - a);
        }
        previous.clone()
    }

    /// Forget one hand's state; its next observation seeds the filter.
    pub fn reset_slot(&mut self, slot: usize) {
        if let Some(prev) = self.previous.get_mut(slot) {
            prev.clear();
        }
    }
}
