//! Hand landmark containers as delivered by the hand-tracking provider.

use crate::constants::LANDMARK_COUNT;
use glam::Vec3;
use smallvec::SmallVec;

/// One detected hand: normalized `x`/`y` in \[0, 1\] of the video frame and a
/// relative depth in `z`. Normally exactly [`LANDMARK_COUNT`] points.
pub type HandLandmarks = SmallVec<[Vec3; LANDMARK_COUNT]>;

/// Provider output for a single video frame.
#[derive(Clone, Debug, Default)]
pub struct HandFrame {
    /// Monotonic video timestamp; frames with a timestamp not newer than the
    /// last processed one are skipped.
    pub timestamp_ms: f64,
    /// Zero, one or two hands, consumed positionally into hand slots.
    pub hands: Vec<HandLandmarks>,
}

impl HandFrame {
    pub fn new(timestamp_ms: f64, hands: Vec<HandLandmarks>) -> Self {
        Self {
            timestamp_ms,
            hands,
        }
    }

    /// Frame with no detected hands.
    pub fn empty(timestamp_ms: f64) -> Self {
        Self::new(timestamp_ms, Vec::new())
    }
}

/// Decode the flat `[x, y, z] * 21 * num_hands` layout used by the JS bridge.
///
/// Hands are read in order; decoding stops at the first hand whose slice is
/// incomplete so later hands never shift into an earlier slot.
pub fn hands_from_flat(flat: &[f32], num_hands: usize) -> Vec<HandLandmarks> {
    let stride = LANDMARK_COUNT * 3;
    flat.chunks_exact(stride)
        .take(num_hands)
        .map(|hand| {
            hand.chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2]))
                .collect::<HandLandmarks>()
        })
        .collect()
}
