//! Per-hand gesture classifiers.
//!
//! Pinch works in projected screen space because it drives node picking; the
//! fist check uses the landmarks' own 3D coordinates so the curl ratio stays
//! depth-aware.

use crate::constants::{CURL_FINGERTIPS, INDEX_TIP, MIDDLE_MCP, THUMB_TIP, WRIST};
use crate::projection::{project_landmark, VideoProjection};
use glam::{Vec2, Vec3};

/// Transition of a boolean gesture between two consecutive frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Idle,
    Rising,
    Held,
    Falling,
}

impl Edge {
    pub fn between(was: bool, now: bool) -> Self {
        match (was, now) {
            (false, false) => Edge::Idle,
            (false, true) => Edge::Rising,
            (true, true) => Edge::Held,
            (true, false) => Edge::Falling,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchReading {
    /// Screen distance between thumb tip and index tip, in pixels.
    pub distance: f32,
    /// Midpoint of the two tips.
    pub point: Vec2,
}

/// Measure the thumb/index pinch of one hand in canvas pixels.
pub fn read_pinch(
    hand: &[Vec3],
    projection: Option<&VideoProjection>,
    canvas: Vec2,
) -> Option<PinchReading> {
    let thumb = project_landmark(*hand.get(THUMB_TIP)?, projection, canvas.x, canvas.y)?;
    let index = project_landmark(*hand.get(INDEX_TIP)?, projection, canvas.x, canvas.y)?;
    Some(PinchReading {
        distance: thumb.distance(index),
        point: (thumb + index) * 0.5,
    })
}

/// One threshold for both engaging and releasing.
#[inline]
pub fn is_pinching(distance: f32, threshold_px: f32) -> bool {
    distance < threshold_px
}

/// Number of fingertips (index..pinky) curled towards the wrist, or `None`
/// when the wrist→middle MCP reference length is zero or landmarks are missing.
pub fn curled_fingers(hand: &[Vec3], curl_ratio: f32) -> Option<usize> {
    let wrist = *hand.get(WRIST)?;
    let reference_sq = wrist.distance_squared(*hand.get(MIDDLE_MCP)?);
    if reference_sq == 0.0 {
        return None;
    }
    let limit = curl_ratio * curl_ratio;
    let mut curled = 0;
    for &tip in &CURL_FINGERTIPS {
        let tip_sq = wrist.distance_squared(*hand.get(tip)?);
        if tip_sq / reference_sq < limit {
            curled += 1;
        }
    }
    Some(curled)
}

pub fn is_fist(hand: &[Vec3], curl_ratio: f32, min_curled: usize) -> bool {
    curled_fingers(hand, curl_ratio).is_some_and(|n| n >= min_curled)
}

/// 3D wrist-to-wrist distance of two hands.
pub fn wrist_distance(a: &[Vec3], b: &[Vec3]) -> Option<f32> {
    Some(a.get(WRIST)?.distance(*b.get(WRIST)?))
}
