mod common;

use common::*;
use gesture_core::constants::*;
use gesture_core::gestures::{curled_fingers, is_fist, is_pinching, read_pinch, wrist_distance};
use gesture_core::*;
use glam::{Vec2, Vec3};

#[test]
fn pinch_threshold_is_exclusive() {
    assert!(is_pinching(49.0, 50.0));
    assert!(!is_pinching(50.0, 50.0));
    assert!(!is_pinching(51.0, 50.0));
}

#[test]
fn pinch_reading_measures_screen_distance_and_midpoint() {
    let hand = pinch_hand(Vec2::new(100.0, -40.0), 30.0);
    let projection = viewport().projection();
    let r = read_pinch(&hand, projection.as_ref(), CANVAS).unwrap();
    assert!((r.distance - 30.0).abs() < 0.01, "distance {}", r.distance);
    assert!((r.point - Vec2::new(100.0, -40.0)).length() < 0.01);
}

#[test]
fn pinch_state_toggles_exactly_at_the_boundary() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    let centre = Vec2::new(-400.0, 200.0);
    let gaps = [51.0, 49.0, 51.0, 49.0, 49.0, 51.0];
    let expected = [false, true, false, true, true, false];
    for (gap, want) in gaps.iter().zip(expected) {
        d.step(vec![pinch_hand(centre, *gap)]);
        assert_eq!(d.engine.hands()[0].is_pinching, want, "gap {gap}");
    }
}

fn hand_with_tips(d: f32, tip_reach: [f32; 4]) -> Vec<Vec3> {
    let mut hand = vec![Vec3::ZERO; LANDMARK_COUNT];
    hand[MIDDLE_MCP] = Vec3::new(0.0, d, 0.0);
    for (&tip, reach) in CURL_FINGERTIPS.iter().zip(tip_reach) {
        hand[tip] = Vec3::new(0.0, reach, 0.0);
    }
    hand
}

#[test]
fn three_curled_fingertips_make_a_fist() {
    let d = 0.12;
    let hand = hand_with_tips(d, [0.6 * d, 0.7 * d, 0.74 * d, 0.9 * d]);
    assert_eq!(curled_fingers(&hand, 0.75), Some(3));
    assert!(is_fist(&hand, 0.75, 3));
}

#[test]
fn two_curled_fingertips_are_not_a_fist() {
    let d = 0.12;
    let hand = hand_with_tips(d, [0.6 * d, 0.7 * d, 0.8 * d, 0.9 * d]);
    assert_eq!(curled_fingers(&hand, 0.75), Some(2));
    assert!(!is_fist(&hand, 0.75, 3));
}

#[test]
fn curl_uses_depth_as_well() {
    let d = 0.1;
    let mut hand = hand_with_tips(d, [0.5 * d; 4]);
    // push one tip away in z only
    hand[PINKY_TIP].z = 0.2;
    assert_eq!(curled_fingers(&hand, 0.75), Some(3));
    hand[RING_TIP].z = 0.2;
    assert!(!is_fist(&hand, 0.75, 3));
}

#[test]
fn zero_reference_length_is_never_a_fist() {
    let hand = vec![Vec3::splat(0.3); LANDMARK_COUNT];
    assert_eq!(curled_fingers(&hand, 0.75), None);
    assert!(!is_fist(&hand, 0.75, 1));
}

#[test]
fn wrist_spread_is_euclidean_in_3d() {
    let a = hand_at(Vec3::new(0.2, 0.5, 0.0));
    let b = hand_at(Vec3::new(0.5, 0.9, 0.0));
    assert!((wrist_distance(&a, &b).unwrap() - 0.5).abs() < 1e-6);
}
