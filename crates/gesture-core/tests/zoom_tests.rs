mod common;

use common::*;
use gesture_core::zoom::{zoom_distance, ZoomBaseline};
use gesture_core::*;
use glam::Vec3;

fn wrists(left_x: f32, right_x: f32) -> Vec<HandLandmarks> {
    vec![
        hand_at(Vec3::new(left_x, 0.5, 0.0)),
        hand_at(Vec3::new(right_x, 0.5, 0.0)),
    ]
}

fn zoom_driver() -> Driver {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    d.request(EngineRequest::SetMode(InteractionMode::Zoom));
    d
}

fn zoom_applied(r: &TickReport) -> bool {
    r.events
        .iter()
        .any(|e| matches!(e, EngineEvent::ZoomApplied { .. }))
}

#[test]
fn first_two_hand_frame_only_captures_the_baseline() {
    let mut d = zoom_driver();
    let r = d.step(wrists(0.4, 0.6));
    let b = *d.engine.zoom_baseline().unwrap();
    assert!((b.initial_wrist_distance - 0.2).abs() < 1e-6);
    assert_eq!(b.initial_camera_distance, 500.0);
    assert!(!zoom_applied(&r));
    assert_eq!(d.scene.camera().eye, Vec3::new(0.0, 0.0, 500.0));
}

#[test]
fn unchanged_spread_never_moves_the_camera() {
    let mut d = zoom_driver();
    for _ in 0..20 {
        let r = d.step(wrists(0.4, 0.6));
        assert!(!zoom_applied(&r));
    }
    assert_eq!(d.scene.camera().eye, Vec3::new(0.0, 0.0, 500.0));
}

#[test]
fn spread_scales_distance_quadratically_within_limits() {
    let mut d = zoom_driver();
    d.step(wrists(0.4, 0.6));

    // ratio 0.5 -> scale 0.25 -> 125
    let r = d.step(wrists(0.45, 0.55));
    assert!(zoom_applied(&r));
    let cam = d.scene.camera();
    assert!((cam.distance() - 125.0).abs() < 0.01);
    assert!(cam.eye.x.abs() < 1e-3 && cam.eye.y.abs() < 1e-3 && cam.eye.z > 0.0);

    // ratio 1.5 -> 1125, clamped to 1100
    d.step(wrists(0.35, 0.65));
    assert!((d.scene.camera().distance() - 1100.0).abs() < 0.01);

    // ratio 0.1 -> 5, clamped to 100
    d.step(wrists(0.49, 0.51));
    assert!((d.scene.camera().distance() - 100.0).abs() < 0.01);
}

#[test]
fn sub_deadband_changes_are_ignored() {
    let mut d = zoom_driver();
    d.step(wrists(0.4, 0.6));
    // 500 * (0.20008 / 0.2)^2 is about 500.4
    let r = d.step(wrists(0.4, 0.60008));
    assert!(!zoom_applied(&r));
    assert_eq!(d.scene.camera().distance(), 500.0);
}

#[test]
fn losing_a_hand_clears_the_baseline() {
    let mut d = zoom_driver();
    d.step(wrists(0.4, 0.6));
    let mut one = wrists(0.4, 0.6);
    one.truncate(1);
    let r = d.step(one);
    assert!(r.events.contains(&EngineEvent::HandLost { hand: 1 }));
    assert!(d.engine.zoom_baseline().is_none());
    assert!(!d.engine.status().zooming);

    // re-acquiring captures a fresh baseline at the new spread
    d.step(wrists(0.3, 0.7));
    let b = d.engine.zoom_baseline().unwrap();
    assert!((b.initial_wrist_distance - 0.4).abs() < 1e-6);
    assert_eq!(d.scene.camera().distance(), 500.0);
}

#[test]
fn degenerate_baseline_is_recaptured() {
    let mut d = zoom_driver();
    d.step(wrists(0.5, 0.5));
    let b = *d.engine.zoom_baseline().unwrap();
    assert_eq!(b.initial_wrist_distance, 0.0);

    let r = d.step(wrists(0.4, 0.6));
    assert!(!zoom_applied(&r));
    assert!((d.engine.zoom_baseline().unwrap().initial_wrist_distance - 0.2).abs() < 1e-6);
}

#[test]
fn zoom_mode_suppresses_pinch_and_fist_state() {
    let mut d = zoom_driver();
    // every landmark at the wrist: thumb and index coincide
    d.step(wrists(0.4, 0.6));
    assert!(d.engine.hands().iter().all(|h| !h.is_pinching && !h.is_fist_closed));
    assert!(d.engine.dragged().is_none());
}

#[test]
fn zoom_distance_matches_the_formula() {
    let config = EngineConfig::default();
    let baseline = ZoomBaseline {
        initial_wrist_distance: 0.2,
        initial_camera_distance: 400.0,
    };
    assert!((zoom_distance(&baseline, 0.2, &config) - 400.0).abs() < 1e-3);
    assert!((zoom_distance(&baseline, 0.3, &config) - 900.0).abs() < 1e-2);
    assert_eq!(zoom_distance(&baseline, 1.0, &config), 1100.0);
}
