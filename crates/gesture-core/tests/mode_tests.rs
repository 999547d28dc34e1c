mod common;

use common::*;
use gesture_core::*;
use glam::Vec2;

#[test]
fn engine_starts_in_drag_mode() {
    let engine = GestureEngine::new(EngineConfig::default()).unwrap();
    assert_eq!(engine.mode(), InteractionMode::Drag);
}

#[test]
fn mode_names_parse_case_insensitively() {
    assert_eq!("Rotate".parse::<InteractionMode>(), Ok(InteractionMode::Rotate));
    assert_eq!(" zoom ".parse::<InteractionMode>(), Ok(InteractionMode::Zoom));
    assert_eq!(
        "pan".parse::<InteractionMode>(),
        Err(ParseModeError("pan".to_string()))
    );
    for mode in InteractionMode::ALL {
        assert_eq!(mode.to_string().parse::<InteractionMode>(), Ok(mode));
    }
}

#[test]
fn requests_wait_for_the_next_tick() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    d.request(EngineRequest::SetMode(InteractionMode::Zoom));
    assert_eq!(d.engine.mode(), InteractionMode::Drag);
    let r = d.step(vec![]);
    assert_eq!(d.engine.mode(), InteractionMode::Zoom);
    assert_eq!(
        r.events[0],
        EngineEvent::ModeChanged {
            from: InteractionMode::Drag,
            to: InteractionMode::Zoom
        }
    );
}

#[test]
fn switching_to_the_current_mode_is_a_no_op() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    d.step(vec![pinch_hand(Vec2::new(10.0, 0.0), 20.0)]);
    d.request(EngineRequest::SetMode(InteractionMode::Drag));
    let r = d.step(vec![pinch_hand(Vec2::new(10.0, 0.0), 20.0)]);
    assert!(!r
        .events
        .iter()
        .any(|e| matches!(e, EngineEvent::ModeChanged { .. } | EngineEvent::DragEnded { .. })));
    assert!(d.engine.dragged().is_some());
}

#[test]
fn leaving_drag_mode_releases_the_node_and_pinches() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    let hands = || vec![pinch_hand(Vec2::new(10.0, 0.0), 20.0), pinch_hand(Vec2::new(300.0, 0.0), 20.0)];
    d.step(hands());
    assert!(d.engine.dragged().is_some());
    assert!(d.engine.hands().iter().all(|h| h.is_pinching));

    d.request(EngineRequest::SetMode(InteractionMode::Rotate));
    let r = d.step(hands());
    assert_eq!(d.engine.mode(), InteractionMode::Rotate);
    assert!(d.engine.dragged().is_none());
    assert_eq!(d.scene.node(NodeId(1)).unwrap().pinned, None);
    assert!(d.engine.hands().iter().all(|h| !h.is_pinching));
    let ended = r
        .events
        .iter()
        .position(|e| matches!(e, EngineEvent::DragEnded { .. }))
        .unwrap();
    let changed = r
        .events
        .iter()
        .position(|e| matches!(e, EngineEvent::ModeChanged { .. }))
        .unwrap();
    assert!(ended < changed);
}

#[test]
fn leaving_rotate_mode_clears_fists_and_auto_rotate() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    d.request(EngineRequest::SetMode(InteractionMode::Rotate));
    d.step(vec![fist_hand(Vec2::ZERO, 4)]);
    assert!(d.engine.hands()[0].is_fist_closed);

    d.request(EngineRequest::ToggleAutoRotate);
    d.step(vec![fist_hand(Vec2::ZERO, 4)]);
    assert!(d.engine.auto_rotate());

    d.request(EngineRequest::SetMode(InteractionMode::Zoom));
    d.step(vec![fist_hand(Vec2::ZERO, 4)]);
    assert!(!d.engine.auto_rotate());
    assert_eq!(d.scene.auto_rotate(), None);
    assert!(!d.engine.hands()[0].is_fist_closed);
    assert!(d.engine.hands()[0].last_fist_screen.is_none());
}

#[test]
fn leaving_zoom_mode_clears_the_baseline() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    let hands = || {
        vec![
            hand_at(glam::Vec3::new(0.4, 0.5, 0.0)),
            hand_at(glam::Vec3::new(0.6, 0.5, 0.0)),
        ]
    };
    d.request(EngineRequest::SetMode(InteractionMode::Zoom));
    d.step(hands());
    assert!(d.engine.zoom_baseline().is_some());
    d.request(EngineRequest::SetMode(InteractionMode::Drag));
    d.step(hands());
    assert!(d.engine.zoom_baseline().is_none());
}

#[test]
fn queued_requests_apply_in_order() {
    let mut d = Driver::new(unsmoothed_engine(), scene_with_origin_node());
    d.request(EngineRequest::SetMode(InteractionMode::Rotate));
    d.request(EngineRequest::SetMode(InteractionMode::Zoom));
    let r = d.step(vec![]);
    assert_eq!(d.engine.mode(), InteractionMode::Zoom);
    let changes = r
        .events
        .iter()
        .filter(|e| matches!(e, EngineEvent::ModeChanged { .. }))
        .count();
    assert_eq!(changes, 2);
}
