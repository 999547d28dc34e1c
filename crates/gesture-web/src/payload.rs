//! Flattening of engine events into the `sink("event", [kind, ...fields])`
//! shape consumed by the JS status and audio code. Platform-free so it can be
//! tested off wasm.

use gesture_core::{EngineEvent, NodeId};

/// One positional payload value; maps onto a JS number, string, bool or null.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Num(f64),
    Text(&'static str),
    Flag(bool),
    Null,
}

impl From<usize> for Field {
    fn from(v: usize) -> Self {
        Field::Num(v as f64)
    }
}

impl From<f32> for Field {
    fn from(v: f32) -> Self {
        Field::Num(v as f64)
    }
}

impl From<NodeId> for Field {
    fn from(id: NodeId) -> Self {
        Field::Num(id.0 as f64)
    }
}

/// Event kind plus its fields in a fixed order per kind.
pub fn event_payload(event: &EngineEvent) -> (&'static str, Vec<Field>) {
    match *event {
        EngineEvent::ModeChanged { from, to } => (
            "mode_changed",
            vec![Field::Text(from.as_str()), Field::Text(to.as_str())],
        ),
        EngineEvent::AutoRotateChanged { enabled } => {
            ("auto_rotate_changed", vec![Field::Flag(enabled)])
        }
        EngineEvent::HandLost { hand } => ("hand_lost", vec![hand.into()]),
        EngineEvent::DragStarted { hand, node } => ("drag_started", vec![hand.into(), node.into()]),
        EngineEvent::DragMoved {
            hand,
            node,
            position,
        } => (
            "drag_moved",
            vec![
                hand.into(),
                node.into(),
                position.x.into(),
                position.y.into(),
                position.z.into(),
            ],
        ),
        EngineEvent::DragEnded { hand, node } => ("drag_ended", vec![hand.into(), node.into()]),
        EngineEvent::RotateStarted { hand } => ("rotate_started", vec![hand.into()]),
        EngineEvent::ZoomBaselineCaptured {
            wrist_distance,
            camera_distance,
        } => (
            "zoom_baseline",
            vec![wrist_distance.into(), camera_distance.into()],
        ),
        EngineEvent::ZoomApplied { distance } => ("zoom_applied", vec![distance.into()]),
        EngineEvent::HoverChanged { node } => (
            "hover_changed",
            vec![node.map(Field::from).unwrap_or(Field::Null)],
        ),
    }
}
