use crate::mode::InteractionMode;
use crate::scene::NodeId;
use glam::Vec3;

/// Things that happened during a tick, in order. Consumed by status UI and
/// audio feedback sinks; the engine itself never reads them back.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    ModeChanged {
        from: InteractionMode,
        to: InteractionMode,
    },
    AutoRotateChanged {
        enabled: bool,
    },
    HandLost {
        hand: usize,
    },
    DragStarted {
        hand: usize,
        node: NodeId,
    },
    DragMoved {
        hand: usize,
        node: NodeId,
        position: Vec3,
    },
    DragEnded {
        hand: usize,
        node: NodeId,
    },
    RotateStarted {
        hand: usize,
    },
    ZoomBaselineCaptured {
        wrist_distance: f32,
        camera_distance: f32,
    },
    ZoomApplied {
        distance: f32,
    },
    HoverChanged {
        node: Option<NodeId>,
    },
}
