//! Highlight of the node nearest to any free index fingertip.

use crate::camera::Camera;
use crate::constants::INDEX_TIP;
use crate::events::EngineEvent;
use crate::hand::HandSlot;
use crate::projection::{project_landmark, VideoProjection};
use crate::scene::{NodeId, Scene};
use glam::Vec2;

/// Nearest node to any of `fingertips`. The threshold seeds the running
/// minimum, so a candidate must be strictly closer than both the threshold and
/// every earlier candidate.
pub fn nearest_node(
    scene: &dyn Scene,
    camera: &Camera,
    fingertips: &[Vec2],
    canvas: Vec2,
    threshold_px: f32,
) -> Option<NodeId> {
    let mut best = None;
    let mut best_d = threshold_px;
    for &tip in fingertips {
        for (id, position) in scene.nodes() {
            let Some(screen) = position.and_then(|p| camera.world_to_screen(p, canvas)) else {
                continue;
            };
            let d = screen.distance(tip);
            if d < best_d {
                best_d = d;
                best = Some(id);
            }
        }
    }
    best
}

#[derive(Clone, Debug, Default)]
pub struct HoverHighlighter {
    hovered: Option<NodeId>,
}

impl HoverHighlighter {
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// `dragging_hand` is excluded from the search.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        hands: &[HandSlot],
        dragging_hand: Option<usize>,
        projection: Option<&VideoProjection>,
        canvas: Vec2,
        threshold_px: f32,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        let tips: Vec<Vec2> = hands
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != dragging_hand)
            .filter_map(|(_, slot)| slot.landmark(INDEX_TIP))
            .filter_map(|tip| project_landmark(tip, projection, canvas.x, canvas.y))
            .collect();
        let camera = scene.camera();
        let next = nearest_node(scene, &camera, &tips, canvas, threshold_px);
        self.set(next, scene, events);
    }

    pub fn clear(&mut self, scene: &mut dyn Scene, events: &mut Vec<EngineEvent>) {
        self.set(None, scene, events);
    }

    fn set(&mut self, next: Option<NodeId>, scene: &mut dyn Scene, events: &mut Vec<EngineEvent>) {
        if next == self.hovered {
            return;
        }
        if let Some(old) = self.hovered {
            scene.set_highlighted(old, false);
        }
        if let Some(new) = next {
            scene.set_highlighted(new, true);
        }
        self.hovered = next;
        log::debug!("[hover] {:?}", next);
        events.push(EngineEvent::HoverChanged { node: next });
    }
}
