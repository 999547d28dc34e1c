//! Pinch-to-drag of graph nodes.
//!
//! At most one node is held system-wide. The grab keeps the screen offset
//! between the node and the pinch point, and the node moves on a plane at its
//! initial view depth, so it follows the fingers without snapping to them.

use crate::camera::{ray_depth_plane, Camera};
use crate::config::EngineConfig;
use crate::events::EngineEvent;
use crate::gestures::{is_pinching, read_pinch, Edge};
use crate::hand::HandSlot;
use crate::projection::VideoProjection;
use crate::scene::{NodeId, Scene};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraggedNode {
    pub hand: usize,
    pub node: NodeId,
    /// Node screen position minus pinch point at grab time.
    pub screen_offset: Vec2,
    /// Depth along the camera's principal axis at grab time.
    pub initial_depth: f32,
}

/// Nearest positioned node to `point` in screen space, strictly closer than
/// `threshold_px`. Ties keep the first node in scene order.
pub fn pick_node(
    scene: &dyn Scene,
    camera: &Camera,
    point: Vec2,
    canvas: Vec2,
    threshold_px: f32,
) -> Option<(NodeId, Vec3, Vec2)> {
    let mut best: Option<(NodeId, Vec3, Vec2, f32)> = None;
    for (id, position) in scene.nodes() {
        let Some(world) = position else { continue };
        let Some(screen) = camera.world_to_screen(world, canvas) else {
            continue;
        };
        let d = screen.distance(point);
        if d >= threshold_px {
            continue;
        }
        match best {
            Some((_, _, _, bd)) if d >= bd => {}
            _ => best = Some((id, world, screen, d)),
        }
    }
    best.map(|(id, world, screen, _)| (id, world, screen))
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    dragged: Option<DraggedNode>,
}

impl DragController {
    pub fn dragged(&self) -> Option<&DraggedNode> {
        self.dragged.as_ref()
    }

    /// Classify the pinch of one visible hand and act on its edge.
    #[allow(clippy::too_many_arguments)]
    pub fn update_hand(
        &mut self,
        hand: usize,
        slot: &mut HandSlot,
        projection: Option<&VideoProjection>,
        canvas: Vec2,
        config: &EngineConfig,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        let Some(landmarks) = slot.landmarks.as_ref() else {
            return;
        };
        let Some(reading) = read_pinch(landmarks, projection, canvas) else {
            return;
        };
        let was = slot.is_pinching;
        let now = is_pinching(reading.distance, config.pinch_threshold_px);
        slot.is_pinching = now;
        slot.pinch_screen = Some(reading.point);

        match Edge::between(was, now) {
            Edge::Rising => self.begin(hand, reading.point, canvas, config, scene, events),
            Edge::Held => self.follow(hand, reading.point, canvas, scene, events),
            Edge::Falling => {
                self.release(hand, scene, events);
            }
            Edge::Idle => {}
        }
    }

    fn begin(
        &mut self,
        hand: usize,
        point: Vec2,
        canvas: Vec2,
        config: &EngineConfig,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        if let Some(held) = self.dragged {
            log::debug!(
                "[drag] hand {} pinch ignored, node {} already held by hand {}",
                hand,
                held.node,
                held.hand
            );
            return;
        }
        let camera = scene.camera();
        let Some((node, world, screen)) =
            pick_node(scene, &camera, point, canvas, config.node_pick_threshold_px)
        else {
            return;
        };
        self.dragged = Some(DraggedNode {
            hand,
            node,
            screen_offset: screen - point,
            initial_depth: camera.view_depth(world),
        });
        scene.set_node_pinned(node, Some(world));
        log::info!("[drag] hand {} picked node {}", hand, node);
        events.push(EngineEvent::DragStarted { hand, node });
    }

    fn follow(
        &mut self,
        hand: usize,
        point: Vec2,
        canvas: Vec2,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        let Some(held) = self.dragged.filter(|d| d.hand == hand) else {
            return;
        };
        let camera = scene.camera();
        let Some((ro, rd)) = camera.screen_ray(point + held.screen_offset, canvas) else {
            return;
        };
        let Some(world) = ray_depth_plane(ro, rd, camera.forward(), held.initial_depth) else {
            return;
        };
        scene.set_node_pinned(held.node, Some(world));
        scene.set_node_position(held.node, world);
        scene.request_reheat();
        events.push(EngineEvent::DragMoved {
            hand,
            node: held.node,
            position: world,
        });
    }

    /// Release the node held by `hand`, if any. Returns whether one was held.
    pub fn release(
        &mut self,
        hand: usize,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) -> bool {
        let Some(held) = self.dragged.filter(|d| d.hand == hand) else {
            return false;
        };
        self.dragged = None;
        scene.set_node_pinned(held.node, None);
        scene.request_reheat();
        log::info!("[drag] hand {} released node {}", hand, held.node);
        events.push(EngineEvent::DragEnded {
            hand,
            node: held.node,
        });
        true
    }
}
