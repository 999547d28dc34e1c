//! Fist-driven orbit of the camera around its target, plus the auto-rotate
//! toggle that manual rotation overrides.

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::constants::WRIST;
use crate::events::EngineEvent;
use crate::gestures::{is_fist, Edge};
use crate::hand::HandSlot;
use crate::projection::{project_landmark, VideoProjection};
use crate::scene::Scene;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Eye position after orbiting by the given azimuth/polar deltas at constant
/// radius around the camera target. The polar angle is kept within
/// `[margin, π − margin]`.
pub fn orbit_eye(camera: &Camera, d_azimuth: f32, d_polar: f32, margin: f32) -> Vec3 {
    let offset = camera.eye - camera.target;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return camera.eye;
    }
    let azimuth = offset.x.atan2(offset.z) + d_azimuth;
    let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_polar).clamp(margin, PI - margin);
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    camera.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * radius
}

#[derive(Clone, Debug, Default)]
pub struct RotateController {
    auto_rotate: bool,
}

impl RotateController {
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_auto_rotate(
        &mut self,
        enabled: bool,
        config: &EngineConfig,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        if self.auto_rotate == enabled {
            return;
        }
        self.auto_rotate = enabled;
        scene.set_auto_rotate(enabled.then_some(config.auto_rotate_speed));
        log::info!("[rotate] auto-rotate {}", if enabled { "on" } else { "off" });
        events.push(EngineEvent::AutoRotateChanged { enabled });
    }

    /// Classify the fist of one visible hand and orbit while it is held.
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
        let Some(anchor) = slot.anchor_screen.or_else(|| {
            landmarks
                .get(WRIST)
                .and_then(|&w| project_landmark(w, projection, canvas.x, canvas.y))
        }) else {
            return;
        };
        let was = slot.is_fist_closed;
        let now = is_fist(landmarks, config.fist_curl_ratio, config.fist_min_curled);
        slot.is_fist_closed = now;

        match Edge::between(was, now) {
            Edge::Rising => {
                slot.last_fist_screen = Some(anchor);
                self.set_auto_rotate(false, config, scene, events);
                log::debug!("[rotate] hand {} grip at ({:.1},{:.1})", hand, anchor.x, anchor.y);
                events.push(EngineEvent::RotateStarted { hand });
            }
            Edge::Held => {
                let previous = slot.last_fist_screen.unwrap_or(anchor);
                let delta = anchor - previous;
                if delta != Vec2::ZERO {
                    let camera = scene.camera();
                    let eye = orbit_eye(
                        &camera,
                        delta.x * config.azimuth_sensitivity,
                        -delta.y * config.polar_sensitivity,
                        config.polar_margin,
                    );
                    scene.set_camera_pose(eye, camera.target);
                }
                slot.last_fist_screen = Some(anchor);
            }
            Edge::Falling => slot.last_fist_screen = None,
            Edge::Idle => {}
        }
    }
}
