//! Two-hand spread zoom: wrist separation relative to a captured baseline
//! scales the camera's distance to its target.

use crate::config::EngineConfig;
use crate::events::EngineEvent;
use crate::gestures::wrist_distance;
use crate::hand::HandSlot;
use crate::scene::Scene;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBaseline {
    pub initial_wrist_distance: f32,
    pub initial_camera_distance: f32,
}

/// Camera distance for the current wrist separation, clamped to the
/// configured range.
pub fn zoom_distance(baseline: &ZoomBaseline, wrist_distance: f32, config: &EngineConfig) -> f32 {
    let ratio = wrist_distance / baseline.initial_wrist_distance;
    let scale = ratio.powf(config.zoom_exponent);
    (baseline.initial_camera_distance * scale)
        .clamp(config.zoom_min_distance, config.zoom_max_distance)
}

#[derive(Clone, Debug, Default)]
pub struct ZoomController {
    baseline: Option<ZoomBaseline>,
}

impl ZoomController {
    pub fn baseline(&self) -> Option<&ZoomBaseline> {
        self.baseline.as_ref()
    }

    pub fn clear(&mut self) {
        if self.baseline.take().is_some() {
            log::debug!("[zoom] baseline cleared");
        }
    }

    pub fn update(
        &mut self,
        hands: &[HandSlot],
        config: &EngineConfig,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        let current = match hands {
            [a, b, ..] => a
                .landmarks
                .as_deref()
                .zip(b.landmarks.as_deref())
                .and_then(|(a, b)| wrist_distance(a, b)),
            _ => None,
        };
        let Some(current) = current else {
            self.clear();
            return;
        };
        let camera = scene.camera();

        let baseline = match self.baseline {
            Some(b) if b.initial_wrist_distance >= config.zoom_min_baseline => b,
            _ => {
                let captured = ZoomBaseline {
                    initial_wrist_distance: current,
                    initial_camera_distance: camera.distance(),
                };
                self.baseline = Some(captured);
                log::info!(
                    "[zoom] baseline wrist={:.4} camera={:.1}",
                    captured.initial_wrist_distance,
                    captured.initial_camera_distance
                );
                events.push(EngineEvent::ZoomBaselineCaptured {
                    wrist_distance: captured.initial_wrist_distance,
                    camera_distance: captured.initial_camera_distance,
                });
                return;
            }
        };

        let distance = zoom_distance(&baseline, current, config);
        if !distance.is_finite() || (distance - camera.distance()).abs() <= config.zoom_deadband {
            return;
        }
        let direction = (camera.eye - camera.target).normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }
        scene.set_camera_pose(camera.target + direction * distance, camera.target);
        log::trace!("[zoom] distance {:.1}", distance);
        events.push(EngineEvent::ZoomApplied { distance });
    }
}
