// Synthetic hands and scenes shared by the integration tests.

#![allow(dead_code)]

use gesture_core::constants::*;
use gesture_core::projection::unproject_screen;
use gesture_core::*;
use glam::{Vec2, Vec3};

pub const CANVAS: Vec2 = Vec2::new(1280.0, 720.0);

/// Video and surface of the same size, so no crop is applied.
pub fn viewport() -> Viewport {
    Viewport::new(CANVAS, CANVAS)
}

/// Normalized landmark that projects to `screen` on the test viewport.
pub fn norm_at(screen: Vec2) -> Vec3 {
    let params = viewport().projection().expect("valid viewport");
    unproject_screen(screen, &params, CANVAS)
}

/// Hand whose thumb and index tips sit `gap_px` apart horizontally around
/// `center`. Every other landmark sits at `center`.
pub fn pinch_hand(center: Vec2, gap_px: f32) -> HandLandmarks {
    let c = norm_at(center);
    let mut hand: HandLandmarks = std::iter::repeat(c).take(LANDMARK_COUNT).collect();
    hand[THUMB_TIP] = norm_at(center - Vec2::new(gap_px * 0.5, 0.0));
    hand[INDEX_TIP] = norm_at(center + Vec2::new(gap_px * 0.5, 0.0));
    hand
}

/// Hand with its wrist projected at `wrist_screen`, a wrist→middle MCP length
/// of 0.1 and the first `curled` of the four fingertips at 0.07 from the wrist
/// (the rest at 0.15).
pub fn fist_hand(wrist_screen: Vec2, curled: usize) -> HandLandmarks {
    let wrist = norm_at(wrist_screen);
    let mut hand: HandLandmarks = std::iter::repeat(wrist).take(LANDMARK_COUNT).collect();
    hand[MIDDLE_MCP] = wrist + Vec3::new(0.0, -0.1, 0.0);
    for (n, &tip) in CURL_FINGERTIPS.iter().enumerate() {
        let reach = if n < curled { 0.07 } else { 0.15 };
        hand[tip] = wrist + Vec3::new(0.0, -reach, 0.0);
    }
    hand[THUMB_TIP] = wrist + Vec3::new(0.2, 0.0, 0.0);
    hand
}

/// Flat hand with every landmark at one normalized point; only the wrist
/// position matters for zoom.
pub fn hand_at(wrist: Vec3) -> HandLandmarks {
    std::iter::repeat(wrist).take(LANDMARK_COUNT).collect()
}

pub fn camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO)
}

/// Scene with one node at the world origin (screen centre).
pub fn scene_with_origin_node() -> MemoryScene {
    let mut scene = MemoryScene::new(camera());
    scene.add_node(NodeId(1), Some(Vec3::ZERO));
    scene
}

/// Engine with smoothing disabled so synthetic positions are used verbatim.
pub fn unsmoothed_engine() -> GestureEngine {
    let config = EngineConfig {
        smoothing_alpha: 1.0,
        ..EngineConfig::default()
    };
    GestureEngine::new(config).expect("valid config")
}

/// Feeds frames with strictly increasing timestamps.
pub struct Driver {
    pub engine: GestureEngine,
    pub scene: MemoryScene,
    pub t_ms: f64,
}

impl Driver {
    pub fn new(engine: GestureEngine, scene: MemoryScene) -> Self {
        Self {
            engine,
            scene,
            t_ms: 0.0,
        }
    }

    pub fn step(&mut self, hands: Vec<HandLandmarks>) -> TickReport {
        self.t_ms += 33.0;
        let frame = HandFrame::new(self.t_ms, hands);
        self.engine.tick(&frame, viewport(), &mut self.scene)
    }

    pub fn request(&mut self, request: EngineRequest) {
        self.engine.request(request);
    }
}

/// World point on the z = 0 plane that the test camera shows at `screen`.
pub fn world_at(screen: Vec2) -> Vec3 {
    let cam = camera();
    let (ro, rd) = cam.screen_ray(screen, CANVAS).expect("ray");
    gesture_core::camera::ray_depth_plane(ro, rd, cam.forward(), cam.view_depth(Vec3::ZERO))
        .expect("plane hit")
}
