//! Native harness: drives the gesture engine through a scripted session of
//! synthetic hands (pinch drag, voice switch to rotate, fist orbit,
//! auto-rotate, two-hand zoom, hand loss) against an in-memory scene.
//!
//! Usage: `gesture-replay [--seed N] [--set name=value]...`

use anyhow::Context;
use gesture_core::constants::*;
use gesture_core::projection::unproject_screen;
use gesture_core::{
    parse_voice_command, Camera, EngineConfig, EngineRequest, GestureEngine, HandFrame,
    HandLandmarks, InteractionMode, MemoryScene, NodeId, Scene, TickReport, VideoProjection,
    Viewport,
};
use glam::{Vec2, Vec3};
use rand::prelude::*;

const CANVAS: Vec2 = Vec2::new(1280.0, 720.0);
const VIDEO: Vec2 = Vec2::new(1920.0, 1080.0);
const FRAME_MS: f64 = 1000.0 / 30.0;
const JITTER_PX: f32 = 1.5;

struct Args {
    seed: u64,
    overrides: Vec<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        seed: 7,
        overrides: Vec::new(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                let v = it.next().context("--seed needs a value")?;
                args.seed = v.parse().with_context(|| format!("bad seed {v:?}"))?;
            }
            "--set" => args
                .overrides
                .push(it.next().context("--set needs name=value")?),
            other => anyhow::bail!("unknown argument {other:?}"),
        }
    }
    Ok(args)
}

/// Synthetic hand factory for one viewport.
struct Hands {
    params: VideoProjection,
    rng: StdRng,
}

impl Hands {
    fn norm(&mut self, screen: Vec2) -> Vec3 {
        let jitter = Vec2::new(
            self.rng.gen_range(-JITTER_PX..=JITTER_PX),
            self.rng.gen_range(-JITTER_PX..=JITTER_PX),
        );
        unproject_screen(screen + jitter, &self.params, CANVAS)
    }

    fn flat(&mut self, screen: Vec2) -> HandLandmarks {
        let p = self.norm(screen);
        std::iter::repeat(p).take(LANDMARK_COUNT).collect()
    }

    /// Thumb and index tips `gap` pixels apart around `center`.
    fn pinch(&mut self, center: Vec2, gap: f32) -> HandLandmarks {
        let mut hand = self.flat(center);
        hand[THUMB_TIP] = self.norm(center - Vec2::new(gap * 0.5, 0.0));
        hand[INDEX_TIP] = self.norm(center + Vec2::new(gap * 0.5, 0.0));
        hand
    }

    /// Closed fist with the wrist at `wrist_screen`.
    fn fist(&mut self, wrist_screen: Vec2) -> HandLandmarks {
        let wrist = self.norm(wrist_screen);
        let mut hand: HandLandmarks = std::iter::repeat(wrist).take(LANDMARK_COUNT).collect();
        hand[MIDDLE_MCP] = wrist + Vec3::new(0.0, 0.1, 0.0);
        for &tip in CURL_FINGERTIPS.iter() {
            hand[tip] = wrist + Vec3::new(0.0, 0.05, 0.0);
        }
        hand[THUMB_TIP] = wrist + Vec3::new(0.08, 0.04, 0.0);
        hand
    }
}

struct Session {
    engine: GestureEngine,
    scene: MemoryScene,
    viewport: Viewport,
    t_ms: f64,
}

impl Session {
    fn step(&mut self, hands: Vec<HandLandmarks>) -> TickReport {
        self.t_ms += FRAME_MS;
        self.scene.advance((FRAME_MS / 1000.0) as f32);
        let frame = HandFrame::new(self.t_ms, hands);
        let report = self.engine.tick(&frame, self.viewport, &mut self.scene);
        for event in &report.events {
            log::debug!("[replay] t={:.0}ms {:?}", self.t_ms, event);
        }
        report
    }

    fn say(&mut self, transcript: &str) {
        match parse_voice_command(transcript) {
            Some(request) => self.engine.request(request),
            None => log::warn!("[replay] ignored utterance {:?}", transcript),
        }
    }
}

fn build_scene() -> MemoryScene {
    let mut scene = MemoryScene::new(Camera::new(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO));
    scene.add_node(NodeId(1), Some(Vec3::ZERO));
    scene.add_node(NodeId(2), Some(Vec3::new(120.0, 40.0, -30.0)));
    scene.add_node(NodeId(3), Some(Vec3::new(-90.0, -60.0, 20.0)));
    // not yet laid out
    scene.add_node(NodeId(4), None);
    scene
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = EngineConfig::default();
    for spec in &args.overrides {
        config
            .apply_override(spec)
            .with_context(|| format!("applying --set {spec}"))?;
    }
    let engine = GestureEngine::new(config).context("engine config")?;
    let viewport = Viewport::new(VIDEO, CANVAS);
    let params = viewport
        .projection()
        .context("replay viewport has no visible area")?;
    let mut hands = Hands {
        params,
        rng: StdRng::seed_from_u64(args.seed),
    };
    let mut s = Session {
        engine,
        scene: build_scene(),
        viewport,
        t_ms: 0.0,
    };

    log::info!("[replay] phase: pinch drag");
    for i in 0..30 {
        let center = Vec2::new(i as f32 * 6.0, i as f32 * 2.0);
        let frame = vec![hands.pinch(center, 10.0)];
        s.step(frame);
    }
    for _ in 0..5 {
        let frame = vec![hands.pinch(Vec2::new(180.0, 60.0), 140.0)];
        s.step(frame);
    }
    if let Some(p) = s.scene.node_position(NodeId(1)) {
        log::info!("[replay] node 1 settled at {:?}", p);
    }

    log::info!("[replay] phase: fist orbit");
    s.say("switch to rotate");
    for i in 0..30 {
        let frame = vec![hands.fist(Vec2::new(-150.0 + i as f32 * 10.0, 0.0))];
        s.step(frame);
    }
    log::info!("[replay] camera eye after orbit {:?}", s.scene.camera().eye);

    log::info!("[replay] phase: auto-rotate");
    s.engine.request(EngineRequest::ToggleAutoRotate);
    for _ in 0..30 {
        s.step(Vec::new());
    }
    log::info!("[replay] camera eye after auto-rotate {:?}", s.scene.camera().eye);

    log::info!("[replay] phase: two-hand zoom");
    s.engine
        .request(EngineRequest::SetMode(InteractionMode::Zoom));
    for i in 0..30 {
        let half = 100.0 + i as f32 * 8.0;
        let frame = vec![
            hands.flat(Vec2::new(-half, 0.0)),
            hands.flat(Vec2::new(half, 0.0)),
        ];
        s.step(frame);
    }
    let eye = s.scene.camera().eye;
    log::info!(
        "[replay] camera distance after zoom {:.1}",
        (eye - s.scene.camera().target).length()
    );

    log::info!("[replay] phase: hands lost");
    s.step(Vec::new());

    log::info!("[replay] final status {:?}", s.engine.status());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;
    run(args)
}
