use anyhow::Context;
use crate::payload::{event_payload, Field};
use crate::scene::JsScene;
use gesture_core::{
    hands_from_flat, parse_voice_command, EngineConfig, EngineRequest, GestureEngine, HandFrame,
    InteractionMode, NodeId, Viewport,
};
use glam::{Vec2, Vec3};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gesture-web starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn field_value(field: Field) -> JsValue {
    match field {
        Field::Num(v) => JsValue::from_f64(v),
        Field::Text(s) => JsValue::from_str(s),
        Field::Flag(b) => JsValue::from_bool(b),
        Field::Null => JsValue::NULL,
    }
}

fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[wasm_bindgen]
pub struct GestureBridge {
    engine: GestureEngine,
    scene: JsScene,
}

#[wasm_bindgen]
impl GestureBridge {
    /// `sink(kind, payload)` receives every scene write and engine event.
    #[wasm_bindgen(constructor)]
    pub fn new(sink: js_sys::Function) -> Result<GestureBridge, JsValue> {
        let engine = GestureEngine::new(EngineConfig::default())
            .context("default gesture config")
            .map_err(|e| js_err(format!("{e:#}")))?;
        Ok(Self {
            engine,
            scene: JsScene::new(sink),
        })
    }

    pub fn sync_node(&mut self, id: u32, x: f32, y: f32, z: f32) {
        let position = [x, y, z]
            .iter()
            .all(|v| v.is_finite())
            .then(|| Vec3::new(x, y, z));
        self.scene.sync_node(NodeId(id), position);
    }

    pub fn remove_node(&mut self, id: u32) {
        self.scene.remove_node(NodeId(id));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sync_camera(&mut self, ex: f32, ey: f32, ez: f32, tx: f32, ty: f32, tz: f32, fov_deg: f32) {
        self.scene.sync_camera(
            Vec3::new(ex, ey, ez),
            Vec3::new(tx, ty, tz),
            fov_deg.to_radians(),
        );
    }

    /// Menu click: queue a mode change for the next tick.
    pub fn set_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode: InteractionMode = name.parse().map_err(js_err)?;
        self.engine.request(EngineRequest::SetMode(mode));
        Ok(())
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.engine.request(EngineRequest::ToggleAutoRotate);
    }

    /// Recognized speech. Returns whether it mapped to a request.
    pub fn voice_command(&mut self, transcript: &str) -> bool {
        match parse_voice_command(transcript) {
            Some(request) => {
                log::info!("[voice] {:?} -> {:?}", transcript, request);
                self.engine.request(request);
                true
            }
            None => false,
        }
    }

    pub fn set_tunable(&mut self, name: &str, value: f32) -> Result<(), JsValue> {
        self.engine.set_tunable(name, value).map_err(js_err)
    }

    /// Run one engine tick with the landmarks of the current video frame.
    /// Returns false when the frame had already been processed.
    pub fn tick(
        &mut self,
        flat: &[f32],
        num_hands: usize,
        timestamp_ms: f64,
        video: &web::HtmlVideoElement,
        canvas: &web::HtmlCanvasElement,
    ) -> bool {
        let timestamp_ms = if timestamp_ms.is_finite() {
            timestamp_ms
        } else {
            now_ms()
        };
        let frame = HandFrame::new(timestamp_ms, hands_from_flat(flat, num_hands.min(2)));
        let viewport = Viewport::new(
            Vec2::new(video.video_width() as f32, video.video_height() as f32),
            Vec2::new(canvas.client_width() as f32, canvas.client_height() as f32),
        );
        let report = self.engine.tick(&frame, viewport, &mut self.scene);
        for event in &report.events {
            let (kind, fields) = event_payload(event);
            let payload: Vec<JsValue> = std::iter::once(JsValue::from_str(kind))
                .chain(fields.into_iter().map(field_value))
                .collect();
            self.scene.emit("event", &payload);
        }
        report.processed
    }

    pub fn mode(&self) -> String {
        self.engine.mode().to_string()
    }

    pub fn auto_rotate(&self) -> bool {
        self.engine.auto_rotate()
    }

    pub fn dragged_node(&self) -> Option<u32> {
        self.engine.dragged().map(|d| d.node.0)
    }

    pub fn hovered_node(&self) -> Option<u32> {
        self.engine.hovered().map(|n| n.0)
    }
}
