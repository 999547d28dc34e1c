//! Browser front end for the gesture engine. The wasm bridge connects the
//! MediaPipe hand landmarker, the three.js graph, the menu and speech
//! recognition to the engine; on other targets only the event payload mapping
//! is built.

mod payload;

pub use payload::{event_payload, Field};

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod scene;

#[cfg(target_arch = "wasm32")]
pub use bridge::{start, GestureBridge};
