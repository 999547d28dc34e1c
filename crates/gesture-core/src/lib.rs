//! Gesture interaction engine: turns per-frame hand landmarks into node drags,
//! camera orbits and camera zoom for a 3D graph scene.

pub mod camera;
pub mod commands;
pub mod config;
pub mod constants;
pub mod drag;
pub mod engine;
pub mod events;
pub mod gestures;
pub mod hand;
pub mod hover;
pub mod landmarks;
pub mod mode;
pub mod projection;
pub mod rotate;
pub mod scene;
pub mod smoothing;
pub mod zoom;

pub use camera::Camera;
pub use commands::{parse_voice_command, EngineRequest};
pub use config::{ConfigError, EngineConfig};
pub use drag::DraggedNode;
pub use engine::{EngineStatus, GestureEngine, TickReport};
pub use events::EngineEvent;
pub use hand::HandSlot;
pub use landmarks::{hands_from_flat, HandFrame, HandLandmarks};
pub use mode::{InteractionMode, ParseModeError};
pub use projection::{project_landmark, VideoProjection, Viewport};
pub use scene::{MemoryScene, NodeId, Scene, SceneNode};
pub use zoom::ZoomBaseline;
