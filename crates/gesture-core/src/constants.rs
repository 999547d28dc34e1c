// Default tuning for the gesture engine. `EngineConfig::default()` is built from these.

// MediaPipe hand landmark layout
pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertips inspected by the fist classifier (thumb excluded).
pub const CURL_FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

// Fixed, index-addressed hand slots
pub const HAND_SLOTS: usize = 2;

// Landmark smoothing: smoothed = α·raw + (1−α)·previous
pub const SMOOTHING_ALPHA: f32 = 0.4;

// Interaction thresholds (canvas pixels)
pub const PINCH_THRESHOLD_PX: f32 = 50.0;
pub const NODE_PICK_THRESHOLD_PX: f32 = 80.0;
pub const HOVER_THRESHOLD_PX: f32 = 40.0;

// Fist detection
pub const FIST_CURL_RATIO: f32 = 0.75; // fingertip/wrist distance relative to wrist→middle MCP
pub const FIST_MIN_CURLED: usize = 3;

// Orbit rotation (radians per pixel of wrist travel)
pub const AZIMUTH_SENSITIVITY: f32 = 0.005;
pub const POLAR_SENSITIVITY: f32 = 0.005;
pub const POLAR_MARGIN: f32 = 0.01; // keeps the polar angle off the poles
pub const AUTO_ROTATE_SPEED: f32 = 0.5; // radians per second

// Two-hand zoom
pub const ZOOM_EXPONENT: f32 = 2.0;
pub const ZOOM_MIN_DISTANCE: f32 = 100.0;
pub const ZOOM_MAX_DISTANCE: f32 = 1100.0;
pub const ZOOM_DEADBAND: f32 = 0.5; // world units
pub const ZOOM_MIN_BASELINE: f32 = 1e-4; // wrist distances below this are re-captured
