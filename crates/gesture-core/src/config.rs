//! Runtime-tunable engine parameters.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown tunable `{0}`")]
    UnknownTunable(String),
    #[error("tunable `{name}` expects a number, got `{raw}`")]
    BadValue { name: String, raw: String },
    #[error("tunable `{name}` must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("tunable `{name}` = {value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("zoom_min_distance ({min}) must be below zoom_max_distance ({max})")]
    ZoomRange { min: f32, max: f32 },
}

/// Names accepted by [`EngineConfig::set`].
pub const TUNABLES: &[&str] = &[
    "smoothing_alpha",
    "pinch_threshold_px",
    "node_pick_threshold_px",
    "hover_threshold_px",
    "fist_curl_ratio",
    "fist_min_curled",
    "azimuth_sensitivity",
    "polar_sensitivity",
    "polar_margin",
    "auto_rotate_speed",
    "zoom_exponent",
    "zoom_min_distance",
    "zoom_max_distance",
    "zoom_deadband",
    "zoom_min_baseline",
];

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub smoothing_alpha: f32,
    pub pinch_threshold_px: f32,
    pub node_pick_threshold_px: f32,
    pub hover_threshold_px: f32,
    pub fist_curl_ratio: f32,
    pub fist_min_curled: usize,
    pub azimuth_sensitivity: f32,
    pub polar_sensitivity: f32,
    pub polar_margin: f32,
    pub auto_rotate_speed: f32,
    pub zoom_exponent: f32,
    pub zoom_min_distance: f32,
    pub zoom_max_distance: f32,
    pub zoom_deadband: f32,
    pub zoom_min_baseline: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: SMOOTHING_ALPHA,
            pinch_threshold_px: PINCH_THRESHOLD_PX,
            node_pick_threshold_px: NODE_PICK_THRESHOLD_PX,
            hover_threshold_px: HOVER_THRESHOLD_PX,
            fist_curl_ratio: FIST_CURL_RATIO,
            fist_min_curled: FIST_MIN_CURLED,
            azimuth_sensitivity: AZIMUTH_SENSITIVITY,
            polar_sensitivity: POLAR_SENSITIVITY,
            polar_margin: POLAR_MARGIN,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            zoom_exponent: ZOOM_EXPONENT,
            zoom_min_distance: ZOOM_MIN_DISTANCE,
            zoom_max_distance: ZOOM_MAX_DISTANCE,
            zoom_deadband: ZOOM_DEADBAND,
            zoom_min_baseline: ZOOM_MIN_BASELINE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &name in TUNABLES {
            let value = self.get(name).ok_or_else(|| ConfigError::UnknownTunable(name.into()))?;
            check(name, value)?;
        }
        if self.zoom_min_distance >= self.zoom_max_distance {
            return Err(ConfigError::ZoomRange {
                min: self.zoom_min_distance,
                max: self.zoom_max_distance,
            });
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        Some(match name {
            "smoothing_alpha" => self.smoothing_alpha,
            "pinch_threshold_px" => self.pinch_threshold_px,
            "node_pick_threshold_px" => self.node_pick_threshold_px,
            "hover_threshold_px" => self.hover_threshold_px,
            "fist_curl_ratio" => self.fist_curl_ratio,
            "fist_min_curled" => self.fist_min_curled as f32,
            "azimuth_sensitivity" => self.azimuth_sensitivity,
            "polar_sensitivity" => self.polar_sensitivity,
            "polar_margin" => self.polar_margin,
            "auto_rotate_speed" => self.auto_rotate_speed,
            "zoom_exponent" => self.zoom_exponent,
            "zoom_min_distance" => self.zoom_min_distance,
            "zoom_max_distance" => self.zoom_max_distance,
            "zoom_deadband" => self.zoom_deadband,
            "zoom_min_baseline" => self.zoom_min_baseline,
            _ => return None,
        })
    }

    /// Set one tunable by name. The value is range-checked; on error the
    /// config is left unchanged.
    pub fn set(&mut self, name: &str, value: f32) -> Result<(), ConfigError> {
        let key = TUNABLES
            .iter()
            .copied()
            .find(|&t| t == name)
            .ok_or_else(|| ConfigError::UnknownTunable(name.into()))?;
        check(key, value)?;
        match key {
            "smoothing_alpha" => self.smoothing_alpha = value,
            "pinch_threshold_px" => self.pinch_threshold_px = value,
            "node_pick_threshold_px" => self.node_pick_threshold_px = value,
            "hover_threshold_px" => self.hover_threshold_px = value,
            "fist_curl_ratio" => self.fist_curl_ratio = value,
            "fist_min_curled" => self.fist_min_curled = value.round() as usize,
            "azimuth_sensitivity" => self.azimuth_sensitivity = value,
            "polar_sensitivity" => self.polar_sensitivity = value,
            "polar_margin" => self.polar_margin = value,
            "auto_rotate_speed" => self.auto_rotate_speed = value,
            "zoom_exponent" => self.zoom_exponent = value,
            "zoom_min_distance" => self.zoom_min_distance = value,
            "zoom_max_distance" => self.zoom_max_distance = value,
            "zoom_deadband" => self.zoom_deadband = value,
            "zoom_min_baseline" => self.zoom_min_baseline = value,
            _ => return Err(ConfigError::UnknownTunable(name.into())),
        }
        log::debug!("[config] {} = {}", key, value);
        Ok(())
    }

    /// Apply a `name=value` override.
    pub fn apply_override(&mut self, spec: &str) -> Result<(), ConfigError> {
        let (name, raw) = spec
            .split_once('=')
            .ok_or_else(|| ConfigError::UnknownTunable(spec.into()))?;
        let name = name.trim();
        let key = TUNABLES
            .iter()
            .copied()
            .find(|&t| t == name)
            .ok_or_else(|| ConfigError::UnknownTunable(name.into()))?;
        let value: f32 = raw.trim().parse().map_err(|_| ConfigError::BadValue {
            name: key.into(),
            raw: raw.trim().into(),
        })?;
        if !value.is_finite() {
            return Err(ConfigError::NotFinite { name: key, value });
        }
        self.set(key, value)
    }
}

fn range(name: &str) -> (f32, f32) {
    match name {
        "smoothing_alpha" => (f32::MIN_POSITIVE, 1.0),
        "fist_curl_ratio" => (f32::MIN_POSITIVE, 1.0),
        "fist_min_curled" => (1.0, 4.0),
        "polar_margin" => (0.0, 0.5),
        "zoom_exponent" => (f32::MIN_POSITIVE, 8.0),
        "zoom_min_baseline" => (f32::MIN_POSITIVE, 1.0),
        "zoom_min_distance" | "zoom_max_distance" => (f32::MIN_POSITIVE, f32::MAX),
        _ => (0.0, f32::MAX),
    }
}

fn check(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    let (min, max) = range(name);
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
