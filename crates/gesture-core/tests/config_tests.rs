use gesture_core::config::TUNABLES;
use gesture_core::constants::*;
use gesture_core::*;

#[test]
fn defaults_are_valid_and_match_the_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.smoothing_alpha, 0.4);
    assert_eq!(config.pinch_threshold_px, 50.0);
    assert_eq!(config.node_pick_threshold_px, 80.0);
    assert_eq!(config.hover_threshold_px, 40.0);
    assert_eq!(config.fist_curl_ratio, 0.75);
    assert_eq!(config.fist_min_curled, 3);
    assert_eq!(config.zoom_exponent, 2.0);
    assert_eq!(config.zoom_min_distance, 100.0);
    assert_eq!(config.zoom_max_distance, 1100.0);
    assert_eq!(config.zoom_deadband, 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_have_logical_relationships() {
    // hover must be tighter than picking so a highlighted node is always pickable
    assert!(HOVER_THRESHOLD_PX < NODE_PICK_THRESHOLD_PX);
    assert!(PINCH_THRESHOLD_PX > 0.0);
    assert!(ZOOM_MIN_DISTANCE < ZOOM_MAX_DISTANCE);
    assert!(FIST_MIN_CURLED <= CURL_FINGERTIPS.len());
    assert!(SMOOTHING_ALPHA > 0.0 && SMOOTHING_ALPHA <= 1.0);
}

#[test]
fn every_tunable_round_trips_through_get_and_set() {
    let mut config = EngineConfig::default();
    for &name in TUNABLES {
        let value = config.get(name).unwrap();
        config.set(name, value).unwrap();
    }
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn unknown_and_invalid_values_are_rejected() {
    let mut config = EngineConfig::default();
    assert_eq!(
        config.set("pinch_px", 10.0),
        Err(ConfigError::UnknownTunable("pinch_px".into()))
    );
    assert!(matches!(
        config.set("smoothing_alpha", 1.5),
        Err(ConfigError::OutOfRange { name: "smoothing_alpha", .. })
    ));
    assert!(matches!(
        config.set("zoom_deadband", f32::NAN),
        Err(ConfigError::NotFinite { .. })
    ));
    assert!(matches!(
        config.set("fist_min_curled", 5.0),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn inverted_zoom_range_fails_validation() {
    let config = EngineConfig {
        zoom_min_distance: 800.0,
        zoom_max_distance: 200.0,
        ..EngineConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZoomRange {
            min: 800.0,
            max: 200.0
        })
    );
}

#[test]
fn overrides_parse_name_value_pairs() {
    let mut config = EngineConfig::default();
    config.apply_override("hover_threshold_px = 25").unwrap();
    config.apply_override("fist_min_curled=4").unwrap();
    assert_eq!(config.hover_threshold_px, 25.0);
    assert_eq!(config.fist_min_curled, 4);
    assert!(config.apply_override("hover_threshold_px").is_err());
    assert!(matches!(
        config.apply_override("hover_threshold_px=NaN"),
        Err(ConfigError::NotFinite { .. })
    ));
}

#[test]
fn unparsable_override_names_the_raw_text() {
    let mut config = EngineConfig::default();
    let err = config
        .apply_override("pinch_threshold_px= abc")
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::BadValue {
            name: "pinch_threshold_px".into(),
            raw: "abc".into(),
        }
    );
    assert!(err.to_string().contains("`abc`"));
    assert_eq!(config.pinch_threshold_px, 50.0);
}
