use super::*;
use serde_json::json;

fn attrs(v: Value) -> WaveAttributes {
    v.as_object().cloned().unwrap()
}

#[test]
fn empty_attributes_give_alpha_preset() {
    let cfg = WaveConfig::from_attributes(&WaveAttributes::new()).unwrap();
    assert_eq!(cfg, WaveBuilder::alpha_highlight().build().unwrap());
}

#[test]
fn colored_selects_color_preset() {
    let cfg = WaveConfig::from_attributes(&attrs(json!({
        "colored": true,
        "base_color": "#FF202020",
        "highlight_color": "#FFFF0000",
    })))
    .unwrap();
    assert!(!cfg.alpha_shimmer);
    assert_eq!(cfg.colors, vec![Argb(0xFF20_2020), Argb::RED, Argb(0xFF20_2020)]);
}

#[test]
fn recognized_keys_override_defaults() {
    let cfg = WaveConfig::from_attributes(&attrs(json!({
        "direction": "top_to_bottom",
        "shape": "radial",
        "tilt": 0,
        "duration": 1500,
        "repeat_delay": 300,
        "repeat_mode": "reverse",
        "repeat_count": 3,
        "auto_start": false,
        "width_ratio": 2.0,
        "height_ratio": 0.5,
        "clip_to_children": false,
        "interpolator": "out_quad",
    })))
    .unwrap();
    assert_eq!(cfg.direction, Direction::TopToBottom);
    assert_eq!(cfg.shape, Shape::Radial);
    assert_eq!(cfg.tilt, 0.0);
    assert_eq!(cfg.animation_duration_ms, 1500);
    assert_eq!(cfg.repeat_delay_ms, 300);
    assert_eq!(cfg.repeat_mode, RepeatMode::Reverse);
    assert_eq!(cfg.repeat_count, RepeatCount::Finite(3));
    assert!(!cfg.auto_start);
    assert_eq!(cfg.width_ratio, 2.0);
    assert_eq!(cfg.height_ratio, 0.5);
    assert!(!cfg.clip_to_children);
    assert_eq!(cfg.interpolator, Ease::OutQuad);
}

#[test]
fn prefixed_keys_and_ordinals_are_accepted() {
    let cfg = WaveConfig::from_attributes(&attrs(json!({
        "wave_colored": true,
        "wave_direction": 3,
        "wave_shape": 1,
        "wave_repeat_mode": "RESTART",
        "wave_repeat_count": -1,
    })))
    .unwrap();
    assert!(!cfg.alpha_shimmer);
    assert_eq!(cfg.direction, Direction::BottomToTop);
    assert_eq!(cfg.shape, Shape::Radial);
    assert_eq!(cfg.repeat_mode, RepeatMode::Restart);
    assert_eq!(cfg.repeat_count, RepeatCount::Infinite);
}

#[test]
fn unknown_keys_are_ignored() {
    let cfg = WaveConfig::from_attributes(&attrs(json!({
        "sparkle": 11,
        "wave_unknown": "x",
    })))
    .unwrap();
    assert_eq!(cfg, WaveBuilder::alpha_highlight().build().unwrap());
}

#[test]
fn malformed_values_are_configuration_errors() {
    for bad in [
        json!({ "direction": "diagonal" }),
        json!({ "direction": 9 }),
        json!({ "tilt": "steep" }),
        json!({ "duration": -5 }),
        json!({ "repeat_count": -2 }),
        json!({ "repeat_count": "forever" }),
        json!({ "base_color": "#12" }),
        json!({ "colored": true, "highlight_color": "+FFFFF" }),
        json!({ "colored": "yes" }),
    ] {
        let err = WaveConfig::from_attributes(&attrs(bad)).unwrap_err();
        assert!(matches!(err, LightWaveError::Configuration(_)), "{err}");
    }
}

#[test]
fn explicit_stops_are_validated_at_build() {
    let err = WaveConfig::from_attributes(&attrs(json!({
        "colors": ["#00FFFFFF", "#FFFFFFFF", "#00FFFFFF"],
        "positions": [0.0, 1.0],
    })))
    .unwrap_err();
    assert!(matches!(err, LightWaveError::Configuration(_)));

    let cfg = WaveConfig::from_attributes(&attrs(json!({
        "colors": ["#00FFFFFF", "#FFFFFFFF", "#FFFFFFFF", "#00FFFFFF"],
        "positions": [0.0, 0.4, 0.6, 1.0],
    })))
    .unwrap();
    assert_eq!(cfg.effective_positions().as_ref(), &[0.0, 0.4, 0.6, 1.0]);
}

#[test]
fn alpha_attributes_shape_the_ramp() {
    let cfg = WaveConfig::from_attributes(&attrs(json!({
        "base_alpha": 1.0,
        "highlight_alpha": 0.0,
    })))
    .unwrap();
    assert_eq!(cfg.colors[0], Argb::WHITE);
    assert_eq!(cfg.colors[1], Argb(0x00FF_FFFF));
}

#[test]
fn json_text_must_be_an_object() {
    assert!(matches!(
        WaveConfig::from_attributes_json("[1, 2]"),
        Err(LightWaveError::Serde(_))
    ));
    assert!(matches!(
        WaveConfig::from_attributes_json("{"),
        Err(LightWaveError::Serde(_))
    ));
    let cfg = WaveConfig::from_attributes_json(r#"{ "tilt": 45 }"#).unwrap();
    assert_eq!(cfg.tilt, 45.0);
}
