use super::*;

#[test]
fn alpha_preset_defaults() {
    let cfg = WaveBuilder::alpha_highlight().build().unwrap();
    assert!(cfg.alpha_shimmer);
    assert_eq!(
        cfg.colors,
        vec![Argb(0x00FF_FFFF), Argb(0x80FF_FFFF), Argb(0x00FF_FFFF)]
    );
    assert_eq!(cfg.effective_positions().as_ref(), &[0.0, 0.5, 1.0]);
    assert_eq!(cfg.direction, Direction::LeftToRight);
    assert_eq!(cfg.shape, Shape::Linear);
    assert_eq!(cfg.tilt, 20.0);
    assert_eq!(cfg.animation_duration(), Duration::from_millis(1000));
    assert_eq!(cfg.repeat_count, RepeatCount::Infinite);
}

#[test]
fn color_preset_uses_base_highlight_base() {
    let cfg = WaveBuilder::color_highlight()
        .base_color(Argb::BLUE)
        .highlight_color(Argb::RED)
        .build()
        .unwrap();
    assert!(!cfg.alpha_shimmer);
    assert_eq!(cfg.colors, vec![Argb::BLUE, Argb::RED, Argb::BLUE]);
}

#[test]
fn preset_specific_setters_are_ignored_by_the_other_preset() {
    let a = WaveBuilder::alpha_highlight()
        .base_color(Argb::RED)
        .build()
        .unwrap();
    assert_eq!(a.colors, WaveBuilder::alpha_highlight().build().unwrap().colors);

    let c = WaveBuilder::color_highlight()
        .highlight_alpha(0.1)
        .build()
        .unwrap();
    assert_eq!(c.colors, WaveBuilder::color_highlight().build().unwrap().colors);
}

#[test]
fn alpha_ramp_follows_alpha_setters() {
    let cfg = WaveBuilder::alpha_highlight()
        .base_alpha(0.3)
        .highlight_alpha(1.0)
        .build()
        .unwrap();
    assert_eq!(cfg.colors[0].alpha(), 77);
    assert_eq!(cfg.colors[1].alpha(), 255);
    assert_eq!(cfg.colors[2], cfg.colors[0]);
}

#[test]
fn explicit_colors_without_positions_are_evenly_spaced() {
    let cfg = WaveBuilder::color_highlight()
        .colors(vec![Argb::RED, Argb::GREEN, Argb::RED])
        .positions(None)
        .build()
        .unwrap();
    assert_eq!(cfg.effective_positions().as_ref(), &[0.0, 0.5, 1.0]);
}

#[test]
fn effective_positions_always_match_color_count() {
    for n in 2..9 {
        let colors = vec![Argb::WHITE; n];
        let cfg = WaveBuilder::alpha_highlight().colors(colors).build().unwrap();
        let p = cfg.effective_positions();
        assert_eq!(p.len(), cfg.colors.len());
        assert_eq!(p[0], 0.0);
        assert_eq!(p[n - 1], 1.0);
        assert!(p.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn mismatched_positions_are_a_configuration_error() {
    let err = WaveBuilder::alpha_highlight()
        .colors(vec![Argb::RED, Argb::GREEN, Argb::BLUE])
        .positions(Some(vec![0.0, 1.0]))
        .build()
        .unwrap_err();
    assert!(matches!(err, LightWaveError::Configuration(_)));
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        WaveBuilder::alpha_highlight().colors(vec![Argb::RED]),
        WaveBuilder::alpha_highlight().positions(Some(vec![0.0, 0.7, 0.5])),
        WaveBuilder::alpha_highlight().positions(Some(vec![0.0, 0.5, 1.5])),
        WaveBuilder::alpha_highlight().duration(Duration::ZERO),
        WaveBuilder::alpha_highlight().width_ratio(0.0),
        WaveBuilder::alpha_highlight().height_ratio(-2.0),
        WaveBuilder::alpha_highlight().width_ratio(f64::NAN),
        WaveBuilder::alpha_highlight().tilt(f64::INFINITY),
    ];
    for b in cases {
        assert!(matches!(b.build(), Err(LightWaveError::Configuration(_))));
    }
}

#[test]
fn ratios_scale_and_round_extents() {
    let cfg = WaveBuilder::alpha_highlight()
        .width_ratio(1.5)
        .height_ratio(0.25)
        .build()
        .unwrap();
    assert_eq!(cfg.width(101.0), 152.0);
    assert_eq!(cfg.height(10.0), 3.0);
    assert_eq!(cfg.height(1.0), 1.0);
}

#[test]
fn timing_carries_repeat_parameters() {
    let cfg = WaveBuilder::alpha_highlight()
        .duration(Duration::from_millis(800))
        .repeat_delay(Duration::from_millis(400))
        .repeat_mode(RepeatMode::Reverse)
        .repeat_count(RepeatCount::Finite(2))
        .build()
        .unwrap();
    let t = cfg.animator_timing();
    assert_eq!(t.sweep, Duration::from_millis(800));
    assert_eq!(t.repeat_delay, Duration::from_millis(400));
    assert_eq!(t.repeat_mode, RepeatMode::Reverse);
    assert_eq!(t.repeat_count, RepeatCount::Finite(2));
}

#[test]
fn config_json_round_trips() {
    let cfg = WaveBuilder::color_highlight()
        .direction(Direction::BottomToTop)
        .shape(Shape::Radial)
        .build()
        .unwrap();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: WaveConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn vertical_directions() {
    assert!(!Direction::LeftToRight.is_vertical());
    assert!(!Direction::RightToLeft.is_vertical());
    assert!(Direction::TopToBottom.is_vertical());
    assert!(Direction::BottomToTop.is_vertical());
}
