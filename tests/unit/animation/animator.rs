use super::*;

fn timing(sweep_ms: u64, delay_ms: u64, mode: RepeatMode, count: RepeatCount) -> AnimatorTiming {
    AnimatorTiming {
        sweep: Duration::from_millis(sweep_ms),
        repeat_delay: Duration::from_millis(delay_ms),
        repeat_mode: mode,
        repeat_count: count,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn end_value_extends_past_one_by_delay_ratio() {
    let a = WaveAnimator::new(timing(1000, 500, RepeatMode::Restart, RepeatCount::Infinite));
    assert!(approx(a.end_value(), 1.5));
    assert_eq!(a.cycle_duration(), Duration::from_millis(1500));

    let b = WaveAnimator::new(timing(1000, 0, RepeatMode::Restart, RepeatCount::Infinite));
    assert!(approx(b.end_value(), 1.0));
}

#[test]
fn idle_animator_ignores_ticks() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Restart, RepeatCount::Infinite));
    assert!(!a.advance(Duration::from_millis(100)));
    assert_eq!(a.animated_value(), 0.0);
}

#[test]
fn value_tracks_play_time_through_pause() {
    let mut a = WaveAnimator::new(timing(1000, 500, RepeatMode::Restart, RepeatCount::Infinite));
    a.start();
    assert!(a.advance(Duration::from_millis(500)));
    // 500 of 1500 ms, scaled to the 1.5 range.
    assert!(approx(a.animated_value(), 0.5));
    a.advance(Duration::from_millis(700));
    assert!(approx(a.animated_value(), 1.2));
}

#[test]
fn restart_wraps_to_zero() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Restart, RepeatCount::Infinite));
    a.start();
    a.advance(Duration::from_millis(1250));
    assert!(approx(a.animated_value(), 0.25));
    assert!(a.is_started());
}

#[test]
fn reverse_plays_odd_cycles_backwards() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Reverse, RepeatCount::Infinite));
    a.start();
    a.advance(Duration::from_millis(1250));
    assert!(approx(a.animated_value(), 0.75));
    a.advance(Duration::from_millis(1000));
    assert!(approx(a.animated_value(), 0.25));
}

#[test]
fn finite_restart_freezes_on_end_value() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Restart, RepeatCount::Finite(1)));
    a.start();
    a.advance(Duration::from_millis(1500));
    assert!(a.is_started());
    a.advance(Duration::from_millis(600));
    assert!(!a.is_started());
    assert!(a.is_finished());
    assert!(approx(a.animated_value(), 1.0));
    assert!(!a.advance(Duration::from_millis(10)));
}

#[test]
fn finite_reverse_freezes_on_start_after_backward_cycle() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Reverse, RepeatCount::Finite(1)));
    a.start();
    a.advance(Duration::from_millis(2500));
    assert!(a.is_finished());
    assert!(approx(a.animated_value(), 0.0));
}

#[test]
fn zero_repeat_count_plays_once() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Restart, RepeatCount::Finite(0)));
    a.start();
    a.advance(Duration::from_millis(999));
    assert!(a.is_started());
    a.advance(Duration::from_millis(1));
    assert!(a.is_finished());
}

#[test]
fn start_after_finish_restarts_from_zero() {
    let mut a = WaveAnimator::new(timing(100, 0, RepeatMode::Restart, RepeatCount::Finite(0)));
    a.start();
    a.advance(Duration::from_millis(200));
    assert!(a.is_finished());
    a.start();
    assert!(a.is_started());
    assert_eq!(a.animated_value(), 0.0);
    assert_eq!(a.play_time(), Duration::ZERO);
}

#[test]
fn start_and_cancel_are_idempotent() {
    let mut a = WaveAnimator::new(timing(1000, 0, RepeatMode::Restart, RepeatCount::Infinite));
    a.start();
    a.advance(Duration::from_millis(300));
    a.start();
    assert_eq!(a.play_time(), Duration::from_millis(300));
    a.cancel();
    a.cancel();
    assert!(!a.is_started());
    assert!(approx(a.animated_value(), 0.3));
}

#[test]
fn total_cycles_counts_first_play() {
    assert_eq!(RepeatCount::Infinite.total_cycles(), None);
    assert_eq!(RepeatCount::Finite(0).total_cycles(), Some(1));
    assert_eq!(RepeatCount::Finite(3).total_cycles(), Some(4));
}
