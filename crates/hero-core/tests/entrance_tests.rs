use hero_core::clock::AnimationClock;
use hero_core::entrance::*;
use instant::Instant;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(400);
const DURATION: Duration = Duration::from_millis(1800);

#[test]
fn progress_follows_cue_and_duration() {
    assert_eq!(progress(0.0, 0.0, DELAY, DURATION), 0.0);
    assert_eq!(progress(0.4, 0.0, DELAY, DURATION), 0.0);
    let mid = progress(1.3, 0.0, DELAY, DURATION);
    assert!((mid - 0.5).abs() < 1e-3, "mid = {mid}");
    assert_eq!(progress(2.2, 0.0, DELAY, DURATION), 1.0);
    assert_eq!(progress(60.0, 0.0, DELAY, DURATION), 1.0);
}

#[test]
fn progress_is_relative_to_start() {
    assert_eq!(progress(10.3, 10.0, DELAY, DURATION), 0.0);
    let a = progress(1.0, 0.0, DELAY, DURATION);
    let b = progress(11.0, 10.0, DELAY, DURATION);
    assert!((a - b).abs() < 1e-5);
}

#[test]
fn progress_is_monotone_and_bounded() {
    let mut last = 0.0f32;
    for step in 0..=400 {
        let now = -1.0 + step as f64 * 0.01;
        let p = progress(now, 0.0, DELAY, DURATION);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last, "dropped at t={now}: {p} < {last}");
        last = p;
    }
}

#[test]
fn edge_handlings_agree() {
    let input = EntranceCurve::new(DELAY, DURATION, EdgeHandling::ClampInput);
    let output = EntranceCurve::new(DELAY, DURATION, EdgeHandling::ClampOutput);
    for step in 0..=300 {
        let now = -0.5 + step as f64 * 0.01;
        let (a, b) = (input.evaluate(now, 0.0), output.evaluate(now, 0.0));
        assert!((a - b).abs() < 1e-6, "t={now}: {a} vs {b}");
    }
}

#[test]
fn zero_duration_steps_at_cue() {
    let curve = EntranceCurve::new(DELAY, Duration::ZERO, EdgeHandling::ClampInput);
    assert_eq!(curve.evaluate(0.3, 0.0), 0.0);
    assert_eq!(curve.evaluate(0.5, 0.0), 1.0);
}

#[test]
fn easing_is_symmetric() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    for t in [0.1, 0.25, 0.4] {
        let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[test]
fn animation_state_latches_once_complete() {
    let curve = EntranceCurve::new(DELAY, DURATION, EdgeHandling::ClampInput);
    let mut state = AnimationState::new(0.0, curve);
    assert_eq!(state.advance(0.1), 0.0);
    assert!(!state.is_complete());
    assert_eq!(state.advance(5.0), 1.0);
    assert!(state.is_complete());
    // a timer stepping backwards cannot reopen the entrance
    assert_eq!(state.advance(1.0), 1.0);
    assert_eq!(state.progress(), 1.0);
}

#[test]
fn ramps_and_lerp() {
    assert_eq!(ramp_from(0.3, 0.0), 0.3);
    assert_eq!(ramp_from(0.3, 1.0), 1.0);
    assert!((lerp(8.0, -2.0, 0.5) - 3.0).abs() < 1e-6);
}

#[test]
fn clock_never_runs_backwards() {
    let origin = Instant::now();
    let mut clock = AnimationClock::starting_at(origin);
    assert_eq!(clock.sample(origin), 0.0);
    let two = clock.sample(origin + Duration::from_secs(2));
    assert!((two - 2.0).abs() < 1e-9);
    assert_eq!(clock.sample(origin + Duration::from_secs(1)), two);
    assert_eq!(clock.sample(origin), two);
    assert_eq!(clock.elapsed(), two);
}
