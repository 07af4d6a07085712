use std::time::Duration;

use folio::animation::{Easing, Tween};
use folio::state::State;

// =============================================================================
// Easing
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_clamps_input() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f64 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_ease_in_out_midpoint() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

// =============================================================================
// Tween
// =============================================================================

#[test]
fn test_tween_linear_progress() {
    let tween = Tween::new(
        100.0,
        300.0,
        Duration::from_millis(1000),
        Duration::from_millis(200),
        Easing::Linear,
    );
    assert_eq!(tween.value_at(Duration::from_millis(900)), 100.0);
    assert_eq!(tween.value_at(Duration::from_millis(1100)), 200.0);
    assert_eq!(tween.value_at(Duration::from_millis(5000)), 300.0);
    assert!(!tween.is_complete(Duration::from_millis(1199)));
    assert!(tween.is_complete(Duration::from_millis(1200)));
}

#[test]
fn test_zero_duration_tween_is_complete() {
    let tween = Tween::new(0.0, 50.0, Duration::ZERO, Duration::ZERO, Easing::EaseIn);
    assert!(tween.is_complete(Duration::ZERO));
    assert_eq!(tween.value_at(Duration::ZERO), 50.0);
}

// =============================================================================
// State
// =============================================================================

#[test]
fn test_state_shared_between_clones() {
    let state = State::new(1);
    let other = state.clone();
    other.set(5);
    assert_eq!(state.get(), 5);
    assert_eq!(state.replace(7), 5);
    assert_eq!(other.with(|v| *v * 2), 14);
}

#[test]
fn test_state_version_tracks_writes() {
    let state = State::new(Vec::<u32>::new());
    let seen = state.version();
    assert!(!state.changed_since(seen));

    let _ = state.get();
    state.with(|v| v.len());
    assert!(!state.changed_since(seen));

    state.update(|v| v.push(1));
    assert!(state.changed_since(seen));
    assert_eq!(state.clone().version(), seen + 1);
}
