use clean_water::difficulty::*;
use proptest::prelude::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// ── snapshot ──────────────────────────────────────────────────────────────────

#[test]
fn snapshot_at_zero_is_base() {
    let s = snapshot(0.0);
    assert!(approx(s.pollution_chance, 0.2));
    assert!(approx(s.drop_speed, 2.0));
    assert_eq!(s.active_drop_count, 2);
}

#[test]
fn pollution_after_one_minute() {
    assert!(approx(snapshot(60.0).pollution_chance, 0.4));
}

#[test]
fn pollution_clamped_at_ninety_seconds() {
    assert!(approx(snapshot(90.0).pollution_chance, 0.5));
    assert!(approx(snapshot(600.0).pollution_chance, 0.5));
}

#[test]
fn drop_speed_ramps_then_saturates() {
    assert!(approx(snapshot(15.0).drop_speed, 2.5));
    assert!(approx(snapshot(60.0).drop_speed, 4.0));
    assert!(approx(snapshot(120.0).drop_speed, 6.0));
    assert!(approx(snapshot(1000.0).drop_speed, 6.0));
}

#[test]
fn active_drops_step_every_thirty_seconds() {
    assert_eq!(snapshot(29.9).active_drop_count, 2);
    assert_eq!(snapshot(30.0).active_drop_count, 3);
    assert_eq!(snapshot(60.0).active_drop_count, 4);
    assert_eq!(snapshot(90.0).active_drop_count, 5);
    assert_eq!(snapshot(3600.0).active_drop_count, 5);
}

#[test]
fn negative_elapsed_is_base() {
    assert_eq!(snapshot(-5.0), snapshot(0.0));
}

// ── DifficultyClock ───────────────────────────────────────────────────────────

#[test]
fn clock_starts_at_zero() {
    let c = DifficultyClock::new();
    assert_eq!(c.elapsed(), 0.0);
    assert_eq!(c.snapshot(), snapshot(0.0));
}

#[test]
fn clock_advance_counts_ticks() {
    let c = DifficultyClock::new().advance().advance().advance();
    assert_eq!(c.ticks(), 3);
    assert!(approx(c.elapsed(), 0.05));
}

#[test]
fn clock_steps_land_on_exact_tick_boundaries() {
    let mut c = DifficultyClock::new();
    for _ in 0..(30 * 60 - 1) {
        c = c.advance();
    }
    assert_eq!(c.snapshot().active_drop_count, 2);
    c = c.advance();
    assert_eq!(c.elapsed(), 30.0);
    assert_eq!(c.snapshot().active_drop_count, 3);
    assert_eq!(DifficultyClock::from_ticks(60 * 60).elapsed(), 60.0);
    assert_eq!(DifficultyClock::from_ticks(60 * 60).snapshot().active_drop_count, 4);
}

#[test]
fn clock_stays_exact_after_long_idle() {
    let hours = DifficultyClock::from_ticks(10 * 3600 * 60);
    assert_eq!(hours.elapsed(), 36_000.0);
    assert_eq!(hours.advance().ticks(), 10 * 3600 * 60 + 1);
}

#[test]
fn clock_reset_returns_to_base() {
    let c = DifficultyClock::from_ticks(500 * 60).reset();
    assert_eq!(c.ticks(), 0);
    assert_eq!(c.elapsed(), 0.0);
    assert_eq!(c.snapshot(), snapshot(0.0));
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn snapshot_stays_in_bounds(t in 0.0f32..100_000.0) {
        let s = snapshot(t);
        prop_assert!(s.pollution_chance >= 0.2 && s.pollution_chance <= 0.5);
        prop_assert!(s.drop_speed >= 2.0 && s.drop_speed <= 6.0);
        prop_assert!(s.active_drop_count >= 2 && s.active_drop_count <= 5);
    }

    #[test]
    fn snapshot_is_non_decreasing(t in 0.0f32..10_000.0, dt in 0.0f32..500.0) {
        let a = snapshot(t);
        let b = snapshot(t + dt);
        prop_assert!(b.pollution_chance >= a.pollution_chance);
        prop_assert!(b.drop_speed >= a.drop_speed);
        prop_assert!(b.active_drop_count >= a.active_drop_count);
    }
}
