use clean_water::difficulty::snapshot;
use clean_water::droplet::*;
use clean_water::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn with_pollution(chance: f32) -> DifficultySnapshot {
    DifficultySnapshot {
        pollution_chance: chance,
        ..snapshot(0.0)
    }
}

// ── spawn_drop ────────────────────────────────────────────────────────────────

#[test]
fn spawn_places_drop_above_screen_within_width() {
    let mut rng = seeded_rng();
    let s = snapshot(0.0);
    for _ in 0..500 {
        let d = spawn_drop(&s, &mut rng);
        assert_eq!(d.y, -DROP_SIZE);
        assert!(d.x >= 30.0 && d.x <= 770.0, "x out of range: {}", d.x);
        assert_eq!(d.x, d.x.trunc());
    }
}

#[test]
fn spawn_speed_follows_snapshot() {
    let mut rng = seeded_rng();
    let s = snapshot(45.0); // drop_speed 3.5
    for _ in 0..500 {
        let d = spawn_drop(&s, &mut rng);
        assert!(d.speed >= 3.5 && d.speed < 4.5, "speed out of range: {}", d.speed);
    }
}

#[test]
fn spawn_without_pollution_is_always_clean() {
    let mut rng = seeded_rng();
    let s = with_pollution(0.0);
    assert!((0..200).all(|_| spawn_drop(&s, &mut rng).is_clean));
}

#[test]
fn spawn_with_full_pollution_is_never_clean() {
    let mut rng = seeded_rng();
    let s = with_pollution(1.0);
    assert!((0..200).all(|_| !spawn_drop(&s, &mut rng).is_clean));
}

#[test]
fn spawn_mixes_clean_and_polluted() {
    let mut rng = seeded_rng();
    let s = snapshot(0.0); // 20% polluted
    let clean = (0..1000).filter(|_| spawn_drop(&s, &mut rng).is_clean).count();
    assert!(clean > 700 && clean < 900, "clean count {}", clean);
}

#[test]
fn spawn_is_reproducible_with_same_seed() {
    let s = snapshot(0.0);
    let a: Vec<Drop> = {
        let mut rng = seeded_rng();
        (0..20).map(|_| spawn_drop(&s, &mut rng)).collect()
    };
    let b: Vec<Drop> = {
        let mut rng = seeded_rng();
        (0..20).map(|_| spawn_drop(&s, &mut rng)).collect()
    };
    assert_eq!(a, b);
}

// ── advance_drop ──────────────────────────────────────────────────────────────

#[test]
fn advance_moves_down_by_speed() {
    let d = Drop { x: 100.0, y: 50.0, speed: 3.0, is_clean: true };
    let moved = advance_drop(&d, &snapshot(0.0), |_| panic!("must not respawn"));
    assert_eq!(moved.y, 53.0);
    assert_eq!(moved.x, 100.0);
    assert_eq!(moved.speed, 3.0);
}

#[test]
fn advance_keeps_drop_exactly_at_bottom_edge() {
    let d = Drop { x: 100.0, y: 597.0, speed: 3.0, is_clean: true };
    let moved = advance_drop(&d, &snapshot(0.0), |_| panic!("must not respawn"));
    assert_eq!(moved.y, WINDOW_HEIGHT);
}

#[test]
fn advance_past_bottom_respawns() {
    let mut rng = seeded_rng();
    let d = Drop { x: 100.0, y: 595.0, speed: 10.0, is_clean: true };
    let moved = advance_drop(&d, &snapshot(0.0), |s| spawn_drop(s, &mut rng));
    assert_eq!(moved.y, -30.0);
    assert!(moved.x >= 30.0 && moved.x <= 770.0);
}

#[test]
fn respawn_uses_current_snapshot() {
    let d = Drop { x: 100.0, y: 599.0, speed: 2.0, is_clean: true };
    let now = snapshot(120.0);
    let mut seen = None;
    let _ = advance_drop(&d, &now, |s| {
        seen = Some(*s);
        Drop { x: 50.0, y: -DROP_SIZE, speed: s.drop_speed, is_clean: false }
    });
    assert_eq!(seen, Some(now));
}
