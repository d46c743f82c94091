//! Drop spawning and movement.  All randomness comes through an injected
//! `Rng` so callers control determinism.

use rand::Rng;

use crate::entities::{DifficultySnapshot, Drop, DROP_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// A fresh drop just above the visible area.
///
/// `x` is a whole unit in `[DROP_SIZE, WINDOW_WIDTH - DROP_SIZE]`, speed is
/// in `[drop_speed, drop_speed + 1)` and the drop is clean with probability
/// `1 - pollution_chance`.
pub fn spawn_drop(snapshot: &DifficultySnapshot, rng: &mut impl Rng) -> Drop {
    let min_x = DROP_SIZE as i32;
    let max_x = (WINDOW_WIDTH - DROP_SIZE) as i32;
    let x = rng.gen_range(min_x..=max_x) as f32;
    let speed = rng.gen_range(snapshot.drop_speed..snapshot.drop_speed + 1.0);
    let is_clean = rng.gen::<f32>() > snapshot.pollution_chance;

    Drop {
        x,
        y: -DROP_SIZE,
        speed,
        is_clean,
    }
}

/// Move a drop down by its speed.  Once it falls past the bottom edge it is
/// replaced by `respawn`, which receives the difficulty in effect *now*.
pub fn advance_drop<F>(drop: &Drop, snapshot: &DifficultySnapshot, respawn: F) -> Drop
where
    F: FnOnce(&DifficultySnapshot) -> Drop,
{
    let y = drop.y + drop.speed;
    if y > WINDOW_HEIGHT {
        log::trace!("drop at x={} left the screen, respawning", drop.x);
        respawn(snapshot)
    } else {
        Drop { y, ..*drop }
    }
}
