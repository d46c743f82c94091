//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::collision::bucket_catches;
use crate::difficulty::DifficultyClock;
use crate::droplet::{advance_drop, spawn_drop};
use crate::entities::{
    Bucket, DifficultySnapshot, Drop, DropSprite, FrameView, GameState, GameStatus, TickInput,
    BUCKET_BOTTOM_MARGIN, BUCKET_HEIGHT, BUCKET_STEP, BUCKET_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Points needed per level.
const POINTS_PER_LEVEL: u32 = 10;

pub fn level_for(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Right-most bucket position that keeps the sprite fully on screen.
pub fn max_bucket_x() -> f32 {
    WINDOW_WIDTH - BUCKET_WIDTH
}

fn spawn_drops(count: usize, snapshot: &DifficultySnapshot, rng: &mut impl Rng) -> Vec<Drop> {
    (0..count).map(|_| spawn_drop(snapshot, rng)).collect()
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh game: bucket centred at the bottom, base difficulty,
/// one drop per active slot.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let clock = DifficultyClock::new();
    let snapshot = clock.snapshot();
    GameState {
        bucket: Bucket {
            x: WINDOW_WIDTH / 2.0 - BUCKET_WIDTH / 2.0,
            y: WINDOW_HEIGHT - BUCKET_HEIGHT - BUCKET_BOTTOM_MARGIN,
        },
        drops: spawn_drops(snapshot.active_drop_count, &snapshot, rng),
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        clock,
        frame: 0,
    }
}

/// Start over after a game over.  The bucket stays where it was; score,
/// level and the difficulty clock go back to their initial values and the
/// drop collection is rebuilt for the reset difficulty.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    let clock = state.clock.reset();
    let snapshot = clock.snapshot();
    log::info!("restarting after final score {}", state.score);
    GameState {
        drops: spawn_drops(snapshot.active_drop_count, &snapshot, rng),
        score: 0,
        level: 1,
        status: GameStatus::Playing,
        clock,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_bucket_left(state: &GameState) -> GameState {
    let x = (state.bucket.x - BUCKET_STEP).max(0.0);
    GameState {
        bucket: Bucket { x, ..state.bucket },
        ..state.clone()
    }
}

pub fn move_bucket_right(state: &GameState) -> GameState {
    let x = (state.bucket.x + BUCKET_STEP).min(max_bucket_x());
    GameState {
        bucket: Bucket { x, ..state.bucket },
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the game by one fixed tick.  Movement is a fixed step per tick
/// and the difficulty clock counts ticks.  All randomness comes through
/// `rng` so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    let frame = state.frame + 1;

    if input.quit {
        log::info!("quit requested at frame {}", frame);
        return GameState {
            status: GameStatus::Quit,
            frame,
            ..state.clone()
        };
    }

    match state.status {
        GameStatus::Quit => return state.clone(),
        GameStatus::GameOver => {
            let idle = GameState {
                clock: state.clock.advance(),
                frame,
                ..state.clone()
            };
            return if input.restart { restart(&idle, rng) } else { idle };
        }
        GameStatus::Playing => {}
    }

    // ── 1. Difficulty for this tick ──────────────────────────────────────────
    let clock = state.clock.advance();
    let snapshot = clock.snapshot();

    // ── 2. Grow the drop collection (never shrinks) ──────────────────────────
    let mut drops = state.drops.clone();
    if drops.len() < snapshot.active_drop_count {
        log::debug!(
            "growing drops {} -> {} at {:.1}s",
            drops.len(),
            snapshot.active_drop_count,
            clock.elapsed()
        );
        let missing = snapshot.active_drop_count - drops.len();
        drops.extend(spawn_drops(missing, &snapshot, rng));
    }

    // ── 3. Bucket movement ───────────────────────────────────────────────────
    let mut moved = GameState {
        drops,
        clock,
        frame,
        ..state.clone()
    };
    if input.left {
        moved = move_bucket_left(&moved);
    }
    if input.right {
        moved = move_bucket_right(&moved);
    }

    // ── 4. Fall, catch, respawn ──────────────────────────────────────────────
    let bucket = moved.bucket;
    let mut score = moved.score;
    let mut status = GameStatus::Playing;

    for drop in moved.drops.iter_mut() {
        let advanced = advance_drop(drop, &snapshot, |s| spawn_drop(s, &mut *rng));
        if !bucket_catches(&bucket, &advanced) {
            *drop = advanced;
            continue;
        }

        // Respawn either way so the same drop cannot trigger twice.
        *drop = spawn_drop(&snapshot, rng);
        if advanced.is_clean {
            score += 1;
        } else {
            log::info!("polluted drop caught, game over with score {}", score);
            status = GameStatus::GameOver;
            break;
        }
    }

    let level = level_for(score);
    if level > moved.level {
        log::info!("level {} reached at score {}", level, score);
    }

    GameState {
        score,
        level,
        status,
        ..moved
    }
}

// ── Render output ────────────────────────────────────────────────────────────

pub fn view(state: &GameState) -> FrameView {
    let game_over = state.is_game_over();
    FrameView {
        bucket: state.bucket,
        drops: state
            .drops
            .iter()
            .map(|d| DropSprite {
                x: d.x,
                y: d.y,
                is_clean: d.is_clean,
            })
            .collect(),
        score: state.score,
        level: state.level,
        game_over,
        final_score: if game_over { Some(state.score) } else { None },
    }
}
