//! All game entity types — pure data, no logic.
//!
//! Coordinates live in a fixed logical window of `WINDOW_WIDTH` ×
//! `WINDOW_HEIGHT` units; the renderer decides how that maps to the screen.

use crate::difficulty::DifficultyClock;

// ── Logical geometry ──────────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const BUCKET_WIDTH: f32 = 80.0;
pub const BUCKET_HEIGHT: f32 = 50.0;
pub const DROP_SIZE: f32 = 30.0;

/// Horizontal distance the bucket travels per tick while a direction is held.
pub const BUCKET_STEP: f32 = 8.0;

/// Gap between the bucket's bottom edge and the bottom of the window.
pub const BUCKET_BOTTOM_MARGIN: f32 = 10.0;

/// Nominal tick rate of the game loop.
pub const TICKS_PER_SECOND: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    /// Terminal: the player asked to leave.
    Quit,
}

/// Axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }
}

// ── Difficulty ────────────────────────────────────────────────────────────────

/// Spawn parameters at one instant. Recomputed every tick, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySnapshot {
    /// Probability in `[0.2, 0.5]` that a fresh drop is polluted.
    pub pollution_chance: f32,
    /// Lower bound of a fresh drop's speed, in units per tick.
    pub drop_speed: f32,
    /// Number of drops that should be on screen.
    pub active_drop_count: usize,
}

// ── Drops & bucket ────────────────────────────────────────────────────────────

/// A falling particle. `(x, y)` is the centre of its sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drop {
    pub x: f32,
    pub y: f32,
    /// Units fallen per tick.
    pub speed: f32,
    pub is_clean: bool,
}

/// The player's bucket. `(x, y)` is the top-left corner of its sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bucket {
    pub x: f32,
    pub y: f32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Flattened input for a single tick, resolved once per frame by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    pub quit: bool,
    pub restart: bool,
    pub left: bool,
    pub right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub bucket: Bucket,
    /// Grows up to the active drop count and never shrinks while playing;
    /// drops are recycled in place.
    pub drops: Vec<Drop>,
    pub score: u32,
    /// Always `score / 10 + 1`.
    pub level: u32,
    pub status: GameStatus,
    /// Time since the last difficulty reset.
    pub clock: DifficultyClock,
    /// Ticks processed since the process started.
    pub frame: u64,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

// ── Render output ─────────────────────────────────────────────────────────────

/// Where and what to draw for one drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropSprite {
    pub x: f32,
    pub y: f32,
    pub is_clean: bool,
}

/// Everything the renderer needs for one frame, in logical coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    pub bucket: Bucket,
    pub drops: Vec<DropSprite>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    /// Set only while the game is over.
    pub final_score: Option<u32>,
}
