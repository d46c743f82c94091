//! Keyboard adapter: folds raw crossterm key events into one `TickInput`
//! per tick.
//!
//! Input model: instead of acting on each key event individually, we keep a
//! map from each key to the frame its last press/repeat event arrived in.
//! Each frame we check which keys are still "fresh" (within `HOLD_WINDOW`
//! frames) and report them as held.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
//!   `Press` / `Repeat` / `Release` events → keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.
//!   The window outlasts the OS repeat interval, so a key stays live once it
//!   is generating repeats, but it is shorter than the initial repeat delay
//!   (typically 250–600 ms).  A held key therefore drops out for a few
//!   frames between the first press and the first repeat; a longer window
//!   would make every single tap slide the bucket much further.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::TickInput;

/// A key counts as "held" if its last press/repeat event arrived within
/// this many ticks.  8 ticks at the fixed 60 ticks/s ≈ 133 ms: longer than
/// the OS key-repeat interval, shorter than the initial repeat delay.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Held key → frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    quit: bool,
    restart: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        KeyTracker::default()
    }

    /// Record one raw key event for the current frame.
    pub fn record(&mut self, event: &KeyEvent) {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code, self.frame);
                match event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => self.restart = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    /// Resolve everything recorded so far into this frame's input and move
    /// on to the next frame.  One-shot requests (quit, restart) are cleared.
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            quit: self.quit,
            restart: self.restart,
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
        };
        self.quit = false;
        self.restart = false;
        self.frame += 1;
        input
    }
}
