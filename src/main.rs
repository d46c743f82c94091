mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use clean_water::compute::{init_state, tick, view};
use clean_water::config::{frame_duration, Config};
use clean_water::entities::{GameStatus, TICKS_PER_SECOND};
use clean_water::input::KeyTracker;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode while playing, so log lines
/// go to a file or nowhere.
fn init_logging(config: &Config) -> std::io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path.display());
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-rate loop: drain input, advance one tick, render, sleep out the
/// rest of the frame.  Returns once the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
) -> std::io::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_budget = frame_duration();

    let mut keys = KeyTracker::new();
    let mut state = init_state(&mut rng);
    log::info!("game started at {} ticks/s, seed {:?}", TICKS_PER_SECOND, config.seed);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                keys.record(&key);
            }
        }

        state = tick(&state, &keys.take_input(), &mut rng);
        if state.status == GameStatus::Quit {
            return Ok(());
        }

        display::render(out, &view(&state))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let result = game_loop(&mut out, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result
}
