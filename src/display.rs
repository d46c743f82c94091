//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game.  No game logic is performed; this module only maps the 800×600
//! logical window onto the terminal grid and translates it into commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use clean_water::entities::{
    Bucket, DropSprite, FrameView, BUCKET_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_BUCKET: Color = Color::White;
const C_DROP_CLEAN: Color = Color::Cyan;
const C_DROP_POLLUTED: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

/// Terminal area the playfield is drawn into: inside the border, below the
/// HUD row and above the hint row.
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(width: u16, height: u16) -> Self {
        Viewport {
            left: 1,
            top: 2,
            cols: width.saturating_sub(2).max(1),
            rows: height.saturating_sub(4).max(1),
        }
    }

    /// Logical x → terminal column, or `None` when off the playfield.
    fn col(&self, x: f32) -> Option<u16> {
        let c = (x / WINDOW_WIDTH * self.cols as f32).floor();
        (c >= 0.0 && c < self.cols as f32).then(|| self.left + c as u16)
    }

    /// Logical y → terminal row, or `None` when off the playfield.
    fn row(&self, y: f32) -> Option<u16> {
        let r = (y / WINDOW_HEIGHT * self.rows as f32).floor();
        (r >= 0.0 && r < self.rows as f32).then(|| self.top + r as u16)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let vp = Viewport::new(width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, view)?;

    for drop in &view.drops {
        draw_drop(out, &vp, drop)?;
    }
    draw_bucket(out, &vp, &view.bucket)?;
    draw_controls_hint(out, height)?;

    if let Some(final_score) = view.final_score {
        draw_game_over(out, width, height, final_score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:<6}", view.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {}", view.level)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_drop<W: Write>(out: &mut W, vp: &Viewport, drop: &DropSprite) -> std::io::Result<()> {
    // Drops above the top edge are still waiting to fall in.
    let (Some(col), Some(row)) = (vp.col(drop.x), vp.row(drop.y)) else {
        return Ok(());
    };
    let (glyph, color) = if drop.is_clean {
        ("●", C_DROP_CLEAN)
    } else {
        ("✱", C_DROP_POLLUTED)
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_bucket<W: Write>(out: &mut W, vp: &Viewport, bucket: &Bucket) -> std::io::Result<()> {
    // Sprite, stretched to the scaled bucket width:
    //   \____/
    let Some(row) = vp.row(bucket.y) else {
        return Ok(());
    };
    let left = vp.col(bucket.x).unwrap_or(vp.left);
    let span = ((BUCKET_WIDTH / WINDOW_WIDTH * vp.cols as f32).round() as usize).max(3);
    let span = span.min((vp.left + vp.cols).saturating_sub(left) as usize);
    if span < 2 {
        return Ok(());
    }

    out.queue(cursor::MoveTo(left, row))?;
    out.queue(style::SetForegroundColor(C_BUCKET))?;
    out.queue(Print(format!("\\{}/", "_".repeat(span - 2))))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    final_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", final_score);
    let lines: &[(&str, Color)] = &[
        ("╔═══════════════════════════════╗", Color::Red),
        ("║ Game Over! Press R to restart ║", Color::Red),
        ("╚═══════════════════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
