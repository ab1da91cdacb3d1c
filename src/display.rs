/// Rendering layer. All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable snapshot of the
/// game.  No game logic is performed; this module only translates canvas
/// coordinates into terminal cells and terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::Snapshot;
use crate::geometry::{Bounded, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_PLAYER_POWERED: Color = Color::Cyan;
const C_BULLET: Color = Color::Yellow;
const C_ENEMY: Color = Color::Red;
const C_ITEM: Color = Color::Blue;
const C_SCORE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const FILL: &str = "█";

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the simulation canvas onto a grid of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(canvas_width: f32, canvas_height: f32, cols: u16, rows: u16) -> Self {
        Self {
            canvas_width,
            canvas_height,
            cols,
            rows,
        }
    }

    /// Cells covered by `rect`, clipped to the grid.  Anything with a visible
    /// area covers at least one cell.  `None` when entirely off-screen.
    pub fn cells(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let sx = self.cols as f32 / self.canvas_width;
        let sy = self.rows as f32 / self.canvas_height;

        let left = (rect.x * sx).floor().max(0.0);
        let top = (rect.y * sy).floor().max(0.0);
        let right = (rect.right() * sx).ceil().min(self.cols as f32);
        let bottom = (rect.bottom() * sy).ceil().min(self.rows as f32);

        if right <= left || bottom <= top {
            return None;
        }
        Some((
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    snapshot: &Snapshot<'_>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for enemy in snapshot.enemies {
        fill_rect(out, viewport, enemy.bounds(), C_ENEMY)?;
    }
    for item in snapshot.items {
        fill_rect(out, viewport, item.bounds(), C_ITEM)?;
    }
    for bullet in snapshot.bullets {
        fill_rect(out, viewport, bullet.bounds(), C_BULLET)?;
    }

    let player_color = if snapshot.power_up_active {
        C_PLAYER_POWERED
    } else {
        C_PLAYER
    };
    fill_rect(out, viewport, snapshot.player.bounds(), player_color)?;
    draw_score(out, snapshot.score)?;

    // The overlay sits on top of the final frame so the score stays readable
    if snapshot.game_over {
        draw_game_over(out, viewport)?;
    } else {
        draw_controls_hint(out, viewport)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    rect: Rect,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = viewport.cells(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let line = FILL.repeat(w as usize);
    for dy in 0..h {
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, score: u32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {score}")))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   ENTER : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("GAME OVER", Color::White),
        ("", Color::White),
        ("Press Enter to Restart", Color::White),
    ];

    let cx = viewport.cols / 2;
    let start_row = (viewport.rows / 2).saturating_sub(2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
