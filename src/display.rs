//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! pixel-space entities into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use volley_shooter::entities::{Entity, EntityKind};
use volley_shooter::store::GameState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the simulation's pixel space onto the terminal grid.  Row 0 holds the
/// HUD and the last row the controls hint; everything between is play area.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
        }
    }

    /// Grid large enough to show a `width` × `height` pixel area.
    pub fn from_render_size(width: f32, height: f32, cell_width: f32, cell_height: f32) -> Self {
        let cell_width = cell_width.max(1.0);
        let cell_height = cell_height.max(1.0);
        let cols = (width / cell_width).round() as u16;
        let rows = (height / cell_height).round() as u16 + 2;
        Self::new(cols, rows, cell_width, cell_height)
    }

    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2)
    }

    /// Size of the simulated area in pixels.
    pub fn render_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_width,
            self.play_rows() as f32 * self.cell_height,
        )
    }

    /// Terminal cells covered by `entity`, clipped to the play area, as
    /// `(col_start, col_end, row_start, row_end)` with exclusive ends.
    fn cells(&self, entity: &Entity) -> Option<(u16, u16, u16, u16)> {
        let r = entity.rect();
        let clip = |v: f32, max: u16| v.max(0.0).min(max as f32) as u16;
        let c0 = clip((r.x / self.cell_width).floor(), self.cols);
        let c1 = clip(((r.x + r.width) / self.cell_width).ceil(), self.cols);
        let r0 = clip((r.y / self.cell_height).floor(), self.play_rows());
        let r1 = clip(((r.y + r.height) / self.cell_height).ceil(), self.play_rows());
        if c0 >= c1 || r0 >= r1 {
            None
        } else {
            Some((c0, c1, r0 + 1, r1 + 1))
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state)?;

    for enemy in state.enemies() {
        draw_entity(out, view, enemy)?;
    }
    for projectile in state.projectiles() {
        draw_entity(out, view, projectile)?;
    }
    draw_entity(out, view, state.player())?;

    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Kills: {}", state.score())))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(out: &mut W, view: &Viewport, entity: &Entity) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = view.cells(entity) else {
        return Ok(());
    };
    let (glyph, color) = match entity.kind {
        EntityKind::Player => ("█", C_PLAYER),
        EntityKind::Enemy => ("▓", C_ENEMY),
        EntityKind::Projectile => ("║", C_PROJECTILE),
    };
    let line = glyph.repeat((c1 - c0) as usize);
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over notice ──────────────────────────────────────────────────────────

/// Blocking notification drawn over the last frame.  The caller waits for a
/// key before resetting the session.
pub fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, score: u32) -> std::io::Result<()> {
    let score_line = format!("Kills: {:>6}", score);
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        ("Press any key to restart", Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
