//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! model. No game logic is performed; this module only translates state
//! into terminal commands.

use std::collections::VecDeque;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_game::{EntityKind, GameModel, Graphic, Position};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_POWER_UPS: Color = Color::Magenta;
const C_LOG: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;
const C_PAUSED: Color = Color::Yellow;

/// Emoji glyphs take two terminal columns.
const CELL_WIDTH: u16 = 2;
/// First terminal row of the play field (row 0 is the HUD, row 1 the border).
const FIELD_TOP: u16 = 2;
const FIELD_LEFT: u16 = 1;

/// Front-end state that is not part of the simulation.
#[derive(Default)]
pub struct Screen {
    pub log: VecDeque<String>,
    pub paused: bool,
}

impl Screen {
    const LOG_LINES: usize = 12;

    pub fn push_log(&mut self, line: impl Into<String>) {
        if self.log.len() == Self::LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(line.into());
    }
}

/// Columns and rows the field needs: every column the ship can reach and
/// every row an object can still occupy before culling.
fn field_size(model: &GameModel) -> (u16, u16) {
    let config = model.config();
    let cols = config.move_bound.max(config.width).max(1) as u16;
    let rows = config.height.max(config.move_bound - 1).max(0) as u16 + 1;
    (cols, rows)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, model: &GameModel, screen: &Screen) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = field_size(model);
    draw_border(out, cols, rows)?;
    draw_hud(out, model)?;

    // Ship comes first; objects drawn later sit on top of it.
    let ship = model.ship();
    draw_entity(out, EntityKind::Ship, ship.render(), ship.position(), cols, rows)?;
    for object in model.objects() {
        draw_entity(out, object.kind(), object.render(), object.position(), cols, rows)?;
    }

    draw_log(out, screen, cols)?;
    draw_controls_hint(out, rows)?;

    if screen.paused {
        draw_paused(out, cols, rows)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, FIELD_TOP + rows + 2))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let inner = (cols * CELL_WIDTH) as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, FIELD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

    out.queue(cursor::MoveTo(0, FIELD_TOP + rows))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in FIELD_TOP..FIELD_TOP + rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(FIELD_LEFT + cols * CELL_WIDTH, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, model: &GameModel) -> std::io::Result<()> {
    let ship = model.ship();

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}  ", ship.score())))?;

    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(format!("Health: {:>4}  ", ship.health())))?;

    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {:>2}  ", model.level())))?;

    let power_ups = model
        .objects()
        .iter()
        .filter(|o| o.kind().is_power_up())
        .count();
    out.queue(style::SetForegroundColor(C_HUD_POWER_UPS))?;
    out.queue(Print(format!("Power-ups: {:>2}", power_ups)))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    kind: EntityKind,
    graphic: Graphic,
    position: Position,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    if position.x < 0 || position.y < 0 {
        return Ok(());
    }
    let (x, y) = (position.x as u16, position.y as u16);
    if x >= cols || y >= rows {
        return Ok(());
    }

    let color = match kind {
        EntityKind::Ship => Color::White,
        EntityKind::Asteroid => Color::Grey,
        EntityKind::Enemy => Color::Green,
        EntityKind::Bullet => Color::Cyan,
        EntityKind::HealthPowerUp => Color::Magenta,
        EntityKind::ShieldPowerUp => Color::Blue,
    };
    out.queue(cursor::MoveTo(FIELD_LEFT + x * CELL_WIDTH, FIELD_TOP + y))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(graphic.text))?;
    Ok(())
}

// ── Log panel (right of the field) ────────────────────────────────────────────

fn draw_log<W: Write>(out: &mut W, screen: &Screen, cols: u16) -> std::io::Result<()> {
    let left = FIELD_LEFT + cols * CELL_WIDTH + 3;
    out.queue(style::SetForegroundColor(C_LOG))?;
    for (i, line) in screen.log.iter().enumerate() {
        out.queue(cursor::MoveTo(left, FIELD_TOP + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Controls hint (below the field) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, FIELD_TOP + rows + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D : Move   F : Fire   P : Pause   Q : Quit"))?;
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let msg = "── PAUSED ──";
    let cx = FIELD_LEFT + cols * CELL_WIDTH / 2;
    let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, FIELD_TOP + rows / 2))?;
    out.queue(style::SetForegroundColor(C_PAUSED))?;
    out.queue(Print(msg))?;
    Ok(())
}
