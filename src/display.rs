//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and read-only views of the
//! session. No game logic is performed; field pixels are scaled onto the
//! terminal grid and every sprite is drawn as a filled block of glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use pantheon::constants::{BACKGROUND_TILE_HEIGHT, FIELD_HEIGHT, FIELD_TOP, FIELD_WIDTH};
use pantheon::entities::Sprite;
use pantheon::geometry::Rect;
use pantheon::snapshot::{self, Hud, SpriteView};
use pantheon::state::{GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BACKDROP: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_STAGE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_BOSS_BAR: Color = Color::Magenta;
const C_READY: Color = Color::Green;
const C_COOLING: Color = Color::DarkYellow;
const C_LOCKED: Color = Color::DarkGrey;
const C_FLASH: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const ABILITY_NAMES: [&str; 2] = ["FLARE", "BOLT"];
const METER_CELLS: usize = 5;

/// Mapping from field pixels to terminal cells.
struct Viewport {
    width: u16,
    height: u16,
    cols: f32,
    rows: f32,
}

impl Viewport {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cols: f32::from(width.saturating_sub(2)),
            rows: f32::from(height.saturating_sub(4)),
        }
    }

    /// Inclusive cell range covered by `r`, clipped to the field interior.
    fn cells(&self, r: &Rect) -> Option<(u16, u16, u16, u16)> {
        if self.cols < 1.0 || self.rows < 1.0 {
            return None;
        }
        let to_col = |x: f32| x / FIELD_WIDTH * self.cols;
        let to_row = |y: f32| (y - FIELD_TOP) / FIELD_HEIGHT * self.rows;

        let c0 = to_col(r.x).floor().max(0.0);
        let c1 = (to_col(r.right()).ceil() - 1.0).min(self.cols - 1.0);
        let r0 = to_row(r.y).floor().max(0.0);
        let r1 = (to_row(r.bottom()).ceil() - 1.0).min(self.rows - 1.0);
        if c1 < c0 || r1 < r0 {
            return None;
        }
        Some((c0 as u16 + 1, c1 as u16 + 1, r0 as u16 + 2, r1 as u16 + 2))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, best_score: u32) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height);
    let hud = snapshot::hud(state);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_backdrop(out, &view, state.background.offset())?;

    for sprite in snapshot::sprites(state) {
        if sprite.sprite == Sprite::Player && hud.blink_off {
            continue;
        }
        draw_sprite(out, &view, &sprite)?;
    }

    draw_hud(out, &view, &hud)?;
    draw_controls_hint(out, &view)?;

    match hud.status {
        GameStatus::Playing => {}
        GameStatus::Paused => {
            draw_banner(out, &view, &[("PAUSED", Color::Cyan), ("P - Resume", Color::White)])?
        }
        GameStatus::Message => {
            let text = hud.message.as_deref().unwrap_or_default();
            draw_banner(
                out,
                &view,
                &[(text, Color::Yellow), ("ENTER - Continue", Color::White)],
            )?;
        }
        GameStatus::GameOver => draw_game_over(out, &view, &hud, best_score)?,
    }

    // Park the cursor on the hint row.
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & backdrop ─────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// Sparse star field that scrolls with the background offset.
fn draw_backdrop<W: Write>(out: &mut W, view: &Viewport, offset: f32) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BACKDROP))?;
    let spacing = BACKGROUND_TILE_HEIGHT / 4.0;
    let mut y = FIELD_TOP + offset % spacing;
    let mut lane = 0usize;
    while y < FIELD_TOP + FIELD_HEIGHT {
        let x = ((lane * 7919) % 600) as f32;
        if let Some((c, _, r, _)) = view.cells(&Rect::new(x, y, 1.0, 1.0)) {
            out.queue(cursor::MoveTo(c, r))?;
            out.queue(Print("·"))?;
        }
        y += spacing;
        lane += 1;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, hud: &Hud) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>7}", hud.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_STAGE))?;
    out.queue(Print(format!("  [ {} ]", hud.stage_label)))?;

    if let Some(fraction) = hud.boss_health {
        let cells = 10usize;
        let filled = (fraction * cells as f32).ceil() as usize;
        out.queue(style::SetForegroundColor(C_BOSS_BAR))?;
        out.queue(Print(format!(
            "  BOSS {}{}",
            "█".repeat(filled),
            "░".repeat(cells - filled.min(cells))
        )))?;
    }

    // Abilities and lives, right-aligned
    let mut right = Vec::new();
    for (i, name) in ABILITY_NAMES.iter().enumerate() {
        let (text, color) = if !hud.abilities_unlocked[i] {
            (format!("[{} ----] ", i + 1), C_LOCKED)
        } else {
            let fraction = hud.ability_cooldowns[i];
            let charged = METER_CELLS.saturating_sub((fraction * METER_CELLS as f32).ceil() as usize);
            let color = if fraction == 0.0 { C_READY } else { C_COOLING };
            (
                format!(
                    "[{} {} {}{}] ",
                    i + 1,
                    name,
                    "■".repeat(charged),
                    "□".repeat(METER_CELLS - charged)
                ),
                color,
            )
        };
        right.push((text, color));
    }
    let hearts: String = "♥".repeat(hud.lives as usize);
    let empty: String = "♡".repeat(hud.max_lives.saturating_sub(hud.lives) as usize);
    right.push((format!("Lives:{hearts}{empty}"), C_HUD_LIVES));

    let len: usize = right.iter().map(|(t, _)| t.chars().count()).sum();
    out.queue(cursor::MoveTo(view.width.saturating_sub(len as u16 + 1), 0))?;
    for (text, color) in &right {
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(text))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn glyph(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::Player => ("▲", Color::White),
        Sprite::Dart => ("║", Color::Cyan),
        Sprite::Quill => ("↓", Color::Magenta),
        Sprite::Rock => ("●", Color::Grey),
        Sprite::Flare { enraged: false } => ("✶", Color::Yellow),
        Sprite::Flare { enraged: true } => ("✶", Color::Red),
        Sprite::Bolt { enraged: false } => ("ϟ", Color::Cyan),
        Sprite::Bolt { enraged: true } => ("ϟ", Color::Blue),
        Sprite::Raptor => ("v", Color::Green),
        Sprite::Golem { wings_closed: false } => ("O", Color::DarkYellow),
        Sprite::Golem { wings_closed: true } => ("o", Color::DarkYellow),
        Sprite::Charger { charging: false } => ("M", Color::DarkRed),
        Sprite::Charger { charging: true } => ("M", Color::Red),
        Sprite::SolarBoss { enraged: false } => ("☀", Color::Yellow),
        Sprite::SolarBoss { enraged: true } => ("☀", Color::Red),
        Sprite::StormBoss { enraged: false } => ("Z", Color::Blue),
        Sprite::StormBoss { enraged: true } => ("Z", Color::Magenta),
    }
}

fn draw_sprite<W: Write>(out: &mut W, view: &Viewport, sprite: &SpriteView) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = view.cells(&sprite.bounds) else {
        return Ok(());
    };
    let (symbol, color) = glyph(sprite.sprite);
    out.queue(style::SetForegroundColor(if sprite.flashed { C_FLASH } else { color }))?;
    let line = symbol.repeat((c1 - c0 + 1) as usize);
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑↓→ / WASD : Move   SPACE : Fire   1 2 : Abilities   P : Pause   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, view: &Viewport, lines: &[(&str, Color)]) -> std::io::Result<()> {
    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    hud: &Hud,
    best_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>7}", hud.score);
    let new_best = hud.score >= best_score && hud.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>7} ★", hud.score)
    } else {
        format!("Best Score:  {:>7}", best_score)
    };
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    draw_banner(
        out,
        view,
        &[
            ("╔════════════════════╗", Color::Red),
            ("║    GAME  OVER      ║", Color::Red),
            ("╚════════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            (best_line.as_str(), best_color),
            ("C - Continue  R - Restart  Q - Quit", Color::White),
        ],
    )
}
