//! Read-only view handed to the renderer after each frame.

use crate::abilities::Ability;
use crate::entities::{Entity, Sprite};
use crate::geometry::Rect;
use crate::state::{GameState, GameStatus};

/// Frames per on/off phase of the invincibility blink.
const BLINK_PERIOD: u64 = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub stage_label: &'static str,
    /// Indexed like `Ability::ALL`; 0.0 means ready.
    pub ability_cooldowns: [f32; 2],
    pub abilities_unlocked: [bool; 2],
    pub message: Option<String>,
    pub status: GameStatus,
    pub boss_health: Option<f32>,
    /// The player sprite should be hidden this frame.
    pub blink_off: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteView {
    pub sprite: Sprite,
    pub bounds: Rect,
    pub flashed: bool,
}

pub fn hud(state: &GameState) -> Hud {
    let abilities = &state.abilities;
    Hud {
        score: state.score,
        lives: state.lives,
        max_lives: state.config.starting_lives,
        stage_label: state.stage.label(),
        ability_cooldowns: Ability::ALL.map(|a| abilities.cooldown_fraction(a)),
        abilities_unlocked: Ability::ALL.map(|a| abilities.is_unlocked(a)),
        message: state.messages.front().cloned(),
        status: state.status,
        boss_health: state.boss().map(|b| b.health().fraction()),
        blink_off: state.is_invincible() && (state.frame / BLINK_PERIOD) % 2 == 1,
    }
}

/// Every live entity, player last so it draws on top.
pub fn sprites(state: &GameState) -> Vec<SpriteView> {
    let mut views: Vec<SpriteView> = state
        .objects
        .iter()
        .filter(|o| !o.is_dead())
        .map(|o| SpriteView {
            sprite: o.sprite(),
            bounds: o.body().bounds(),
            flashed: o.as_hostile().is_some_and(|h| h.is_flashing()),
        })
        .collect();
    views.push(SpriteView {
        sprite: Sprite::Player,
        bounds: state.player.body.bounds(),
        flashed: false,
    });
    views
}
