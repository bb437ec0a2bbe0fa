//! Compile-time tuning values.
//!
//! These are the authoritative defaults. `GameConfig::default()` mirrors the
//! session-level subset and entity stats are read from here directly.
//! Every boundary check in the crate uses the field constants below.

// ── Field & timing ───────────────────────────────────────────────────────────

pub const FPS: u32 = 60;

pub const FIELD_WIDTH: f32 = 600.0;
pub const HUD_HEIGHT: f32 = 50.0;
pub const FIELD_HEIGHT: f32 = 800.0;
pub const BOTTOM_HUD_HEIGHT: f32 = 100.0;
pub const WINDOW_HEIGHT: f32 = HUD_HEIGHT + FIELD_HEIGHT + BOTTOM_HUD_HEIGHT;

/// First row of the playable field.
pub const FIELD_TOP: f32 = HUD_HEIGHT;
/// Last row of the playable field.
pub const FIELD_BOTTOM: f32 = HUD_HEIGHT + FIELD_HEIGHT;

/// Frames a damaged hostile renders its flashed sprite.
pub const FLASH_FRAMES: u32 = 5;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 100.0;
pub const PLAYER_HEIGHT: f32 = 125.0;
pub const PLAYER_SPEED: f32 = 8.0;
pub const PLAYER_MAX_LIVES: u32 = 3;
pub const PLAYER_INVINCIBLE_FRAMES: u32 = FPS * 2;
/// Share of the sprite width trimmed off the hitbox.
pub const PLAYER_HITBOX_PAD_X: f32 = 0.3;
/// Share of the sprite height trimmed off the hitbox.
pub const PLAYER_HITBOX_PAD_Y: f32 = 0.2;

pub const FIRE_INTERVAL: u32 = 20;
pub const FIRE_INTERVAL_BOOSTED: u32 = 15;

pub const ABILITY1_COOLDOWN: u32 = FPS * 10;
pub const ABILITY2_COOLDOWN: u32 = FPS * 8;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const DART_WIDTH: f32 = 10.0;
pub const DART_HEIGHT: f32 = 70.0;
pub const DART_SPEED: f32 = 30.0;
pub const DART_DAMAGE: i32 = 1;

pub const QUILL_WIDTH: f32 = 10.0;
pub const QUILL_HEIGHT: f32 = 50.0;
pub const QUILL_SPEED: f32 = 7.0;
pub const QUILL_DAMAGE: i32 = 1;

pub const ROCK_SIZE: f32 = 100.0;
pub const ROCK_GRAVITY: f32 = 0.3;
pub const ROCK_DAMAGE: i32 = 5;

pub const FLARE_SIZE: f32 = 150.0;
pub const FLARE_SPEED: f32 = 6.0;
pub const FLARE_SPEED_ENRAGED: f32 = FLARE_SPEED * 3.0 / 2.0;
pub const FLARE_HP: i32 = 20;
pub const FLARE_MIN_ANGLE_DEG: f32 = 20.0;
pub const FLARE_MAX_ANGLE_DEG: f32 = 70.0;
pub const FLARE_PLAYER_ANGLE_DEG: f32 = 30.0;

pub const BOLT_WIDTH: f32 = 25.0;
pub const BOLT_HEIGHT: f32 = 150.0;
pub const BOLT_SPEED: f32 = 10.0;
pub const BOLT_SPEED_ENRAGED: f32 = 15.0;
pub const BOLT_HP: i32 = 14;

/// HP a penetrating projectile loses each time it strikes a hostile.
pub const PENETRATOR_HIT_COST: i32 = 1;

// ── Minions ──────────────────────────────────────────────────────────────────

pub const RAPTOR_WIDTH: f32 = 100.0;
pub const RAPTOR_HEIGHT: f32 = 110.0;
pub const RAPTOR_VEL_X: f32 = 4.0;
pub const RAPTOR_VEL_Y: f32 = 2.0;
pub const RAPTOR_HP: i32 = 2;
pub const RAPTOR_SCORE: u32 = 10;
pub const RAPTOR_SPAWN_INTERVAL: u32 = FPS * 2;
pub const RAPTOR_SPAWN_VARIANCE: u32 = RAPTOR_SPAWN_INTERVAL / 2;
pub const RAPTOR_FIRE_INTERVAL: u32 = 90;
pub const RAPTOR_FIRE_VARIANCE: u32 = RAPTOR_FIRE_INTERVAL / 2;

pub const GOLEM_SIZE: f32 = 150.0;
pub const GOLEM_VEL_Y: f32 = 2.0;
pub const GOLEM_HP: i32 = 10;
pub const GOLEM_SCORE: u32 = 50;
pub const GOLEM_SPAWN_INTERVAL: u32 = FPS * 5;
pub const GOLEM_SPAWN_VARIANCE: u32 = GOLEM_SPAWN_INTERVAL / 2;
pub const GOLEM_LEG_FRAMES: u32 = 20;
pub const GOLEM_ATTACK_FRAMES: u32 = FPS;

pub const CHARGER_SIZE: f32 = 120.0;
pub const CHARGER_VEL_X: f32 = 3.0;
pub const CHARGER_VEL_Y: f32 = 12.0;
pub const CHARGER_HP: i32 = 6;
pub const CHARGER_SCORE: u32 = 30;
pub const CHARGER_SPAWN_INTERVAL: u32 = FPS * 4;
pub const CHARGER_SPAWN_VARIANCE: u32 = CHARGER_SPAWN_INTERVAL / 2;
/// Horizontal centre distance under which a charger locks onto the player.
pub const CHARGER_LOCK_DISTANCE: f32 = 6.0;

// ── Bosses ───────────────────────────────────────────────────────────────────

pub const SOLAR_WIDTH: f32 = 200.0;
pub const SOLAR_HEIGHT: f32 = 125.0;
pub const SOLAR_SPEED: f32 = 4.0;
pub const SOLAR_SPEED_ENRAGED: f32 = SOLAR_SPEED * 3.0 / 2.0;
pub const SOLAR_HP: i32 = 50;
pub const SOLAR_SCORE: u32 = 1000;

pub const STORM_SIZE: f32 = 150.0;
pub const STORM_SPEED: f32 = 6.0;
pub const STORM_SPEED_ENRAGED: f32 = 8.0;
pub const STORM_HP: i32 = 150;
pub const STORM_SCORE: u32 = 1500;
pub const STORM_FIRE_FRAMES: u32 = 45;
pub const STORM_FIRE_FRAMES_ENRAGED: u32 = 30;
pub const STORM_TELEPORT_PAUSE: u32 = 30;
pub const STORM_TELEPORT_PAUSE_ENRAGED: u32 = 20;
pub const STORM_TELEPORTS: u32 = 4;
pub const STORM_TELEPORT_SLOTS: u32 = 4;
pub const STORM_TELEPORT_LOW_ROW: f32 = FIELD_TOP + 100.0;
pub const STORM_DASH_COOLDOWN: u32 = FPS * 5;
pub const STORM_DASH_SPEED: f32 = 16.0;
pub const STORM_DASH_FIRE_FRAMES: u32 = 4;
pub const STORM_DASH_EDGE_MARGIN: f32 = 60.0;
pub const STORM_MIN_BOUNCES: u32 = 1;
pub const STORM_MAX_BOUNCES: u32 = 4;
pub const STORM_MIN_SPRINTS: u32 = 1;
pub const STORM_MAX_SPRINTS: u32 = 3;

// ── Spawning & progression ───────────────────────────────────────────────────

/// Lowest value a spawner timer may be reset to.
pub const SPAWN_TIMER_FLOOR: u32 = 30;
/// Lowest base interval difficulty scaling may shrink a spawner to.
pub const SPAWN_BASE_FLOOR: u32 = 60;

pub const BACKGROUND_TILE_HEIGHT: f32 = FIELD_HEIGHT / 2.0;
pub const SCROLL_SPEED: f32 = 1.0;
