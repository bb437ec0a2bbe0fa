//! Session control and the per-frame step.
//!
//! Input operations mutate the session in place; `tick` takes an immutable
//! `GameState` (and an RNG handle) and returns the next frame's state.
//! All randomness comes through the injected RNG.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;

use crate::abilities::{Abilities, Ability};
use crate::boss::BossKind;
use crate::collision::{self, CollisionReport};
use crate::config::GameConfig;
use crate::entities::{Entity, FrameContext, GameObject, IdAllocator, ObjectId, Player};
use crate::input::MoveIntent;
use crate::progression::{Milestone, MilestoneEffect, Progression};
use crate::projectile::Projectile;
use crate::spawner::{EnemySpawner, SpawnFloors};
use crate::stage::{Background, Stage};
use crate::state::{GameState, GameStatus};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh session. The first frame crosses the score-0 milestone and sets up
/// the opening stage.
pub fn init_state(config: Arc<GameConfig>) -> GameState {
    let mut ids = IdAllocator::default();
    let player = Player::new(ids.next_id());
    GameState {
        player,
        objects: Vec::new(),
        pending: Vec::new(),
        score: 0,
        lives: config.starting_lives,
        invincibility: 0,
        firing: false,
        fire_cooldown: 0,
        fire_interval: config.fire_interval,
        abilities: Abilities::new(config.ability_cooldowns),
        progression: Progression::default(),
        spawners: Vec::new(),
        stage: Stage::One,
        background: Background::default(),
        status: GameStatus::Playing,
        messages: Default::default(),
        frame: 0,
        ids,
        config,
    }
}

// ── Input-driven operations ──────────────────────────────────────────────────

pub fn set_movement(state: &mut GameState, intent: MoveIntent) {
    state.player.set_velocity(intent);
}

pub fn set_firing(state: &mut GameState, firing: bool) {
    state.firing = firing;
}

/// Fire the ability bound to a 1-based slot. Locked, cooling down or
/// unknown slots do nothing.
pub fn trigger_ability(state: &mut GameState, slot: u8, rng: &mut impl Rng) {
    if state.status != GameStatus::Playing {
        return;
    }
    let Some(ability) = Ability::from_slot(slot) else {
        log::warn!("ignoring request for unknown ability slot {slot}");
        return;
    };
    if !state.abilities.is_unlocked(ability) {
        log::warn!("ignoring request for locked ability {ability:?}");
        return;
    }
    if !state.abilities.try_use(ability) {
        return;
    }

    let id = state.ids.next_id();
    let projectile = match ability {
        Ability::Flare => Projectile::player_flare(id, &state.player.body, rng),
        Ability::Bolt => Projectile::player_bolt(id, &state.player.body),
    };
    log::debug!("ability {ability:?} fired");
    state.pending.push(projectile.into());
}

pub fn toggle_pause(state: &mut GameState) {
    state.status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        other => other,
    };
}

/// Drop the front message; play resumes once none are left.
pub fn dismiss_message(state: &mut GameState) {
    if state.status != GameStatus::Message {
        return;
    }
    state.messages.pop_front();
    if state.messages.is_empty() {
        state.status = GameStatus::Playing;
    }
}

/// Resume from the last checkpoint after a game over. The checkpoint's
/// milestone fires again on the next frame. Returns false when the session
/// is not over.
pub fn continue_from_checkpoint(state: &mut GameState) -> bool {
    if state.status != GameStatus::GameOver {
        return false;
    }
    let player_id = state.player.body.id;
    state.objects.clear();
    state.pending.clear();
    state.spawners.clear();
    state.messages.clear();
    state.player = Player::new(player_id);
    state.lives = state.config.starting_lives;
    state.invincibility = 0;
    state.firing = false;
    state.fire_cooldown = 0;
    state.score = state.progression.rewind(&state.config.milestones);
    state.status = GameStatus::Playing;
    log::info!(
        "continuing from milestone {} with score {}",
        state.progression.index(),
        state.score
    );
    true
}

// ── Damage & rewards ─────────────────────────────────────────────────────────

/// One hit on the player. Ignored while invincible.
pub fn player_takes_damage(state: &mut GameState) {
    if state.is_invincible() || state.lives == 0 {
        return;
    }
    state.lives -= 1;
    state.invincibility = state.config.invincibility_frames;
    log::info!("player hit, {} lives left", state.lives);
    if state.lives == 0 {
        state.status = GameStatus::GameOver;
        log::info!("game over at score {}", state.score);
    }
}

/// Resume progression, refill lives and grant the boss's ability.
pub fn boss_defeated(state: &mut GameState, kind: BossKind) {
    state.progression.boss_defeated();
    state.lives = state.config.starting_lives;
    state.abilities.unlock(Ability::granted_by(kind));
    log::info!("{} defeated", kind.name());
}

// ── Progression ──────────────────────────────────────────────────────────────

/// Apply the next milestone if the score has reached it.
pub fn check_progression(state: &mut GameState, rng: &mut impl Rng) {
    let config = Arc::clone(&state.config);
    if let Some((index, milestone)) = state.progression.check(state.score, &config.milestones) {
        apply_milestone(state, index, milestone, rng);
    }
}

fn apply_milestone(state: &mut GameState, index: usize, milestone: Milestone, rng: &mut impl Rng) {
    log::info!(
        "milestone {index} reached at score {}: {:?}",
        milestone.score,
        milestone.effect
    );
    match milestone.effect {
        MilestoneEffect::Difficulty(factor) => {
            for spawner in &mut state.spawners {
                spawner.scale_difficulty(factor);
            }
        }
        MilestoneEffect::Boss(kind) => {
            clear_field(state);
            let id = state.ids.next_id();
            state.pending.push(kind.spawn(id, rng).into());
            push_message(state, format!("WARNING: {} approaches", kind.name()));
        }
        MilestoneEffect::Stage(stage) => enter_stage(state, stage, rng),
    }
}

/// Remove minions and enemy projectiles without crediting score.
fn clear_field(state: &mut GameState) {
    let keep = |o: &GameObject| !o.is_minion() && !o.is_enemy_projectile();
    state.objects.retain(keep);
    state.pending.retain(keep);
}

fn enter_stage(state: &mut GameState, stage: Stage, rng: &mut impl Rng) {
    let config = Arc::clone(&state.config);
    let floors = SpawnFloors {
        timer: config.spawn_timer_floor,
        base: config.spawn_base_floor,
    };
    state.spawners = stage
        .roster()
        .iter()
        .map(|&archetype| {
            let mut spawner =
                EnemySpawner::new(archetype, config.spawn.timing(archetype), floors, rng);
            if let Some(factor) = stage.spawn_scale() {
                spawner.scale_difficulty(factor);
            }
            spawner
        })
        .collect();
    state.fire_interval = if stage.boosted_fire() {
        config.fire_interval_boosted
    } else {
        config.fire_interval
    };
    state.background.set_speed(stage.scroll_speed());
    state.stage = stage;
    log::info!("entering {}", stage.label());
    push_message(state, stage.label().to_string());
}

fn push_message(state: &mut GameState, text: String) {
    if !state.config.modal_messages {
        return;
    }
    state.messages.push_back(text);
    state.status = GameStatus::Message;
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    step(&mut next, rng);
    next
}

/// In-place form of `tick`.
pub fn step(state: &mut GameState, rng: &mut impl Rng) {
    if state.status != GameStatus::Playing {
        return;
    }
    state.frame += 1;

    // ── 1. Background ────────────────────────────────────────────────────────
    state.background.advance();

    // ── 2. Milestones ────────────────────────────────────────────────────────
    check_progression(state, rng);

    // ── 3. Player fire ───────────────────────────────────────────────────────
    if state.firing && state.fire_cooldown == 0 {
        let (cx, y) = state.player.muzzle();
        let id = state.ids.next_id();
        state.pending.push(Projectile::dart(id, cx, y).into());
        state.fire_cooldown = state.fire_interval;
    }
    state.fire_cooldown = state.fire_cooldown.saturating_sub(1);

    // ── 4. Timers ────────────────────────────────────────────────────────────
    state.invincibility = state.invincibility.saturating_sub(1);
    state.abilities.tick();

    // ── 5. Spawners ──────────────────────────────────────────────────────────
    if !state.progression.boss_active() {
        run_spawners(state, rng);
    }

    // ── 6. Merge ─────────────────────────────────────────────────────────────
    let pending = std::mem::take(&mut state.pending);
    state.objects.extend(pending);

    // ── 7. Movement ──────────────────────────────────────────────────────────
    advance_all(state, rng);

    // ── 8. Collisions ────────────────────────────────────────────────────────
    let report = collision::resolve_all(&state.player, &mut state.objects);
    apply_report(state, report);

    // ── 9. Purge ─────────────────────────────────────────────────────────────
    state.objects.retain(|o| !o.is_dead());
}

fn run_spawners(state: &mut GameState, rng: &mut impl Rng) {
    for i in 0..state.spawners.len() {
        if !state.spawners[i].tick(rng) {
            continue;
        }
        let archetype = state.spawners[i].archetype();
        let id = state.ids.next_id();
        log::trace!("spawning {archetype:?}");
        state.pending.push(archetype.spawn(id, rng).into());
    }
}

fn advance_all(state: &mut GameState, rng: &mut impl Rng) {
    let live: HashSet<ObjectId> = state
        .objects
        .iter()
        .filter(|o| !o.is_dead())
        .map(|o| o.body().id)
        .collect();
    let player_center = state.player.body.center();

    let mut ctx = FrameContext::new(rng, player_center, &live, &mut state.ids);
    state.player.advance(&mut ctx);
    for object in state.objects.iter_mut().filter(|o| !o.is_dead()) {
        object.advance(&mut ctx);
    }
    let spawned = ctx.into_spawns();
    state
        .pending
        .extend(spawned.into_iter().map(GameObject::Projectile));
}

fn apply_report(state: &mut GameState, report: CollisionReport) {
    state.score += report.score;
    for kind in report.defeated_bosses {
        boss_defeated(state, kind);
    }
    for _ in 0..report.player_hits {
        player_takes_damage(state);
    }
}
