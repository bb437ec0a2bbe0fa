use rand::Rng;

use crate::constants::*;
use crate::entities::{Body, FrameContext, ObjectId};
use crate::hostile::{Hostile, HostileKind};
use crate::projectile::Projectile;

use super::Boss;

/// Observable behaviour mode of the storm boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StormPhase {
    Standard,
    TeleportBarrage,
    DashStorm,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Standard {
        bounces: u32,
        threshold: u32,
        fire_timer: u32,
    },
    Teleport {
        done: u32,
        pause: u32,
        slot: Option<u32>,
    },
    Dash {
        heading: f32,
        sprints_left: u32,
        fire_timer: u32,
    },
}

/// Bounces and strikes on a timer, teleports through a barrage after a
/// random number of wall bounces, and once enraged periodically dashes
/// across the field raining bolts.
#[derive(Clone, Debug, PartialEq)]
pub struct StormBoss {
    pub vel_x: f32,
    enraged: bool,
    /// Frames until a dash may start; only counts down while enraged.
    dash_cooldown: u32,
    mode: Mode,
}

impl StormBoss {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            vel_x: STORM_SPEED,
            enraged: false,
            dash_cooldown: STORM_DASH_COOLDOWN,
            mode: Mode::Standard {
                bounces: 0,
                threshold: Self::roll_bounces(rng),
                fire_timer: STORM_FIRE_FRAMES,
            },
        }
    }

    pub fn spawn<R: Rng + ?Sized>(id: ObjectId, rng: &mut R) -> Hostile {
        let body = Body::new(
            id,
            (FIELD_WIDTH - STORM_SIZE) / 2.0,
            FIELD_TOP,
            STORM_SIZE,
            STORM_SIZE,
        );
        Hostile::new(
            body,
            STORM_HP,
            STORM_SCORE,
            HostileKind::Boss(Boss::Storm(Self::new(rng))),
        )
    }

    pub fn phase(&self) -> StormPhase {
        match self.mode {
            Mode::Standard { .. } => StormPhase::Standard,
            Mode::Teleport { .. } => StormPhase::TeleportBarrage,
            Mode::Dash { .. } => StormPhase::DashStorm,
        }
    }

    pub fn is_enraged(&self) -> bool {
        self.enraged
    }

    pub fn dash_cooldown(&self) -> u32 {
        self.dash_cooldown
    }

    /// Wall bounces counted so far and the count that triggers a barrage.
    pub fn bounce_progress(&self) -> Option<(u32, u32)> {
        match self.mode {
            Mode::Standard {
                bounces, threshold, ..
            } => Some((bounces, threshold)),
            _ => None,
        }
    }

    pub fn teleports_done(&self) -> Option<u32> {
        match self.mode {
            Mode::Teleport { done, .. } => Some(done),
            _ => None,
        }
    }

    pub fn sprints_left(&self) -> Option<u32> {
        match self.mode {
            Mode::Dash { sprints_left, .. } => Some(sprints_left),
            _ => None,
        }
    }

    pub(crate) fn enrage(&mut self) {
        if self.enraged {
            return;
        }
        self.enraged = true;
        self.vel_x = STORM_SPEED_ENRAGED * self.vel_x.signum();
        log::info!("storm boss enraged");
    }

    fn fire_frames(&self) -> u32 {
        if self.enraged {
            STORM_FIRE_FRAMES_ENRAGED
        } else {
            STORM_FIRE_FRAMES
        }
    }

    fn teleport_pause(&self) -> u32 {
        if self.enraged {
            STORM_TELEPORT_PAUSE_ENRAGED
        } else {
            STORM_TELEPORT_PAUSE
        }
    }

    fn roll_bounces<R: Rng + ?Sized>(rng: &mut R) -> u32 {
        rng.gen_range(STORM_MIN_BOUNCES..=STORM_MAX_BOUNCES)
    }

    fn slot_x(slot: u32, width: f32) -> f32 {
        let span = FIELD_WIDTH - width;
        span * slot as f32 / (STORM_TELEPORT_SLOTS - 1) as f32
    }

    fn strike(&self, ctx: &mut FrameContext<'_>, x: f32, y: f32) {
        let id = ctx.next_id();
        ctx.spawn(Projectile::enemy_bolt(id, x, y, self.enraged));
    }

    fn strike_below(&self, body: &Body, ctx: &mut FrameContext<'_>) {
        self.strike(ctx, body.center_x() - BOLT_WIDTH / 2.0, body.bottom());
    }

    pub(crate) fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        if self.enraged {
            self.dash_cooldown = self.dash_cooldown.saturating_sub(1);
        }
        match self.mode {
            Mode::Standard {
                bounces,
                threshold,
                fire_timer,
            } => self.run_standard(body, ctx, bounces, threshold, fire_timer),
            Mode::Teleport { done, pause, slot } => self.run_teleport(body, ctx, done, pause, slot),
            Mode::Dash {
                heading,
                sprints_left,
                fire_timer,
            } => self.run_dash(body, ctx, heading, sprints_left, fire_timer),
        }
    }

    fn run_standard(
        &mut self,
        body: &mut Body,
        ctx: &mut FrameContext<'_>,
        mut bounces: u32,
        threshold: u32,
        mut fire_timer: u32,
    ) {
        if self.enraged && self.dash_cooldown == 0 {
            self.begin_dash(body, ctx);
            return;
        }

        body.x += self.vel_x;
        if body.x <= 0.0 {
            body.x = 0.0;
            self.vel_x = self.vel_x.abs();
            bounces += 1;
        } else if body.x >= FIELD_WIDTH - body.width {
            body.x = FIELD_WIDTH - body.width;
            self.vel_x = -self.vel_x.abs();
            bounces += 1;
        }

        if bounces >= threshold {
            log::debug!("storm boss: barrage after {bounces} bounces");
            self.mode = Mode::Teleport {
                done: 0,
                pause: self.teleport_pause(),
                slot: None,
            };
            return;
        }

        fire_timer = fire_timer.saturating_sub(1);
        if fire_timer == 0 {
            self.strike_below(body, ctx);
            fire_timer = self.fire_frames();
        }
        self.mode = Mode::Standard {
            bounces,
            threshold,
            fire_timer,
        };
    }

    fn run_teleport(
        &mut self,
        body: &mut Body,
        ctx: &mut FrameContext<'_>,
        done: u32,
        pause: u32,
        slot: Option<u32>,
    ) {
        if pause > 0 {
            self.mode = Mode::Teleport {
                done,
                pause: pause - 1,
                slot,
            };
            return;
        }

        // Any slot but the current one.
        let mut next = ctx.rng.gen_range(0..STORM_TELEPORT_SLOTS);
        if Some(next) == slot {
            next = (next + 1) % STORM_TELEPORT_SLOTS;
        }
        body.x = Self::slot_x(next, body.width);
        body.y = if done % 2 == 0 {
            FIELD_TOP
        } else {
            STORM_TELEPORT_LOW_ROW
        };
        self.strike_below(body, ctx);

        let done = done + 1;
        if done >= STORM_TELEPORTS {
            body.y = FIELD_TOP;
            self.mode = Mode::Standard {
                bounces: 0,
                threshold: Self::roll_bounces(&mut *ctx.rng),
                fire_timer: self.fire_frames(),
            };
            log::debug!("storm boss: barrage over");
        } else {
            self.mode = Mode::Teleport {
                done,
                pause: self.teleport_pause(),
                slot: Some(next),
            };
        }
    }

    fn begin_dash(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        let from_left = ctx.rng.gen_bool(0.5);
        let sprints = ctx.rng.gen_range(STORM_MIN_SPRINTS..=STORM_MAX_SPRINTS);
        body.y = FIELD_TOP;
        let heading = if from_left {
            body.x = 0.0;
            1.0
        } else {
            body.x = FIELD_WIDTH - body.width;
            -1.0
        };
        log::debug!("storm boss: dash storm, {sprints} sprints");
        self.mode = Mode::Dash {
            heading,
            sprints_left: sprints,
            fire_timer: 0,
        };
    }

    fn run_dash(
        &mut self,
        body: &mut Body,
        ctx: &mut FrameContext<'_>,
        mut heading: f32,
        mut sprints_left: u32,
        mut fire_timer: u32,
    ) {
        body.x += heading * STORM_DASH_SPEED;

        let arrived = if heading > 0.0 && body.x >= FIELD_WIDTH - body.width {
            body.x = FIELD_WIDTH - body.width;
            true
        } else if heading < 0.0 && body.x <= 0.0 {
            body.x = 0.0;
            true
        } else {
            false
        };

        let clear_of_edges = body.x > STORM_DASH_EDGE_MARGIN
            && body.right() < FIELD_WIDTH - STORM_DASH_EDGE_MARGIN;
        fire_timer = fire_timer.saturating_sub(1);
        if clear_of_edges && fire_timer == 0 {
            // Bolt trails from the rear edge.
            let x = if heading > 0.0 {
                body.x
            } else {
                body.right() - BOLT_WIDTH
            };
            self.strike(ctx, x, body.bottom());
            fire_timer = STORM_DASH_FIRE_FRAMES;
        }

        if arrived {
            sprints_left = sprints_left.saturating_sub(1);
            heading = -heading;
            if sprints_left == 0 {
                self.vel_x = self.vel_x.abs() * heading;
                self.dash_cooldown = STORM_DASH_COOLDOWN;
                self.mode = Mode::Standard {
                    bounces: 0,
                    threshold: Self::roll_bounces(&mut *ctx.rng),
                    fire_timer: self.fire_frames(),
                };
                return;
            }
        }
        self.mode = Mode::Dash {
            heading,
            sprints_left,
            fire_timer,
        };
    }
}
