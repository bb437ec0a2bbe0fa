//! Standard enemies. Each archetype is a small state struct driven by the
//! shared `Hostile` shell.

use rand::Rng;

use crate::constants::*;
use crate::entities::{Body, FrameContext, ObjectId, Sprite};
use crate::hostile::{Hostile, HostileKind};
use crate::projectile::Projectile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinionArchetype {
    Raptor,
    Golem,
    Charger,
}

impl MinionArchetype {
    pub const ALL: [MinionArchetype; 3] = [
        MinionArchetype::Raptor,
        MinionArchetype::Golem,
        MinionArchetype::Charger,
    ];

    /// Build a fresh minion at a random column along the top edge.
    pub fn spawn(self, id: ObjectId, rng: &mut impl Rng) -> Hostile {
        match self {
            MinionArchetype::Raptor => {
                let x = rng.gen_range(0.0..=FIELD_WIDTH - RAPTOR_WIDTH);
                let body = Body::new(id, x, FIELD_TOP - RAPTOR_HEIGHT, RAPTOR_WIDTH, RAPTOR_HEIGHT);
                let raptor = Raptor::new(rng);
                Hostile::new(
                    body,
                    RAPTOR_HP,
                    RAPTOR_SCORE,
                    HostileKind::Minion(Minion::Raptor(raptor)),
                )
            }
            MinionArchetype::Golem => {
                let x = rng.gen_range(0.0..=FIELD_WIDTH - GOLEM_SIZE);
                let body = Body::new(id, x, FIELD_TOP - GOLEM_SIZE, GOLEM_SIZE, GOLEM_SIZE);
                Hostile::new(
                    body,
                    GOLEM_HP,
                    GOLEM_SCORE,
                    HostileKind::Minion(Minion::Golem(Golem::new())),
                )
            }
            MinionArchetype::Charger => {
                let x = rng.gen_range(0.0..=FIELD_WIDTH - CHARGER_SIZE);
                let body = Body::new(id, x, FIELD_TOP, CHARGER_SIZE, CHARGER_SIZE);
                let charger = Charger::new(rng.gen_bool(0.5));
                Hostile::new(
                    body,
                    CHARGER_HP,
                    CHARGER_SCORE,
                    HostileKind::Minion(Minion::Charger(charger)),
                )
                .with_round_hitbox()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Minion {
    Raptor(Raptor),
    Golem(Golem),
    Charger(Charger),
}

impl Minion {
    pub fn archetype(&self) -> MinionArchetype {
        match self {
            Minion::Raptor(_) => MinionArchetype::Raptor,
            Minion::Golem(_) => MinionArchetype::Golem,
            Minion::Charger(_) => MinionArchetype::Charger,
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            Minion::Raptor(_) => Sprite::Raptor,
            Minion::Golem(g) => Sprite::Golem {
                wings_closed: g.wings_closed,
            },
            Minion::Charger(c) => Sprite::Charger {
                charging: c.charging,
            },
        }
    }

    pub(crate) fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        match self {
            Minion::Raptor(r) => r.advance(body, ctx),
            Minion::Golem(g) => g.advance(body, ctx),
            Minion::Charger(c) => c.advance(body, ctx),
        }
    }
}

// ── Raptor ───────────────────────────────────────────────────────────────────

/// Ricochets around the field and sheds quills.
#[derive(Clone, Debug, PartialEq)]
pub struct Raptor {
    pub vel_x: f32,
    pub vel_y: f32,
    fire_timer: u32,
    /// Set once the raptor has come fully down into the field; only then
    /// does the top wall bounce it.
    entered: bool,
}

impl Raptor {
    pub fn new(rng: &mut impl Rng) -> Self {
        let vel_x = if rng.gen_bool(0.5) {
            RAPTOR_VEL_X
        } else {
            -RAPTOR_VEL_X
        };
        Self {
            vel_x,
            vel_y: RAPTOR_VEL_Y,
            fire_timer: Self::fire_delay(rng),
            entered: false,
        }
    }

    pub fn fire_timer(&self) -> u32 {
        self.fire_timer
    }

    fn fire_delay<R: Rng + ?Sized>(rng: &mut R) -> u32 {
        let jitter = rng.gen_range(0..=RAPTOR_FIRE_VARIANCE * 2);
        (RAPTOR_FIRE_INTERVAL + jitter)
            .saturating_sub(RAPTOR_FIRE_VARIANCE)
            .max(1)
    }

    fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        body.x += self.vel_x;
        body.y += self.vel_y;

        if body.x < 0.0 {
            body.x = 0.0;
            self.vel_x = -self.vel_x;
        }
        if body.x > FIELD_WIDTH - body.width {
            body.x = FIELD_WIDTH - body.width;
            self.vel_x = -self.vel_x;
        }
        if body.y < FIELD_TOP && self.entered {
            body.y = FIELD_TOP;
            self.vel_y = -self.vel_y;
        }
        if body.y > FIELD_TOP {
            self.entered = true;
        }
        if body.y > FIELD_BOTTOM - body.height {
            body.y = FIELD_BOTTOM - body.height;
            self.vel_y = -self.vel_y;
        }

        if self.fire_timer > 0 {
            self.fire_timer -= 1;
        } else {
            let id = ctx.next_id();
            ctx.spawn(Projectile::quill(id, body.center_x(), body.bottom()));
            self.fire_timer = Self::fire_delay(&mut *ctx.rng);
        }
    }
}

// ── Golem ────────────────────────────────────────────────────────────────────

/// Descends to mid-field, then bobs in place dropping one rock at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Golem {
    vel_y: f32,
    leg_timer: u32,
    attack_timer: u32,
    rock: Option<ObjectId>,
    hovering: bool,
    wings_closed: bool,
}

impl Default for Golem {
    fn default() -> Self {
        Self::new()
    }
}

impl Golem {
    pub fn new() -> Self {
        Self {
            vel_y: GOLEM_VEL_Y,
            leg_timer: GOLEM_LEG_FRAMES,
            attack_timer: GOLEM_ATTACK_FRAMES,
            rock: None,
            hovering: false,
            wings_closed: false,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// The rock this golem dropped last, if any.
    pub fn rock(&self) -> Option<ObjectId> {
        self.rock
    }

    fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        if self.leg_timer == 0 {
            if self.vel_y > 0.0 {
                self.vel_y = -GOLEM_VEL_Y / 4.0;
                self.leg_timer = GOLEM_LEG_FRAMES * 3 / 2;
                self.wings_closed = true;
            } else {
                self.wings_closed = false;
                if self.hovering {
                    self.vel_y = GOLEM_VEL_Y / 4.0;
                    self.leg_timer = GOLEM_LEG_FRAMES * 3 / 2;
                } else {
                    self.vel_y = GOLEM_VEL_Y;
                    self.leg_timer = GOLEM_LEG_FRAMES;
                }
            }
        }

        body.y += self.vel_y;
        if body.y > FIELD_TOP + FIELD_HEIGHT / 2.0 - body.height {
            self.hovering = true;
        }

        let rock_live = self.rock.is_some_and(|id| ctx.is_live(id));
        if !rock_live {
            self.attack_timer = self.attack_timer.saturating_sub(1);
            if self.attack_timer == 0 {
                let id = ctx.next_id();
                let rock = Projectile::rock(id, body.center_x(), body.bottom());
                self.rock = Some(ctx.spawn(rock));
                self.attack_timer = GOLEM_ATTACK_FRAMES;
            }
        }

        self.leg_timer = self.leg_timer.saturating_sub(1);
    }
}

// ── Charger ──────────────────────────────────────────────────────────────────

/// Sweeps the field row by row and charges when lined up with the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Charger {
    pub vel_x: f32,
    charging: bool,
    wrapped: bool,
    /// Row to return to after a charge.
    home_y: f32,
}

impl Charger {
    pub fn new(heading_right: bool) -> Self {
        let vel_x = if heading_right {
            CHARGER_VEL_X
        } else {
            -CHARGER_VEL_X
        };
        Self {
            vel_x,
            charging: false,
            wrapped: false,
            home_y: FIELD_TOP,
        }
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        if self.charging {
            body.y += CHARGER_VEL_Y;
            if body.y > FIELD_BOTTOM {
                self.wrapped = true;
                body.y = FIELD_TOP - body.height;
            }
            if self.wrapped && body.y >= self.home_y {
                body.y = self.home_y;
                self.wrapped = false;
                self.charging = false;
            }
            return;
        }

        body.x += self.vel_x;
        if body.x > FIELD_WIDTH - body.width {
            body.x = FIELD_WIDTH - body.width;
            self.vel_x = -self.vel_x;
            body.y += body.height / 2.0;
        }
        if body.x < 0.0 {
            body.x = 0.0;
            self.vel_x = -self.vel_x;
            body.y += body.height / 2.0;
        }
        if body.y > FIELD_BOTTOM {
            body.y = FIELD_TOP;
        }
        self.home_y = body.y;

        let (player_x, _) = ctx.player_center;
        if (body.center_x() - player_x).abs() < CHARGER_LOCK_DISTANCE {
            self.charging = true;
        }
    }
}
