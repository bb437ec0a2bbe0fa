//! Everything that flies: alignment, power tier, damage and penetration.
//!
//! Collision outcomes between projectiles are decided purely from these
//! fields, so a new projectile kind only has to pick its values here.

use rand::Rng;

use crate::constants::*;
use crate::entities::{Body, Entity, FrameContext, ObjectId, Sprite};
use crate::geometry::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Player,
    Enemy,
}

/// Priority tier for projectile-vs-projectile contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PowerLevel {
    Light = 1,
    Heavy = 2,
    Ultimate = 3,
}

impl PowerLevel {
    pub fn tier(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    /// Player's forward shot.
    Dart,
    /// Raptor shot.
    Quill,
    /// Golem's falling boulder.
    Rock,
    Flare,
    Bolt,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Linear { vx: f32, vy: f32 },
    Falling { vy: f32, gravity: f32 },
    /// Bounces off the side walls; `base` is the full-integrity diameter.
    Bouncing { vx: f32, vy: f32, base: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Integrity {
    current: i32,
    max: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Body,
    pub kind: ProjectileKind,
    pub alignment: Alignment,
    pub power: PowerLevel,
    pub damage: i32,
    pub penetrating: bool,
    /// Remaining durability of a penetrating projectile; `None` never wears.
    integrity: Option<Integrity>,
    round: bool,
    enraged: bool,
    motion: Motion,
}

impl Projectile {
    /// A stationary, non-penetrating rectangle. Chain the builder methods to
    /// give it motion and the other traits.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ObjectId,
        kind: ProjectileKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        alignment: Alignment,
        power: PowerLevel,
        damage: i32,
    ) -> Self {
        Self {
            body: Body::new(id, x, y, width, height),
            kind,
            alignment,
            power,
            damage,
            penetrating: false,
            integrity: None,
            round: false,
            enraged: false,
            motion: Motion::Linear { vx: 0.0, vy: 0.0 },
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.motion = Motion::Linear { vx, vy };
        self
    }

    pub fn penetrating(mut self) -> Self {
        self.penetrating = true;
        self
    }

    pub fn with_integrity(mut self, hp: i32) -> Self {
        self.integrity = Some(Integrity {
            current: hp,
            max: hp,
        });
        self
    }

    pub fn round(mut self) -> Self {
        self.round = true;
        self
    }

    fn enraged(mut self, enraged: bool) -> Self {
        self.enraged = enraged;
        self
    }

    // ── Catalogue ────────────────────────────────────────────────────────────

    /// Player's standard shot, centred on `cx` with its base at `y`.
    pub fn dart(id: ObjectId, cx: f32, y: f32) -> Self {
        Self::new(
            id,
            ProjectileKind::Dart,
            cx - DART_WIDTH / 2.0,
            y - DART_HEIGHT,
            DART_WIDTH,
            DART_HEIGHT,
            Alignment::Player,
            PowerLevel::Light,
            DART_DAMAGE,
        )
        .with_velocity(0.0, -DART_SPEED)
    }

    pub fn quill(id: ObjectId, cx: f32, y: f32) -> Self {
        Self::new(
            id,
            ProjectileKind::Quill,
            cx - QUILL_WIDTH / 2.0,
            y,
            QUILL_WIDTH,
            QUILL_HEIGHT,
            Alignment::Enemy,
            PowerLevel::Light,
            QUILL_DAMAGE,
        )
        .with_velocity(0.0, QUILL_SPEED)
    }

    /// Boulder dropped from rest, centred on `cx`.
    pub fn rock(id: ObjectId, cx: f32, y: f32) -> Self {
        let mut rock = Self::new(
            id,
            ProjectileKind::Rock,
            cx - ROCK_SIZE / 2.0,
            y,
            ROCK_SIZE,
            ROCK_SIZE,
            Alignment::Enemy,
            PowerLevel::Heavy,
            ROCK_DAMAGE,
        )
        .round();
        rock.motion = Motion::Falling {
            vy: 0.0,
            gravity: ROCK_GRAVITY,
        };
        rock
    }

    /// Flare thrown by the solar boss from its side facing `heading`.
    pub fn enemy_flare(
        id: ObjectId,
        thrower: &Body,
        heading: f32,
        enraged: bool,
        rng: &mut dyn rand::RngCore,
    ) -> Self {
        let size = FLARE_SIZE;
        let x = if heading > 0.0 {
            thrower.right()
        } else {
            thrower.x - size
        };
        let y = thrower.y + size / 2.0;
        let speed = if enraged {
            FLARE_SPEED_ENRAGED
        } else {
            FLARE_SPEED
        };
        let angle = rng
            .gen_range(FLARE_MIN_ANGLE_DEG..=FLARE_MAX_ANGLE_DEG)
            .to_radians();
        let vx = speed * angle.cos() * heading.signum();
        let vy = speed * angle.sin();

        let mut flare = Self::new(
            id,
            ProjectileKind::Flare,
            x,
            y,
            size,
            size,
            Alignment::Enemy,
            PowerLevel::Ultimate,
            1,
        )
        .penetrating()
        .round()
        .enraged(enraged);
        flare.motion = Motion::Bouncing { vx, vy, base: size };
        flare
    }

    /// Flare launched by the player's first ability.
    pub fn player_flare(id: ObjectId, launcher: &Body, rng: &mut dyn rand::RngCore) -> Self {
        let size = FLARE_SIZE;
        let cx = launcher
            .center_x()
            .clamp(size / 2.0, FIELD_WIDTH - size / 2.0);
        let angle = FLARE_PLAYER_ANGLE_DEG.to_radians();
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vx = FLARE_SPEED * angle.cos() * sign;
        let vy = -FLARE_SPEED * angle.sin();

        let mut flare = Self::new(
            id,
            ProjectileKind::Flare,
            cx - size / 2.0,
            launcher.y - size,
            size,
            size,
            Alignment::Player,
            PowerLevel::Ultimate,
            1,
        )
        .penetrating()
        .round()
        .with_integrity(FLARE_HP);
        flare.motion = Motion::Bouncing { vx, vy, base: size };
        flare
    }

    /// Bolt striking downward from `(x, y)`.
    pub fn enemy_bolt(id: ObjectId, x: f32, y: f32, enraged: bool) -> Self {
        let speed = if enraged {
            BOLT_SPEED_ENRAGED
        } else {
            BOLT_SPEED
        };
        Self::new(
            id,
            ProjectileKind::Bolt,
            x,
            y,
            BOLT_WIDTH,
            BOLT_HEIGHT,
            Alignment::Enemy,
            PowerLevel::Ultimate,
            1,
        )
        .with_velocity(0.0, speed)
        .penetrating()
        .enraged(enraged)
    }

    /// Bolt launched upward by the player's second ability.
    pub fn player_bolt(id: ObjectId, launcher: &Body) -> Self {
        Self::new(
            id,
            ProjectileKind::Bolt,
            launcher.center_x() - BOLT_WIDTH / 2.0,
            launcher.y - BOLT_HEIGHT,
            BOLT_WIDTH,
            BOLT_HEIGHT,
            Alignment::Player,
            PowerLevel::Ultimate,
            1,
        )
        .with_velocity(0.0, -BOLT_SPEED)
        .penetrating()
        .with_integrity(BOLT_HP)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn is_enemy(&self) -> bool {
        self.alignment == Alignment::Enemy
    }

    pub fn hp(&self) -> Option<i32> {
        self.integrity.map(|i| i.current)
    }

    pub fn velocity(&self) -> (f32, f32) {
        match self.motion {
            Motion::Linear { vx, vy } | Motion::Bouncing { vx, vy, .. } => (vx, vy),
            Motion::Falling { vy, .. } => (0.0, vy),
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self.kind {
            ProjectileKind::Dart => Sprite::Dart,
            ProjectileKind::Quill => Sprite::Quill,
            ProjectileKind::Rock => Sprite::Rock,
            ProjectileKind::Flare => Sprite::Flare {
                enraged: self.enraged,
            },
            ProjectileKind::Bolt => Sprite::Bolt {
                enraged: self.enraged,
            },
        }
    }

    /// Take `amount` off the integrity pool, dying at zero. Projectiles
    /// without a pool are unaffected.
    pub fn wear(&mut self, amount: i32) {
        if self.body.is_dead() {
            return;
        }
        let Some(integrity) = self.integrity.as_mut() else {
            return;
        };
        integrity.current -= amount;
        if integrity.current <= 0 {
            self.body.mark_dead();
            return;
        }
        let ratio = integrity.current as f32 / integrity.max as f32;
        if let Motion::Bouncing { base, .. } = self.motion {
            self.body.resize_centered(base * ratio, base * ratio);
        }
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self, _ctx: &mut FrameContext<'_>) {
        let body = &mut self.body;
        match &mut self.motion {
            Motion::Linear { vx, vy } => {
                body.x += *vx;
                body.y += *vy;
                if body.is_off_field() {
                    body.mark_dead();
                }
            }
            Motion::Falling { vy, gravity } => {
                *vy += *gravity;
                body.y += *vy;
                if body.y > FIELD_BOTTOM {
                    body.mark_dead();
                }
            }
            Motion::Bouncing { vx, vy, .. } => {
                body.x += *vx;
                body.y += *vy;
                if body.x < 0.0 {
                    body.x = 0.0;
                    *vx = vx.abs();
                } else if body.right() > FIELD_WIDTH {
                    body.x = FIELD_WIDTH - body.width;
                    *vx = -vx.abs();
                }
                if body.y > FIELD_BOTTOM || body.bottom() < FIELD_TOP {
                    body.mark_dead();
                }
            }
        }
    }

    fn hit_shape(&self) -> Shape {
        if self.round {
            Shape::Ellipse(self.body.bounds())
        } else {
            Shape::Rect(self.body.bounds())
        }
    }
}
