//! The shared entity contract, the player and the tagged object set.

use std::collections::HashSet;

use rand::RngCore;

use crate::constants::*;
use crate::geometry::{Rect, Shape};
use crate::hostile::Hostile;
use crate::input::MoveIntent;
use crate::projectile::Projectile;

// ── Identity ─────────────────────────────────────────────────────────────────

/// Stable handle of a simulated object, unique within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }
}

// ── Body ─────────────────────────────────────────────────────────────────────

/// Position, size and tombstone shared by every entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: ObjectId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    dead: bool,
}

impl Body {
    pub fn new(id: ObjectId, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            dead: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        self.bounds().center()
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Write-once: a dead body never comes back.
    pub fn mark_dead(&mut self) {
        self.dead = true;
    }

    /// Change the size while keeping the centre in place.
    pub fn resize_centered(&mut self, width: f32, height: f32) {
        let (cx, cy) = self.center();
        self.width = width;
        self.height = height;
        self.x = cx - width / 2.0;
        self.y = cy - height / 2.0;
    }

    /// True once the body lies entirely outside the playable field.
    pub fn is_off_field(&self) -> bool {
        self.bottom() < FIELD_TOP
            || self.y > FIELD_BOTTOM
            || self.right() < 0.0
            || self.x > FIELD_WIDTH
    }
}

// ── Frame context ────────────────────────────────────────────────────────────

/// Everything an entity may read or request while it advances one frame.
///
/// Entities never touch the object set directly: projectiles they fire are
/// queued here and merged by the session at the start of the next frame.
pub struct FrameContext<'a> {
    pub rng: &'a mut dyn RngCore,
    pub player_center: (f32, f32),
    live: &'a HashSet<ObjectId>,
    ids: &'a mut IdAllocator,
    spawns: Vec<Projectile>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        rng: &'a mut dyn RngCore,
        player_center: (f32, f32),
        live: &'a HashSet<ObjectId>,
        ids: &'a mut IdAllocator,
    ) -> Self {
        Self {
            rng,
            player_center,
            live,
            ids,
            spawns: Vec::new(),
        }
    }

    /// Whether the object with this id was alive at the start of the frame.
    pub fn is_live(&self, id: ObjectId) -> bool {
        self.live.contains(&id)
    }

    pub fn next_id(&mut self) -> ObjectId {
        self.ids.next_id()
    }

    /// Queue a projectile and hand back its id.
    pub fn spawn(&mut self, projectile: Projectile) -> ObjectId {
        let id = projectile.body.id;
        self.spawns.push(projectile);
        id
    }

    pub fn into_spawns(self) -> Vec<Projectile> {
        self.spawns
    }
}

// ── Entity trait ─────────────────────────────────────────────────────────────

pub trait Entity {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Run one frame of behaviour.
    fn advance(&mut self, ctx: &mut FrameContext<'_>);

    fn hit_shape(&self) -> Shape {
        Shape::Rect(self.body().bounds())
    }

    fn is_dead(&self) -> bool {
        self.body().is_dead()
    }

    fn mark_dead(&mut self) {
        self.body_mut().mark_dead();
    }
}

/// Whether the hit-shapes of two living entities overlap.
pub fn touching(a: &dyn Entity, b: &dyn Entity) -> bool {
    !a.is_dead() && !b.is_dead() && a.hit_shape().intersects(&b.hit_shape())
}

// ── Sprites ──────────────────────────────────────────────────────────────────

/// Identity of the image the renderer should draw for an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Dart,
    Quill,
    Rock,
    Flare { enraged: bool },
    Bolt { enraged: bool },
    Raptor,
    Golem { wings_closed: bool },
    Charger { charging: bool },
    SolarBoss { enraged: bool },
    StormBoss { enraged: bool },
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl Player {
    /// A player centred horizontally, resting on the field floor.
    pub fn new(id: ObjectId) -> Self {
        Self {
            body: Body::new(
                id,
                (FIELD_WIDTH - PLAYER_WIDTH) / 2.0,
                FIELD_BOTTOM - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            vel_x: 0.0,
            vel_y: 0.0,
        }
    }

    pub fn set_velocity(&mut self, intent: MoveIntent) {
        self.vel_x = (intent.x * PLAYER_SPEED).round();
        self.vel_y = (intent.y * PLAYER_SPEED).round();
    }

    /// Where a forward shot leaves the sprite.
    pub fn muzzle(&self) -> (f32, f32) {
        (self.body.center_x(), self.body.y)
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self, _ctx: &mut FrameContext<'_>) {
        let body = &mut self.body;
        body.x = (body.x + self.vel_x).clamp(0.0, FIELD_WIDTH - body.width);
        body.y = (body.y + self.vel_y).clamp(FIELD_TOP, FIELD_BOTTOM - body.height);
    }

    /// A trimmed ellipse, smaller than the sprite.
    fn hit_shape(&self) -> Shape {
        Shape::Ellipse(
            self.body
                .bounds()
                .inset(PLAYER_HITBOX_PAD_X, PLAYER_HITBOX_PAD_Y),
        )
    }
}

// ── Object set ───────────────────────────────────────────────────────────────

/// Every simulated object except the player.
#[derive(Clone, Debug)]
pub enum GameObject {
    Projectile(Projectile),
    Hostile(Hostile),
}

impl GameObject {
    pub fn as_projectile(&self) -> Option<&Projectile> {
        match self {
            GameObject::Projectile(p) => Some(p),
            GameObject::Hostile(_) => None,
        }
    }

    pub fn as_hostile(&self) -> Option<&Hostile> {
        match self {
            GameObject::Hostile(h) => Some(h),
            GameObject::Projectile(_) => None,
        }
    }

    pub fn as_hostile_mut(&mut self) -> Option<&mut Hostile> {
        match self {
            GameObject::Hostile(h) => Some(h),
            GameObject::Projectile(_) => None,
        }
    }

    pub fn is_minion(&self) -> bool {
        self.as_hostile().is_some_and(Hostile::is_minion)
    }

    pub fn is_boss(&self) -> bool {
        self.as_hostile().is_some_and(Hostile::is_boss)
    }

    pub fn is_enemy_projectile(&self) -> bool {
        self.as_projectile().is_some_and(Projectile::is_enemy)
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            GameObject::Projectile(p) => p.sprite(),
            GameObject::Hostile(h) => h.sprite(),
        }
    }
}

impl From<Projectile> for GameObject {
    fn from(projectile: Projectile) -> Self {
        GameObject::Projectile(projectile)
    }
}

impl From<Hostile> for GameObject {
    fn from(hostile: Hostile) -> Self {
        GameObject::Hostile(hostile)
    }
}

impl Entity for GameObject {
    fn body(&self) -> &Body {
        match self {
            GameObject::Projectile(p) => p.body(),
            GameObject::Hostile(h) => h.body(),
        }
    }

    fn body_mut(&mut self) -> &mut Body {
        match self {
            GameObject::Projectile(p) => p.body_mut(),
            GameObject::Hostile(h) => h.body_mut(),
        }
    }

    fn advance(&mut self, ctx: &mut FrameContext<'_>) {
        match self {
            GameObject::Projectile(p) => p.advance(ctx),
            GameObject::Hostile(h) => h.advance(ctx),
        }
    }

    fn hit_shape(&self) -> Shape {
        match self {
            GameObject::Projectile(p) => p.hit_shape(),
            GameObject::Hostile(h) => h.hit_shape(),
        }
    }
}
