//! Damageable enemies: minions and bosses share HP, hit-flash and scoring.

use crate::boss::{Boss, BossKind};
use crate::constants::FLASH_FRAMES;
use crate::entities::{Body, Entity, FrameContext, Sprite};
use crate::geometry::Shape;
use crate::minion::{Minion, MinionArchetype};

/// Hit points, never above the maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    hp: i32,
    max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { hp: max, max }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.hp.max(0) as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn is_depleted(&self) -> bool {
        self.hp <= 0
    }

    /// At or below half of the maximum.
    pub fn is_wounded(&self) -> bool {
        self.hp * 2 <= self.max
    }

    fn lose(&mut self, amount: i32) {
        self.hp = (self.hp - amount).min(self.max);
    }
}

/// Reported once, by the hit that kills a hostile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defeat {
    pub points: u32,
    pub boss: Option<BossKind>,
}

#[derive(Clone, Debug)]
pub enum HostileKind {
    Minion(Minion),
    Boss(Boss),
}

#[derive(Clone, Debug)]
pub struct Hostile {
    pub body: Body,
    pub score_points: u32,
    pub round: bool,
    pub kind: HostileKind,
    health: Health,
    flash: u32,
}

impl Hostile {
    pub fn new(body: Body, max_hp: i32, score_points: u32, kind: HostileKind) -> Self {
        Self {
            body,
            score_points,
            round: false,
            kind,
            health: Health::new(max_hp),
            flash: 0,
        }
    }

    pub fn with_round_hitbox(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn flash_frames(&self) -> u32 {
        self.flash
    }

    pub fn is_flashing(&self) -> bool {
        self.flash > 0
    }

    pub fn is_minion(&self) -> bool {
        matches!(self.kind, HostileKind::Minion(_))
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, HostileKind::Boss(_))
    }

    pub fn minion(&self) -> Option<&Minion> {
        match &self.kind {
            HostileKind::Minion(m) => Some(m),
            HostileKind::Boss(_) => None,
        }
    }

    pub fn boss(&self) -> Option<&Boss> {
        match &self.kind {
            HostileKind::Boss(b) => Some(b),
            HostileKind::Minion(_) => None,
        }
    }

    pub fn archetype(&self) -> Option<MinionArchetype> {
        self.minion().map(Minion::archetype)
    }

    pub fn sprite(&self) -> Sprite {
        match &self.kind {
            HostileKind::Minion(m) => m.sprite(),
            HostileKind::Boss(b) => b.sprite(),
        }
    }

    /// Apply a hit. Returns the defeat exactly once, on the killing blow;
    /// hits on a dead hostile change nothing.
    pub fn take_damage(&mut self, amount: i32) -> Option<Defeat> {
        if self.body.is_dead() {
            return None;
        }
        self.health.lose(amount);
        self.flash = FLASH_FRAMES;

        if !self.health.is_depleted() {
            if let HostileKind::Boss(boss) = &mut self.kind {
                boss.on_damaged(self.health);
            }
            return None;
        }

        self.body.mark_dead();
        Some(Defeat {
            points: self.score_points,
            boss: self.boss().map(Boss::kind),
        })
    }
}

impl Entity for Hostile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn advance(&mut self, ctx: &mut FrameContext<'_>) {
        self.flash = self.flash.saturating_sub(1);
        match &mut self.kind {
            HostileKind::Minion(m) => m.advance(&mut self.body, ctx),
            HostileKind::Boss(b) => b.advance(&mut self.body, ctx),
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
