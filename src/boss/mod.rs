//! Bosses: continuous movement plus a discrete behaviour mode, with a
//! one-way enrage latch at half health.

mod solar;
mod storm;

pub use solar::SolarBoss;
pub use storm::{StormBoss, StormPhase};

use rand::Rng;
use serde::Deserialize;

use crate::entities::{Body, FrameContext, ObjectId, Sprite};
use crate::hostile::{Health, Hostile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossKind {
    Solar,
    Storm,
}

impl BossKind {
    pub fn spawn<R: Rng + ?Sized>(self, id: ObjectId, rng: &mut R) -> Hostile {
        match self {
            BossKind::Solar => SolarBoss::spawn(id),
            BossKind::Storm => StormBoss::spawn(id, rng),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BossKind::Solar => "Solar Warden",
            BossKind::Storm => "Storm Caller",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Boss {
    Solar(SolarBoss),
    Storm(StormBoss),
}

impl Boss {
    pub fn kind(&self) -> BossKind {
        match self {
            Boss::Solar(_) => BossKind::Solar,
            Boss::Storm(_) => BossKind::Storm,
        }
    }

    pub fn is_enraged(&self) -> bool {
        match self {
            Boss::Solar(b) => b.is_enraged(),
            Boss::Storm(b) => b.is_enraged(),
        }
    }

    pub fn sprite(&self) -> Sprite {
        let enraged = self.is_enraged();
        match self {
            Boss::Solar(_) => Sprite::SolarBoss { enraged },
            Boss::Storm(_) => Sprite::StormBoss { enraged },
        }
    }

    /// Called after every non-lethal hit.
    pub(crate) fn on_damaged(&mut self, health: Health) {
        if !health.is_wounded() {
            return;
        }
        match self {
            Boss::Solar(b) => b.enrage(),
            Boss::Storm(b) => b.enrage(),
        }
    }

    pub(crate) fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        match self {
            Boss::Solar(b) => b.advance(body, ctx),
            Boss::Storm(b) => b.advance(body, ctx),
        }
    }
}
