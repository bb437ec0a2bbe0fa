use crate::constants::*;
use crate::entities::{Body, FrameContext, ObjectId};
use crate::hostile::{Hostile, HostileKind};
use crate::projectile::Projectile;

use super::Boss;

/// Sweeps side to side along the top of the field, hurling a flare every
/// time it turns at a wall.
#[derive(Clone, Debug, PartialEq)]
pub struct SolarBoss {
    pub vel_x: f32,
    enraged: bool,
}

impl Default for SolarBoss {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarBoss {
    pub fn new() -> Self {
        Self {
            vel_x: SOLAR_SPEED,
            enraged: false,
        }
    }

    pub fn spawn(id: ObjectId) -> Hostile {
        let body = Body::new(
            id,
            (FIELD_WIDTH - SOLAR_WIDTH) / 2.0,
            FIELD_TOP,
            SOLAR_WIDTH,
            SOLAR_HEIGHT,
        );
        Hostile::new(
            body,
            SOLAR_HP,
            SOLAR_SCORE,
            HostileKind::Boss(Boss::Solar(Self::new())),
        )
    }

    pub fn is_enraged(&self) -> bool {
        self.enraged
    }

    pub(crate) fn enrage(&mut self) {
        if self.enraged {
            return;
        }
        self.enraged = true;
        self.vel_x = SOLAR_SPEED_ENRAGED * self.vel_x.signum();
        log::info!("solar boss enraged");
    }

    pub(crate) fn advance(&mut self, body: &mut Body, ctx: &mut FrameContext<'_>) {
        body.x += self.vel_x;

        let turned = if body.x <= 0.0 {
            body.x = 0.0;
            self.vel_x = self.vel_x.abs();
            true
        } else if body.x >= FIELD_WIDTH - body.width {
            body.x = FIELD_WIDTH - body.width;
            self.vel_x = -self.vel_x.abs();
            true
        } else {
            false
        };

        if turned {
            let id = ctx.next_id();
            let flare = Projectile::enemy_flare(id, body, self.vel_x, self.enraged, &mut *ctx.rng);
            ctx.spawn(flare);
        }
    }
}
