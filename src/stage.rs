//! Stage themes and the scrolling backdrop.

use serde::Deserialize;

use crate::constants::{BACKGROUND_TILE_HEIGHT, SCROLL_SPEED};
use crate::minion::MinionArchetype;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    One,
    Two,
    Three,
    Extra,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::One => "STAGE 1",
            Stage::Two => "STAGE 2",
            Stage::Three => "STAGE 3",
            Stage::Extra => "EXTRA STAGE",
        }
    }

    /// Minions this stage's spawners produce.
    pub fn roster(self) -> &'static [MinionArchetype] {
        use MinionArchetype::*;
        match self {
            Stage::One => &[Raptor],
            Stage::Two => &[Raptor, Golem],
            Stage::Three | Stage::Extra => &[Raptor, Golem, Charger],
        }
    }

    /// Extra difficulty applied to the fresh spawner set.
    pub fn spawn_scale(self) -> Option<f64> {
        match self {
            Stage::Extra => Some(0.7),
            _ => None,
        }
    }

    /// Whether the player's shot uses the boosted fire interval.
    pub fn boosted_fire(self) -> bool {
        matches!(self, Stage::Three | Stage::Extra)
    }

    pub fn scroll_speed(self) -> f32 {
        match self {
            Stage::One => SCROLL_SPEED,
            Stage::Two => SCROLL_SPEED * 1.5,
            Stage::Three => SCROLL_SPEED * 2.0,
            Stage::Extra => SCROLL_SPEED * 3.0,
        }
    }
}

/// Two stacked tiles scrolling downward, wrapping every two tile heights.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    offset: f32,
    speed: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            offset: 0.0,
            speed: SCROLL_SPEED,
        }
    }
}

impl Background {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn advance(&mut self) {
        self.offset += self.speed;
        let period = BACKGROUND_TILE_HEIGHT * 2.0;
        if self.offset >= period {
            self.offset -= period;
        }
    }
}
