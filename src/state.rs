//! The whole session, owned in one value.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::abilities::Abilities;
use crate::config::GameConfig;
use crate::entities::{GameObject, IdAllocator, Player};
use crate::hostile::Hostile;
use crate::progression::Progression;
use crate::spawner::EnemySpawner;
use crate::stage::{Background, Stage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    /// A stage or boss announcement is waiting to be dismissed.
    Message,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub config: Arc<GameConfig>,
    pub player: Player,
    /// Live objects, in insertion order.
    pub objects: Vec<GameObject>,
    /// Created mid-frame; merged at the start of the next movement pass.
    pub pending: Vec<GameObject>,
    pub score: u32,
    pub lives: u32,
    pub invincibility: u32,
    pub firing: bool,
    pub fire_cooldown: u32,
    pub fire_interval: u32,
    pub abilities: Abilities,
    pub progression: Progression,
    pub spawners: Vec<EnemySpawner>,
    pub stage: Stage,
    pub background: Background,
    pub status: GameStatus,
    pub messages: VecDeque<String>,
    pub frame: u64,
    pub ids: IdAllocator,
}

impl GameState {
    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }

    /// Live objects and pending ones, in that order.
    pub fn all_objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter().chain(self.pending.iter())
    }

    pub fn boss(&self) -> Option<&Hostile> {
        self.all_objects()
            .filter_map(GameObject::as_hostile)
            .find(|h| h.is_boss() && !h.body.is_dead())
    }
}
