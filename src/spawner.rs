//! Per-archetype spawn timers with jitter and difficulty scaling.

use rand::Rng;

use crate::config::SpawnTiming;
use crate::minion::MinionArchetype;

/// Lower bounds a spawner never goes below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnFloors {
    /// Smallest value the countdown is ever reset to.
    pub timer: u32,
    /// Smallest base interval difficulty scaling can reach.
    pub base: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemySpawner {
    archetype: MinionArchetype,
    base: u32,
    variance: u32,
    floors: SpawnFloors,
    timer: u32,
}

impl EnemySpawner {
    pub fn new<R: Rng + ?Sized>(
        archetype: MinionArchetype,
        timing: SpawnTiming,
        floors: SpawnFloors,
        rng: &mut R,
    ) -> Self {
        let floors = SpawnFloors {
            timer: floors.timer.max(1),
            base: floors.base.max(1),
        };
        let mut spawner = Self {
            archetype,
            base: timing.interval,
            variance: timing.variance,
            floors,
            timer: 0,
        };
        spawner.reset_timer(rng);
        spawner
    }

    pub fn archetype(&self) -> MinionArchetype {
        self.archetype
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn variance(&self) -> u32 {
        self.variance
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Count down one frame. Returns true when a minion should spawn; the
    /// timer has then already been re-armed.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.timer = self.timer.saturating_sub(1);
        if self.timer > 0 {
            return false;
        }
        self.reset_timer(rng);
        true
    }

    /// Shrink (factor < 1) or stretch the base interval and its variance.
    pub fn scale_difficulty(&mut self, factor: f64) {
        let scale = |v: u32| (f64::from(v) * factor).round().max(0.0) as u32;
        self.base = scale(self.base).max(self.floors.base);
        self.variance = scale(self.variance);
        log::debug!(
            "{:?} spawner scaled by {factor}: base {} variance {}",
            self.archetype,
            self.base,
            self.variance
        );
    }

    fn reset_timer<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let base = i64::from(self.base);
        let variance = i64::from(self.variance);
        let jitter = if variance > 0 {
            rng.gen_range(-variance..=variance)
        } else {
            0
        };
        let floor = i64::from(self.floors.timer);
        self.timer = (base + jitter).max(floor) as u32;
    }
}
