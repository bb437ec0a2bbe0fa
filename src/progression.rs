//! Score milestones and checkpoints.
//!
//! The milestone table is plain data: each entry pairs a score threshold
//! with one effect, applied once when the score first reaches it.

use serde::Deserialize;

use crate::boss::BossKind;
use crate::stage::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneEffect {
    /// Multiply every active spawner's interval by this factor.
    Difficulty(f64),
    /// Clear the field and bring in a boss.
    Boss(BossKind),
    /// Switch to a new stage theme.
    Stage(Stage),
}

impl MilestoneEffect {
    /// Boss and stage milestones are where a continue resumes.
    pub fn is_checkpoint(&self) -> bool {
        matches!(self, MilestoneEffect::Boss(_) | MilestoneEffect::Stage(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Milestone {
    pub score: u32,
    pub effect: MilestoneEffect,
}

impl Milestone {
    pub const fn new(score: u32, effect: MilestoneEffect) -> Self {
        Self { score, effect }
    }
}

pub fn default_milestones() -> Vec<Milestone> {
    use MilestoneEffect as E;
    vec![
        Milestone::new(0, E::Stage(Stage::One)),
        Milestone::new(100, E::Difficulty(0.8)),
        Milestone::new(300, E::Difficulty(0.8)),
        Milestone::new(500, E::Boss(BossKind::Solar)),
        Milestone::new(1500, E::Stage(Stage::Two)),
        Milestone::new(2000, E::Difficulty(0.85)),
        Milestone::new(2750, E::Difficulty(0.85)),
        Milestone::new(3500, E::Boss(BossKind::Storm)),
        Milestone::new(5000, E::Stage(Stage::Three)),
        Milestone::new(6000, E::Difficulty(0.85)),
        Milestone::new(7000, E::Difficulty(0.85)),
        Milestone::new(10000, E::Stage(Stage::Extra)),
    ]
}

/// Position in the milestone table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progression {
    index: usize,
    checkpoint: usize,
    boss_active: bool,
}

impl Progression {
    /// Index of the next milestone to be crossed.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn checkpoint(&self) -> usize {
        self.checkpoint
    }

    pub fn boss_active(&self) -> bool {
        self.boss_active
    }

    /// Advance past the next milestone if `score` has reached it. At most one
    /// milestone is crossed per call; nothing moves while a boss is up or
    /// once the table is exhausted.
    pub fn check(&mut self, score: u32, table: &[Milestone]) -> Option<(usize, Milestone)> {
        if self.boss_active {
            return None;
        }
        let milestone = *table.get(self.index)?;
        if score < milestone.score {
            return None;
        }
        let crossed = self.index;
        self.index += 1;
        if milestone.effect.is_checkpoint() {
            self.checkpoint = crossed;
        }
        if let MilestoneEffect::Boss(_) = milestone.effect {
            self.boss_active = true;
        }
        Some((crossed, milestone))
    }

    pub fn boss_defeated(&mut self) {
        self.boss_active = false;
    }

    /// Rewind to the last checkpoint so it fires again. Returns the score
    /// the session resumes with.
    pub fn rewind(&mut self, table: &[Milestone]) -> u32 {
        self.index = self.checkpoint;
        self.boss_active = false;
        table.get(self.checkpoint).map_or(0, |m| m.score)
    }
}
