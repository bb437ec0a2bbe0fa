//! Special attacks unlocked by defeating bosses.

use crate::boss::BossKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ability {
    /// Bouncing flare, granted by the solar boss.
    Flare,
    /// Piercing bolt, granted by the storm boss.
    Bolt,
}

impl Ability {
    pub const ALL: [Ability; 2] = [Ability::Flare, Ability::Bolt];

    /// Map the 1-based slot the player pressed. Slot 3 is reserved.
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Ability::Flare),
            2 => Some(Ability::Bolt),
            _ => None,
        }
    }

    pub fn granted_by(boss: BossKind) -> Self {
        match boss {
            BossKind::Solar => Ability::Flare,
            BossKind::Storm => Ability::Bolt,
        }
    }

    fn index(self) -> usize {
        match self {
            Ability::Flare => 0,
            Ability::Bolt => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Slot {
    unlocked: bool,
    cooldown: u32,
    max_cooldown: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Abilities {
    slots: [Slot; 2],
}

impl Abilities {
    pub fn new(cooldowns: [u32; 2]) -> Self {
        let slot = |max_cooldown| Slot {
            unlocked: false,
            cooldown: 0,
            max_cooldown,
        };
        Self {
            slots: [slot(cooldowns[0]), slot(cooldowns[1])],
        }
    }

    pub fn unlock(&mut self, ability: Ability) {
        self.slots[ability.index()].unlocked = true;
    }

    pub fn is_unlocked(&self, ability: Ability) -> bool {
        self.slots[ability.index()].unlocked
    }

    pub fn cooldown(&self, ability: Ability) -> u32 {
        self.slots[ability.index()].cooldown
    }

    /// 0.0 when ready, 1.0 right after use.
    pub fn cooldown_fraction(&self, ability: Ability) -> f32 {
        let slot = &self.slots[ability.index()];
        if slot.max_cooldown == 0 {
            return 0.0;
        }
        slot.cooldown as f32 / slot.max_cooldown as f32
    }

    /// Start the cooldown if the ability is unlocked and ready.
    pub fn try_use(&mut self, ability: Ability) -> bool {
        let slot = &mut self.slots[ability.index()];
        if !slot.unlocked || slot.cooldown > 0 {
            return false;
        }
        slot.cooldown = slot.max_cooldown;
        true
    }

    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            slot.cooldown = slot.cooldown.saturating_sub(1);
        }
    }
}
