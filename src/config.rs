//! Session configuration.
//!
//! Every key is optional in the TOML file; missing keys fall back to the
//! values in `constants.rs`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;
use crate::minion::MinionArchetype;
use crate::progression::{default_milestones, Milestone, MilestoneEffect};

/// File the binary looks for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pantheon.toml";

/// Base interval and jitter for one spawner, in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SpawnTiming {
    pub interval: u32,
    pub variance: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpawnTable {
    pub raptor: SpawnTiming,
    pub golem: SpawnTiming,
    pub charger: SpawnTiming,
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self {
            raptor: SpawnTiming {
                interval: RAPTOR_SPAWN_INTERVAL,
                variance: RAPTOR_SPAWN_VARIANCE,
            },
            golem: SpawnTiming {
                interval: GOLEM_SPAWN_INTERVAL,
                variance: GOLEM_SPAWN_VARIANCE,
            },
            charger: SpawnTiming {
                interval: CHARGER_SPAWN_INTERVAL,
                variance: CHARGER_SPAWN_VARIANCE,
            },
        }
    }
}

impl SpawnTable {
    pub fn timing(&self, archetype: MinionArchetype) -> SpawnTiming {
        match archetype {
            MinionArchetype::Raptor => self.raptor,
            MinionArchetype::Golem => self.golem,
            MinionArchetype::Charger => self.charger,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_lives: u32,
    pub invincibility_frames: u32,
    pub fire_interval: u32,
    /// Fire interval once a stage with the fire-rate boost is reached.
    pub fire_interval_boosted: u32,
    /// Cooldowns of ability 1 and ability 2, in frames.
    pub ability_cooldowns: [u32; 2],
    pub spawn_timer_floor: u32,
    pub spawn_base_floor: u32,
    pub spawn: SpawnTable,
    pub milestones: Vec<Milestone>,
    /// Stage and boss announcements pause the frame step until dismissed.
    pub modal_messages: bool,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: PLAYER_MAX_LIVES,
            invincibility_frames: PLAYER_INVINCIBLE_FRAMES,
            fire_interval: FIRE_INTERVAL,
            fire_interval_boosted: FIRE_INTERVAL_BOOSTED,
            ability_cooldowns: [ABILITY1_COOLDOWN, ABILITY2_COOLDOWN],
            spawn_timer_floor: SPAWN_TIMER_FLOOR,
            spawn_base_floor: SPAWN_BASE_FLOOR,
            spawn: SpawnTable::default(),
            milestones: default_milestones(),
            modal_messages: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `path` when it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be at least 1"));
        }
        if self.fire_interval == 0 {
            return Err(ConfigError::invalid("fire_interval", "must be at least 1"));
        }
        if self.fire_interval_boosted == 0 {
            return Err(ConfigError::invalid(
                "fire_interval_boosted",
                "must be at least 1",
            ));
        }
        if self.spawn_timer_floor == 0 {
            return Err(ConfigError::invalid("spawn_timer_floor", "must be at least 1"));
        }
        if self.spawn_base_floor == 0 {
            return Err(ConfigError::invalid("spawn_base_floor", "must be at least 1"));
        }
        for pair in self.milestones.windows(2) {
            if pair[1].score < pair[0].score {
                return Err(ConfigError::invalid(
                    "milestones",
                    format!(
                        "scores must not decrease ({} follows {})",
                        pair[1].score, pair[0].score
                    ),
                ));
            }
        }
        for milestone in &self.milestones {
            if let MilestoneEffect::Difficulty(factor) = milestone.effect {
                if !(factor > 0.0 && factor <= 1.0) {
                    return Err(ConfigError::invalid(
                        "milestones",
                        format!(
                            "difficulty factor {factor} at score {} is outside (0, 1]",
                            milestone.score
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
