//! Simulation tuning
//!
//! Every gameplay constant lives in [`SimConfig`]: arena extents, navigation
//! radii and cadences, combat timing, and per-archetype stats. Configs load
//! from RON (the primary format) or JSON, and serialize back for tooling.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::combat::loot::{LootTable, PowerupKind, PowerupWeight};
use crate::ecs::agent::Archetype;
use crate::nav::{ArenaBounds, CellBounds};

/// Path planning and movement resolution tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Max A* node expansions per plan request
    pub expansion_budget: u32,
    /// Probe radius when testing cells during planning
    pub path_probe_radius: f32,
    /// Probe radius for full-collision movement
    pub move_probe_radius: f32,
    /// Probe radius for light-collision movement
    pub nudge_probe_radius: f32,
    /// Fraction of the step retried when a nudge is blocked
    pub nudge_fraction: f32,
    /// Longest a single wall slide may run before a stationary tick
    pub slide_max_duration: f32,
    /// Distance at which a waypoint counts as reached
    pub waypoint_radius: f32,
    /// Seconds between plans while making progress
    pub replan_interval: f32,
    /// Seconds between plans while stuck
    pub replan_interval_stuck: f32,
    /// Per-tick displacement below this counts as not moving
    pub stuck_epsilon: f32,
    /// Seconds of no movement before an agent counts as stuck
    pub stuck_after: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            expansion_budget: 100,
            path_probe_radius: 0.4,
            move_probe_radius: 0.3,
            nudge_probe_radius: 0.2,
            nudge_fraction: 0.5,
            slide_max_duration: 0.25,
            waypoint_radius: 0.15,
            replan_interval: 0.5,
            replan_interval_stuck: 0.2,
            stuck_epsilon: 1e-3,
            stuck_after: 0.4,
        }
    }
}

/// Damage feedback and death sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// How long the hit visual overrides movement visuals
    pub hit_feedback_seconds: f32,
    /// Duration of each death frame
    pub death_frame_seconds: f32,
    /// Hold after the final death frame before removal
    pub death_hold_seconds: f32,
    /// Distance at which a feared agent touching the fear origin dies
    pub fear_contact_radius: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hit_feedback_seconds: 0.1,
            death_frame_seconds: 0.15,
            death_hold_seconds: 2.0,
            fear_contact_radius: 0.5,
        }
    }
}

/// Stats shared by every archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    pub max_health: i32,
    /// World units per second
    pub speed: f32,
    /// Death animation length; zero means an immediate roll-and-hold
    pub death_frames: u8,
    /// Damage carried by this agent's projectiles
    pub attack_damage: i32,
    pub loot: LootTable,
}

/// Sentry-specific tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentryConfig {
    pub stats: ArchetypeStats,
    /// Minimum distance from the target a sampled destination must keep
    pub min_target_distance: f32,
    /// Sampling attempts before the distance requirement is waived
    pub sample_attempts: u32,
    /// Distance at which the destination counts as reached
    pub arrive_radius: f32,
    /// Length of the activation wind-up once rooted
    pub activation_seconds: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            stats: ArchetypeStats {
                max_health: 40,
                speed: 1.2,
                death_frames: 4,
                attack_damage: 0,
                loot: LootTable {
                    drop_chance: 0.5,
                    coin_weight: 55.0,
                    heart_weight: 25.0,
                    powerups: all_powerups(2.5),
                    rare_coin_chance: 0.15,
                },
            },
            min_target_distance: 4.0,
            sample_attempts: 16,
            arrive_radius: 0.2,
            activation_seconds: 1.0,
        }
    }
}

/// Cowboy boss tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CowboyConfig {
    pub stats: ArchetypeStats,
    /// Anchor the boss idles at and returns to after every skill
    pub cover: Vec2,
    /// Idle time at cover before the next skill is drawn
    pub dwell_seconds: f32,
    /// How far inside the arena edge sweep endpoints sit
    pub edge_inset: f32,
    /// Row the edge-to-edge sweeps run along
    pub sweep_row: f32,
    /// Seconds between upward shots while sweeping
    pub sweep_fire_interval: f32,
    /// Pause after reaching the far side
    pub side_pause_seconds: f32,
    /// Offset from cover to the right-hand peek flank; the left flank is its
    /// mirror across the cover's vertical axis
    pub peek_offset: Vec2,
    /// Right-left excursion pairs per peek-shoot skill
    pub peek_reps: u32,
    /// Give-up timeout for any scripted travel leg
    pub travel_timeout: f32,
}

impl Default for CowboyConfig {
    fn default() -> Self {
        Self {
            stats: ArchetypeStats {
                max_health: 300,
                speed: 3.0,
                death_frames: 6,
                attack_damage: 1,
                loot: boss_loot(),
            },
            cover: Vec2::new(0.0, -6.0),
            dwell_seconds: 2.0,
            edge_inset: 1.0,
            sweep_row: -6.0,
            sweep_fire_interval: 0.4,
            side_pause_seconds: 0.5,
            peek_offset: Vec2::new(1.5, 1.0),
            peek_reps: 3,
            travel_timeout: 10.0,
        }
    }
}

/// Demon boss tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemonConfig {
    pub stats: ArchetypeStats,
    /// Grace period after spawn before the first skill
    pub initial_delay: f32,
    /// Think time between skills
    pub choose_delay: f32,
    /// How far inside the arena edge the four skill-1 midpoints sit
    pub midpoint_inset: f32,
    /// Seconds between shots while traveling during skill 1
    pub skill1_fire_interval: f32,
    /// Barrage duration bounds at the skill-1 midpoint
    pub skill1_min_seconds: f32,
    pub skill1_max_seconds: f32,
    /// Minion waves per skill-2 cast
    pub skill2_waves: u32,
    /// Seconds between waves
    pub skill2_wave_gap: f32,
    /// Cardinal offset of each wave spawn around the boss
    pub skill2_offset: f32,
    /// Telegraph lead time before each wave materializes
    pub skill2_telegraph_seconds: f32,
    /// Total length of the skill-3 radial barrage
    pub skill3_seconds: f32,
    /// Seconds between radial bursts
    pub skill3_interval: f32,
    /// Projectiles per radial burst
    pub skill3_rays: u32,
    /// Give-up timeout for any scripted travel leg
    pub travel_timeout: f32,
}

impl Default for DemonConfig {
    fn default() -> Self {
        Self {
            stats: ArchetypeStats {
                max_health: 400,
                speed: 2.5,
                death_frames: 6,
                attack_damage: 1,
                loot: boss_loot(),
            },
            initial_delay: 3.0,
            choose_delay: 0.5,
            midpoint_inset: 1.0,
            skill1_fire_interval: 0.5,
            skill1_min_seconds: 2.0,
            skill1_max_seconds: 4.0,
            skill2_waves: 3,
            skill2_wave_gap: 2.0,
            skill2_offset: 1.5,
            skill2_telegraph_seconds: 0.6,
            skill3_seconds: 3.0,
            skill3_interval: 0.3,
            skill3_rays: 8,
            travel_timeout: 10.0,
        }
    }
}

/// Root tuning record for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub arena: ArenaBounds,
    pub cells: CellBounds,
    pub nav: NavConfig,
    pub combat: CombatConfig,
    pub normal: ArchetypeStats,
    pub ghost: ArchetypeStats,
    pub sentry: SentryConfig,
    pub cowboy: CowboyConfig,
    pub demon: DemonConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: ArenaBounds::default(),
            cells: CellBounds::default(),
            nav: NavConfig::default(),
            combat: CombatConfig::default(),
            normal: ArchetypeStats {
                max_health: 50,
                speed: 2.0,
                death_frames: 4,
                attack_damage: 0,
                loot: LootTable::default(),
            },
            ghost: ArchetypeStats {
                max_health: 30,
                speed: 1.5,
                death_frames: 4,
                attack_damage: 0,
                loot: LootTable::default(),
            },
            sentry: SentryConfig::default(),
            cowboy: CowboyConfig::default(),
            demon: DemonConfig::default(),
        }
    }
}

impl SimConfig {
    /// Stats block for an archetype.
    #[must_use]
    pub fn stats_for(&self, archetype: Archetype) -> &ArchetypeStats {
        match archetype {
            Archetype::Normal => &self.normal,
            Archetype::Ghost => &self.ghost,
            Archetype::Sentry => &self.sentry.stats,
            Archetype::Cowboy => &self.cowboy.stats,
            Archetype::Demon => &self.demon.stats,
        }
    }

    /// Save the config to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a config from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Self =
            ron::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))?;
        Ok(config)
    }

    /// Save the config to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::DeserializeError(e.to_string()))?;
        Ok(config)
    }
}

fn all_powerups(weight: f32) -> Vec<PowerupWeight> {
    PowerupKind::ALL
        .iter()
        .map(|&kind| PowerupWeight { kind, weight })
        .collect()
}

fn boss_loot() -> LootTable {
    LootTable {
        drop_chance: 1.0,
        coin_weight: 60.0,
        heart_weight: 10.0,
        powerups: all_powerups(3.75),
        rare_coin_chance: 0.5,
    }
}

/// Errors that can occur while loading or saving configs
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
