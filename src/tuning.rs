//! Data-driven game balance
//!
//! Entity geometry is fixed in [`consts`](crate::consts); everything a
//! designer would want to nudge lives here and can be overridden from a
//! JSON file at startup. Unknown fields fall back to defaults.

use serde::{Deserialize, Serialize};

/// Balance table carried inside `GameState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Alien spawn delay at score 0 (ms)
    pub spawn_delay_base_ms: f64,
    /// Spawn delay never drops below this (ms)
    pub spawn_delay_floor_ms: f64,
    /// Upper bound (inclusive) for spawned alien life
    pub alien_max_life: u32,
    /// Alien descent per frame
    pub alien_fall_speed: f32,
    /// Bullet ascent per frame
    pub bullet_speed: f32,
    /// Score added per alien kill
    pub kill_reward: u32,
    pub default_ammo: u32,
    pub max_ammo: u32,
    pub default_health: u32,
    /// Ammo debited per default shot
    pub fire_cost_default: u32,
    /// Ammo debited per super shot (one-shot kills carry a premium)
    pub fire_cost_super: u32,
    /// Bounding-box padding when testing block pairs for merging
    pub merge_slack: f32,
    /// The lower block of a pair must have fallen past this y to merge
    pub merge_min_y: f32,
    /// Base block fall speed, scaled by value richness
    pub block_fall_speed: f32,
    /// Cap on the richness multiplier
    pub block_speed_cap: f32,
    /// Combined block value worth a 1x richness multiplier
    pub block_value_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_delay_base_ms: 2000.0,
            spawn_delay_floor_ms: 500.0,
            alien_max_life: 10,
            alien_fall_speed: 1.0,
            bullet_speed: 7.0,
            kill_reward: 10,
            default_ammo: 500,
            max_ammo: 1000,
            default_health: 100,
            fire_cost_default: 1,
            fire_cost_super: 50,
            merge_slack: 50.0,
            merge_min_y: 30.0,
            block_fall_speed: 4.0,
            block_speed_cap: 2.0,
            block_value_scale: 50.0,
        }
    }
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning file {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {path}; using defaults");
                Self::default()
            }
        }
    }
}
