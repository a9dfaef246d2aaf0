//! Game configuration
//!
//! Every tunable the simulation reads (viewport bounds, spawn thresholds,
//! cooldown durations) lives in one immutable value handed to the session
//! at construction. Defaults reproduce the shipped balance; the shell may
//! load JSON overrides. Invalid values fail fast with a typed error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at construction time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be non-zero")]
    Zero { field: &'static str },
    #[error("{field} must be within [0, 1] (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("failed to read config overrides: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config overrides: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 1024.0,
        }
    }
}

/// Player craft tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Movement speed in pixels per tick
    pub speed: f32,
    /// Horizontal spawn position (vertical spawn is the viewport center)
    pub start_x: f32,
    pub fire_cooldown_ms: u64,
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 30.0,
            speed: 5.0,
            start_x: 50.0,
            fire_cooldown_ms: 200,
            bullet_speed: 8.0,
            bullet_width: 8.0,
            bullet_height: 4.0,
        }
    }
}

/// Formation spawning cadence and the boss trigger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Interval between formation spawns while the boss is absent
    pub interval_ms: u64,
    /// Vertical margin kept clear at the top and bottom of the spawn band
    pub edge_margin: f32,
    /// Probability of a line formation (the rest are weaver singletons)
    pub line_weight: f64,
    /// Members in a line formation
    pub line_count: usize,
    /// Horizontal spacing between line members, fixed at creation
    pub line_spacing: f32,
    /// Defeated-enemy count that summons the boss
    pub boss_threshold: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            edge_margin: 100.0,
            line_weight: 0.7,
            line_count: 5,
            line_spacing: 40.0,
            boss_threshold: 30,
        }
    }
}

/// Boss battleship tuning: body, drift path, and the three attack systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    pub width: f32,
    pub height: f32,
    /// Distance of the resting position from the right screen edge
    pub right_margin: f32,
    /// Drift parameter increment per tick
    pub sway_step: f32,
    pub sway_amp_x: f32,
    pub sway_amp_y: f32,
    pub health: u32,
    pub volley_cooldown_ms: u64,
    pub volley_speed: f32,
    pub volley_bullet_radius: f32,
    pub laser_cooldown_ms: u64,
    pub laser_duration_ms: u64,
    pub laser_warning_ms: u64,
    /// Window over which a beam grows from zero to full reach
    pub laser_travel_ms: u64,
    pub laser_length: f32,
    pub beam_width: f32,
    /// Beam rotation rate in degrees per second
    pub laser_rotation_deg_per_s: f32,
    pub bit_cooldown_ms: u64,
    pub bit_shot_speed: f32,
    pub bit_float_amp: f32,
    pub bit_float_step: f32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 240.0,
            right_margin: 150.0,
            sway_step: 0.03,
            sway_amp_x: 20.0,
            sway_amp_y: 120.0,
            health: 30,
            volley_cooldown_ms: 800,
            volley_speed: 3.0,
            volley_bullet_radius: 5.0,
            laser_cooldown_ms: 10_000,
            laser_duration_ms: 2000,
            laser_warning_ms: 1000,
            laser_travel_ms: 500,
            laser_length: 1500.0,
            beam_width: 24.0,
            laser_rotation_deg_per_s: 7.5,
            bit_cooldown_ms: 1500,
            bit_shot_speed: 1.5,
            bit_float_amp: 20.0,
            bit_float_step: 0.03,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub view: ViewConfig,
    pub player: PlayerConfig,
    pub spawn: SpawnConfig,
    pub boss: BossConfig,
}

impl GameConfig {
    /// Load overrides from a JSON file (missing fields fall back to defaults)
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Reject dimensions, speeds and durations a session cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("view.width", self.view.width)?;
        positive("view.height", self.view.height)?;

        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("player.speed", self.player.speed)?;
        positive("player.bullet_speed", self.player.bullet_speed)?;
        positive("player.bullet_width", self.player.bullet_width)?;
        positive("player.bullet_height", self.player.bullet_height)?;
        nonzero("player.fire_cooldown_ms", self.player.fire_cooldown_ms)?;

        nonzero("spawn.interval_ms", self.spawn.interval_ms)?;
        positive("spawn.line_spacing", self.spawn.line_spacing)?;
        nonzero("spawn.line_count", self.spawn.line_count as u64)?;
        nonzero("spawn.boss_threshold", u64::from(self.spawn.boss_threshold))?;
        if !(0.0..=1.0).contains(&self.spawn.line_weight) {
            return Err(ConfigError::OutOfRange {
                field: "spawn.line_weight",
                value: self.spawn.line_weight,
            });
        }

        positive("boss.width", self.boss.width)?;
        positive("boss.height", self.boss.height)?;
        positive("boss.volley_speed", self.boss.volley_speed)?;
        positive("boss.volley_bullet_radius", self.boss.volley_bullet_radius)?;
        positive("boss.laser_length", self.boss.laser_length)?;
        positive("boss.beam_width", self.boss.beam_width)?;
        positive("boss.bit_shot_speed", self.boss.bit_shot_speed)?;
        nonzero("boss.health", u64::from(self.boss.health))?;
        nonzero("boss.volley_cooldown_ms", self.boss.volley_cooldown_ms)?;
        nonzero("boss.laser_cooldown_ms", self.boss.laser_cooldown_ms)?;
        nonzero("boss.laser_duration_ms", self.boss.laser_duration_ms)?;
        nonzero("boss.laser_warning_ms", self.boss.laser_warning_ms)?;
        nonzero("boss.laser_travel_ms", self.boss.laser_travel_ms)?;
        nonzero("boss.bit_cooldown_ms", self.boss.bit_cooldown_ms)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn nonzero(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::Zero { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_speed_is_rejected() {
        let mut config = GameConfig::default();
        config.player.speed = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "player.speed",
                ..
            })
        ));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut config = GameConfig::default();
        config.boss.laser_warning_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Zero {
                field: "boss.laser_warning_ms"
            })
        ));
    }

    #[test]
    fn spawn_weight_outside_unit_interval_is_rejected() {
        let mut config = GameConfig::default();
        config.spawn.line_weight = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "spawn": { "boss_threshold": 10 } }"#).unwrap();
        assert_eq!(config.spawn.boss_threshold, 10);
        assert_eq!(config.view.width, 1280.0);
        assert_eq!(config.boss.health, 30);
    }
}
