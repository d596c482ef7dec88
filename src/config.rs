//! Tunable game constants.
//!
//! Every field has a default matching the stock game, so a JSON file only
//! needs the keys it wants to override.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::Position;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of spawn columns.
    pub width: i32,
    /// Objects below this row are culled.
    pub height: i32,
    /// The ship may occupy `[0, move_bound)` on both axes.
    pub move_bound: i32,

    /// Percentage chance per tick of an asteroid spawn at level 1.
    pub start_spawn_rate: u32,
    /// Added to the spawn rate on every level-up.
    pub spawn_rate_increase: u32,
    pub start_level: u32,
    /// Score required per level.
    pub score_threshold: u32,

    pub asteroid_damage: u32,
    pub enemy_damage: u32,
    /// Enemy spawn chance as a fraction of the asteroid spawn rate.
    pub enemy_spawn_multiplier: f64,
    /// Power-up spawn chance as a fraction of the asteroid spawn rate.
    pub power_up_spawn_multiplier: f64,

    /// Health granted by a health power-up.
    pub health_restore: u32,
    /// Score granted by a shield power-up.
    pub shield_score: u32,

    /// Asteroids and enemies descend on ticks divisible by this.
    pub descent_interval: u64,

    pub ship_start: Position,
    pub ship_start_health: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 10,
            height: 20,
            move_bound: 20,
            start_spawn_rate: 2,
            spawn_rate_increase: 5,
            start_level: 1,
            score_threshold: 100,
            asteroid_damage: 10,
            enemy_damage: 20,
            enemy_spawn_multiplier: 0.5,
            power_up_spawn_multiplier: 0.25,
            health_restore: 20,
            shield_score: 50,
            descent_interval: 10,
            ship_start: Position { x: 5, y: 10 },
            ship_start_health: 100,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with: an empty field, a
    /// descent interval of zero, or a ship start the ship could never
    /// move back to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("move_bound", self.move_bound),
        ] {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.descent_interval == 0 {
            return Err(ConfigError::Invalid(
                "descent_interval must be at least 1".to_string(),
            ));
        }
        let Position { x, y } = self.ship_start;
        let on_grid = (0..self.move_bound).contains(&x) && (0..self.move_bound).contains(&y);
        if !on_grid {
            return Err(ConfigError::Invalid(format!(
                "ship_start ({}, {}) is outside [0, {})",
                x, y, self.move_bound
            )));
        }
        Ok(())
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}
