//! Session configuration.
//!
//! A `GameConfig` is built once (defaults, or a RON file), validated, and then
//! handed by reference to every component. Only `width`/`height` change later,
//! through `Session::resize`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::occupancy::WallRule;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Field of view in radians.
    pub fov: f32,
    pub min_depth: f32,
    pub max_depth: f32,
    pub ray_steps: usize,
    pub maze_rows: usize,
    pub maze_cols: usize,
    /// Cells per second.
    pub player_speed: f32,
    /// Radians per second.
    pub rotation_speed: f32,
    pub enemy_speed: f32,
    pub enemy_count: usize,
    /// Fixed seed for maze + AI; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub wall_rule: WallRule,
    /// Seconds without input before the idle overlay kicks in.
    pub idle_after: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: std::f32::consts::PI / 3.0, // 60°
            min_depth: 0.1,
            max_depth: 20.0,
            ray_steps: 100,
            maze_rows: 15,
            maze_cols: 15,
            player_speed: 3.0,
            rotation_speed: 3.0, // 0.05 rad por frame a 60 Hz
            enemy_speed: 1.5,
            enemy_count: 3,
            seed: None,
            wall_rule: WallRule::Enclosed,
            idle_after: 5.0,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = ron::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Fails fast on anything that would make generation or rendering
    /// meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_rows == 0 || self.maze_cols == 0 {
            return Err(ConfigError::InvalidGrid { rows: self.maze_rows, cols: self.maze_cols });
        }
        validate_screen(self.width, self.height)?;
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if !(self.min_depth > 0.0 && self.min_depth < self.max_depth && self.max_depth.is_finite()) {
            return Err(ConfigError::InvalidDepth { min: self.min_depth, max: self.max_depth });
        }
        if self.ray_steps < 2 {
            return Err(ConfigError::InvalidRaySteps(self.ray_steps));
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("rotation_speed", self.rotation_speed),
            ("enemy_speed", self.enemy_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_screen(width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidScreen { width, height });
    }
    Ok(())
}
