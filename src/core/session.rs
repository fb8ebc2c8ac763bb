//! Running game session: owns the maze, actors, RNG and clock.
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::enemy::{Enemy, spawn_enemies};
use crate::core::maze::Maze;
use crate::core::occupancy::OccupancyModel;
use crate::core::player::{MoveIntent, Player};
use crate::error::ConfigError;
use crate::render::casters::{ColumnHit, RayCaster};

/// Peak strength of the idle overlay (alpha 128 of 255).
const IDLE_OVERLAY_MAX: f32 = 128.0 / 255.0;
/// Pulse frequency of the idle overlay (rad/s).
const IDLE_PULSE: f64 = 3.0;

pub struct Session {
    config: GameConfig,
    maze: Maze,
    player: Player,
    enemies: Vec<Enemy>,
    caster: RayCaster,
    rng: Xoshiro256PlusPlus,
    clock: f64,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        let maze = Maze::generate(config.maze_rows, config.maze_cols, &mut rng)?;
        let player = Player::new(0.5, 0.5, 0.0, &config);
        let enemies = spawn_enemies(config.enemy_count, config.maze_rows, config.maze_cols, config.enemy_speed, &mut rng);
        let caster = RayCaster::new(&config)?;
        info!(
            rows = config.maze_rows,
            cols = config.maze_cols,
            enemies = enemies.len(),
            seed = ?config.seed,
            rule = ?config.wall_rule,
            "session started"
        );
        Ok(Self { config, maze, player, enemies, caster, rng, clock: 0.0 })
    }

    #[inline]
    pub fn occupancy(&self) -> OccupancyModel<'_> { OccupancyModel::new(&self.maze, self.config.wall_rule) }

    /// Advances one frame. Non-positive or non-finite `dt` is ignored.
    pub fn tick(&mut self, intent: MoveIntent, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            debug!(dt, "ignoring tick with invalid dt");
            return;
        }
        self.clock += dt as f64;
        let occ = OccupancyModel::new(&self.maze, self.config.wall_rule);
        self.player.apply(intent, dt, self.clock, &occ);
        let target = self.player.position();
        for enemy in &mut self.enemies {
            enemy.update(target, dt, &mut self.rng);
        }
    }

    pub fn render(&self) -> Vec<ColumnHit> {
        self.caster.render(&self.occupancy(), &self.player.pose)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.caster.resize(width, height)?;
        self.config.width = width;
        self.config.height = height;
        info!(width, height, "viewport resized");
        Ok(())
    }

    /// Overlay strength in (0, 128/255] once the player has been idle for
    /// longer than `idle_after`; pulses with the session clock.
    pub fn idle_effect_alpha(&self) -> Option<f32> {
        if self.player.idle_for(self.clock) <= self.config.idle_after { return None; }
        let pulse = ((self.clock * IDLE_PULSE).sin() + 1.0) / 2.0;
        Some(pulse as f32 * IDLE_OVERLAY_MAX)
    }

    #[inline] pub fn config(&self) -> &GameConfig { &self.config }
    #[inline] pub fn maze(&self) -> &Maze { &self.maze }
    #[inline] pub fn player(&self) -> &Player { &self.player }
    #[inline] pub fn enemies(&self) -> &[Enemy] { &self.enemies }
    #[inline] pub fn clock(&self) -> f64 { self.clock }
}
