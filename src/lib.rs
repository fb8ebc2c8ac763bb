//! First-person ray-cast maze: DFS maze generation, an occupancy oracle,
//! a column ray caster and simple pursuit enemies.
//!
//! The core returns plain data (column buffers, positions); the `window`
//! binary owns every drawing surface.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod render;

pub use config::GameConfig;
pub use crate::core::maze::{Cell, Dir, Maze};
pub use crate::core::occupancy::{OccupancyModel, WallRule};
pub use crate::core::player::{MoveIntent, Player, Pose};
pub use crate::core::enemy::Enemy;
pub use crate::core::session::Session;
pub use error::ConfigError;
pub use render::casters::{ColumnHit, Impact, RayCaster};
