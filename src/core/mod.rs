//! Core game types and logic (maze, occupancy, actors, session).
//!
//! Re-exports:
//! - `maze`: Grid cells and randomized DFS generation
//! - `occupancy`: Wall/collision oracle over the maze
//! - `player`: Player pose, input intents and movement
//! - `enemy`: Enemy pursuit AI and spawning
//! - `session`: Top-level state driven once per frame

pub mod maze;
pub mod occupancy;
pub mod player;
pub mod enemy;
pub mod session;
