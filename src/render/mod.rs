//! Rendering: ray casting plus the CPU-side presentation of its output.
//!
//! Re-exports:
//! - `casters`: Per-column ray marching, fisheye correction and shading
//! - `framebuffer`: CPU framebuffer and overlays
//! - `textures`: Procedural wall texture
//! - `render3d`: Column renderer for walls and ceiling/floor
//! - `minimap`: Top-down grid with player/enemy markers

pub mod casters;
pub mod framebuffer;
pub mod textures;
pub mod render3d;
pub mod minimap;
