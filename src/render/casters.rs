//! Column ray caster over the occupancy model.
//!
//! One ray per screen column, marched in uniform depth steps. Each column
//! yields raw and fisheye-corrected depth, projected wall height, texture
//! column and a distance shade; presentation turns that into pixels.
use crate::config::{GameConfig, validate_screen};
use crate::core::occupancy::OccupancyModel;
use crate::core::player::Pose;
use crate::error::ConfigError;

/// Width (and height) of the wall texture the `texture_u` column indexes.
pub const TEXTURE_SIZE: u32 = 64;
/// Floor for corrected depth; also pads the projection divisor.
pub const EPSILON: f32 = 1e-4;
/// Far walls never go darker than this.
pub const MIN_SHADE: f32 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Impact {
    /// A blocking cell stopped the ray.
    Wall,
    /// The ray left the grid; depth is pinned to max depth.
    Boundary,
    /// Nothing hit before max depth.
    Miss,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColumnHit {
    /// Raw distance along the ray, in [min_depth, max_depth].
    pub distance: f32,
    /// Perpendicular (fisheye-corrected) distance, never below `EPSILON`.
    pub corrected: f32,
    /// Wall slice height in pixels, at most the screen height.
    pub height: u32,
    /// Texture column in [0, TEXTURE_SIZE).
    pub texture_u: u32,
    /// Brightness in [MIN_SHADE, 1].
    pub shade: f32,
    pub impact: Impact,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RayCaster {
    fov: f32,
    min_depth: f32,
    max_depth: f32,
    steps: usize,
    width: u32,
    height: u32,
}

impl RayCaster {
    pub fn new(cfg: &GameConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            fov: cfg.fov,
            min_depth: cfg.min_depth,
            max_depth: cfg.max_depth,
            steps: cfg.ray_steps,
            width: cfg.width,
            height: cfg.height,
        })
    }

    #[inline] pub fn width(&self) -> u32 { self.width }
    #[inline] pub fn height(&self) -> u32 { self.height }
    #[inline] pub fn fov(&self) -> f32 { self.fov }
    #[inline] pub fn max_depth(&self) -> f32 { self.max_depth }
    #[inline] pub fn min_depth(&self) -> f32 { self.min_depth }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        validate_screen(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Angle offset from the view direction for screen column `i`.
    #[inline]
    pub fn column_offset(&self, i: u32) -> f32 {
        -self.fov * 0.5 + i as f32 * (self.fov / self.width as f32)
    }

    /// Full frame, left to right; always `width` entries.
    pub fn render(&self, occ: &OccupancyModel, pose: &Pose) -> Vec<ColumnHit> {
        (0..self.width).map(|i| self.cast_column(occ, pose, self.column_offset(i))).collect()
    }

    /// Marches one ray at `pose.angle + offset`.
    pub fn cast_column(&self, occ: &OccupancyModel, pose: &Pose, offset: f32) -> ColumnHit {
        let (sin, cos) = (pose.angle + offset).sin_cos();
        let step = (self.max_depth - self.min_depth) / (self.steps - 1) as f32;

        let mut prev = (pose.x, pose.y);
        let mut depth = self.max_depth;
        let mut impact = Impact::Miss;
        let mut hit = (pose.x + cos * depth, pose.y + sin * depth);

        for k in 0..self.steps {
            // último paso exactamente en max_depth
            let d = if k + 1 == self.steps { self.max_depth } else { self.min_depth + step * k as f32 };
            let (tx, ty) = (pose.x + cos * d, pose.y + sin * d);
            hit = (tx, ty);
            let cell = OccupancyModel::cell_at(tx, ty);
            if !occ.in_bounds(cell.0, cell.1) {
                depth = self.max_depth;
                impact = Impact::Boundary;
                break;
            }
            // recorre todas las celdas entre muestras, aunque el paso salte varias
            if occ.segment_blocked(prev.0, prev.1, tx, ty) {
                depth = d;
                impact = Impact::Wall;
                break;
            }
            prev = (tx, ty);
        }

        let corrected = (depth * offset.cos()).max(EPSILON);
        let h = self.height as f32;
        let height = (h / (corrected + EPSILON)).min(h) as u32;
        let shade = (1.0 - corrected / self.max_depth).clamp(MIN_SHADE, 1.0);

        ColumnHit { distance: depth, corrected, height, texture_u: texture_column(hit.0, hit.1), shade, impact }
    }
}

/// Texture column from the hit point: the axis whose fraction sits closest to
/// a grid line is the face that was struck, so the other axis runs along it.
fn texture_column(hit_x: f32, hit_y: f32) -> u32 {
    let fx = hit_x.rem_euclid(1.0);
    let fy = hit_y.rem_euclid(1.0);
    let dist_fx = fx.min(1.0 - fx);
    let dist_fy = fy.min(1.0 - fy);
    let u = if dist_fx < dist_fy { fy } else { fx };
    (u * TEXTURE_SIZE as f32) as u32 % TEXTURE_SIZE
}
