//! Top-down minimap: occupancy grid plus player and enemy markers.
use crate::core::enemy::Enemy;
use crate::core::occupancy::OccupancyModel;
use crate::core::player::Player;
use crate::render::framebuffer::{Color, Framebuffer};

pub const MAP_SCALE: u32 = 8;
pub const MAP_ORIGIN: (i32, i32) = (10, 10);
const MARKER_RADIUS: i32 = 3;

/// Pixel position of a world point on the minimap. Far points saturate at the
/// `i32` range instead of wrapping.
#[inline]
pub fn to_map(x: f32, y: f32) -> (i32, i32) {
    (
        MAP_ORIGIN.0.saturating_add((x * MAP_SCALE as f32) as i32),
        MAP_ORIGIN.1.saturating_add((y * MAP_SCALE as f32) as i32),
    )
}

// Markers whose disc cannot touch the buffer are skipped.
fn draw_marker(fb: &mut Framebuffer, x: f32, y: f32) {
    let (cx, cy) = to_map(x, y);
    let r = MARKER_RADIUS;
    if cx < -r || cy < -r || cx > fb.width as i32 + r || cy > fb.height as i32 + r { return; }
    fb.fill_circle(cx, cy, r);
}

pub fn draw_minimap(fb: &mut Framebuffer, occ: &OccupancyModel, player: &Player, enemies: &[Enemy]) {
    let (ox, oy) = MAP_ORIGIN;
    let s = MAP_SCALE as i32;
    for row in 0..occ.rows() {
        for col in 0..occ.cols() {
            let c = if occ.is_wall(row, col) { Color::GRAY } else { Color::DARKGRAY };
            fb.set_current_color(c);
            fb.fill_rect(ox + col * s, oy + row * s, MAP_SCALE, MAP_SCALE);
        }
    }

    fb.set_current_color(Color::GREEN);
    draw_marker(fb, player.pose.x, player.pose.y);

    fb.set_current_color(Color::RED);
    for e in enemies {
        draw_marker(fb, e.x, e.y);
    }
}
