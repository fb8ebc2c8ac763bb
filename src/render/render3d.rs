//! 3D view: ceiling/floor gradient plus one textured, shaded wall slice per column.
use crate::render::casters::ColumnHit;
use crate::render::framebuffer::{Color, Framebuffer};
use crate::render::textures::WallTexture;

const CEIL_TOP:   Color = Color::new(10, 12, 18, 255);
const CEIL_MID:   Color = Color::new(20, 24, 32, 255);
const FLOOR_NEAR: Color = Color::new(56, 58, 62, 255);
const FLOOR_FAR:  Color = Color::new(26, 28, 30, 255);

fn paint_ceiling_and_floor(fb: &mut Framebuffer) {
    let w = fb.width;
    let h = fb.height;
    let hh = h / 2;
    for y in 0..hh {
        let t = y as f32 / hh as f32;
        fb.set_current_color(CEIL_TOP.lerp(CEIL_MID, t));
        for x in 0..w { fb.set_pixel(x, y); }
    }
    for y in hh..h {
        let t = (y - hh) as f32 / (h - hh) as f32;
        fb.set_current_color(FLOOR_FAR.lerp(FLOOR_NEAR, t));
        for x in 0..w { fb.set_pixel(x, y); }
    }
}

/// Draws the frame produced by `RayCaster::render`. Column `i` of the buffer
/// maps to screen column `i`; extra entries on either side are ignored.
pub fn render_scene(fb: &mut Framebuffer, columns: &[ColumnHit], texture: &WallTexture) {
    paint_ceiling_and_floor(fb);
    let h = fb.height;
    let th = texture.height();
    for (x, col) in columns.iter().enumerate().take(fb.width as usize) {
        let slice = col.height.min(h);
        if slice == 0 { continue; }
        let y0 = (h - slice) / 2;
        for dy in 0..slice {
            let ty = (dy as u64 * th as u64 / slice as u64) as u32;
            let c = texture.sample(col.texture_u, ty).scaled(col.shade);
            fb.set_pixel_color(x as u32, y0 + dy, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::casters::Impact;

    fn column(height: u32, texture_u: u32, shade: f32) -> ColumnHit {
        ColumnHit { distance: 1.0, corrected: 1.0, height, texture_u, shade, impact: Impact::Wall }
    }

    #[test]
    fn slice_is_centred_and_shaded() {
        let mut fb = Framebuffer::new(3, 10);
        let tex = WallTexture::stripes(64, 64);
        render_scene(&mut fb, &[column(4, 0, 0.5), column(10, 8, 1.0), column(0, 0, 1.0)], &tex);

        // columna 0: filas 3..7 con gris claro al 50%
        assert_eq!(fb.get_pixel(0, 3), Color::new(100, 100, 100, 255));
        assert_eq!(fb.get_pixel(0, 6), Color::new(100, 100, 100, 255));
        assert_eq!(fb.get_pixel(0, 2), CEIL_TOP.lerp(CEIL_MID, 2.0 / 5.0));
        assert_eq!(fb.get_pixel(0, 7), FLOOR_FAR.lerp(FLOOR_NEAR, 2.0 / 5.0));
        // columna 1: altura completa, franja oscura
        for y in 0..10 { assert_eq!(fb.get_pixel(1, y), Color::new(150, 150, 150, 255)); }
        // columna 2: sin pared
        assert_eq!(fb.get_pixel(2, 0), CEIL_TOP);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let mut fb = Framebuffer::new(2, 4);
        let tex = WallTexture::stripes(64, 64);
        let cols = vec![column(4, 0, 1.0); 5];
        render_scene(&mut fb, &cols, &tex);
        assert_eq!(fb.get_pixel(1, 0), Color::new(200, 200, 200, 255));
    }
}
