//! Procedural wall texture (no asset loading).
use crate::render::framebuffer::Color;

const STRIPE_LIGHT: Color = Color::new(200, 200, 200, 255);
const STRIPE_DARK: Color = Color::new(150, 150, 150, 255);
const STRIPE_WIDTH: u32 = 8;

/// Immutable CPU pixmap sampled per pixel.
#[derive(Clone, Debug)]
pub struct WallTexture {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl WallTexture {
    /// Vertical stripes, `STRIPE_WIDTH` px wide, alternating light/dark.
    pub fn stripes(w: u32, h: u32) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        let mut px = Vec::with_capacity((w * h) as usize);
        for _y in 0..h {
            for x in 0..w {
                px.push(if (x / STRIPE_WIDTH) % 2 == 0 { STRIPE_LIGHT } else { STRIPE_DARK });
            }
        }
        Self { w, h, px }
    }

    #[inline] pub fn width(&self) -> u32 { self.w }
    #[inline] pub fn height(&self) -> u32 { self.h }

    /// Wraps out-of-range coordinates.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Color {
        let xi = (x % self.w) as usize;
        let yi = (y % self.h) as usize;
        self.px[(yi * self.w as usize) + xi]
    }
}
