//! CPU framebuffer (RGBA8) the scene, minimap and overlays are drawn into.

/// RGBA8 pixel; layout matches an R8G8B8A8 texture.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const GRAY: Color = Color::new(100, 100, 100, 255);
    pub const DARKGRAY: Color = Color::new(40, 40, 40, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Multiplies RGB by `k` (alpha untouched).
    #[inline]
    pub fn scaled(self, k: f32) -> Color {
        let s = k.max(0.0);
        let mul = |v: u8| -> u8 { (v as f32 * s).min(255.0) as u8 };
        Color::new(mul(self.r), mul(self.g), mul(self.b), self.a)
    }

    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t).round() as u8 };
        Color::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b), 255)
    }
}

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    /// Reallocates for a new window size and clears.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.color_buffer = vec![self.background_color; (width * height) as usize];
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_current_color(&mut self, c: Color) { self.current_color = c; }

    /// Axis-aligned rectangle in the current color, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x + w as i32).clamp(0, self.width as i32) as u32;
        let y1 = (y + h as i32).clamp(0, self.height as i32) as u32;
        for yy in y0..y1 {
            for xx in x0..x1 { self.set_pixel(xx, yy); }
        }
    }

    /// Filled disc in the current color, clipped to the buffer.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r { continue; }
                let (x, y) = (cx.saturating_add(dx), cy.saturating_add(dy));
                if x >= 0 && y >= 0 { self.set_pixel(x as u32, y as u32); }
            }
        }
    }

    /// Alpha-blends a flat color over the whole buffer.
    pub fn blend_overlay(&mut self, color: Color, alpha: f32) {
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 { return; }
        for px in &mut self.color_buffer {
            let keep = px.a;
            *px = px.lerp(color, a);
            px.a = keep;
        }
    }

    /// Raw RGBA bytes, ready for a texture upload.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        // Color es #[repr(C)] de cuatro u8: sin padding ni alineación extra
        unsafe { std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len) }
    }
}
