//! Software RGBA framebuffer
//!
//! Headless render target used by the native driver and tests. Draws are
//! clipped to the buffer and alpha blended over the existing contents.

use super::Renderer;
use crate::sim::Color;

/// Row-major RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or None when out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw bytes, 4 per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Count pixels matching a predicate (handy for smoke checks)
    pub fn count_pixels(&self, pred: impl Fn(Color) -> bool) -> usize {
        self.pixels.iter().filter(|&&c| pred(c)).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn blend(&mut self, x: i32, y: i32, src: Color) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[i];
        self.pixels[i] = blend_over(src, dst);
    }
}

/// Standard "over" blending with straight alpha
fn blend_over(src: Color, dst: Color) -> Color {
    if src.a == 255 {
        return src;
    }
    let sa = src.a as u32;
    let inv = 255 - sa;
    let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8;
    Color {
        r: mix(src.r, dst.r),
        g: mix(src.g, dst.g),
        b: mix(src.b, dst.b),
        a: (sa + (dst.a as u32 * inv + 127) / 255) as u8,
    }
}

impl Renderer for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for px in lo.max(0)..=hi.min(self.width as i32 - 1) {
            self.blend(px, y, color);
        }
    }
}
