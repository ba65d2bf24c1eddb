//! Shape primitives for entities
//!
//! Positions are centers. The origin offset only shifts where a shape is
//! drawn; edge queries ignore it.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::renderer::Renderer;
use crate::renderer::shapes::{fill_circle, fill_rect};

/// RGBA fill color, 0-255 per channel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized [r, g, b, a] for GPU vertices
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Axis-aligned edge extents
pub trait Bounds {
    fn left(&self) -> f32;
    fn right(&self) -> f32;
    fn top(&self) -> f32;
    fn bottom(&self) -> f32;
}

/// Axis-aligned box, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub pos: Vec2,
    pub origin: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Rectangle {
    pub fn new(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            pos,
            origin: size / 2.0,
            size,
            color,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Translate by a velocity vector
    #[inline]
    pub fn move_by(&mut self, vel: Vec2) {
        self.pos += vel;
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let anchor = self.pos - self.origin;
        // Truncation toward zero, matching integer pixel rects
        fill_rect(
            renderer,
            anchor.x as i32,
            anchor.y as i32,
            self.size.x as i32,
            self.size.y as i32,
            self.color,
        );
    }
}

impl Bounds for Rectangle {
    #[inline]
    fn left(&self) -> f32 {
        self.pos.x - self.width() / 2.0
    }

    #[inline]
    fn right(&self) -> f32 {
        self.pos.x + self.width() / 2.0
    }

    #[inline]
    fn top(&self) -> f32 {
        self.pos.y - self.height() / 2.0
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.pos.y + self.height() / 2.0
    }
}

/// Circle, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub pos: Vec2,
    pub origin: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            origin: Vec2::splat(radius),
            radius,
            color,
        }
    }

    /// Translate by a velocity vector
    #[inline]
    pub fn move_by(&mut self, vel: Vec2) {
        self.pos += vel;
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let anchor = self.pos - self.origin;
        fill_circle(
            renderer,
            anchor.x as i32,
            anchor.y as i32,
            self.radius as i32,
            self.color,
        );
    }
}

impl Bounds for Circle {
    #[inline]
    fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}
