//! Rendering module
//!
//! The simulation draws through the [`Renderer`] trait using integer pixel
//! coordinates. Two backends ship with the crate:
//! - [`Framebuffer`]: software RGBA raster with alpha blending
//! - [`VertexBatch`]: triangle list for a WebGPU pipeline owned by the host

pub mod framebuffer;
pub mod shapes;
pub mod vertex;

pub use framebuffer::Framebuffer;
pub use vertex::{Vertex, VertexBatch};

use crate::sim::Color;

/// Draw command sink
pub trait Renderer {
    /// Fill the whole target with a color
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned box with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// Draw a horizontal span from x0 to x1 inclusive on row y
    fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, color: Color);
}
