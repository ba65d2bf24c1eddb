//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::Renderer;
use crate::sim::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Collects draw commands as a triangle list in clip space
///
/// Upload with `bytemuck::cast_slice(batch.vertices())` and draw with a
/// pipeline using [`Vertex::desc`]. Clearing is left to the render pass
/// load op, so `clear` just records the color and drops queued geometry.
#[derive(Debug, Clone)]
pub struct VertexBatch {
    width: f32,
    height: f32,
    clear_color: Option<Color>,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            clear_color: None,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Color requested by the last `clear`, for the render pass load op
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Pixel coordinates (y down) to normalized device coordinates (y up)
    fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.width * 2.0 - 1.0, 1.0 - y / self.height * 2.0)
    }

    fn push_quad(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let color = color.to_f32();
        let (ax, ay) = self.to_ndc(x0, y0);
        let (bx, by) = self.to_ndc(x1, y1);

        // Two triangles
        self.vertices.push(Vertex::new(ax, ay, color));
        self.vertices.push(Vertex::new(bx, ay, color));
        self.vertices.push(Vertex::new(ax, by, color));

        self.vertices.push(Vertex::new(ax, by, color));
        self.vertices.push(Vertex::new(bx, ay, color));
        self.vertices.push(Vertex::new(bx, by, color));
    }
}

impl Renderer for VertexBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.vertices.clear();
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        // Saturate so far off-screen geometry stays finite instead of overflowing
        self.push_quad(
            x as f32,
            y as f32,
            x.saturating_add(w) as f32,
            y.saturating_add(h) as f32,
            color,
        );
    }

    fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        // Spans are inclusive, so cover through the far pixel's right edge
        self.push_quad(
            lo as f32,
            y as f32,
            hi.saturating_add(1) as f32,
            y.saturating_add(1) as f32,
            color,
        );
    }
}
