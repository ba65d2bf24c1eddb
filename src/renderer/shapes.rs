//! Rasterisation helpers for 2D primitives

use super::Renderer;
use crate::sim::Color;

/// Fill a box; zero or negative sizes draw nothing
pub fn fill_rect(renderer: &mut dyn Renderer, x: i32, y: i32, w: i32, h: i32, color: Color) {
    if w <= 0 || h <= 0 {
        return;
    }
    renderer.fill_rect(x, y, w, h, color);
}

/// Fill a disk as mirrored horizontal scanlines
///
/// Only the upper half is computed; each row is drawn together with its
/// mirror image below the center.
pub fn fill_circle(renderer: &mut dyn Renderer, cx: i32, cy: i32, radius: i32, color: Color) {
    for (dx, dy) in circle_spans(radius) {
        renderer.draw_hline(cx - dx, cx + dx, cy + dy - radius, color);
        renderer.draw_hline(cx - dx, cx + dx, cy - dy + radius, color);
    }
}

/// Half-widths of the scanlines making up a disk, as (dx, dy) for dy in 1..=radius
pub fn circle_spans(radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let r = radius as f64;
    (1..=radius.max(0)).map(move |dy| {
        let dyf = dy as f64;
        let dx = (2.0 * r * dyf - dyf * dyf).sqrt().floor();
        (dx as i32, dy)
    })
}
