//! `SpinScene`: two counter-rotating triangles inside a border.

use super::config::AnimationConfig;
use crate::buffer::RasterBuffer;
use crate::geom::Point;
use std::f32::consts::TAU;

/// Scene state advanced once per frame.
///
/// The outer triangle spans the whole buffer and carries a marker circle on
/// its first vertex; the inner one is scaled down and turns the other way.
#[derive(Debug, Clone)]
pub struct SpinScene {
    config: AnimationConfig,
    /// Outer rotation in radians.
    outer_angle: f32,
    /// Inner rotation in radians (applied negated).
    inner_angle: f32,
}

/// Vertices of an equilateral-in-angle triangle on an ellipse.
fn vertices(center: Point, angle: f32, rx: f32, ry: f32) -> [Point; 3] {
    [0.0_f32, 1.0, 2.0].map(|i| center.orbit(angle + i * TAU / 3.0, rx, ry))
}

impl SpinScene {
    /// Create a scene at angle zero.
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            outer_angle: 0.0,
            inner_angle: 0.0,
        }
    }

    /// Current `(outer, inner)` rotation angles.
    pub const fn angles(&self) -> (f32, f32) {
        (self.outer_angle, self.inner_angle)
    }

    /// Vertices of the outer and inner triangles for a `width`x`height` grid.
    pub fn triangles(&self, width: u16, height: u16) -> ([Point; 3], [Point; 3]) {
        // Integer centre, fractional radii.
        let center = Point::new(f32::from(width / 2), f32::from(height / 2));
        let rx = f32::from(width) / 2.0;
        let ry = f32::from(height) / 2.0;
        let scale = self.config.inner_scale;

        (
            vertices(center, self.outer_angle, rx, ry),
            vertices(center, -self.inner_angle, rx * scale, ry * scale),
        )
    }

    /// Draw the current state into `buffer` (the caller clears first).
    pub fn render(&self, buffer: &mut RasterBuffer) {
        let (width, height) = buffer.size();
        let (outer, inner) = self.triangles(width, height);
        let cfg = &self.config;

        buffer.draw_circle(outer[0].x, outer[0].y, cfg.vertex_radius, cfg.vertex_glyph);
        buffer.draw_triangle(outer[0], outer[1], outer[2], cfg.outer_glyph);
        buffer.draw_triangle(inner[0], inner[1], inner[2], cfg.inner_glyph);

        // The far edges sit one past the grid and clamp onto it.
        let (w, h) = (f32::from(width), f32::from(height));
        buffer.draw_line(0.0, 0.0, 0.0, h, cfg.border_glyph);
        buffer.draw_line(0.0, 0.0, w, 0.0, cfg.border_glyph);
        buffer.draw_line(w, 0.0, w, h, cfg.border_glyph);
        buffer.draw_line(0.0, h, w, h, cfg.border_glyph);
    }

    /// Rotate both triangles by one frame's step.
    pub fn advance(&mut self) {
        self.outer_angle += self.config.outer_step;
        self.inner_angle += self.config.inner_step;
    }
}
