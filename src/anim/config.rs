//! Animation configuration.

use std::time::Duration;

/// Configuration for the spinning-triangles animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Cell width over cell height, used to size the buffer from the row count.
    pub aspect: f32,
    /// Time between frames.
    pub frame_interval: Duration,
    /// Outer triangle rotation per frame, in radians.
    pub outer_step: f32,
    /// Inner triangle rotation per frame, in radians (drawn counter-rotating).
    pub inner_step: f32,
    /// Inner triangle size relative to the outer one.
    pub inner_scale: f32,
    /// Radius of the marker circle on the outer triangle's first vertex.
    pub vertex_radius: f32,
    /// Glyph for the outer triangle.
    pub outer_glyph: char,
    /// Glyph for the inner triangle.
    pub inner_glyph: char,
    /// Glyph for the vertex marker circle.
    pub vertex_glyph: char,
    /// Glyph for the frame border.
    pub border_glyph: char,
    /// Stop after this many frames (`None` runs until the sink fails).
    pub frame_limit: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            aspect: 0.5,
            frame_interval: Duration::from_millis(100),
            outer_step: 0.15,
            inner_step: 0.4,
            inner_scale: 0.5,
            vertex_radius: 5.0,
            outer_glyph: 'A',
            inner_glyph: 'B',
            vertex_glyph: 'o',
            border_glyph: '@',
            frame_limit: None,
        }
    }
}

impl AnimationConfig {
    /// Set the cell aspect ratio.
    #[must_use]
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set the time between frames.
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set or clear the frame limit.
    #[must_use]
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    /// Set the per-frame rotation of both triangles.
    #[must_use]
    pub fn with_steps(mut self, outer: f32, inner: f32) -> Self {
        self.outer_step = outer;
        self.inner_step = inner;
        self
    }
}
