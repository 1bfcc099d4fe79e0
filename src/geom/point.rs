//! Point: a continuous 2-D coordinate used as a draw-call parameter.

/// A point in buffer space.
///
/// `x` runs left to right across columns, `y` top to bottom across rows.
/// Points are never stored by the buffer; they only carry draw arguments.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Column coordinate.
    pub x: f32,
    /// Row coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin (top-left corner).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Point on an ellipse around `self` at `angle` radians.
    ///
    /// Used to place rotating vertices: `(x + cos(a)·rx, y + sin(a)·ry)`.
    #[inline]
    #[must_use]
    pub fn orbit(self, angle: f32, rx: f32, ry: f32) -> Self {
        Self::new(self.x + angle.cos() * rx, self.y + angle.sin() * ry)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
