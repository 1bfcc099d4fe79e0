//! Geometry: continuous points and their mapping onto the cell grid.
//!
//! Drawing operations accept floating-point coordinates. Before a coordinate
//! touches the grid it is clamped into `[0, len - 1]` and rounded half away
//! from zero (`f32::round`). Because the bounds are whole numbers, rounding
//! and clamping commute, so either order yields the same cell.

mod point;

pub use point::Point;

/// Clamp a coordinate into `[0, len - 1]` without rounding.
///
/// `NaN` passes through; [`snap`] maps it to cell 0.
#[inline]
pub(crate) fn clamp_axis(v: f32, len: u16) -> f32 {
    v.clamp(0.0, f32::from(len.saturating_sub(1)))
}

/// Map a coordinate to the nearest in-bounds cell index.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn snap(v: f32, len: u16) -> u16 {
    // Float-to-int `as` saturates and maps NaN to 0.
    clamp_axis(v, len).round() as u16
}
