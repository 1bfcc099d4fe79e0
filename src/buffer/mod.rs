//! Buffer module: the character grid and everything drawn into it.
//!
//! This module contains:
//! - [`RasterBuffer`]: a fixed-size grid of `char` cells with clamped writes
//! - the draw operations (`draw_line`, `draw_triangle`, `draw_circle`)
//! - flushing the grid as text rows to any [`std::io::Write`] sink

mod draw;
mod raster;

pub use draw::MAX_RADIUS;
pub use raster::{RasterBuffer, BLANK};
