//! # Wireframe
//!
//! A tiny character-grid rasterizer for terminal animations.
//!
//! Wireframe discretizes continuous geometry (floating-point endpoints,
//! arbitrary slopes, fractional radii) onto a fixed grid of character cells
//! and streams the grid to any writer as successive frames.
//!
//! ## Core Concepts
//!
//! - **Clamp, never fail**: every coordinate is rounded and clamped into the
//!   grid, so animation code that overshoots never crashes
//! - **One write path**: lines, triangles and circles all reduce to `put`
//! - **Whole-frame flushes**: a frame is serialized once and written with a
//!   single `write_all`
//!
//! ## Example
//!
//! ```rust
//! use wireframe::RasterBuffer;
//!
//! let mut buffer = RasterBuffer::new(10, 10)?;
//! buffer.clear();
//! buffer.draw_line(0.0, 0.0, 9.0, 9.0, 'X');
//!
//! let mut out = Vec::new();
//! buffer.flush(&mut out)?;
//! assert_eq!(out.len(), 10 * 11);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod anim;
pub mod buffer;
pub mod error;
pub mod geom;
pub mod terminal;

// Re-exports for convenience
pub use anim::{Animation, AnimationConfig, FrameClock, SpinScene};
pub use buffer::{RasterBuffer, BLANK};
pub use error::{RasterError, Result};
pub use geom::Point;
pub use terminal::{terminal_size, OutputBuffer, TerminalSession};
