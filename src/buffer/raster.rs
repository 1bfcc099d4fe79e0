//! `RasterBuffer`: a fixed-size grid of character cells.
//!
//! Cells are stored contiguously in row-major order. The grid is allocated
//! once at construction; `clear` refills it in place.

use crate::error::{RasterError, Result};
use crate::geom::snap;
use crate::terminal::OutputBuffer;
use std::fmt;
use std::io::{self, Write};

/// The default fill value for fresh and cleared grids.
pub const BLANK: char = ' ';

/// A grid of character cells that geometry is rasterized into.
///
/// Access is in row-major order: `index = y * width + x`. Every write goes
/// through [`RasterBuffer::put`], which clamps into the grid, so drawing
/// never fails and never writes out of bounds.
#[derive(Clone, PartialEq)]
pub struct RasterBuffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<char>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
    /// Cell width over cell height, used to derive `width` from `height`.
    aspect: f32,
}

impl RasterBuffer {
    /// Create a blank buffer with explicit dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        log::debug!("allocating {width}x{height} raster");
        Ok(Self {
            cells: vec![BLANK; usize::from(width) * usize::from(height)],
            width,
            height,
            aspect: 1.0,
        })
    }

    /// Create a blank buffer from a row count and a cell aspect ratio.
    ///
    /// `width = round(height / aspect)`, so a terminal whose cells are half
    /// as wide as they are tall (`aspect = 0.5`) gets twice as many columns
    /// as rows and shapes look roughly square.
    ///
    /// # Errors
    ///
    /// - [`RasterError::InvalidAspect`] if `aspect` is not finite and positive
    /// - [`RasterError::WidthOverflow`] if the derived width exceeds `u16::MAX`
    /// - [`RasterError::InvalidDimensions`] if height or the derived width is zero
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_aspect(height: u16, aspect: f32) -> Result<Self> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(RasterError::InvalidAspect(aspect));
        }
        let derived = (f32::from(height) / aspect).round();
        if derived > f32::from(u16::MAX) {
            return Err(RasterError::WidthOverflow { height, aspect });
        }
        let width = derived as u16;
        log::debug!("aspect {aspect} over {height} rows gives width {width}");

        let mut buffer = Self::new(width, height)?;
        buffer.aspect = aspect;
        Ok(buffer)
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// `(width, height)` in cells.
    #[inline]
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Cell aspect ratio; `1.0` unless built with [`RasterBuffer::with_aspect`].
    #[inline]
    pub const fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Read the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Get an iterator over rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(usize::from(self.width))
    }

    /// Reset every cell to [`BLANK`].
    pub fn clear(&mut self) {
        self.clear_with(BLANK);
    }

    /// Reset every cell to `fill`, keeping the allocation.
    pub fn clear_with(&mut self, fill: char) {
        self.cells.fill(fill);
    }

    /// Write `value` into the cell nearest to (x, y).
    ///
    /// Each coordinate is rounded half away from zero and clamped into
    /// the grid independently, so out-of-range input lands on the edge.
    /// This is the only write path; every draw reduces to `put` calls.
    #[inline]
    pub fn put(&mut self, x: f32, y: f32, value: char) {
        let col = snap(x, self.width);
        let row = snap(y, self.height);
        let idx = usize::from(row) * usize::from(self.width) + usize::from(col);
        self.cells[idx] = value;
    }

    /// Serialize the grid into `out`: one line per row, each `\n`-terminated.
    pub fn write_rows(&self, out: &mut OutputBuffer) {
        for row in self.rows() {
            for &c in row {
                out.push_char(c);
            }
            out.newline();
        }
    }

    /// Write the grid to `sink` as plain text rows.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged; nothing is retried.
    pub fn flush<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let mut out = OutputBuffer::for_grid(self.width, self.height);
        self.write_rows(&mut out);
        log::trace!("flushing {} bytes", out.len());
        out.flush_to(sink)
    }

    /// Write the grid to `sink` after moving the cursor to the top-left.
    ///
    /// Repeated calls overwrite the previous frame in place on a terminal.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged; nothing is retried.
    pub fn flush_ansi<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let mut out = OutputBuffer::for_grid(self.width, self.height);
        out.cursor_home();
        self.write_rows(&mut out);
        log::trace!("flushing {} bytes (ansi)", out.len());
        out.flush_to(sink)
    }
}

impl fmt::Display for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        for row in self.rows() {
            for &c in row {
                f.write_char(c)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("aspect", &self.aspect)
            .finish_non_exhaustive()
    }
}
