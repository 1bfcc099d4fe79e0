//! `OutputBuffer`: frame assembly for a single write to the sink.

use std::io::Write;

/// Move the cursor to the top-left cell (CSI H).
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Pre-allocated buffer a whole frame is serialized into.
///
/// Rows are accumulated here and handed to the sink with one `write_all`,
/// so a terminal never shows half a frame.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a `width`x`height` grid of ASCII cells,
    /// plus one line break per row and room for an escape prefix.
    pub fn for_grid(width: u16, height: u16) -> Self {
        let rows = usize::from(height);
        Self::with_capacity((usize::from(width) + 1) * rows + CURSOR_HOME.len())
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append one cell, UTF-8 encoded.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Terminate the current row.
    #[inline]
    pub fn newline(&mut self) {
        self.data.push(b'\n');
    }

    /// Move cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(CURSOR_HOME);
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns the writer's own error unchanged.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::with_capacity(4096)
    }
}
