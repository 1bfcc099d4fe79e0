//! Terminal session: cursor and screen setup around an animation.

use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};

/// Query the attached terminal for `(columns, rows)`.
///
/// # Errors
///
/// Returns an error if the output is not a terminal.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    let (columns, rows) = terminal::size()?;
    log::debug!("terminal size: {columns}x{rows}");
    Ok((columns, rows))
}

/// RAII guard that prepares a terminal for full-frame redraws.
///
/// Entering clears the screen and hides the cursor; dropping the guard
/// shows the cursor again. Raw mode is left off so `\n` row terminators
/// still return the carriage.
pub struct TerminalSession<W: Write> {
    out: W,
}

impl<W: Write> TerminalSession<W> {
    /// Clear the screen and hide the cursor on `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the escape sequences cannot be written.
    pub fn enter(mut out: W) -> io::Result<Self> {
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Hide
        )?;
        Ok(Self { out })
    }

    /// The wrapped writer, for flushing frames.
    #[inline]
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, cursor::Show) {
            log::warn!("failed to restore cursor: {err}");
        }
    }
}
