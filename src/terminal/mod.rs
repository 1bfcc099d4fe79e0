//! Terminal module: output assembly and the crossterm-backed terminal glue.
//!
//! - [`OutputBuffer`]: a frame serialized for one write
//! - [`terminal_size`]: `(columns, rows)` of the attached terminal
//! - [`TerminalSession`]: hides the cursor for the lifetime of an animation

mod output;
mod session;

pub use output::{OutputBuffer, CURSOR_HOME};
pub use session::{terminal_size, TerminalSession};
