//! Spinner: two counter-rotating triangles in the terminal.
//!
//! Usage: `cargo run --example spinner [FRAMES]`
//!
//! Without a frame count the animation runs until interrupted.
//! Set `RUST_LOG=debug` to see lifecycle logs on stderr.

use std::io;
use wireframe::{terminal_size, Animation, AnimationConfig, RasterBuffer, TerminalSession};

fn main() -> wireframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let frame_limit = std::env::args().nth(1).and_then(|arg| match arg.parse::<u64>() {
        Ok(n) => Some(n),
        Err(err) => {
            log::warn!("ignoring frame count {arg:?}: {err}");
            None
        }
    });
    let config = AnimationConfig::default().with_frame_limit(frame_limit);

    let (columns, rows) = terminal_size()?;
    // Keep the last row free so the trailing newline never scrolls.
    let mut buffer = RasterBuffer::with_aspect(rows.saturating_sub(1).max(1), config.aspect)?;
    if buffer.width() > columns {
        log::warn!(
            "raster is {} columns wide but the terminal has {columns}; rows will wrap",
            buffer.width()
        );
    }

    let stdout = io::stdout();
    let mut session = TerminalSession::enter(stdout.lock())?;
    let mut animation = Animation::new(config);
    let frames = animation.run(&mut buffer, session.writer())?;

    drop(session);
    log::info!("rendered {frames} frames");
    Ok(())
}
