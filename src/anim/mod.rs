//! Animation: the frame loop that drives a [`RasterBuffer`].
//!
//! Each frame is one `clear → render → flush_ansi → advance` cycle on a
//! single thread; the [`FrameClock`] only paces the cycles.

mod clock;
mod config;
mod scene;

pub use clock::{Frame, FrameClock};
pub use config::AnimationConfig;
pub use scene::SpinScene;

use crate::buffer::RasterBuffer;
use crate::error::Result;
use std::io::{self, Write};

/// Owns the scene and clock for a running animation.
pub struct Animation {
    scene: SpinScene,
    clock: FrameClock,
    frame_limit: Option<u64>,
    frames_rendered: u64,
}

impl Animation {
    /// Create an animation from `config`; the clock starts immediately.
    pub fn new(config: AnimationConfig) -> Self {
        let clock = FrameClock::start(config.frame_interval);
        let frame_limit = config.frame_limit;
        Self {
            scene: SpinScene::new(config),
            clock,
            frame_limit,
            frames_rendered: 0,
        }
    }

    /// Get a reference to the scene.
    pub const fn scene(&self) -> &SpinScene {
        &self.scene
    }

    /// Number of frames written so far.
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Render one frame into `buffer`, write it to `sink`, then advance.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn step<W: Write + ?Sized>(
        &mut self,
        buffer: &mut RasterBuffer,
        sink: &mut W,
    ) -> io::Result<()> {
        buffer.clear();
        self.scene.render(buffer);
        buffer.flush_ansi(sink)?;
        self.scene.advance();
        self.frames_rendered += 1;
        Ok(())
    }

    /// Run frames until the frame limit is reached.
    ///
    /// Returns the number of frames rendered by this call. Without a limit
    /// this only returns when the sink fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RasterError::Io`] with the first sink failure.
    pub fn run<W: Write + ?Sized>(&mut self, buffer: &mut RasterBuffer, sink: &mut W) -> Result<u64> {
        let (width, height) = buffer.size();
        log::debug!(
            "animation started: {width}x{height}, limit {:?}",
            self.frame_limit
        );

        let mut rendered = 0u64;
        while self.frame_limit.map_or(true, |limit| rendered < limit) {
            if rendered > 0 {
                let frame = self.clock.wait();
                log::trace!("frame {} at {:?}", frame.index, frame.elapsed);
            }
            if let Err(err) = self.step(buffer, sink) {
                log::warn!("sink failed after {rendered} frames: {err}");
                return Err(err.into());
            }
            rendered += 1;
        }

        log::debug!("animation finished after {rendered} frames");
        Ok(rendered)
    }
}
