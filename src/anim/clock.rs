//! Frame clock: paces the animation loop.
//!
//! Ticks come from a `crossbeam_channel::tick` receiver, so the loop can
//! also `select!` on the clock alongside other channels.

use crossbeam_channel::Receiver;
use std::time::{Duration, Instant};

/// A frame boundary produced by [`FrameClock::wait`].
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Frame number (monotonically increasing, starting at 0).
    pub index: u64,
    /// Time elapsed since the clock was started.
    pub elapsed: Duration,
}

/// Fixed-interval frame clock.
///
/// Ticks missed while a frame is still being drawn are dropped rather
/// than queued, so a slow sink lowers the frame rate instead of building
/// a backlog.
pub struct FrameClock {
    ticks: Receiver<Instant>,
    start: Instant,
    next_index: u64,
}

impl FrameClock {
    /// Start a clock that ticks every `interval`.
    pub fn start(interval: Duration) -> Self {
        Self {
            ticks: crossbeam_channel::tick(interval),
            start: Instant::now(),
            next_index: 0,
        }
    }

    /// Get a reference to the tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Instant> {
        &self.ticks
    }

    /// Block until the next tick.
    pub fn wait(&mut self) -> Frame {
        // A tick receiver never disconnects.
        let at = self.ticks.recv().unwrap_or_else(|_| Instant::now());
        let frame = Frame {
            index: self.next_index,
            elapsed: at.saturating_duration_since(self.start),
        };
        self.next_index += 1;
        frame
    }
}
