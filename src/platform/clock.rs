//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_MS;

/// Paces the loop to a target frame duration and reports real elapsed time
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            last: Instant::now(),
        }
    }

    /// Block until the next frame boundary, then return the milliseconds
    /// since the previous call. Long stalls are clamped to `MAX_FRAME_MS`.
    pub fn tick(&mut self) -> f32 {
        let deadline = self.last + self.frame;
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.last).as_secs_f32() * 1000.0;
        self.last = now;

        if elapsed_ms > MAX_FRAME_MS {
            log::debug!("Frame took {elapsed_ms:.0}ms, clamping to {MAX_FRAME_MS}ms");
        }
        elapsed_ms.min(MAX_FRAME_MS)
    }
}
