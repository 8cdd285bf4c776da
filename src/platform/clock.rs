//! Frame timing
//!
//! The clock caps the frame rate by sleeping out whatever is left of the
//! frame budget, then reports how long the frame really took.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_MS;

/// Frame-rate governor
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            last: Instant::now(),
        }
    }

    /// Wait until the frame budget is spent and return the milliseconds since
    /// the previous call, clamped to [`MAX_FRAME_MS`]
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.budget {
            thread::sleep(self.budget - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        clamp_frame_ms(dt.as_secs_f32() * 1000.0)
    }
}

/// Keep a frame delta inside [0, MAX_FRAME_MS]
pub fn clamp_frame_ms(dt_ms: f32) -> f32 {
    dt_ms.clamp(0.0, MAX_FRAME_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_waits_out_budget() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt >= 4.9, "dt = {}", dt);
        assert!(dt <= MAX_FRAME_MS);
    }

    #[test]
    fn test_clamp_frame_ms() {
        assert_eq!(clamp_frame_ms(16.0), 16.0);
        assert_eq!(clamp_frame_ms(-1.0), 0.0);
        assert_eq!(clamp_frame_ms(5000.0), MAX_FRAME_MS);
    }
}
