//! Frame clock.
//!
//! `draw_web()` runs at the display refresh rate with a variable delta.
//! FrameClock turns the `performance.now()` timestamps it sees into whole
//! elapsed milliseconds, carrying the sub-millisecond remainder so nothing
//! is lost between frames.

/// Longest gap a single frame may report. A backgrounded tab resumes with
/// at most one production tick instead of a burst.
pub const MAX_FRAME_MS: f64 = 1000.0;

pub struct FrameClock {
    /// Fractional milliseconds not yet reported.
    carry: f64,
    /// Timestamp of the previous frame, None before the first one.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            carry: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed the current timestamp and get the milliseconds elapsed since the
    /// previous call. The first call returns 0.
    pub fn update(&mut self, now_ms: f64) -> u64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.carry += delta;
        let whole = self.carry.floor();
        self.carry -= whole;
        whole as u64
    }
}
