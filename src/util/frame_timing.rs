use web_time::Instant;

/// Longest step handed to the navigators. Larger gaps (a backgrounded tab,
/// a debugger pause) are clamped so the camera does not jump.
const MAX_STEP_SECS: f32 = 0.25;

/// Per-frame clock: elapsed seconds between ticks plus a smoothed FPS.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp of the previous tick; `None` before the first one.
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock. The first [`tick`](Self::tick) returns zero.
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to now and return the seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to an explicit timestamp.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let frame_time = now.saturating_duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(MAX_STEP_SECS)
    }

    /// Get the current FPS (smoothed).
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
