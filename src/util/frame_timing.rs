use web_time::{Duration, Instant};

/// How often the smoothed FPS is offered for logging.
pub const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Frame timing: per-frame delta time plus a smoothed FPS figure.
#[derive(Debug, Clone, Copy)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Time accumulated since the last FPS report
    since_report: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a frame timer whose first tick measures from now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a frame timer whose first tick measures from `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            since_report: Duration::ZERO,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Call once at the start of each frame. Returns the delta time in
    /// seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) with an explicit timestamp. Timestamps earlier
    /// than the previous tick count as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now
            .checked_duration_since(self.last_frame)
            .unwrap_or(Duration::ZERO);
        self.last_frame = now;
        self.since_report += elapsed;

        let dt = elapsed.as_secs_f32();
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps =
                self.smoothed_fps * (1.0 - self.smoothing) + instant_fps * self.smoothing;
        }
        dt
    }

    /// The smoothed FPS, once per [`FPS_REPORT_INTERVAL`] of ticked time.
    pub fn take_fps_report(&mut self) -> Option<f32> {
        if self.since_report < FPS_REPORT_INTERVAL {
            return None;
        }
        self.since_report = Duration::ZERO;
        Some(self.smoothed_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_seconds() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        let dt = timing.tick_at(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-6);

        let dt = timing.tick_at(start + Duration::from_millis(300));
        assert!((dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn clock_going_backwards_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut timing = FrameTiming::starting_at(start);
        assert_eq!(timing.tick_at(start - Duration::from_millis(10)), 0.0);
        assert_eq!(timing.take_fps_report(), None);
    }

    #[test]
    fn fps_converges_towards_frame_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        for i in 1..=600 {
            let _ = timing.tick_at(start + Duration::from_millis(10 * i));
        }
        let fps = timing.take_fps_report().unwrap();
        assert!((fps - 100.0).abs() < 1.0, "{fps}");
    }

    #[test]
    fn fps_is_reported_once_per_interval() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        let _ = timing.tick_at(start + Duration::from_secs(4));
        assert_eq!(timing.take_fps_report(), None);

        let _ = timing.tick_at(start + Duration::from_secs(5));
        assert!(timing.take_fps_report().is_some());
        assert_eq!(timing.take_fps_report(), None);
    }
}
