use glam::Vec2;

/// Turns absolute cursor positions into look deltas.
///
/// The first sample after activation only seeds the baseline: the cursor
/// can be anywhere when the window opens, and treating that as motion would
/// spin the camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    /// Tracker waiting for its first sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute position and get `(dx, dy)` with `dy` flipped so
    /// that moving the pointer up yields a positive value.
    pub fn sample(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let last = self.last.replace(current).unwrap_or(current);
        Vec2::new(current.x - last.x, last.y - current.y)
    }

    /// Forget the baseline so the next sample seeds it again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_zero() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(12_345.0, -9_876.0), Vec2::ZERO);
        assert_eq!(tracker.sample(12_346.0, -9_876.0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let mut tracker = PointerTracker::new();
        let _ = tracker.sample(400.0, 300.0);
        assert_eq!(tracker.sample(410.0, 280.0), Vec2::new(10.0, 20.0));
        assert_eq!(tracker.sample(405.0, 290.0), Vec2::new(-5.0, -10.0));
    }

    #[test]
    fn reset_reseeds() {
        let mut tracker = PointerTracker::new();
        let _ = tracker.sample(0.0, 0.0);
        tracker.reset();
        assert_eq!(tracker.sample(500.0, 500.0), Vec2::ZERO);
    }
}
