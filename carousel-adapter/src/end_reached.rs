/// Fraction of a viewport from the end at which the end-of-list signal fires.
pub const DEFAULT_END_REACHED_THRESHOLD: f32 = 0.5;

/// Derives the end-of-list signal from scroll offsets.
///
/// Fires once when the remaining distance to the end drops below `threshold * viewport`, and
/// re-arms only after scrolling back out of that zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndReachedDetector {
    threshold: f32,
    armed: bool,
}

impl Default for EndReachedDetector {
    fn default() -> Self {
        Self::new(DEFAULT_END_REACHED_THRESHOLD)
    }
}

impl EndReachedDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            armed: true,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn on_scroll(&mut self, offset: f32, viewport_length: f32, content_length: f32) -> bool {
        if !(viewport_length > 0.0) {
            return false;
        }
        let distance_from_end = content_length - viewport_length - offset;
        if distance_from_end < self.threshold * viewport_length {
            let fire = self.armed;
            self.armed = false;
            fire
        } else {
            self.armed = true;
            false
        }
    }

    pub fn reset(&mut self) {
        self.armed = true;
    }
}
