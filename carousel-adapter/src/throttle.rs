/// Minimum spacing between scroll offsets forwarded to the page indicator.
pub const DEFAULT_SCROLL_EVENT_THROTTLE_MS: u64 = 32;

/// Rate limiter for the continuous scroll-offset stream.
///
/// The first offset in a window passes through; later ones in the same window are held and the
/// most recent one is released by `flush` once the window has elapsed, so the indicator always
/// settles on the final position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThrottle {
    interval_ms: u64,
    last_emit_ms: Option<u64>,
    pending: Option<f32>,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_EVENT_THROTTLE_MS)
    }
}

impl ScrollThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_emit_ms: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn pending(&self) -> Option<f32> {
        self.pending
    }

    fn window_open(&self, now_ms: u64) -> bool {
        match self.last_emit_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
            None => true,
        }
    }

    /// Offers an offset. Returns it when it may be forwarded now.
    pub fn push(&mut self, offset: f32, now_ms: u64) -> Option<f32> {
        if self.window_open(now_ms) {
            self.last_emit_ms = Some(now_ms);
            self.pending = None;
            Some(offset)
        } else {
            self.pending = Some(offset);
            None
        }
    }

    /// Releases the held offset once its window has elapsed.
    pub fn flush(&mut self, now_ms: u64) -> Option<f32> {
        if self.pending.is_none() || !self.window_open(now_ms) {
            return None;
        }
        self.last_emit_ms = Some(now_ms);
        self.pending.take()
    }

    pub fn reset(&mut self) {
        self.last_emit_ms = None;
        self.pending = None;
    }
}
