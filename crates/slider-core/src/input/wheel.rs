//! Wheel throttling

/// Lets one wheel event through per throttle window.
///
/// Events inside an open window are discarded, never queued.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelThrottle {
    window_ends_ms: Option<f64>,
}

impl WheelThrottle {
    /// Create a throttle with no open window
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a window is open at `now_ms`
    #[inline]
    pub fn is_throttled(&self, now_ms: f64) -> bool {
        self.window_ends_ms.is_some_and(|end| now_ms < end)
    }

    /// Try to let an event through; opens a new window on success
    pub fn accept(&mut self, now_ms: f64, window_ms: u32) -> bool {
        if self.is_throttled(now_ms) {
            return false;
        }
        self.window_ends_ms = Some(now_ms + window_ms as f64);
        true
    }
}
