//! Touch swipe recognition

use super::Direction;

/// Remembers where a touch started
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// `touchstart` at `x`
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Check if a touch is being tracked
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// `touchend` at `x`. Returns the swipe direction if it travelled far enough.
    pub fn finish(&mut self, x: f64, threshold: f64) -> Option<Direction> {
        let start = self.start_x.take()?;
        Direction::from_travel(start - x, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftward_swipe_is_next() {
        let mut swipe = SwipeTracker::new();
        swipe.start(300.0);
        assert_eq!(swipe.finish(200.0, 50.0), Some(Direction::Next));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_rightward_swipe_is_previous() {
        let mut swipe = SwipeTracker::new();
        swipe.start(100.0);
        assert_eq!(swipe.finish(151.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let mut swipe = SwipeTracker::new();
        swipe.start(100.0);
        assert_eq!(swipe.finish(50.0, 50.0), None);
    }

    #[test]
    fn test_end_without_start() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.finish(500.0, 50.0), None);
    }
}
