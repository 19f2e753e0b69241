//! Input adapters
//!
//! Gesture recognisers that turn raw pointer, wheel and keyboard data into a
//! [`Direction`]. None of them holds navigation state.

mod drag;
mod result;
mod swipe;
mod wheel;

pub use drag::{Cursor, DragTracker};
pub use result::InputResult;
pub use swipe::SwipeTracker;
pub use wheel::WheelThrottle;

use serde::Serialize;

/// Navigation direction requested by an input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Direction of a horizontal gesture.
    ///
    /// `travel` is start X minus end X: a leftward swipe is positive and
    /// means "next". The threshold is exclusive.
    pub fn from_travel(travel: f64, threshold: f64) -> Option<Direction> {
        if travel.abs() > threshold {
            Some(if travel > 0.0 {
                Direction::Next
            } else {
                Direction::Previous
            })
        } else {
            None
        }
    }

    /// Direction of a wheel event: any positive delta scrolls forward
    pub fn from_wheel(delta_x: f64, delta_y: f64) -> Direction {
        if delta_y > 0.0 || delta_x > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        }
    }

    /// Direction bound to a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" => Some(Direction::Previous),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(Direction::from_travel(50.0, 50.0), None);
        assert_eq!(Direction::from_travel(-50.0, 50.0), None);
        assert_eq!(Direction::from_travel(51.0, 50.0), Some(Direction::Next));
        assert_eq!(Direction::from_travel(-51.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(Direction::from_wheel(0.0, 12.0), Direction::Next);
        assert_eq!(Direction::from_wheel(8.0, 0.0), Direction::Next);
        assert_eq!(Direction::from_wheel(0.0, -3.0), Direction::Previous);
        assert_eq!(Direction::from_wheel(0.0, 0.0), Direction::Previous);
    }

    #[test]
    fn test_keys() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowUp"), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
