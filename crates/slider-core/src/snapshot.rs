//! Debug snapshot of a carousel

use serde::Serialize;

/// Point-in-time view of a carousel for diagnostics
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    /// Slides the carousel was built with
    pub slide_count: usize,
    /// Current slide index
    pub current_index: usize,
    /// Whether a move is in flight
    pub transitioning: bool,
    /// Offset of the current slide
    pub offset_percent: f64,
    /// Last applied shared height
    pub measured_height: Option<f64>,
    /// Tasks waiting in the timer queue
    pub pending_tasks: usize,
}
