//! DOM mutations requested by the carousel

use serde::Serialize;

use crate::input::Cursor;
use crate::nav::Motion;
use crate::sync::IndicatorState;

/// A DOM change the host must apply, in order
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Translate the track.
    ///
    /// For [`Motion::Immediate`] the host disables the transition, sets the
    /// transform, forces a reflow and restores the transition.
    MoveTrack {
        offset_percent: f64,
        motion: Motion,
    },
    /// Update dots and counter
    SyncIndicators(IndicatorState),
    /// Set the cursor on the slide list
    SetCursor { cursor: Cursor },
    /// Reset every slide's height to `auto` before a measurement run
    ResetSlideHeights,
    /// Count the images in the track and report readiness for this run
    AwaitImages { generation: u64 },
    /// Measure each slide's content height and report it for this run
    MeasureHeights { generation: u64 },
    /// Apply the shared height to the container and the track
    ApplyHeight { px: f64 },
}
