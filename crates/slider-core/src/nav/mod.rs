//! Navigation state machine
//!
//! Holds the current index and the in-transit guard. A move is accepted only
//! while idle, unless it is immediate.

mod machine;

pub use machine::Navigator;

use serde::Serialize;

/// How a move is presented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    /// CSS-transitioned move; dropped while another move is in flight
    Animated,
    /// Instant move (first paint, resync); always accepted
    Immediate,
}

impl Motion {
    /// Check if this is an immediate move
    #[inline]
    pub fn is_immediate(self) -> bool {
        matches!(self, Motion::Immediate)
    }
}

/// In-transit state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the next move
    Idle,
    /// A move is in flight
    Transitioning {
        /// Primary return-to-idle task
        settle: crate::timer::TimerId,
        /// Backstop return-to-idle task
        backstop: crate::timer::TimerId,
    },
}

impl Phase {
    /// Check if a move is in flight
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Phase::Transitioning { .. })
    }
}

/// Result of an accepted or ignored navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The track moved
    Moved {
        from: usize,
        to: usize,
        motion: Motion,
    },
    /// A move was already in flight; the request was dropped
    Dropped,
}

impl NavOutcome {
    /// Check if the track moved
    #[inline]
    pub fn is_moved(&self) -> bool {
        matches!(self, NavOutcome::Moved { .. })
    }
}
