//! Navigator: index + in-transit guard

use crate::config::SliderConfig;
use crate::error::NavError;
use crate::layout::TrackLayout;
use crate::timer::{Task, Timer, Timers};
use super::{Motion, NavOutcome, Phase};

/// Navigation state for one carousel
#[derive(Clone, Debug)]
pub struct Navigator {
    layout: TrackLayout,
    current: usize,
    phase: Phase,
}

impl Navigator {
    /// Create a navigator resting on slide 0
    pub fn new(layout: TrackLayout) -> Self {
        Self {
            layout,
            current: 0,
            phase: Phase::Idle,
        }
    }

    /// Current slide index
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.layout.slide_count()
    }

    /// Track geometry
    #[inline]
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Current in-transit state
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a move is in flight
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    /// Offset of the current slide
    #[inline]
    pub fn offset_percent(&self) -> f64 {
        self.layout.offset_percent(self.current)
    }

    /// Index after the current one, wrapping to 0
    #[inline]
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.slide_count()
    }

    /// Index before the current one, wrapping to the last slide
    #[inline]
    pub fn previous_index(&self) -> usize {
        let n = self.slide_count();
        (self.current + n - 1) % n
    }

    /// Verify the track still holds exactly the slides it was built with
    pub fn check_structure(&self, track_children: usize) -> Result<(), NavError> {
        if track_children != self.slide_count() {
            return Err(NavError::StructureMismatch {
                expected: self.slide_count(),
                found: track_children,
            });
        }
        Ok(())
    }

    /// Move to `target`.
    ///
    /// Animated requests made while a move is in flight are dropped. An
    /// accepted request replaces any pending settle/backstop pair with its own.
    pub fn go_to(
        &mut self,
        target: usize,
        motion: Motion,
        now_ms: f64,
        config: &SliderConfig,
        timers: &mut Timers,
    ) -> Result<NavOutcome, NavError> {
        if self.is_transitioning() && !motion.is_immediate() {
            return Ok(NavOutcome::Dropped);
        }
        if target >= self.slide_count() {
            return Err(NavError::InvalidIndex {
                index: target,
                count: self.slide_count(),
            });
        }

        self.clear_pending(timers);

        let settle_ms = match motion {
            Motion::Animated => config.animated_settle_ms(),
            Motion::Immediate => config.immediate_settle_ms,
        };
        let settle = timers.schedule(now_ms, settle_ms, Task::SettleTransit);
        let backstop = timers.schedule(now_ms, config.backstop_ms, Task::TransitBackstop);
        self.phase = Phase::Transitioning { settle, backstop };

        let from = self.current;
        self.current = target;
        Ok(NavOutcome::Moved {
            from,
            to: target,
            motion,
        })
    }

    /// Handle a fired settle or backstop task.
    ///
    /// Returns true if the navigator went back to idle. Tasks that do not
    /// belong to the move in flight are ignored.
    pub fn complete(&mut self, timer: &Timer, timers: &mut Timers) -> bool {
        let Phase::Transitioning { settle, backstop } = self.phase else {
            return false;
        };
        match timer.task {
            Task::SettleTransit if timer.id == settle => {
                timers.cancel(backstop);
            }
            Task::TransitBackstop if timer.id == backstop => {
                log::warn!("backstop fired, forcing carousel back to idle");
                timers.cancel(settle);
            }
            _ => return false,
        }
        self.phase = Phase::Idle;
        true
    }

    /// Return to idle now, cancelling pending tasks
    pub fn force_idle(&mut self, timers: &mut Timers) -> bool {
        let was_transitioning = self.is_transitioning();
        self.clear_pending(timers);
        self.phase = Phase::Idle;
        was_transitioning
    }

    fn clear_pending(&mut self, timers: &mut Timers) {
        if let Phase::Transitioning { settle, backstop } = self.phase {
            timers.cancel(settle);
            timers.cancel(backstop);
        }
    }
}
