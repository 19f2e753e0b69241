//! Navigation entry points

use crate::effect::Effect;
use crate::error::NavError;
use crate::input::Direction;
use crate::nav::{Motion, NavOutcome};
use crate::sync::IndicatorState;
use super::Carousel;

impl Carousel {
    /// Move to slide `index`.
    ///
    /// Animated requests are dropped while a move is in flight; out-of-range
    /// indices are rejected. Either way nothing changes.
    pub fn go_to(
        &mut self,
        index: usize,
        motion: Motion,
        now_ms: f64,
    ) -> Result<NavOutcome, NavError> {
        let outcome = self
            .nav
            .go_to(index, motion, now_ms, &self.config, &mut self.timers)
            .inspect_err(|e| log::error!("{e}"))?;

        if let NavOutcome::Moved { from, to, motion } = outcome {
            log::debug!("moving {from} -> {to} ({motion:?})");
            self.effects.push(Effect::MoveTrack {
                offset_percent: self.nav.layout().offset_percent(to),
                motion,
            });
            self.effects
                .push(Effect::SyncIndicators(IndicatorState::project(to, self.dot_count)));
        }
        Ok(outcome)
    }

    /// Go to the next slide, wrapping to the first.
    ///
    /// `track_children` is the number of children the track holds right now.
    pub fn next(&mut self, now_ms: f64, track_children: usize) -> Result<NavOutcome, NavError> {
        self.step(Direction::Next, now_ms, track_children)
    }

    /// Go to the previous slide, wrapping to the last.
    pub fn previous(
        &mut self,
        now_ms: f64,
        track_children: usize,
    ) -> Result<NavOutcome, NavError> {
        self.step(Direction::Previous, now_ms, track_children)
    }

    /// Step one slide in `direction`
    pub fn step(
        &mut self,
        direction: Direction,
        now_ms: f64,
        track_children: usize,
    ) -> Result<NavOutcome, NavError> {
        if self.is_transitioning() {
            log::debug!("{direction:?} blocked, transition in flight");
            return Ok(NavOutcome::Dropped);
        }
        self.nav
            .check_structure(track_children)
            .inspect_err(|e| log::error!("slides missing from track: {e}"))?;

        let target = match direction {
            Direction::Next => self.nav.next_index(),
            Direction::Previous => self.nav.previous_index(),
        };
        self.go_to(target, Motion::Animated, now_ms)
    }

    /// Force the carousel back to idle, cancelling pending settle tasks
    pub fn reset_transition(&mut self) -> bool {
        let reset = self.nav.force_idle(&mut self.timers);
        if reset {
            log::info!("transition flag reset manually");
        }
        reset
    }

    /// Viewport resized: re-apply the current offset and re-measure height.
    ///
    /// The resync is immediate so it is never dropped by a move in flight.
    pub fn on_resize(&mut self, now_ms: f64) {
        self.move_to(self.current_index(), Motion::Immediate, now_ms);
        self.begin_height_measure();
    }

    /// `go_to` for indices known to be valid
    pub(crate) fn move_to(&mut self, index: usize, motion: Motion, now_ms: f64) {
        let _ = self.go_to(index, motion, now_ms);
    }
}
