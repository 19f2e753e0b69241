//! Carousel coordinating layout, navigation, input and indicators
//!
//! This module is split into focused submodules:
//! - `navigation`: go_to / next / previous and idle bookkeeping
//! - `input`: browser event handlers feeding the navigator
//! - `height`: shared height measurement runs

mod height;
mod input;
mod navigation;

use crate::config::SliderConfig;
use crate::effect::Effect;
use crate::error::SliderError;
use crate::input::{Cursor, DragTracker, SwipeTracker, WheelThrottle};
use crate::layout::{HeightRun, TrackLayout};
use crate::nav::{Motion, Navigator};
use crate::snapshot::CarouselSnapshot;
use crate::sync::IndicatorState;
use crate::timer::{Task, Timers};

/// One carousel instance
///
/// Owns every piece of per-container state: index, in-transit guard, gesture
/// trackers, timer queue and measured height. Each call records the DOM
/// changes it needs as [`Effect`]s, drained with [`Carousel::drain_effects`].
#[derive(Debug)]
pub struct Carousel {
    config: SliderConfig,
    nav: Navigator,
    dot_count: usize,
    timers: Timers,
    height: HeightRun,
    swipe: SwipeTracker,
    drag: DragTracker,
    wheel: WheelThrottle,
    effects: Vec<Effect>,
}

impl Carousel {
    /// Create a carousel for `slide_count` slides and `dot_count` dots
    pub fn new(
        slide_count: usize,
        dot_count: usize,
        config: SliderConfig,
    ) -> Result<Self, SliderError> {
        config.validate()?;
        if dot_count == 0 {
            return Err(SliderError::MissingDots);
        }
        let layout = TrackLayout::new(slide_count)?;
        Ok(Self {
            config,
            nav: Navigator::new(layout),
            dot_count,
            timers: Timers::new(),
            height: HeightRun::new(),
            swipe: SwipeTracker::new(),
            drag: DragTracker::new(),
            wheel: WheelThrottle::new(),
            effects: Vec::new(),
        })
    }

    /// First paint: grab cursor, immediate move to slide 0, a delayed resync
    /// and the first height measurement run
    pub fn mount(&mut self, now_ms: f64) {
        self.effects.push(Effect::SetCursor {
            cursor: Cursor::Grab,
        });
        self.move_to(0, Motion::Immediate, now_ms);
        self.timers
            .schedule(now_ms, self.config.initial_resync_ms, Task::InitialResync);
        self.begin_height_measure();
        log::info!("carousel mounted with {} slides", self.slide_count());
    }

    /// Run every task due at `now_ms`.
    ///
    /// Each task runs at its own due time, so a late tick catches up to the
    /// same state an on-time tick would have reached.
    pub fn tick(&mut self, now_ms: f64) {
        while let Some(timer) = self.timers.pop_due(now_ms) {
            match timer.task {
                Task::SettleTransit | Task::TransitBackstop => {
                    if self.nav.complete(&timer, &mut self.timers) {
                        log::debug!("transition completed at slide {}", self.current_index());
                    }
                }
                Task::MeasureHeight { generation } => {
                    if self.height.is_current(generation) {
                        self.effects.push(Effect::MeasureHeights { generation });
                    }
                }
                Task::InitialResync => {
                    self.move_to(self.current_index(), Motion::Immediate, timer.due_ms);
                }
            }
        }
    }

    /// Earliest time `tick` has work to do
    #[inline]
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Take the effects recorded since the last drain
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Configuration in use
    #[inline]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Track geometry
    #[inline]
    pub fn layout(&self) -> &TrackLayout {
        self.nav.layout()
    }

    /// Number of slides
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.nav.slide_count()
    }

    /// Number of dots
    #[inline]
    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    /// Current slide index
    #[inline]
    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    /// Check if a move is in flight
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.nav.is_transitioning()
    }

    /// Navigator state, including the pending settle/backstop ids
    #[inline]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Mutable timer queue, for hosts that lose or cancel callbacks
    #[inline]
    pub fn timers_mut(&mut self) -> &mut Timers {
        &mut self.timers
    }

    /// Current indicator projection
    pub fn indicators(&self) -> IndicatorState {
        IndicatorState::project(self.current_index(), self.dot_count)
    }

    /// Last applied shared height
    #[inline]
    pub fn measured_height(&self) -> Option<f64> {
        self.height.measured()
    }

    /// Diagnostic snapshot
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            slide_count: self.slide_count(),
            current_index: self.current_index(),
            transitioning: self.is_transitioning(),
            offset_percent: self.nav.offset_percent(),
            measured_height: self.height.measured(),
            pending_tasks: self.timers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Carousel::new(0, 3, SliderConfig::default()).unwrap_err(),
            SliderError::NoSlides
        );
        assert_eq!(
            Carousel::new(3, 0, SliderConfig::default()).unwrap_err(),
            SliderError::MissingDots
        );
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SliderConfig {
            backstop_ms: 10,
            ..Default::default()
        };
        assert!(matches!(
            Carousel::new(3, 3, config),
            Err(SliderError::Config(_))
        ));
    }

    #[test]
    fn test_mount_effects() {
        let mut carousel = Carousel::new(3, 3, SliderConfig::default()).unwrap();
        carousel.mount(0.0);

        let effects = carousel.drain_effects();
        assert_eq!(
            effects[0],
            Effect::SetCursor {
                cursor: Cursor::Grab
            }
        );
        assert!(matches!(
            effects[1],
            Effect::MoveTrack {
                motion: Motion::Immediate,
                ..
            }
        ));
        assert_eq!(effects[2], Effect::SyncIndicators(IndicatorState::project(0, 3)));
        assert!(effects.contains(&Effect::ResetSlideHeights));
        assert!(effects.contains(&Effect::AwaitImages { generation: 1 }));
        assert!(carousel.is_transitioning());
        assert!(carousel.drain_effects().is_empty());
    }

    #[test]
    fn test_initial_resync() {
        let mut carousel = Carousel::new(3, 3, SliderConfig::default()).unwrap();
        carousel.mount(0.0);
        carousel.drain_effects();

        carousel.tick(200.0);
        let effects = carousel.drain_effects();
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::MoveTrack {
                motion: Motion::Immediate,
                ..
            }
        )));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_late_tick_catches_up_to_idle() {
        let mut carousel = Carousel::new(4, 4, SliderConfig::default()).unwrap();
        carousel.mount(0.0);

        // one tick long after every first-paint task fell due
        carousel.tick(1000.0);
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.next_deadline(), None);
        assert!(carousel.next(1000.0, 4).unwrap().is_moved());
    }

    #[test]
    fn test_resync_runs_at_its_due_time() {
        let mut carousel = Carousel::new(3, 3, SliderConfig::default()).unwrap();
        carousel.mount(0.0);

        // first-paint settle done, resync (due 200) still pending
        carousel.tick(100.0);
        assert!(!carousel.is_transitioning());

        // the resync starts a 50ms immediate settle from 200, not from 240
        carousel.tick(240.0);
        assert!(carousel.is_transitioning());
        assert_eq!(carousel.next_deadline(), Some(250.0));
        carousel.tick(250.0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_snapshot() {
        let mut carousel = Carousel::new(4, 4, SliderConfig::default()).unwrap();
        carousel.mount(0.0);
        carousel.tick(1000.0);

        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.slide_count, 4);
        assert_eq!(snapshot.current_index, 0);
        assert!(!snapshot.transitioning);
        assert_eq!(snapshot.pending_tasks, 0);

        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["slideCount"], 4);
        assert_eq!(json["transitioning"], false);
    }
}
