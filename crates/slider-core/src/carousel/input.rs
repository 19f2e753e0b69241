//! Browser event handlers
//!
//! Each handler maps one DOM event onto `step` / `go_to` and tells the host
//! whether to prevent the default action.

use crate::effect::Effect;
use crate::input::{Direction, InputResult};
use crate::nav::Motion;
use super::Carousel;

impl Carousel {
    /// Previous / next button click
    pub fn on_button(
        &mut self,
        direction: Direction,
        now_ms: f64,
        track_children: usize,
    ) -> InputResult {
        let _ = self.step(direction, now_ms, track_children);
        InputResult::Handled
    }

    /// Click on dot `index`
    pub fn on_dot(&mut self, index: usize, now_ms: f64) -> InputResult {
        if self.is_transitioning() {
            log::debug!("dot {index} click blocked, transition in flight");
        } else {
            let _ = self.go_to(index, Motion::Animated, now_ms);
        }
        InputResult::Captured
    }

    /// `touchstart` (passive)
    pub fn on_touch_start(&mut self, x: f64) -> InputResult {
        self.swipe.start(x);
        InputResult::Unhandled
    }

    /// `touchend` (passive)
    pub fn on_touch_end(&mut self, x: f64, now_ms: f64, track_children: usize) -> InputResult {
        if let Some(direction) = self.swipe.finish(x, self.config.swipe_threshold_px) {
            let _ = self.step(direction, now_ms, track_children);
        }
        InputResult::Unhandled
    }

    /// `mousedown`
    pub fn on_mouse_down(&mut self, x: f64) -> InputResult {
        let cursor = self.drag.press(x);
        self.effects.push(Effect::SetCursor { cursor });
        InputResult::Handled
    }

    /// `mousemove`: only swallowed while dragging
    pub fn on_mouse_move(&mut self) -> InputResult {
        if self.drag.is_dragging() {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// `mouseup`
    pub fn on_mouse_up(&mut self, x: f64, now_ms: f64, track_children: usize) -> InputResult {
        let Some((cursor, direction)) = self.drag.release(x, self.config.swipe_threshold_px)
        else {
            return InputResult::Unhandled;
        };
        self.effects.push(Effect::SetCursor { cursor });
        if let Some(direction) = direction {
            let _ = self.step(direction, now_ms, track_children);
        }
        InputResult::Unhandled
    }

    /// `mouseleave`: abandon an active drag
    pub fn on_mouse_leave(&mut self) -> InputResult {
        if let Some(cursor) = self.drag.cancel() {
            self.effects.push(Effect::SetCursor { cursor });
        }
        InputResult::Unhandled
    }

    /// `wheel` (non-passive; the page never scrolls over the carousel)
    pub fn on_wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        now_ms: f64,
        track_children: usize,
    ) -> InputResult {
        if self.is_transitioning() || !self.wheel.accept(now_ms, self.config.wheel_throttle_ms) {
            return InputResult::Handled;
        }
        let _ = self.step(Direction::from_wheel(delta_x, delta_y), now_ms, track_children);
        InputResult::Handled
    }

    /// `keydown` on the focused container
    pub fn on_key(&mut self, key: &str, now_ms: f64, track_children: usize) -> InputResult {
        match Direction::from_key(key) {
            Some(direction) => {
                let _ = self.step(direction, now_ms, track_children);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Check if a mouse drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SliderConfig;
    use crate::effect::Effect;
    use crate::input::{Cursor, Direction, InputResult};
    use super::Carousel;

    fn idle_carousel(n: usize) -> Carousel {
        let mut carousel = Carousel::new(n, n, SliderConfig::default()).unwrap();
        carousel.mount(0.0);
        carousel.tick(1000.0);
        carousel.drain_effects();
        carousel
    }

    #[test]
    fn test_button_prevents_default() {
        let mut carousel = idle_carousel(3);
        let result = carousel.on_button(Direction::Next, 1000.0, 3);
        assert!(result.prevent_default());
        assert!(!result.stop_propagation());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_dot_captures_and_navigates() {
        let mut carousel = idle_carousel(4);
        let result = carousel.on_dot(2, 1000.0);
        assert!(result.stop_propagation());
        assert_eq!(carousel.current_index(), 2);

        // blocked while in flight
        carousel.on_dot(0, 1100.0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_touch_swipe_threshold() {
        let mut carousel = idle_carousel(3);
        carousel.on_touch_start(200.0);
        carousel.on_touch_end(150.0, 1000.0, 3);
        assert_eq!(carousel.current_index(), 0);

        carousel.on_touch_start(200.0);
        let result = carousel.on_touch_end(149.0, 1000.0, 3);
        assert_eq!(result, InputResult::Unhandled);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_mouse_drag_cursor_and_navigation() {
        let mut carousel = idle_carousel(3);
        assert!(carousel.on_mouse_down(100.0).prevent_default());
        assert!(carousel.is_dragging());
        assert!(carousel.on_mouse_move().prevent_default());

        carousel.on_mouse_up(200.0, 1000.0, 3);
        assert!(!carousel.is_dragging());
        assert!(!carousel.on_mouse_move().prevent_default());
        assert_eq!(carousel.current_index(), 2);

        let effects = carousel.drain_effects();
        assert_eq!(
            effects[0],
            Effect::SetCursor {
                cursor: Cursor::Grabbing
            }
        );
        assert_eq!(
            effects[1],
            Effect::SetCursor {
                cursor: Cursor::Grab
            }
        );
    }

    #[test]
    fn test_mouse_leave_cancels_drag() {
        let mut carousel = idle_carousel(3);
        carousel.on_mouse_down(300.0);
        carousel.on_mouse_leave();
        carousel.on_mouse_up(0.0, 1000.0, 3);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_keyboard() {
        let mut carousel = idle_carousel(3);
        assert_eq!(carousel.on_key("ArrowLeft", 1000.0, 3), InputResult::Handled);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.on_key("Tab", 2000.0, 3), InputResult::Unhandled);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_wheel_always_prevents_default() {
        let mut carousel = idle_carousel(3);
        assert!(carousel.on_wheel(0.0, 10.0, 1000.0, 3).prevent_default());
        assert!(carousel.on_wheel(0.0, 10.0, 1010.0, 3).prevent_default());
        assert_eq!(carousel.current_index(), 1);
    }
}
