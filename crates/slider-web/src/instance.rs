//! One mounted slider: DOM handles, carousel state and event wiring
//!
//! Every entry point (DOM event, image readiness, timeout) follows the same
//! shape: borrow the carousel, feed it the event, release the borrow, then
//! `flush` the recorded effects and re-arm the single pending timeout.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use slider_core::{
    Carousel, CarouselSnapshot, Direction, Effect, InputResult, SliderConfig, SliderError,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use crate::constants::CONFIG_ATTR;
use crate::dom::{SliderDom, SliderParts};
use crate::listener::Listener;
use crate::util::now_ms;

/// A carousel bound to its container
pub(crate) struct SliderInstance {
    dom: SliderDom,
    carousel: RefCell<Carousel>,
    listeners: RefCell<Vec<Listener>>,
    image_listeners: RefCell<Vec<Listener>>,
    timer: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

fn read_config(container: &HtmlElement) -> Result<SliderConfig, SliderError> {
    match container.get_attribute(CONFIG_ATTR) {
        Some(json) => SliderConfig::from_json(&json),
        None => Ok(SliderConfig::default()),
    }
}

fn touch_x(event: &TouchEvent, changed: bool) -> Option<f64> {
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.get(0).map(|t| t.client_x() as f64)
}

impl SliderInstance {
    /// Validate `container`, build the track and start the carousel.
    ///
    /// Validation errors leave the container untouched.
    pub fn mount(container: &HtmlElement) -> Result<Rc<Self>, SliderError> {
        let config = read_config(container)?;
        let parts = SliderParts::discover(container)?;
        let carousel = Carousel::new(parts.slide_count(), parts.dot_count(), config)?;
        let dom = SliderDom::build(parts, carousel.layout(), carousel.config())?;

        let instance = Rc::new(Self {
            dom,
            carousel: RefCell::new(carousel),
            listeners: RefCell::new(Vec::new()),
            image_listeners: RefCell::new(Vec::new()),
            timer: Cell::new(None),
            tick: RefCell::new(None),
        });

        instance.install_tick();
        // on error the instance is dropped here, detaching what was wired
        instance.wire()?;
        instance.carousel.borrow_mut().mount(now_ms());
        instance.flush();
        Ok(instance)
    }

    /// Container element
    #[inline]
    pub fn container(&self) -> &HtmlElement {
        &self.dom.container
    }

    /// Children the track holds right now
    #[inline]
    pub fn track_children(&self) -> usize {
        self.dom.track_children()
    }

    /// Current inline transform of the track
    pub fn transform(&self) -> String {
        self.dom.transform()
    }

    /// Carousel snapshot plus the DOM facts it cannot see
    pub fn report(&self) -> serde_json::Value {
        let snapshot: CarouselSnapshot = self.carousel.borrow().snapshot();
        let mut report = serde_json::to_value(&snapshot).unwrap_or_default();
        if let Some(fields) = report.as_object_mut() {
            fields.insert("id".into(), self.container().id().into());
            fields.insert("trackChildren".into(), self.track_children().into());
            fields.insert("transform".into(), self.transform().into());
        }
        report
    }

    /// Force the carousel back to idle
    pub fn reset_transition(self: &Rc<Self>) -> bool {
        let reset = self.carousel.borrow_mut().reset_transition();
        self.flush();
        reset
    }

    fn install_tick(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(instance) = weak.upgrade() {
                instance.timer.set(None);
                instance.carousel.borrow_mut().tick(now_ms());
                instance.flush();
            }
        }) as Box<dyn FnMut()>);
        *self.tick.borrow_mut() = Some(closure);
    }

    /// Attach `handler` for `event` on `target`; its result decides whether
    /// the event's default action and propagation are stopped
    fn on<F>(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: F,
    ) -> Result<(), SliderError>
    where
        F: Fn(&SliderInstance, &Event) -> InputResult + 'static,
    {
        let weak: Weak<Self> = Rc::downgrade(self);
        let listener = Listener::attach(target, event, passive, move |e: Event| {
            let Some(instance) = weak.upgrade() else {
                return;
            };
            let result = handler(&*instance, &e);
            if result.prevent_default() {
                e.prevent_default();
            }
            if result.stop_propagation() {
                e.stop_propagation();
            }
            instance.flush();
        })?;
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    fn wire(self: &Rc<Self>) -> Result<(), SliderError> {
        let buttons = [
            (self.dom.prev.clone(), Direction::Previous),
            (self.dom.next.clone(), Direction::Next),
        ];
        for (button, direction) in buttons {
            if let Some(button) = button {
                self.on(&button, "click", false, move |s, _| {
                    let children = s.track_children();
                    s.carousel
                        .borrow_mut()
                        .on_button(direction, now_ms(), children)
                })?;
            }
        }

        for (index, dot) in self.dom.dots.clone().into_iter().enumerate() {
            self.on(&dot, "click", false, move |s, _| {
                s.carousel.borrow_mut().on_dot(index, now_ms())
            })?;
        }

        let list: EventTarget = self.dom.list.clone().into();

        self.on(&list, "touchstart", true, |s, e| {
            let Some(x) = e.dyn_ref::<TouchEvent>().and_then(|t| touch_x(t, false)) else {
                return InputResult::Unhandled;
            };
            s.carousel.borrow_mut().on_touch_start(x)
        })?;
        self.on(&list, "touchend", true, |s, e| {
            let Some(x) = e.dyn_ref::<TouchEvent>().and_then(|t| touch_x(t, true)) else {
                return InputResult::Unhandled;
            };
            let children = s.track_children();
            s.carousel.borrow_mut().on_touch_end(x, now_ms(), children)
        })?;

        self.on(&list, "mousedown", false, |s, e| {
            let Some(m) = e.dyn_ref::<MouseEvent>() else {
                return InputResult::Unhandled;
            };
            s.carousel.borrow_mut().on_mouse_down(m.client_x() as f64)
        })?;
        self.on(&list, "mousemove", false, |s, _| {
            s.carousel.borrow_mut().on_mouse_move()
        })?;
        self.on(&list, "mouseup", false, |s, e| {
            let Some(m) = e.dyn_ref::<MouseEvent>() else {
                return InputResult::Unhandled;
            };
            let children = s.track_children();
            s.carousel
                .borrow_mut()
                .on_mouse_up(m.client_x() as f64, now_ms(), children)
        })?;
        self.on(&list, "mouseleave", false, |s, _| {
            s.carousel.borrow_mut().on_mouse_leave()
        })?;

        self.on(&list, "wheel", false, |s, e| {
            let Some(w) = e.dyn_ref::<WheelEvent>() else {
                return InputResult::Unhandled;
            };
            let children = s.track_children();
            s.carousel
                .borrow_mut()
                .on_wheel(w.delta_x(), w.delta_y(), now_ms(), children)
        })?;

        let container: EventTarget = self.dom.container.clone().into();
        self.on(&container, "keydown", false, |s, e| {
            let Some(k) = e.dyn_ref::<KeyboardEvent>() else {
                return InputResult::Unhandled;
            };
            let children = s.track_children();
            s.carousel.borrow_mut().on_key(&k.key(), now_ms(), children)
        })?;

        if let Some(window) = web_sys::window() {
            self.on(&window, "resize", true, |s, _| {
                s.carousel.borrow_mut().on_resize(now_ms());
                InputResult::Unhandled
            })?;
        }

        Ok(())
    }

    /// Apply recorded effects until none remain, then re-arm the timeout
    pub fn flush(self: &Rc<Self>) {
        loop {
            let effects = self.carousel.borrow_mut().drain_effects();
            if effects.is_empty() {
                break;
            }
            for effect in effects {
                if let Err(e) = self.apply(effect) {
                    log::error!("{e}");
                }
            }
        }
        self.rearm_timer();
    }

    fn apply(self: &Rc<Self>, effect: Effect) -> Result<(), SliderError> {
        match effect {
            Effect::MoveTrack {
                offset_percent,
                motion,
            } => self.dom.move_track(offset_percent, motion),
            Effect::SyncIndicators(state) => self.dom.sync_indicators(&state),
            Effect::SetCursor { cursor } => self.dom.set_cursor(cursor),
            Effect::ResetSlideHeights => self.dom.reset_slide_heights(),
            Effect::AwaitImages { generation } => self.await_images(generation),
            Effect::MeasureHeights { generation } => {
                let heights = self.dom.measure_heights();
                self.carousel
                    .borrow_mut()
                    .apply_heights(generation, &heights);
                Ok(())
            }
            Effect::ApplyHeight { px } => self.dom.apply_height(px),
        }
    }

    /// Report every not-yet-complete image of run `generation` once it
    /// loads or fails
    fn await_images(self: &Rc<Self>, generation: u64) -> Result<(), SliderError> {
        self.image_listeners.borrow_mut().clear();

        let mut pending = 0;
        let mut attached = Vec::new();
        for image in self.dom.images() {
            if image.complete() {
                continue;
            }
            pending += 1;
            let settled = Rc::new(Cell::new(false));
            for event in ["load", "error"] {
                let weak = Rc::downgrade(self);
                let settled = Rc::clone(&settled);
                attached.push(Listener::attach(&image, event, true, move |_| {
                    if settled.replace(true) {
                        return;
                    }
                    if let Some(instance) = weak.upgrade() {
                        instance
                            .carousel
                            .borrow_mut()
                            .image_settled(generation, now_ms());
                        instance.flush();
                    }
                })?);
            }
        }
        self.image_listeners.borrow_mut().extend(attached);

        log::debug!("height run {generation}: waiting on {pending} images");
        self.carousel
            .borrow_mut()
            .images_expected(generation, pending, now_ms());
        Ok(())
    }

    fn clear_timer(&self) {
        if let (Some(handle), Some(window)) = (self.timer.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }

    fn rearm_timer(&self) {
        self.clear_timer();
        let Some(deadline) = self.carousel.borrow().next_deadline() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(closure) = tick.as_ref() else {
            return;
        };
        let delay = (deadline - now_ms()).ceil().max(0.0) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(handle) => self.timer.set(Some(handle)),
            Err(e) => log::error!("setTimeout failed: {e:?}"),
        }
    }
}
