//! Event listener handles
//!
//! A `Listener` keeps its closure alive for as long as it is attached and
//! removes it from the target when dropped.

use slider_core::SliderError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// An attached DOM event listener
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event` on `target`.
    ///
    /// Passive listeners cannot prevent the default action.
    pub fn attach<F>(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: F,
    ) -> Result<Self, SliderError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| SliderError::Dom(format!("addEventListener({event}): {e:?}")))?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_drop_removes_listener() {
        let document = web_sys::window().unwrap().document().unwrap();
        let target = document.create_element("div").unwrap();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let listener = Listener::attach(&target, "ping", true, move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);

        drop(listener);
        // a dispatch after drop must neither run nor reach a freed closure
        target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
