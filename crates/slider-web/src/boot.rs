//! Page-level discovery: initial scan, rescans on DOM insertion, registry

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord};

use crate::constants::{CONTAINER_CLASS, CONTAINER_SELECTOR, INITIALIZED_ATTR, RESCAN_DELAY_MS};
use crate::instance::SliderInstance;

type ObserverCallback = Closure<dyn FnMut(Array, MutationObserver)>;

thread_local! {
    static SLIDERS: RefCell<Vec<Rc<SliderInstance>>> = const { RefCell::new(Vec::new()) };
    static RESCAN_PENDING: Cell<bool> = const { Cell::new(false) };
    static OBSERVER: RefCell<Option<(MutationObserver, ObserverCallback)>> =
        const { RefCell::new(None) };
}

/// Run `f` over every mounted slider
pub(crate) fn with_sliders<R>(f: impl FnOnce(&[Rc<SliderInstance>]) -> R) -> R {
    SLIDERS.with(|s| f(&s.borrow()))
}

/// Mount every container on the page that is not yet initialized.
///
/// A container is marked initialized even when mounting fails, so a broken
/// container is reported once and never retried. Returns the number mounted.
pub fn initialize_sliders() -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(nodes) = document.query_selector_all(CONTAINER_SELECTOR) else {
        return 0;
    };
    log::debug!("found {} slider containers", nodes.length());

    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(container) = nodes
            .get(i)
            .and_then(|n| n.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        if container.has_attribute(INITIALIZED_ATTR) {
            continue;
        }

        match SliderInstance::mount(&container) {
            Ok(instance) => {
                SLIDERS.with(|s| s.borrow_mut().push(instance));
                mounted += 1;
            }
            Err(e) => log::warn!("slider not initialized: {e}"),
        }
        let _ = container.set_attribute(INITIALIZED_ATTR, "true");
    }

    if mounted > 0 {
        log::info!("{mounted} slider(s) initialized");
    }
    mounted
}

/// Run `f` once the document has been parsed
pub(crate) fn when_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("DOMContentLoaded listener failed: {e:?}");
    }
}

fn contains_slider(element: &Element) -> bool {
    element.class_list().contains(CONTAINER_CLASS)
        || matches!(element.query_selector(CONTAINER_SELECTOR), Ok(Some(_)))
}

fn records_add_slider(records: &Array) -> bool {
    records.iter().any(|record| {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            return false;
        };
        let added = record.added_nodes();
        (0..added.length())
            .filter_map(|i| added.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .any(|el| contains_slider(&el))
    })
}

/// Coalesce rescans requested within the delay window into one
fn schedule_rescan() {
    if RESCAN_PENDING.with(|p| p.replace(true)) {
        return;
    }
    let Some(window) = web_sys::window() else {
        RESCAN_PENDING.with(|p| p.set(false));
        return;
    };
    let callback = Closure::once_into_js(|| {
        RESCAN_PENDING.with(|p| p.set(false));
        initialize_sliders();
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        RESCAN_DELAY_MS,
    ) {
        RESCAN_PENDING.with(|p| p.set(false));
        log::error!("rescan timeout failed: {e:?}");
    }
}

/// Rescan whenever a slider container is inserted under `<body>`
pub(crate) fn observe_insertions() {
    if OBSERVER.with(|o| o.borrow().is_some()) {
        return;
    }
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let callback: ObserverCallback = Closure::wrap(Box::new(|records: Array, _: MutationObserver| {
        if records_add_slider(&records) {
            schedule_rescan();
        }
    }) as Box<dyn FnMut(Array, MutationObserver)>);

    let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            log::error!("MutationObserver unavailable: {e:?}");
            return;
        }
    };

    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    if let Err(e) = observer.observe_with_options(&body, &init) {
        log::error!("observe(body) failed: {e:?}");
        return;
    }

    OBSERVER.with(|o| *o.borrow_mut() = Some((observer, callback)));
}
