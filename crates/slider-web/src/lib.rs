//! Browser bindings for the product media slider
//!
//! Mounts a [`slider_core::Carousel`] on every `.mixed-layout-slider`
//! container on the page and keeps it mounted for the page's lifetime:
//! - `boot`: initial scan after DOM parsing, rescans on DOM insertion
//! - `instance`: event wiring, effect application and the tick timeout
//! - `dom`: container validation and the track the slides are moved into
//!
//! All state lives in the core; this crate only translates between browser
//! events and DOM mutations.

mod boot;
mod constants;
mod dom;
mod instance;
mod listener;
mod util;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub use constants::*;
pub use util::{init_logger, now_ms};

/// Module entry point: install the panic hook and logger, then mount every
/// slider once the document is parsed
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let debug = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .is_some_and(|html| html.has_attribute(DEBUG_ATTR));
    init_logger(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    boot::when_ready(|| {
        boot::initialize_sliders();
        watch_sliders();
    });
}

/// Mount every container not yet initialized. Returns the number mounted.
#[wasm_bindgen(js_name = initSliders)]
pub fn init_sliders() -> u32 {
    boot::initialize_sliders()
}

/// Rescan whenever a slider container is added to the page. Called by
/// `start`; repeated calls are no-ops.
#[wasm_bindgen(js_name = watchSliders)]
pub fn watch_sliders() {
    boot::observe_insertions();
}

/// JSON array describing every mounted slider
#[wasm_bindgen(js_name = debugSliders)]
pub fn debug_sliders() -> String {
    let entries: Vec<serde_json::Value> = boot::with_sliders(|sliders| {
        sliders.iter().map(|slider| slider.report()).collect()
    });
    let json = serde_json::Value::Array(entries).to_string();
    log::debug!("slider state: {json}");
    json
}

/// Force every slider back to idle. Returns how many were mid-transition.
#[wasm_bindgen(js_name = resetSliderTransitions)]
pub fn reset_slider_transitions() -> u32 {
    let reset = boot::with_sliders(|sliders| {
        sliders
            .iter()
            .filter(|slider| slider.reset_transition())
            .count()
    });
    if reset > 0 {
        log::info!("reset {reset} slider transition(s)");
    }
    reset as u32
}
