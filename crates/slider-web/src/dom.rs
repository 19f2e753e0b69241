//! DOM side of the carousel
//!
//! Discovery reads the container without touching it, so a container that
//! fails validation is left exactly as the theme rendered it. Building moves
//! the original slide elements into a new track.

use slider_core::{
    translate_x, Cursor, IndicatorState, Motion, SliderConfig, SliderError, StyleDecl,
    TrackLayout,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, HtmlImageElement};

use crate::constants::{
    ACTIVE_CLASS, COUNTER_SELECTOR, DOT_SELECTOR, HEIGHT_CLASS, HEIGHT_PROPERTY, LIST_SELECTOR,
    MEDIA_SELECTOR, NEXT_SELECTOR, PREV_SELECTOR,
};

fn dom_err(context: &str, e: JsValue) -> SliderError {
    SliderError::Dom(format!("{context}: {e:?}"))
}

/// Inline style of any element, HTML or not (`ElementCSSInlineStyle`)
fn inline_style(element: &Element) -> Result<CssStyleDeclaration, SliderError> {
    js_sys::Reflect::get(element, &JsValue::from_str("style"))
        .map_err(|e| dom_err("style", e))?
        .dyn_into::<CssStyleDeclaration>()
        .map_err(|_| SliderError::Dom(format!("<{}> has no inline style", element.tag_name())))
}

fn apply_styles(style: &CssStyleDeclaration, styles: &[StyleDecl]) -> Result<(), SliderError> {
    for decl in styles {
        style
            .set_property(decl.property, &decl.value)
            .map_err(|e| dom_err(decl.property, e))?;
    }
    Ok(())
}

fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Elements of a container that passed validation
pub(crate) struct SliderParts {
    container: HtmlElement,
    list: HtmlElement,
    slides: Vec<Element>,
    dots: Vec<HtmlElement>,
    prev: Option<Element>,
    next: Option<Element>,
    counter: Option<Element>,
}

impl SliderParts {
    /// Find the slide list, slides, dots and optional controls
    pub fn discover(container: &HtmlElement) -> Result<Self, SliderError> {
        let list = query(container, LIST_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(SliderError::MissingTrack)?;

        let dots: Vec<HtmlElement> = query_all(container, DOT_SELECTOR);
        if dots.is_empty() {
            return Err(SliderError::MissingDots);
        }

        // every element child is a slide; the list is emptied on build
        let children = list.children();
        let slides: Vec<Element> = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        if slides.is_empty() {
            return Err(SliderError::NoSlides);
        }

        Ok(Self {
            container: container.clone(),
            list,
            slides,
            dots,
            prev: query(container, PREV_SELECTOR),
            next: query(container, NEXT_SELECTOR),
            counter: query(container, COUNTER_SELECTOR),
        })
    }

    /// Number of slides found
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of dots found
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }
}

/// A built carousel: the original list now holds a single track
pub(crate) struct SliderDom {
    pub container: HtmlElement,
    pub list: HtmlElement,
    pub track: HtmlElement,
    pub slides: Vec<Element>,
    pub dots: Vec<HtmlElement>,
    pub prev: Option<Element>,
    pub next: Option<Element>,
    counter: Option<Element>,
    transition_css: String,
}

impl SliderDom {
    /// Wrap the slides in a track sized for `layout`
    pub fn build(
        parts: SliderParts,
        layout: &TrackLayout,
        config: &SliderConfig,
    ) -> Result<Self, SliderError> {
        let document = parts
            .container
            .owner_document()
            .ok_or_else(|| SliderError::Dom("container has no document".to_string()))?;

        apply_styles(&parts.list.style(), &layout.viewport_styles())?;

        let track = document
            .create_element("div")
            .map_err(|e| dom_err("createElement", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SliderError::Dom("track is not an HTMLElement".to_string()))?;
        apply_styles(&track.style(), &layout.track_styles(config))?;

        let slide_styles = layout.slide_styles();
        for slide in &parts.slides {
            apply_styles(&inline_style(slide)?, &slide_styles)?;
            track
                .append_child(slide)
                .map_err(|e| dom_err("appendChild(slide)", e))?;
        }

        parts.list.set_inner_html("");
        parts
            .list
            .append_child(&track)
            .map_err(|e| dom_err("appendChild(track)", e))?;

        parts
            .container
            .set_attribute("tabindex", "0")
            .map_err(|e| dom_err("tabindex", e))?;

        Ok(Self {
            container: parts.container,
            list: parts.list,
            track,
            slides: parts.slides,
            dots: parts.dots,
            prev: parts.prev,
            next: parts.next,
            counter: parts.counter,
            transition_css: config.transition_css(),
        })
    }

    /// Children the track holds right now
    #[inline]
    pub fn track_children(&self) -> usize {
        self.track.child_element_count() as usize
    }

    /// Current inline transform of the track
    pub fn transform(&self) -> String {
        self.track
            .style()
            .get_property_value("transform")
            .unwrap_or_default()
    }

    /// Translate the track. Immediate moves skip the CSS transition.
    pub fn move_track(&self, offset_percent: f64, motion: Motion) -> Result<(), SliderError> {
        let style = self.track.style();
        let transform = translate_x(offset_percent);
        match motion {
            Motion::Animated => style
                .set_property("transform", &transform)
                .map_err(|e| dom_err("transform", e)),
            Motion::Immediate => {
                style
                    .set_property("transition", "none")
                    .map_err(|e| dom_err("transition", e))?;
                style
                    .set_property("transform", &transform)
                    .map_err(|e| dom_err("transform", e))?;
                // reading layout forces a reflow so restoring the transition does not animate
                let _ = self.track.offset_height();
                style
                    .set_property("transition", &self.transition_css)
                    .map_err(|e| dom_err("transition", e))
            }
        }
    }

    /// Mark the current dot and update the counter
    pub fn sync_indicators(&self, state: &IndicatorState) -> Result<(), SliderError> {
        for (i, dot) in self.dots.iter().enumerate() {
            dot.class_list()
                .toggle_with_force(ACTIVE_CLASS, state.is_active(i))
                .map_err(|e| dom_err("classList.toggle", e))?;
        }
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&state.counter));
        }
        Ok(())
    }

    /// Set the cursor on the slide list
    pub fn set_cursor(&self, cursor: Cursor) -> Result<(), SliderError> {
        self.list
            .style()
            .set_property("cursor", cursor.as_css())
            .map_err(|e| dom_err("cursor", e))
    }

    /// Let every slide size to its content again
    pub fn reset_slide_heights(&self) -> Result<(), SliderError> {
        for slide in &self.slides {
            inline_style(slide)?
                .set_property("height", "auto")
                .map_err(|e| dom_err("height", e))?;
        }
        Ok(())
    }

    /// Every image inside the track
    pub fn images(&self) -> Vec<HtmlImageElement> {
        query_all(&self.track, "img")
    }

    /// Rendered height of each slide's content element
    pub fn measure_heights(&self) -> Vec<Option<f64>> {
        self.slides
            .iter()
            .map(|slide| {
                query(slide, MEDIA_SELECTOR)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    .map(|el| el.offset_height() as f64)
            })
            .collect()
    }

    /// Pin container, list and track to the shared height
    pub fn apply_height(&self, px: f64) -> Result<(), SliderError> {
        let value = format!("{px}px");
        self.container
            .style()
            .set_property(HEIGHT_PROPERTY, &value)
            .map_err(|e| dom_err(HEIGHT_PROPERTY, e))?;
        self.container
            .class_list()
            .add_1(HEIGHT_CLASS)
            .map_err(|e| dom_err("classList.add", e))?;
        self.list
            .style()
            .set_property("height", &value)
            .map_err(|e| dom_err("height", e))?;
        self.track
            .style()
            .set_property("height", &value)
            .map_err(|e| dom_err("height", e))
    }
}
