//! DOM contract of the theme markup

/// Class of every slider container
pub const CONTAINER_CLASS: &str = "mixed-layout-slider";

/// Selector of every slider container
pub const CONTAINER_SELECTOR: &str = ".mixed-layout-slider";

/// Slide list inside a container; its children are the slides
pub const LIST_SELECTOR: &str = ".product__media-list";

/// Dot indicators, in slide order
pub const DOT_SELECTOR: &str = ".mixed-layout-slider-dot";

/// Optional previous button
pub const PREV_SELECTOR: &str = ".slider-button--prev";

/// Optional next button
pub const NEXT_SELECTOR: &str = ".slider-button--next";

/// Optional 1-based counter
pub const COUNTER_SELECTOR: &str = ".slider-counter--current";

/// Primary content element of a slide, measured for the shared height
pub const MEDIA_SELECTOR: &str = ".product-media-container";

/// Class toggled on the dot of the current slide
pub const ACTIVE_CLASS: &str = "active";

/// Marker attribute guarding against double initialization
pub const INITIALIZED_ATTR: &str = "data-slider-initialized";

/// Optional JSON config override on a container
pub const CONFIG_ATTR: &str = "data-slider-config";

/// Attribute on `<html>` that turns on debug logging
pub const DEBUG_ATTR: &str = "data-slider-debug";

/// Custom property carrying the shared height
pub const HEIGHT_PROPERTY: &str = "--slides-max-height";

/// Class added to the container once a shared height is applied
pub const HEIGHT_CLASS: &str = "equal-height-initialized";

/// Delay between a matching DOM insertion and the rescan
pub const RESCAN_DELAY_MS: i32 = 100;
