//! Error types for the slider
//!
//! Construction errors abort a single container. Navigation errors reject a
//! single request. Neither is ever surfaced to the page.

/// Errors that prevent a carousel from being built.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SliderError {
    /// The container has no slide list element.
    #[error("missing slide list element")]
    MissingTrack,

    /// The container has no dot indicators.
    #[error("missing dot indicators")]
    MissingDots,

    /// The slide list element has no children.
    #[error("no slides found")]
    NoSlides,

    /// Per-container configuration could not be parsed or is inconsistent.
    #[error("invalid slider config: {0}")]
    Config(String),

    /// A DOM call failed while building or wiring the carousel.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Errors that reject a single navigation request.
///
/// A rejected request leaves index, offset and indicators untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Target index is outside `0..count`.
    #[error("invalid slide index {index} (slide count {count})")]
    InvalidIndex { index: usize, count: usize },

    /// The track no longer holds the slides it was built with.
    #[error("track holds {found} children, expected {expected}")]
    StructureMismatch { expected: usize, found: usize },
}
