//! Transform-based product media slider
//!
//! This crate provides the browser-independent core of the storefront
//! media carousel:
//! - Track layout (N slides side by side, uniform height from the tallest slide)
//! - Navigation state machine (current index, in-transit guard, wraparound)
//! - Gesture recognition for touch, mouse drag, wheel and keyboard input
//! - Dot and counter projection of the current index
//!
//! ## Architecture
//!
//! - [`layout`]: Track and slide sizing, height probing
//! - [`nav`]: Navigation state machine
//! - [`input`]: Gesture recognisers and input results
//! - [`timer`]: Cancellable deadline queue driven by an injected clock
//! - [`sync`]: Dot and counter projection
//!
//! The [`Carousel`] ties these together and records every DOM mutation it
//! wants as an [`Effect`]. The host drains effects after each call and arms a
//! single timeout for [`Carousel::next_deadline`].
//!
//! ## Example
//!
//! ```rust
//! use slider_core::{Carousel, SliderConfig};
//!
//! let mut carousel = Carousel::new(4, 4, SliderConfig::default()).unwrap();
//! carousel.mount(0.0);
//! carousel.tick(1000.0);
//!
//! carousel.next(1000.0, 4).unwrap();
//! assert_eq!(carousel.current_index(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Every time-dependent call takes `now_ms`
//! 3. **Effects Out**: The core never touches the DOM, it describes what changed

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod nav;
pub mod sync;
pub mod timer;

mod carousel;
mod effect;
mod snapshot;

pub use carousel::Carousel;
pub use config::SliderConfig;
pub use effect::Effect;
pub use error::{NavError, SliderError};
pub use input::{Cursor, Direction, DragTracker, InputResult, SwipeTracker, WheelThrottle};
pub use layout::{translate_x, HeightRun, StyleDecl, TrackLayout};
pub use nav::{Motion, NavOutcome, Navigator, Phase};
pub use snapshot::CarouselSnapshot;
pub use sync::IndicatorState;
pub use timer::{Task, Timer, TimerId, Timers};

/// Duration of the animated track transition in milliseconds
pub use config::TRANSITION_DURATION_MS;

/// Delay before the backstop task forces the carousel back to idle
pub use config::BACKSTOP_MS;

/// Minimum horizontal travel (exclusive) for a swipe or drag to navigate
pub use config::SWIPE_THRESHOLD_PX;
