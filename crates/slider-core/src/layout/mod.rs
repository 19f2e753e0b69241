//! Layout builder
//!
//! Sizes the track and its slides, and turns per-slide content heights into
//! one shared height.

mod height;
mod track;

pub use height::{max_height, HeightRun};
pub use track::{translate_x, StyleDecl, TrackLayout};
