//! Mouse drag recognition

use serde::Serialize;

use super::Direction;

/// Cursor affordance on the slide list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// Resting: the track can be grabbed
    Grab,
    /// A drag is in progress
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Current mouse drag state
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    /// X where the button went down, while dragging
    start_x: Option<f64>,
}

impl DragTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// `mousedown` at `x`
    pub fn press(&mut self, x: f64) -> Cursor {
        self.start_x = Some(x);
        Cursor::Grabbing
    }

    /// `mouseup` at `x`.
    ///
    /// Returns `None` if no drag was in progress, otherwise the cursor to
    /// restore and the direction if the drag travelled far enough.
    pub fn release(&mut self, x: f64, threshold: f64) -> Option<(Cursor, Option<Direction>)> {
        let start = self.start_x.take()?;
        Some((Cursor::Grab, Direction::from_travel(start - x, threshold)))
    }

    /// `mouseleave`: abandon the drag without navigating
    pub fn cancel(&mut self) -> Option<Cursor> {
        self.start_x.take().map(|_| Cursor::Grab)
    }
}
