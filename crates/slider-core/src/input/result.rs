//! Input result type

use serde::Serialize;

/// What the host should do with the browser event after handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Handled; prevent the default action
    Handled,
    /// Handled; prevent the default action and stop propagation
    Captured,
    /// Not handled (pass through)
    Unhandled,
}

impl InputResult {
    /// Check if the default action should be prevented
    #[inline]
    pub fn prevent_default(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Captured)
    }

    /// Check if propagation should stop
    #[inline]
    pub fn stop_propagation(&self) -> bool {
        matches!(self, InputResult::Captured)
    }
}
