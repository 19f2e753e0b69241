//! Timing and gesture configuration
//!
//! Every value here is UI-feel tuning. Containers may override any subset
//! with a JSON object in their config attribute, e.g.
//! `{"transitionMs": 400, "swipeThresholdPx": 30}`.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Duration of the animated track transition in milliseconds
pub const TRANSITION_DURATION_MS: u32 = 300;

/// Extra time after the animation before the carousel is idle again
pub const SETTLE_MARGIN_MS: u32 = 50;

/// Settle delay after an immediate (non-animated) move
pub const IMMEDIATE_SETTLE_MS: u32 = 50;

/// Delay before the backstop task forces the carousel back to idle
pub const BACKSTOP_MS: u32 = 1000;

/// Minimum horizontal travel (exclusive) for a swipe or drag to navigate
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Minimum spacing between two wheel-driven moves
pub const WHEEL_THROTTLE_MS: u32 = 300;

/// Layout settle delay between image readiness and height measurement
pub const HEIGHT_SETTLE_MS: u32 = 100;

/// Delay of the second first-paint resync after mounting
pub const INITIAL_RESYNC_MS: u32 = 200;

/// Carousel configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Animated transition duration
    pub transition_ms: u32,
    /// Margin added to `transition_ms` before settling
    pub settle_margin_ms: u32,
    /// Settle delay after an immediate move
    pub immediate_settle_ms: u32,
    /// Backstop delay
    pub backstop_ms: u32,
    /// Swipe / drag threshold in CSS pixels
    pub swipe_threshold_px: f64,
    /// Wheel throttle window
    pub wheel_throttle_ms: u32,
    /// Height measurement settle delay
    pub height_settle_ms: u32,
    /// First-paint resync delay
    pub initial_resync_ms: u32,
    /// CSS timing function of the track transition
    pub easing: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            transition_ms: TRANSITION_DURATION_MS,
            settle_margin_ms: SETTLE_MARGIN_MS,
            immediate_settle_ms: IMMEDIATE_SETTLE_MS,
            backstop_ms: BACKSTOP_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            wheel_throttle_ms: WHEEL_THROTTLE_MS,
            height_settle_ms: HEIGHT_SETTLE_MS,
            initial_resync_ms: INITIAL_RESYNC_MS,
            easing: "ease-in-out".to_string(),
        }
    }
}

impl SliderConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, SliderError> {
        let config: SliderConfig =
            serde_json::from_str(json).map_err(|e| SliderError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the in-transit guarantees
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.transition_ms == 0 {
            return Err(SliderError::Config("transitionMs must be positive".to_string()));
        }
        if self.immediate_settle_ms == 0 {
            return Err(SliderError::Config("immediateSettleMs must be positive".to_string()));
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px >= 0.0) {
            return Err(SliderError::Config(
                "swipeThresholdPx must be a non-negative number".to_string(),
            ));
        }
        let slowest_settle = self.animated_settle_ms().max(self.immediate_settle_ms);
        if self.backstop_ms <= slowest_settle {
            return Err(SliderError::Config(format!(
                "backstopMs ({}) must exceed the settle delay ({})",
                self.backstop_ms, slowest_settle
            )));
        }
        if self.easing.trim().is_empty() {
            return Err(SliderError::Config("easing must not be empty".to_string()));
        }
        Ok(())
    }

    /// Settle delay after an animated move
    #[inline]
    pub fn animated_settle_ms(&self) -> u32 {
        self.transition_ms.saturating_add(self.settle_margin_ms)
    }

    /// CSS `transition` value for the track, e.g. `transform 0.3s ease-in-out`
    pub fn transition_css(&self) -> String {
        format!(
            "transform {}s {}",
            self.transition_ms as f64 / 1000.0,
            self.easing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.transition_ms, 300);
        assert_eq!(config.animated_settle_ms(), 350);
        assert_eq!(config.backstop_ms, 1000);
        assert!((config.swipe_threshold_px - 50.0).abs() < 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_transition_css() {
        assert_eq!(SliderConfig::default().transition_css(), "transform 0.3s ease-in-out");

        let config = SliderConfig {
            transition_ms: 450,
            easing: "linear".to_string(),
            ..Default::default()
        };
        assert_eq!(config.transition_css(), "transform 0.45s linear");
    }

    #[test]
    fn test_partial_json_override() {
        let config = SliderConfig::from_json(r#"{"transitionMs": 400, "swipeThresholdPx": 30}"#)
            .unwrap();
        assert_eq!(config.transition_ms, 400);
        assert!((config.swipe_threshold_px - 30.0).abs() < 0.001);
        // untouched fields keep their defaults
        assert_eq!(config.wheel_throttle_ms, WHEEL_THROTTLE_MS);
        assert_eq!(config.easing, "ease-in-out");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = SliderConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));
    }

    #[test]
    fn test_backstop_must_exceed_settle() {
        let err = SliderConfig::from_json(r#"{"transitionMs": 900, "backstopMs": 900}"#)
            .unwrap_err();
        assert!(matches!(err, SliderError::Config(_)));
    }

    #[test]
    fn test_zero_transition_rejected() {
        let config = SliderConfig {
            transition_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
