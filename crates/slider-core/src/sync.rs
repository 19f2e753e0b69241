//! Dot and counter projection

use serde::Serialize;

/// What the dots and the counter should show for one index
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorState {
    /// Index of the current slide
    pub active: usize,
    /// One flag per dot; exactly the dot at `active` is set
    pub dots: Vec<bool>,
    /// 1-based counter text
    pub counter: String,
}

impl IndicatorState {
    /// Project `index` onto `dot_count` dots
    pub fn project(index: usize, dot_count: usize) -> Self {
        Self {
            active: index,
            dots: (0..dot_count).map(|i| i == index).collect(),
            counter: (index + 1).to_string(),
        }
    }

    /// Check whether dot `i` is marked active
    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        self.dots.get(i).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active() {
        let state = IndicatorState::project(2, 4);
        assert_eq!(state.dots, vec![false, false, true, false]);
        assert_eq!(state.counter, "3");
        assert!(state.is_active(2));
        assert!(!state.is_active(0));
        assert!(!state.is_active(9));
    }

    #[test]
    fn test_fewer_dots_than_slides() {
        let state = IndicatorState::project(3, 2);
        assert_eq!(state.dots, vec![false, false]);
        assert_eq!(state.counter, "4");
    }
}
