//! Track and slide sizing

use crate::config::SliderConfig;
use crate::error::SliderError;

/// One inline style declaration, e.g. `("width", "400%")`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: String,
}

impl StyleDecl {
    /// Create a declaration
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// CSS `translateX` transform for an offset in percent
pub fn translate_x(offset_percent: f64) -> String {
    format!("translateX({offset_percent}%)")
}

/// Geometry of a track holding `slide_count` slides side by side
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayout {
    slide_count: usize,
}

impl TrackLayout {
    /// Create the layout. Zero slides cannot be laid out.
    pub fn new(slide_count: usize) -> Result<Self, SliderError> {
        if slide_count == 0 {
            return Err(SliderError::NoSlides);
        }
        Ok(Self { slide_count })
    }

    /// Number of slides
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Track width as a percentage of the viewport (N × 100)
    #[inline]
    pub fn track_width_percent(&self) -> f64 {
        self.slide_count as f64 * 100.0
    }

    /// Slide width as a percentage of the track (100 / N)
    #[inline]
    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.slide_count as f64
    }

    /// Horizontal translation revealing slide `index`
    #[inline]
    pub fn offset_percent(&self, index: usize) -> f64 {
        // written as a subtraction so slide 0 yields +0.0, not -0.0
        0.0 - index as f64 * self.slide_width_percent()
    }

    /// CSS transform for slide `index`
    pub fn transform_css(&self, index: usize) -> String {
        translate_x(self.offset_percent(index))
    }

    /// Styles for the original list element, which becomes the viewport
    pub fn viewport_styles(&self) -> Vec<StyleDecl> {
        vec![
            StyleDecl::new("display", "block"),
            StyleDecl::new("overflow", "hidden"),
            StyleDecl::new("width", "100%"),
            StyleDecl::new("position", "relative"),
            StyleDecl::new("height", "auto"),
        ]
    }

    /// Styles for the track wrapping all slides
    pub fn track_styles(&self, config: &SliderConfig) -> Vec<StyleDecl> {
        vec![
            StyleDecl::new("display", "flex"),
            StyleDecl::new("width", format!("{}%", self.track_width_percent())),
            StyleDecl::new("transition", config.transition_css()),
            StyleDecl::new("height", "100%"),
            StyleDecl::new("will-change", "transform"),
            StyleDecl::new("position", "relative"),
        ]
    }

    /// Styles applied to every slide
    pub fn slide_styles(&self) -> Vec<StyleDecl> {
        let width = format!("{}%", self.slide_width_percent());
        vec![
            StyleDecl::new("width", width.clone()),
            StyleDecl::new("flex", "0 0 auto"),
            StyleDecl::new("margin", "0"),
            StyleDecl::new("padding", "0"),
            StyleDecl::new("box-sizing", "border-box"),
            StyleDecl::new("min-width", width),
            StyleDecl::new("display", "block"),
            StyleDecl::new("position", "relative"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(styles: &'a [StyleDecl], property: &str) -> Option<&'a str> {
        styles
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    #[test]
    fn test_zero_slides_rejected() {
        assert_eq!(TrackLayout::new(0), Err(SliderError::NoSlides));
    }

    #[test]
    fn test_widths() {
        let layout = TrackLayout::new(4).unwrap();
        assert!((layout.track_width_percent() - 400.0).abs() < 0.001);
        assert!((layout.slide_width_percent() - 25.0).abs() < 0.001);

        let styles = layout.track_styles(&SliderConfig::default());
        assert_eq!(value(&styles, "width"), Some("400%"));
        assert_eq!(value(&styles, "transition"), Some("transform 0.3s ease-in-out"));

        let styles = layout.slide_styles();
        assert_eq!(value(&styles, "width"), Some("25%"));
        assert_eq!(value(&styles, "min-width"), Some("25%"));
    }

    #[test]
    fn test_offsets() {
        let layout = TrackLayout::new(5).unwrap();
        for i in 0..5 {
            let expected = -(i as f64) * 20.0;
            assert!((layout.offset_percent(i) - expected).abs() < 0.001);
        }
        assert_eq!(layout.transform_css(0), "translateX(0%)");
        assert_eq!(layout.transform_css(2), "translateX(-40%)");
    }

    #[test]
    fn test_single_slide() {
        let layout = TrackLayout::new(1).unwrap();
        assert!((layout.offset_percent(0) - 0.0).abs() < 0.001);
        assert_eq!(value(&layout.viewport_styles(), "overflow"), Some("hidden"));
    }
}
