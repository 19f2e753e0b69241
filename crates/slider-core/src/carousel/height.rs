//! Shared height measurement runs

use crate::effect::Effect;
use crate::timer::Task;
use super::Carousel;

impl Carousel {
    /// Start a measurement run, superseding any run in progress
    pub fn begin_height_measure(&mut self) -> u64 {
        let generation = self.height.begin();
        self.effects.push(Effect::ResetSlideHeights);
        self.effects.push(Effect::AwaitImages { generation });
        generation
    }

    /// The host found `pending` images that are not loaded yet
    pub fn images_expected(&mut self, generation: u64, pending: usize, now_ms: f64) {
        if self.height.expect(generation, pending) {
            self.schedule_measure(generation, now_ms);
        }
    }

    /// One image loaded or failed to load
    pub fn image_settled(&mut self, generation: u64, now_ms: f64) {
        if self.height.settle_one(generation) {
            self.schedule_measure(generation, now_ms);
        }
    }

    /// Heights of each slide's content element (`None` if a slide has none).
    ///
    /// Returns the applied height, or `None` if the run is stale or nothing
    /// was measurable, in which case the height is left as it was.
    pub fn apply_heights(&mut self, generation: u64, heights: &[Option<f64>]) -> Option<f64> {
        let Some(px) = self.height.record(generation, heights.iter().copied()) else {
            log::debug!("no measurable slide height (run {generation})");
            return None;
        };
        log::debug!("equal height applied: {px}px");
        self.effects.push(Effect::ApplyHeight { px });
        Some(px)
    }

    fn schedule_measure(&mut self, generation: u64, now_ms: f64) {
        self.timers.schedule(
            now_ms,
            self.config.height_settle_ms,
            Task::MeasureHeight { generation },
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SliderConfig;
    use crate::effect::Effect;
    use super::Carousel;

    fn mounted(n: usize) -> (Carousel, u64) {
        let mut carousel = Carousel::new(n, n, SliderConfig::default()).unwrap();
        carousel.mount(0.0);
        let generation = carousel
            .drain_effects()
            .into_iter()
            .find_map(|e| match e {
                Effect::AwaitImages { generation } => Some(generation),
                _ => None,
            })
            .unwrap();
        (carousel, generation)
    }

    #[test]
    fn test_measure_after_images_and_settle_delay() {
        let (mut carousel, gen) = mounted(3);
        carousel.images_expected(gen, 2, 0.0);
        carousel.image_settled(gen, 10.0);
        carousel.tick(500.0);
        assert!(!carousel
            .drain_effects()
            .contains(&Effect::MeasureHeights { generation: gen }));

        // second image errors out, still counts as ready
        carousel.image_settled(gen, 600.0);
        carousel.tick(699.0);
        assert!(!carousel
            .drain_effects()
            .contains(&Effect::MeasureHeights { generation: gen }));
        carousel.tick(700.0);
        assert!(carousel
            .drain_effects()
            .contains(&Effect::MeasureHeights { generation: gen }));
    }

    #[test]
    fn test_tallest_slide_wins() {
        let (mut carousel, gen) = mounted(3);
        carousel.images_expected(gen, 0, 0.0);
        carousel.tick(100.0);
        carousel.drain_effects();

        let applied = carousel.apply_heights(gen, &[Some(100.0), Some(250.0), Some(180.0)]);
        assert_eq!(applied, Some(250.0));
        assert_eq!(carousel.measured_height(), Some(250.0));
        assert_eq!(carousel.drain_effects(), vec![Effect::ApplyHeight { px: 250.0 }]);
    }

    #[test]
    fn test_nothing_measurable_leaves_height_unset() {
        let (mut carousel, gen) = mounted(2);
        assert_eq!(carousel.apply_heights(gen, &[None, None]), None);
        assert_eq!(carousel.measured_height(), None);
        assert!(carousel.drain_effects().is_empty());
    }

    #[test]
    fn test_resize_supersedes_run() {
        let (mut carousel, old) = mounted(2);
        carousel.images_expected(old, 1, 0.0);
        carousel.on_resize(50.0);
        let new = old + 1;

        carousel.image_settled(old, 60.0);
        carousel.tick(1000.0);
        assert!(!carousel
            .drain_effects()
            .iter()
            .any(|e| matches!(e, Effect::MeasureHeights { .. })));
        assert_eq!(carousel.apply_heights(old, &[Some(90.0)]), None);

        carousel.images_expected(new, 0, 1000.0);
        carousel.tick(1100.0);
        assert!(carousel
            .drain_effects()
            .contains(&Effect::MeasureHeights { generation: new }));
    }
}
