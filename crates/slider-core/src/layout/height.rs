//! Uniform height computation
//!
//! A measurement run goes: `begin` → `expect(n images)` → `settle_one` per
//! loaded or failed image → settle delay → measure → `record`. Every run has
//! a generation so completions from a run superseded by a resize are ignored.

/// Tallest positive height, or `None` if nothing could be measured
pub fn max_height<I>(heights: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    heights
        .into_iter()
        .flatten()
        .filter(|h| h.is_finite() && *h > 0.0)
        .max_by(|a, b| a.total_cmp(b))
}

/// Tracks image readiness and the last applied height
#[derive(Clone, Debug, Default)]
pub struct HeightRun {
    generation: u64,
    /// Images still loading in the current run, `None` before `expect`
    pending: Option<usize>,
    measured: Option<f64>,
}

impl HeightRun {
    /// Create an idle run tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, superseding any earlier one
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.pending = None;
        self.generation
    }

    /// Check whether `generation` is the current run
    #[inline]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Declare how many images the run waits for.
    ///
    /// Returns true if the run is already ready (no images).
    pub fn expect(&mut self, generation: u64, images: usize) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = Some(images);
        images == 0
    }

    /// One image loaded or failed.
    ///
    /// Returns true exactly once per run, when the last image settles.
    pub fn settle_one(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match self.pending {
            Some(n) if n > 0 => {
                self.pending = Some(n - 1);
                n == 1
            }
            _ => false,
        }
    }

    /// Store the result of a measurement.
    ///
    /// Returns the shared height to apply, or `None` if the run is stale or
    /// no slide had a measurable content element.
    pub fn record<I>(&mut self, generation: u64, heights: I) -> Option<f64>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        if !self.is_current(generation) {
            return None;
        }
        self.pending = None;
        let height = max_height(heights)?;
        self.measured = Some(height);
        Some(height)
    }

    /// Last applied shared height
    #[inline]
    pub fn measured(&self) -> Option<f64> {
        self.measured
    }
}
