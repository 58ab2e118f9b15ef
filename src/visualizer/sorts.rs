//! Sort visualizer engines.
//!
//! Both sorting algorithms pre-trace: setting the array builds the whole
//! step sequence up front and playback just walks the cursor. The engine
//! is generic over the step type; only the generator differs.

use crate::error::{VizError, VizResult};
use crate::playback::Playback;
use crate::trace::{self, MergeStep, QuickStep, TraceStep};

use super::{Algorithm, StepReport, Visualizer};

/// Pre-traced sort engine: an original array plus a [`Playback`] over the
/// generated steps.
#[derive(Debug, Clone)]
pub struct SortViz<S> {
    algorithm: Algorithm,
    generator: fn(&[f64]) -> Vec<S>,
    original: Vec<f64>,
    playback: Playback<S>,
}

/// Merge sort visualizer engine.
pub type MergeSortViz = SortViz<MergeStep>;

/// Quick sort visualizer engine.
pub type QuickSortViz = SortViz<QuickStep>;

impl MergeSortViz {
    /// Create an empty merge sort visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(Algorithm::MergeSort, trace::merge_sort::trace)
    }
}

impl Default for MergeSortViz {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickSortViz {
    /// Create an empty quick sort visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(Algorithm::QuickSort, trace::quick_sort::trace)
    }
}

impl Default for QuickSortViz {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TraceStep> SortViz<S> {
    fn with_generator(algorithm: Algorithm, generator: fn(&[f64]) -> Vec<S>) -> Self {
        Self {
            algorithm,
            generator,
            original: Vec::new(),
            playback: Playback::new(Vec::new()),
        }
    }

    /// The step under the playback cursor.
    #[must_use]
    pub fn current_step(&self) -> Option<&S> {
        self.playback.current()
    }

    /// The playback controller (interval, progress, play state).
    #[must_use]
    pub const fn playback(&self) -> &Playback<S> {
        &self.playback
    }

    /// Mutable access to the playback controller.
    pub fn playback_mut(&mut self) -> &mut Playback<S> {
        &mut self.playback
    }
}

impl<S: TraceStep> Visualizer for SortViz<S> {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn set_array(&mut self, input: &[f64]) -> VizResult<()> {
        trace::ensure_finite(input)?;
        self.original = input.to_vec();
        self.playback.replace((self.generator)(input));
        Ok(())
    }

    fn step_once(&mut self) -> VizResult<StepReport> {
        if self.original.is_empty() {
            return Err(VizError::EmptyArray);
        }
        if self.playback.is_complete() || self.playback.is_empty() {
            return Ok(StepReport::Complete);
        }

        // Report the step under the cursor, then move past it; the last
        // step stays visible after completion, as the UI expects.
        let description = self
            .playback
            .current()
            .map(|s| s.description().to_string())
            .unwrap_or_default();
        self.playback.advance();
        Ok(StepReport::Advanced { description })
    }

    fn reset(&mut self) {
        self.playback.reset();
    }

    fn is_complete(&self) -> bool {
        self.playback.is_complete() || (self.playback.is_empty() && !self.original.is_empty())
    }

    fn array(&self) -> &[f64] {
        &self.original
    }

    fn step_count(&self) -> Option<usize> {
        Some(self.playback.len())
    }

    fn view(&self) -> String {
        self.playback.current().map_or_else(
            || "(no trace: set an array first)".to_string(),
            TraceStep::view,
        )
    }

    fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    fn toggle_playing(&mut self) {
        self.playback.toggle();
    }

    fn pause(&mut self) {
        self.playback.pause();
    }

    fn set_interval_ms(&mut self, interval_ms: u64) {
        self.playback.set_interval_ms(interval_ms);
    }

    fn interval_ms(&self) -> u64 {
        self.playback.interval_ms()
    }
}
