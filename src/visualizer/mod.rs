//! Visualizer engines.
//!
//! One engine per algorithm behind a common [`Visualizer`] trait, so the
//! CLI and TUI drive every algorithm through the same surface: set an
//! array, step once, reset, ask for completion. The engines own the glue
//! the step traces do not: input validation, regeneration on array change,
//! and (for binary search) the externally supplied target.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

mod search;
mod sorts;

pub use search::BinarySearchViz;
pub use sorts::{MergeSortViz, QuickSortViz, SortViz};

/// Which algorithm a visualizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Merge sort (divide / compare / merge trace).
    MergeSort,
    /// Quick sort (pivot / partition / swap / complete trace).
    QuickSort,
    /// Binary search (forward-only state machine).
    BinarySearch,
}

impl Algorithm {
    /// Parse a CLI-style algorithm name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown names.
    pub fn parse(name: &str) -> VizResult<Self> {
        match name {
            "merge-sort" | "merge" => Ok(Self::MergeSort),
            "quick-sort" | "quick" => Ok(Self::QuickSort),
            "binary-search" | "search" => Ok(Self::BinarySearch),
            other => Err(VizError::config(format!(
                "unknown algorithm '{other}' (expected merge-sort, quick-sort, or binary-search)"
            ))),
        }
    }

    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MergeSort => "merge-sort",
            Self::QuickSort => "quick-sort",
            Self::BinarySearch => "binary-search",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single visualizer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReport {
    /// The visualizer advanced; `description` narrates the instant.
    Advanced {
        /// Human-readable description of the step just taken.
        description: String,
    },
    /// Nothing left to show.
    Complete,
}

/// Uniform driving surface for all three algorithm engines.
pub trait Visualizer {
    /// Algorithm this engine visualizes.
    fn algorithm(&self) -> Algorithm;

    /// Replace the input array, discarding any trace or search progress.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::NonFinite`] if the input contains a NaN or
    /// infinity (defense for callers that bypass the parser).
    fn set_array(&mut self, input: &[f64]) -> VizResult<()>;

    /// Advance by one step.
    ///
    /// # Errors
    ///
    /// Returns a user-input error ([`VizError::EmptyArray`],
    /// [`VizError::NoTarget`]) when a precondition is missing.
    fn step_once(&mut self) -> VizResult<StepReport>;

    /// Rewind to the beginning without regenerating.
    fn reset(&mut self);

    /// Whether the visualization has run to its end.
    fn is_complete(&self) -> bool;

    /// The array as the visualizer holds it (sorted for binary search).
    fn array(&self) -> &[f64];

    /// Total number of pre-generated steps, if the algorithm pre-traces.
    fn step_count(&self) -> Option<usize>;

    /// Multi-line text rendering of the current state for terminal display.
    fn view(&self) -> String;

    /// Whether a timer should currently be advancing this engine.
    fn is_playing(&self) -> bool;

    /// Toggle between playing and paused. No effect once complete.
    fn toggle_playing(&mut self);

    /// Stop automatic playback, keeping the position where it is.
    fn pause(&mut self);

    /// Set the tick interval, clamped to the supported bounds.
    fn set_interval_ms(&mut self, interval_ms: u64);

    /// Current tick interval in milliseconds.
    fn interval_ms(&self) -> u64;

    /// Current tick interval as a [`Duration`].
    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }
}
