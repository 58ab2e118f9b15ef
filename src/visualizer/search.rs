//! Binary search visualizer engine.
//!
//! Not pre-traced: each step applies one state transition, so the target
//! can change between steps. Setting the array auto-sorts it ascending,
//! exactly as the surrounding UI promises the step function.

use crate::error::{VizError, VizResult};
use crate::playback::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::trace::{self, SearchOutcome, SearchState};

use super::{Algorithm, StepReport, Visualizer};

/// Binary search visualizer engine.
#[derive(Debug, Clone)]
pub struct BinarySearchViz {
    input: Vec<f64>,
    target: Option<f64>,
    state: SearchState,
    found: Option<usize>,
    done: bool,
    // No pre-generated trace means no Playback; the engine carries the
    // timer flag and interval itself.
    playing: bool,
    interval_ms: u64,
}

impl BinarySearchViz {
    /// Create an empty binary search visualizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: Vec::new(),
            target: None,
            state: SearchState::new(0),
            found: None,
            done: false,
            playing: false,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    /// Set the value to search for. Clears any terminal outcome so the
    /// search can continue from the current window with the new target.
    pub fn set_target(&mut self, target: f64) -> VizResult<()> {
        if !target.is_finite() {
            return Err(VizError::non_finite("target"));
        }
        self.target = Some(target);
        self.done = false;
        self.found = None;
        Ok(())
    }

    /// The current target, if one has been supplied.
    #[must_use]
    pub const fn target(&self) -> Option<f64> {
        self.target
    }

    /// Live search bounds.
    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Index where the target was found, once terminal.
    #[must_use]
    pub const fn found_index(&self) -> Option<usize> {
        self.found
    }
}

impl Default for BinarySearchViz {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for BinarySearchViz {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BinarySearch
    }

    fn set_array(&mut self, input: &[f64]) -> VizResult<()> {
        trace::ensure_finite(input)?;
        let mut sorted = input.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.state = SearchState::new(sorted.len());
        self.input = sorted;
        self.found = None;
        self.done = false;
        self.playing = false;
        Ok(())
    }

    fn step_once(&mut self) -> VizResult<StepReport> {
        if self.done {
            return Ok(StepReport::Complete);
        }

        match trace::binary_search::step(self.state, &self.input, self.target)? {
            SearchOutcome::Found(index) => {
                self.found = Some(index);
                self.done = true;
                self.playing = false;
                Ok(StepReport::Advanced {
                    description: format!("Found {} at index {index}", self.input[index]),
                })
            }
            SearchOutcome::NotFound => {
                self.done = true;
                self.playing = false;
                let target = self.target.unwrap_or_default();
                Ok(StepReport::Advanced {
                    description: format!("{target} is not present in the array"),
                })
            }
            SearchOutcome::Narrowed(next) => {
                let mid = self.state.midpoint();
                #[allow(clippy::cast_sign_loss)]
                let probed = self.input[mid as usize];
                let half = if next.low > self.state.low {
                    "right"
                } else {
                    "left"
                };
                self.state = next;
                Ok(StepReport::Advanced {
                    description: format!(
                        "Compare: {probed} at index {mid}, continue in {half} half"
                    ),
                })
            }
        }
    }

    fn reset(&mut self) {
        self.state = SearchState::new(self.input.len());
        self.found = None;
        self.done = false;
        self.playing = false;
    }

    fn is_complete(&self) -> bool {
        self.done
    }

    fn array(&self) -> &[f64] {
        &self.input
    }

    fn step_count(&self) -> Option<usize> {
        // Step count depends on the target; nothing is pre-generated.
        None
    }

    fn view(&self) -> String {
        let target = self
            .target
            .map_or_else(|| "(none)".to_string(), |t| t.to_string());
        let found = self
            .found
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        format!(
            "Array: {}\nTarget: {target}\nWindow: low {}, high {}, mid {}\nFound: {found}",
            crate::trace::fmt_array(&self.input),
            self.state.low,
            self.state.high,
            self.state.midpoint()
        )
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn toggle_playing(&mut self) {
        if self.playing {
            self.playing = false;
        } else if !self.done {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    }

    fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
