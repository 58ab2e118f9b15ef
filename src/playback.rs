//! Playback controller for step traces.
//!
//! Owns an immutable step sequence, a cursor into it, and a playing flag.
//! The actual timer lives in the presentation layer (TUI tick loop); this
//! controller only answers "what is the current step" and "advance by one".
//!
//! Replacing the trace discards the cursor; resetting rewinds to step 0
//! without regenerating anything.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Slowest allowed tick interval.
pub const MAX_INTERVAL_MS: u64 = 3000;
/// Fastest allowed tick interval.
pub const MIN_INTERVAL_MS: u64 = 100;
/// Default tick interval.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Cursor-based playback over a generated trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playback<S> {
    steps: Vec<S>,
    cursor: usize,
    playing: bool,
    complete: bool,
    interval_ms: u64,
}

impl<S> Playback<S> {
    /// Create a controller over a freshly generated trace.
    #[must_use]
    pub fn new(steps: Vec<S>) -> Self {
        Self {
            steps,
            cursor: 0,
            playing: false,
            complete: false,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    /// Create a controller with a specific tick interval (clamped).
    #[must_use]
    pub fn with_interval(steps: Vec<S>, interval_ms: u64) -> Self {
        let mut playback = Self::new(steps);
        playback.set_interval_ms(interval_ms);
        playback
    }

    /// The step under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&S> {
        self.steps.get(self.cursor)
    }

    /// All steps, in order.
    #[must_use]
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Number of steps in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Zero-based cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Fraction of the trace consumed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            1.0
        } else {
            (self.cursor + 1) as f64 / self.steps.len() as f64
        }
    }

    /// Advance the cursor by one step.
    ///
    /// Returns `true` while there are steps left. Once the last step is
    /// reached the controller marks itself complete, stops playing, and
    /// returns `false`.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            true
        } else {
            self.complete = true;
            self.playing = false;
            false
        }
    }

    /// Rewind to step 0 without regenerating the trace.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.complete = false;
        self.playing = false;
    }

    /// Swap in a new trace, discarding the old cursor entirely.
    pub fn replace(&mut self, steps: Vec<S>) {
        self.steps = steps;
        self.reset();
    }

    /// Start automatic playback.
    pub fn play(&mut self) {
        if !self.complete {
            self.playing = true;
        }
    }

    /// Stop automatic playback, keeping the cursor where it is.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle between playing and paused.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Whether a timer should be ticking this controller.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the cursor has consumed the whole trace.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Set the tick interval, clamped to the supported range.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Current tick interval as a [`Duration`].
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
