//! # algoviz
//!
//! Step-trace engine for classic algorithm visualization.
//!
//! Three trace generators turn a numeric array into an ordered, replayable
//! sequence of renderable steps:
//! - Merge sort: divide / compare / merge steps over a recursion tree
//! - Quick sort: pivot / partition / swap / complete steps (Lomuto scheme)
//! - Binary search: a forward-only state machine stepped one transition
//!   at a time
//!
//! A playback controller walks a trace under a configurable timer; the
//! visualizer engines glue parsing, validation, and regeneration together
//! for the CLI and the optional ratatui TUI.
//!
//! ## Example
//!
//! ```rust
//! use algoviz::prelude::*;
//!
//! let steps = algoviz::trace::merge_sort::trace(&[8.0, 3.0, 1.0, 6.0, 4.0]);
//! let mut playback = Playback::new(steps);
//! assert!(playback.advance());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod parse;
pub mod playback;
pub mod rng;
pub mod trace;
pub mod visualizer;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::error::{VizError, VizResult};
    pub use crate::parse::parse_numbers;
    pub use crate::playback::Playback;
    pub use crate::trace::{
        MergeStep, MergeStepKind, QuickStep, QuickStepKind, SearchOutcome, SearchState,
    };
    pub use crate::visualizer::{
        Algorithm, BinarySearchViz, MergeSortViz, QuickSortViz, StepReport, Visualizer,
    };
}

/// Crate version embedded at build time.
#[must_use]
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
