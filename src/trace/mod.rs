//! Step-trace generation.
//!
//! Each algorithm gets its own generator that turns a numeric array into an
//! ordered, replayable sequence of step records:
//!
//! - [`merge_sort`]: divide / compare / merge steps over a recursion tree
//! - [`quick_sort`]: pivot / partition / swap / complete steps over a
//!   Lomuto partition
//! - [`binary_search`]: an externally driven state machine (no pre-built
//!   trace, one transition per call)
//!
//! # Invariants
//!
//! Every snapshot inside a step is a value copy, independent of all other
//! steps, so a trace can be rendered and replayed in any order without
//! mutation bleed. Traces are immutable once generated: a changed input
//! array means a discarded trace and a fresh generation, never an
//! incremental update.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

pub mod binary_search;
pub mod merge_sort;
pub mod quick_sort;

pub use binary_search::{SearchOutcome, SearchState};
pub use merge_sort::{MergeStep, MergeStepKind};
pub use quick_sort::{QuickStep, QuickStepKind};

/// Sentinel index meaning "no cursor at this instant".
pub const UNSET: i64 = -1;

/// Verify that every value in `input` is finite.
///
/// The generators assume finite input (upstream parsing guarantees it);
/// this is the defensive gate for callers that bypass [`crate::parse`].
///
/// # Errors
///
/// Returns [`VizError::NonFinite`] naming the first offending index.
pub fn ensure_finite(input: &[f64]) -> VizResult<()> {
    match input.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(VizError::non_finite(format!("input[{i}]"))),
        None => Ok(()),
    }
}

/// Format a slice of numbers the way step descriptions display them:
/// `[8, 3, 1]`.
#[must_use]
pub fn fmt_array(values: &[f64]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Common accessors every step record exposes to renderers.
pub trait TraceStep: Serialize + for<'de> Deserialize<'de> + Clone {
    /// Human-readable description of this instant.
    fn description(&self) -> &str;

    /// Recursion depth at which the step occurred (display grouping only).
    fn depth(&self) -> usize;

    /// Multi-line text rendering of this instant for terminal display.
    fn view(&self) -> String;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_accepts_finite() {
        assert!(ensure_finite(&[1.0, -2.5, 0.0]).is_ok());
        assert!(ensure_finite(&[]).is_ok());
    }

    #[test]
    fn test_ensure_finite_names_first_offender() {
        let err = ensure_finite(&[1.0, f64::NAN, f64::INFINITY]).unwrap_err();
        assert!(err.to_string().contains("input[1]"));
    }

    #[test]
    fn test_fmt_array() {
        assert_eq!(fmt_array(&[8.0, 3.0, 1.0]), "[8, 3, 1]");
        assert_eq!(fmt_array(&[2.5]), "[2.5]");
        assert_eq!(fmt_array(&[]), "[]");
    }
}
