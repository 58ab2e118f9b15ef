//! Binary search step function.
//!
//! Unlike the sort generators, binary search is not pre-traced: the target
//! can change between ticks, so the search is an externally driven state
//! machine and the controller calls [`step`] once per tick or click. The
//! transition is forward-only; there is no step history to rewind.
//!
//! The array must be sorted ascending before searching begins. The
//! surrounding layer sorts on "set array"; the step function assumes it.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Live bounds of an in-progress binary search.
///
/// Invariant: `low <= high + 1`. The search is exhausted exactly when
/// `low > high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Inclusive lower bound of the active window.
    pub low: i64,
    /// Inclusive upper bound of the active window (`-1` once the window
    /// has collapsed past the left edge).
    pub high: i64,
}

impl SearchState {
    /// Initial state for an array of `len` elements: the whole window.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            low: 0,
            high: len as i64 - 1,
        }
    }

    /// Midpoint of the active window, or `-1` once exhausted.
    #[must_use]
    pub const fn midpoint(&self) -> i64 {
        if self.low <= self.high && self.high >= 0 {
            (self.low + self.high) / 2
        } else {
            -1
        }
    }

    /// Whether the window has collapsed without finding the target.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.low > self.high
    }
}

/// Result of one search transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Window narrowed; continue stepping from the new state.
    Narrowed(SearchState),
    /// Target located at this index. Terminal.
    Found(usize),
    /// Window exhausted; the target is not in the array. Terminal.
    NotFound,
}

/// Advance the search by one transition.
///
/// # Errors
///
/// - [`VizError::NoTarget`] if no target has been supplied.
/// - [`VizError::EmptyArray`] if the array is empty.
///
/// Both are precondition failures, distinct from the legitimate
/// [`SearchOutcome::NotFound`] terminal.
// Exact float equality is intended: the target and the elements come from
// the same parser, so a present target compares bitwise equal.
#[allow(clippy::float_cmp)]
pub fn step(
    state: SearchState,
    array: &[f64],
    target: Option<f64>,
) -> VizResult<SearchOutcome> {
    let Some(target) = target else {
        return Err(VizError::NoTarget);
    };
    if array.is_empty() {
        return Err(VizError::EmptyArray);
    }

    debug_assert!(
        array.windows(2).all(|w| w[0] <= w[1]),
        "binary search requires an ascending array"
    );
    debug_assert!(
        array.iter().all(|x| x.is_finite()) && target.is_finite(),
        "non-finite value in binary search"
    );

    if state.is_exhausted() {
        return Ok(SearchOutcome::NotFound);
    }

    let mid = state.midpoint();
    #[allow(clippy::cast_sign_loss)]
    let idx = mid as usize;

    if array[idx] == target {
        Ok(SearchOutcome::Found(idx))
    } else if array[idx] < target {
        Ok(SearchOutcome::Narrowed(SearchState {
            low: mid + 1,
            high: state.high,
        }))
    } else {
        Ok(SearchOutcome::Narrowed(SearchState {
            low: state.low,
            high: mid - 1,
        }))
    }
}
