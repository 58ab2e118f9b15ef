//! Merge sort trace generator.
//!
//! Produces two passes over the same logical recursion tree: a divide pass
//! that records every non-trivial split, then a merge pass that records the
//! comparisons and appends of a standard recursive merge sort. The two
//! passes are independent; their concatenation is the trace.
//!
//! Ties favor the left run (`left[i] <= right[j]` takes left), which is
//! what makes the visualized sort stable.

use serde::{Deserialize, Serialize};

use super::{fmt_array, TraceStep, UNSET};

/// Kind of a merge sort step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStepKind {
    /// A non-trivial split of a run into two halves.
    Divide,
    /// A comparison between the current left and right cursors.
    Compare,
    /// An element appended to the merged run (or the opening of a merge).
    Merge,
}

/// One renderable instant of a merge sort.
///
/// All lists are snapshots owned by the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeStep {
    /// Step kind.
    pub kind: MergeStepKind,
    /// Left run at this instant.
    pub left: Vec<f64>,
    /// Right run at this instant.
    pub right: Vec<f64>,
    /// Elements merged so far.
    pub merged: Vec<f64>,
    /// Cursor into `left`, or `-1` when unset.
    pub left_cursor: i64,
    /// Cursor into `right`, or `-1` when unset.
    pub right_cursor: i64,
    /// Human-readable description.
    pub description: String,
    /// Recursion depth (display grouping only).
    pub depth: usize,
}

impl TraceStep for MergeStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn view(&self) -> String {
        let cursor = |c: i64| {
            if c == UNSET {
                String::new()
            } else {
                format!("  (cursor {c})")
            }
        };
        format!(
            "Left:   {}{}\nRight:  {}{}\nMerged: {}",
            fmt_array(&self.left),
            cursor(self.left_cursor),
            fmt_array(&self.right),
            cursor(self.right_cursor),
            fmt_array(&self.merged)
        )
    }
}

/// Generate the full merge sort trace for `input`.
///
/// Pure and deterministic. Inputs of length <= 1 are already sorted and
/// yield an empty trace. The caller guarantees finite values; a non-finite
/// value here is a programming error.
#[must_use]
pub fn trace(input: &[f64]) -> Vec<MergeStep> {
    debug_assert!(
        input.iter().all(|x| x.is_finite()),
        "non-finite value in merge sort input"
    );

    if input.len() <= 1 {
        return Vec::new();
    }

    let mut steps = divide_pass(input, 0);
    let (_, merge_steps) = sort_pass(input, 0);
    steps.extend(merge_steps);
    steps
}

/// Record every non-trivial split of `run`, depth-first, left before right.
fn divide_pass(run: &[f64], depth: usize) -> Vec<MergeStep> {
    if run.len() <= 1 {
        return Vec::new();
    }

    let mid = run.len() / 2;
    let (left, right) = run.split_at(mid);

    let mut steps = vec![MergeStep {
        kind: MergeStepKind::Divide,
        left: left.to_vec(),
        right: right.to_vec(),
        merged: Vec::new(),
        left_cursor: UNSET,
        right_cursor: UNSET,
        description: format!(
            "Divide: {} \u{2192} {} + {}",
            fmt_array(run),
            fmt_array(left),
            fmt_array(right)
        ),
        depth,
    }];

    steps.extend(divide_pass(left, depth + 1));
    steps.extend(divide_pass(right, depth + 1));
    steps
}

/// Recursive merge sort that returns the sorted run alongside the merge
/// steps it produced. Each call owns its own step list; the caller
/// concatenates in recursion order.
fn sort_pass(run: &[f64], depth: usize) -> (Vec<f64>, Vec<MergeStep>) {
    if run.len() <= 1 {
        return (run.to_vec(), Vec::new());
    }

    let mid = run.len() / 2;
    let (left, right) = run.split_at(mid);

    let (sorted_left, mut steps) = sort_pass(left, depth + 1);
    let (sorted_right, right_steps) = sort_pass(right, depth + 1);
    steps.extend(right_steps);

    let (merged, merge_steps) = merge(&sorted_left, &sorted_right, depth);
    steps.extend(merge_steps);
    (merged, steps)
}

/// Merge two sorted runs, recording one opening step, a compare/merge pair
/// per comparison, and one merge step per flushed remainder element.
fn merge(left: &[f64], right: &[f64], depth: usize) -> (Vec<f64>, Vec<MergeStep>) {
    let mut merged: Vec<f64> = Vec::with_capacity(left.len() + right.len());
    let mut steps = Vec::new();
    let mut i = 0usize;
    let mut j = 0usize;

    steps.push(MergeStep {
        kind: MergeStepKind::Merge,
        left: left.to_vec(),
        right: right.to_vec(),
        merged: Vec::new(),
        left_cursor: 0,
        right_cursor: 0,
        description: format!("Merge: {} + {}", fmt_array(left), fmt_array(right)),
        depth,
    });

    while i < left.len() && j < right.len() {
        steps.push(MergeStep {
            kind: MergeStepKind::Compare,
            left: left.to_vec(),
            right: right.to_vec(),
            merged: merged.clone(),
            left_cursor: i as i64,
            right_cursor: j as i64,
            description: format!("Compare: {} vs {}", left[i], right[j]),
            depth,
        });

        // Left bias on ties keeps the sort stable.
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }

        steps.push(MergeStep {
            kind: MergeStepKind::Merge,
            left: left.to_vec(),
            right: right.to_vec(),
            merged: merged.clone(),
            left_cursor: i as i64,
            right_cursor: j as i64,
            description: format!("Merged: {}", fmt_array(&merged)),
            depth,
        });
    }

    while i < left.len() {
        merged.push(left[i]);
        i += 1;
        steps.push(MergeStep {
            kind: MergeStepKind::Merge,
            left: left.to_vec(),
            right: right.to_vec(),
            merged: merged.clone(),
            left_cursor: i as i64,
            right_cursor: j as i64,
            description: format!("Add remaining: {}", left[i - 1]),
            depth,
        });
    }

    while j < right.len() {
        merged.push(right[j]);
        j += 1;
        steps.push(MergeStep {
            kind: MergeStepKind::Merge,
            left: left.to_vec(),
            right: right.to_vec(),
            merged: merged.clone(),
            left_cursor: i as i64,
            right_cursor: j as i64,
            description: format!("Add remaining: {}", right[j - 1]),
            depth,
        });
    }

    (merged, steps)
}
