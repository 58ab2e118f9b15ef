//! Quick sort trace generator.
//!
//! Lomuto partition with the last element of the active subrange as pivot.
//! The generator works on a private copy of the input; the caller's slice
//! is never mutated. Every step snapshots the entire working array, not
//! just the touched subrange, so a renderer can show global progress.

use serde::{Deserialize, Serialize};

use super::{fmt_array, TraceStep, UNSET};

/// Kind of a quick sort step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickStepKind {
    /// Pivot chosen for the active subrange.
    Pivot,
    /// One comparison against the pivot.
    Partition,
    /// Two elements exchanged (snapshot is post-swap).
    Swap,
    /// Partition finished; the pivot is at its final position.
    Complete,
}

/// One renderable instant of a quick sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStep {
    /// Step kind.
    pub kind: QuickStepKind,
    /// State of the whole working array at this instant.
    pub snapshot: Vec<f64>,
    /// Index of the pivot element, or `-1`.
    pub pivot_index: i64,
    /// Left comparison index, or `-1`.
    pub compare_left: i64,
    /// Right comparison index, or `-1`.
    pub compare_right: i64,
    /// Value of the pivot for the active subrange.
    pub pivot_value: f64,
    /// Human-readable description.
    pub description: String,
    /// Recursion depth (display grouping only).
    pub depth: usize,
    /// Final resting index of the pivot; present only on `Complete`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_pivot_position: Option<usize>,
}

impl TraceStep for QuickStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn view(&self) -> String {
        let mut lines = format!(
            "Array: {}\nPivot: {} (index {})",
            fmt_array(&self.snapshot),
            self.pivot_value,
            self.pivot_index
        );
        if self.compare_left != UNSET || self.compare_right != UNSET {
            lines.push_str(&format!(
                "\nIndices: left {}, right {}",
                self.compare_left, self.compare_right
            ));
        }
        if let Some(p) = self.final_pivot_position {
            lines.push_str(&format!("\nPivot fixed at position {p}"));
        }
        lines
    }
}

/// Generate the full quick sort trace for `input`.
///
/// Pure with respect to the caller: the walk happens on an internal copy.
/// Inputs of length <= 1 yield an empty trace. The caller guarantees finite
/// values; a non-finite value here is a programming error.
#[must_use]
pub fn trace(input: &[f64]) -> Vec<QuickStep> {
    debug_assert!(
        input.iter().all(|x| x.is_finite()),
        "non-finite value in quick sort input"
    );

    if input.len() <= 1 {
        return Vec::new();
    }

    let mut work = input.to_vec();
    let mut steps = Vec::new();
    let high = work.len() - 1;
    quick(&mut work, 0, high, 0, &mut steps);
    steps
}

/// Recursive driver. The step list is an explicit accumulator so no
/// closure captures shared mutable state across recursive calls.
fn quick(arr: &mut [f64], low: usize, high: usize, depth: usize, steps: &mut Vec<QuickStep>) {
    if low >= high {
        return;
    }

    let p = partition(arr, low, high, depth, steps);
    if p > low {
        quick(arr, low, p - 1, depth + 1, steps);
    }
    if p + 1 < high {
        quick(arr, p + 1, high, depth + 1, steps);
    }
}

/// Lomuto partition over `arr[low..=high]`, returning the pivot's final
/// position. `store` is the next slot for an element <= pivot.
fn partition(
    arr: &mut [f64],
    low: usize,
    high: usize,
    depth: usize,
    steps: &mut Vec<QuickStep>,
) -> usize {
    let pivot = arr[high];
    let mut store = low;

    steps.push(step(
        QuickStepKind::Pivot,
        arr,
        high as i64,
        low as i64,
        high as i64,
        pivot,
        format!("Choose pivot: {pivot} (index {high})"),
        depth,
        None,
    ));

    for j in low..high {
        steps.push(step(
            QuickStepKind::Partition,
            arr,
            high as i64,
            j as i64,
            store as i64,
            pivot,
            format!("Compare: {} vs pivot {pivot}", arr[j]),
            depth,
            None,
        ));

        if arr[j] <= pivot {
            if store != j {
                arr.swap(store, j);
                steps.push(step(
                    QuickStepKind::Swap,
                    arr,
                    high as i64,
                    j as i64,
                    store as i64,
                    pivot,
                    format!("Swap: {} \u{2194} {}", arr[store], arr[j]),
                    depth,
                    None,
                ));
            }
            store += 1;
        }
    }

    if store != high {
        arr.swap(store, high);
        steps.push(step(
            QuickStepKind::Swap,
            arr,
            high as i64,
            high as i64,
            store as i64,
            pivot,
            format!("Place pivot: {} at position {store}", arr[store]),
            depth,
            None,
        ));
    }

    steps.push(step(
        QuickStepKind::Complete,
        arr,
        store as i64,
        UNSET,
        UNSET,
        pivot,
        format!("Partition complete: pivot {} at position {store}", arr[store]),
        depth,
        Some(store),
    ));

    store
}

#[allow(clippy::too_many_arguments)]
fn step(
    kind: QuickStepKind,
    arr: &[f64],
    pivot_index: i64,
    compare_left: i64,
    compare_right: i64,
    pivot_value: f64,
    description: String,
    depth: usize,
    final_pivot_position: Option<usize>,
) -> QuickStep {
    QuickStep {
        kind,
        snapshot: arr.to_vec(),
        pivot_index,
        compare_left,
        compare_right,
        pivot_value,
        description,
        depth,
        final_pivot_position,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn last_complete(steps: &[QuickStep]) -> &QuickStep {
        steps
            .iter()
            .rev()
            .find(|s| s.kind == QuickStepKind::Complete)
            .unwrap()
    }

    #[test]
    fn test_empty_and_singleton_yield_no_steps() {
        assert!(trace(&[]).is_empty());
        assert!(trace(&[5.0]).is_empty());
    }

    #[test]
    fn test_caller_array_untouched() {
        let input = [3.0, 1.0, 2.0];
        let _ = trace(&input);
        assert_eq!(input, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_final_snapshot_is_sorted() {
        let input = [5.0, 2.0, 9.0, 1.0, 7.0, 3.0];
        let steps = trace(&input);
        let mut expected = input.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(last_complete(&steps).snapshot, expected);
        // The sequence ends on the last partition's complete step.
        assert_eq!(steps.last().unwrap().kind, QuickStepKind::Complete);
    }

    #[test]
    fn test_pivot_partition_invariant() {
        // After every complete step, elements below the final pivot
        // position are <= pivot and elements above are >= pivot.
        let steps = trace(&[9.0, 4.0, 7.0, 1.0, 8.0, 2.0, 6.0]);
        for s in steps.iter().filter(|s| s.kind == QuickStepKind::Complete) {
            let p = s.final_pivot_position.unwrap();
            let pivot = s.snapshot[p];
            assert!(s.snapshot[..p].iter().all(|&x| x <= pivot));
            assert!(s.snapshot[p + 1..].iter().all(|&x| x >= pivot));
        }
    }

    #[test]
    fn test_final_pivot_position_only_on_complete() {
        let steps = trace(&[3.0, 1.0, 2.0]);
        for s in &steps {
            assert_eq!(
                s.final_pivot_position.is_some(),
                s.kind == QuickStepKind::Complete
            );
        }
    }

    #[test]
    fn test_no_swap_steps_for_sorted_input_round() {
        // [1, 2, 3]: pivot 3, both comparisons keep elements in place,
        // pivot already at its slot. One pivot, two partitions, one
        // complete, zero swaps.
        let steps = trace(&[1.0, 2.0, 3.0]);
        assert!(steps.iter().all(|s| s.kind != QuickStepKind::Swap));
        assert_eq!(
            steps
                .iter()
                .filter(|s| s.kind == QuickStepKind::Partition)
                .count(),
            2
        );
    }

    #[test]
    fn test_snapshot_covers_whole_array() {
        let input = [4.0, 3.0, 2.0, 1.0];
        let steps = trace(&input);
        assert!(steps.iter().all(|s| s.snapshot.len() == input.len()));
    }

    #[test]
    fn test_pivot_is_last_of_subrange() {
        let steps = trace(&[4.0, 3.0, 2.0, 1.0]);
        let first = &steps[0];
        assert_eq!(first.kind, QuickStepKind::Pivot);
        assert_eq!(first.pivot_index, 3);
        assert_eq!(first.pivot_value, 1.0);
    }

    #[test]
    fn test_depth_increments_per_recursion() {
        let steps = trace(&[5.0, 2.0, 9.0, 1.0, 7.0, 3.0]);
        let max_depth = steps.iter().map(|s| s.depth).max().unwrap();
        assert!(max_depth >= 1);
        assert_eq!(steps[0].depth, 0);
    }
}
