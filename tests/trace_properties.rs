//! Trace property test suite.
//!
//! These are the falsifiable claims of the trace layer. If any test fails,
//! the generator contract is broken:
//!
//! 1. Correctness - traces end in the ascending-sorted array
//! 2. Stability - merge sort ties favor the left run
//! 3. Pivot invariant - every partition leaves the pivot fixed and flanked
//! 4. Search bound - binary search terminates within ceil(log2(n + 1)) calls
//! 5. Degenerate inputs - empty and singleton arrays yield empty traces

use algoviz::prelude::*;
use algoviz::trace::{binary_search, merge_sort, quick_sort};

fn sorted(input: &[f64]) -> Vec<f64> {
    let mut out = input.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

// ============================================================================
// Merge sort
// ============================================================================

#[test]
fn merge_sort_final_merge_equals_sorted_input() {
    let cases: &[&[f64]] = &[
        &[8.0, 3.0, 1.0, 6.0, 4.0],
        &[1.0, 2.0, 3.0],
        &[3.0, 2.0, 1.0],
        &[5.0, 5.0, 5.0, 5.0],
        &[-2.0, 7.5, 0.0, -9.25, 3.0, 3.0],
        &[2.0, 1.0],
    ];
    for input in cases {
        let steps = merge_sort::trace(input);
        let last_merge = steps
            .iter()
            .rev()
            .find(|s| s.kind == MergeStepKind::Merge)
            .expect("non-trivial input must end in a merge step");
        assert_eq!(last_merge.merged, sorted(input), "input {input:?}");
        assert_eq!(last_merge.merged.len(), input.len());
    }
}

#[test]
fn merge_sort_tie_break_is_left_biased() {
    // [3, 3]: the single compare must take the left element first.
    let steps = merge_sort::trace(&[3.0, 3.0]);
    let compare_pos = steps
        .iter()
        .position(|s| s.kind == MergeStepKind::Compare)
        .expect("one comparison expected");
    let compare = &steps[compare_pos];
    assert_eq!(compare.left_cursor, 0);
    assert_eq!(compare.right_cursor, 0);

    let merge_after = &steps[compare_pos + 1];
    assert_eq!(merge_after.left_cursor, 1, "left run must be consumed first");
    assert_eq!(merge_after.right_cursor, 0);
}

#[test]
fn merge_sort_example_end_to_end() {
    // Documented example: [8, 3, 1, 6, 4] must divide into [8, 3] and
    // [1, 6, 4] first and merge to [1, 3, 4, 6, 8] last.
    let steps = merge_sort::trace(&[8.0, 3.0, 1.0, 6.0, 4.0]);

    assert!(steps.iter().any(|s| s.kind == MergeStepKind::Divide
        && s.left == [8.0, 3.0]
        && s.right == [1.0, 6.0, 4.0]));

    let last_merge = steps
        .iter()
        .rev()
        .find(|s| s.kind == MergeStepKind::Merge)
        .expect("merge steps expected");
    assert_eq!(last_merge.merged, vec![1.0, 3.0, 4.0, 6.0, 8.0]);
}

#[test]
fn merge_sort_degenerate_inputs_yield_empty_traces() {
    assert!(merge_sort::trace(&[]).is_empty());
    assert!(merge_sort::trace(&[0.5]).is_empty());
}

#[test]
fn merge_sort_snapshots_do_not_alias() {
    // Each step's merged list reflects only the appends made before that
    // instant; later appends must not bleed into earlier snapshots.
    let steps = merge_sort::trace(&[4.0, 2.0, 3.0, 1.0]);
    let mut last_len = 0;
    for s in steps.iter().filter(|s| s.kind == MergeStepKind::Merge) {
        if s.merged.is_empty() {
            last_len = 0; // new merge call opens with an empty list
        } else {
            assert!(s.merged.len() >= last_len);
            last_len = s.merged.len();
        }
    }
}

// ============================================================================
// Quick sort
// ============================================================================

#[test]
fn quick_sort_final_complete_equals_sorted_input() {
    let cases: &[&[f64]] = &[
        &[8.0, 3.0, 1.0, 6.0, 4.0],
        &[9.0, 8.0, 7.0, 6.0],
        &[1.0, 2.0, 3.0, 4.0],
        &[2.0, 2.0, 2.0],
        &[-1.0, 4.5, -7.0, 0.0, 12.0],
    ];
    for input in cases {
        let steps = quick_sort::trace(input);
        let last = steps.last().expect("non-trivial input must emit steps");
        assert_eq!(last.kind, QuickStepKind::Complete);
        assert_eq!(last.snapshot, sorted(input), "input {input:?}");
    }
}

#[test]
fn quick_sort_every_complete_step_satisfies_pivot_invariant() {
    let steps = quick_sort::trace(&[13.0, 4.0, 9.0, 1.0, 8.0, 2.0, 6.0, 11.0]);
    let mut completes = 0;
    for s in steps.iter().filter(|s| s.kind == QuickStepKind::Complete) {
        completes += 1;
        let p = s.final_pivot_position.expect("complete carries position");
        let pivot = s.snapshot[p];
        assert!(s.snapshot[..p].iter().all(|&x| x <= pivot));
        assert!(s.snapshot[p + 1..].iter().all(|&x| x >= pivot));
    }
    assert!(completes > 1, "recursion must partition more than once");
}

#[test]
fn quick_sort_degenerate_inputs_yield_empty_traces() {
    assert!(quick_sort::trace(&[]).is_empty());
    assert!(quick_sort::trace(&[42.0]).is_empty());
}

#[test]
fn quick_sort_leaves_caller_input_alone() {
    let input = vec![5.0, 3.0, 8.0, 1.0];
    let before = input.clone();
    let _ = quick_sort::trace(&input);
    assert_eq!(input, before);
}

// ============================================================================
// Binary search
// ============================================================================

fn search_to_terminal(array: &[f64], target: f64) -> (SearchOutcome, usize) {
    let mut state = SearchState::new(array.len());
    let mut calls = 0;
    loop {
        calls += 1;
        match binary_search::step(state, array, Some(target)).expect("preconditions met") {
            SearchOutcome::Narrowed(next) => state = next,
            terminal => return (terminal, calls),
        }
    }
}

#[test]
fn binary_search_finds_present_targets_within_log_bound() {
    for len in 1..=16usize {
        let array: Vec<f64> = (0..len).map(|i| (i * 2) as f64).collect();
        let bound = ((len + 1) as f64).log2().ceil() as usize;
        for (i, &t) in array.iter().enumerate() {
            let (outcome, calls) = search_to_terminal(&array, t);
            assert_eq!(outcome, SearchOutcome::Found(i), "len {len} target {t}");
            assert!(calls <= bound, "len {len}: {calls} calls > bound {bound}");
        }
    }
}

#[test]
fn binary_search_absent_target_terminates_not_found() {
    let (outcome, calls) = search_to_terminal(&[1.0, 3.0, 5.0, 7.0], 4.0);
    assert_eq!(outcome, SearchOutcome::NotFound);
    assert!(calls <= 3, "ceil(log2(5)) = 3, took {calls}");
}

#[test]
fn binary_search_preconditions_are_distinct_errors() {
    let state = SearchState::new(3);
    assert!(matches!(
        binary_search::step(state, &[1.0, 2.0, 3.0], None),
        Err(VizError::NoTarget)
    ));
    assert!(matches!(
        binary_search::step(SearchState::new(0), &[], Some(1.0)),
        Err(VizError::EmptyArray)
    ));
}
