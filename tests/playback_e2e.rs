//! End-to-end visualizer suite.
//!
//! Drives the full path a UI would take: parse raw text, hand the numbers
//! to an engine, walk the playback to completion, reset and replay. Every
//! engine must behave identically through the shared `Visualizer` surface.

use algoviz::prelude::*;

fn drive_to_completion(viz: &mut dyn Visualizer) -> Vec<String> {
    let mut descriptions = Vec::new();
    loop {
        match viz.step_once().expect("preconditions met") {
            StepReport::Advanced { description } => descriptions.push(description),
            StepReport::Complete => return descriptions,
        }
    }
}

#[test]
fn parse_set_play_merge_sort() {
    let numbers = parse_numbers("8, 3, 1, 6, 4");
    assert_eq!(numbers.len(), 5);

    let mut viz = MergeSortViz::new();
    viz.set_array(&numbers).expect("finite input");

    let descriptions = drive_to_completion(&mut viz);
    assert_eq!(descriptions.len(), viz.step_count().expect("pre-traced"));
    assert!(viz.is_complete());
    assert!(descriptions[0].starts_with("Divide:"));
    assert!(descriptions.iter().any(|d| d.starts_with("Compare:")));
}

#[test]
fn parse_set_play_quick_sort() {
    let numbers = parse_numbers("5 2 9 1 7");
    let mut viz = QuickSortViz::new();
    viz.set_array(&numbers).expect("finite input");

    let descriptions = drive_to_completion(&mut viz);
    assert!(descriptions[0].starts_with("Choose pivot:"));
    assert!(descriptions
        .last()
        .expect("steps expected")
        .starts_with("Partition complete:"));
}

#[test]
fn binary_search_session_with_target_change() {
    let mut viz = BinarySearchViz::new();
    viz.set_array(&parse_numbers("7, 1, 5, 3")).expect("finite");
    assert_eq!(viz.array(), &[1.0, 3.0, 5.0, 7.0], "auto-sorted");

    // First session: absent target runs to NotFound.
    viz.set_target(4.0).expect("finite");
    let descriptions = drive_to_completion(&mut viz);
    assert!(descriptions
        .last()
        .expect("steps expected")
        .contains("not present"));

    // Second session: reset, new target, found.
    viz.reset();
    viz.set_target(7.0).expect("finite");
    drive_to_completion(&mut viz);
    assert_eq!(viz.found_index(), Some(3));
}

#[test]
fn reset_replays_identical_descriptions() {
    let mut viz = QuickSortViz::new();
    viz.set_array(&[6.0, 2.0, 8.0, 4.0]).expect("finite");

    let first = drive_to_completion(&mut viz);
    viz.reset();
    let second = drive_to_completion(&mut viz);
    assert_eq!(first, second, "traces are immutable once generated");
}

#[test]
fn changing_array_regenerates_the_trace() {
    let mut viz = MergeSortViz::new();
    viz.set_array(&[3.0, 1.0, 2.0]).expect("finite");
    let len_before = viz.step_count().expect("pre-traced");

    viz.set_array(&[9.0, 8.0, 7.0, 6.0, 5.0, 4.0]).expect("finite");
    let len_after = viz.step_count().expect("pre-traced");
    assert_ne!(len_before, len_after);
    assert!(!viz.is_complete());
}

#[test]
fn playback_controller_honors_interval_bounds() {
    let steps = algoviz::trace::merge_sort::trace(&[2.0, 1.0]);
    let mut playback = Playback::with_interval(steps, 1);
    assert_eq!(playback.interval_ms(), 100, "clamped up to the minimum");

    playback.set_interval_ms(10_000);
    assert_eq!(playback.interval_ms(), 3000, "clamped down to the maximum");
}

#[test]
fn invalid_text_yields_empty_parse_and_no_trace() {
    let numbers = parse_numbers("twelve, banana");
    assert!(numbers.is_empty());

    // The UI contract: empty parse means "do not build a trace"; stepping
    // an engine with no array is the EmptyArray condition.
    let mut viz = MergeSortViz::new();
    assert!(matches!(viz.step_once(), Err(VizError::EmptyArray)));
}

#[test]
fn config_defaults_drive_a_session() {
    let config = VizConfig::default();
    let steps = algoviz::trace::quick_sort::trace(&[3.0, 1.0, 2.0]);
    let playback = Playback::with_interval(steps, config.playback.interval_ms);
    assert_eq!(playback.interval_ms(), 1000);
    assert!(!playback.is_empty());
}
