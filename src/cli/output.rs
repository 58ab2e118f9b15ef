//! CLI output formatting.
//!
//! All output generation lives here so command handlers stay testable.

use crate::trace::fmt_array;
use crate::visualizer::Algorithm;

/// Print version information.
pub fn print_version() {
    println!("algoviz {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"algoviz - Step-trace visualizer for classic algorithms

USAGE:
    algoviz <COMMAND> [OPTIONS]

COMMANDS:
    trace <algorithm> <numbers>   Generate and print the step trace
        --target <N>              Search target (binary-search only)
        --config <file.yaml>      Load playback/input configuration

    play <algorithm> <numbers>    Interactive TUI playback (tui feature)
        --target <N>              Search target (binary-search only)
        --config <file.yaml>      Load playback/input configuration

    random                        Print a random demo array
        --seed <N>                Seed for reproducible arrays

    help                          Show this help message
    version                       Show version information

ALGORITHMS:
    merge-sort      Divide / compare / merge trace (stable, left-biased ties)
    quick-sort      Pivot / partition / swap / complete trace (Lomuto)
    binary-search   Forward-only search transitions (array auto-sorted)

EXAMPLES:
    algoviz trace merge-sort '8, 3, 1, 6, 4'
    algoviz trace quick-sort '5 2 9 1 7'
    algoviz trace binary-search '1, 3, 5, 7' --target 5
    algoviz play merge-sort '8, 3, 1, 6, 4' --config viz.yaml
    algoviz random --seed 42
"
    );
}

/// Print the trace header: algorithm and input array.
pub fn print_trace_header(algorithm: Algorithm, array: &[f64]) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Algorithm: {algorithm}");
    println!("Input:     {}", fmt_array(array));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

/// Print numbered step descriptions.
pub fn print_steps(descriptions: &[String]) {
    let total = descriptions.len();
    for (i, description) in descriptions.iter().enumerate() {
        println!("Step {:>3}/{total}: {description}", i + 1);
    }
    if total == 0 {
        println!("(no steps: input is already trivially sorted)");
    }
}

/// Print the advisory for long arrays.
pub fn print_length_advisory(len: usize, warn_length: usize) {
    eprintln!(
        "Warning: {len} elements exceeds the advisory limit of {warn_length}; \
         the trace will be long"
    );
}

/// Print a generated demo array.
pub fn print_demo_array(seed: u64, array: &[f64]) {
    println!("Seed:  {seed}");
    println!("Array: {}", fmt_array(array));
}
