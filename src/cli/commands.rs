//! CLI command handlers.
//!
//! Execution logic for each command, separated from parsing and output so
//! each piece tests in isolation. Handlers return `ExitCode`; user-input
//! problems print a short message instead of a stack of machinery.

use std::path::Path;
use std::process::ExitCode;

use crate::config::VizConfig;
use crate::error::{VizError, VizResult};
use crate::parse::parse_numbers;
use crate::rng::VizRng;
use crate::visualizer::{
    Algorithm, BinarySearchViz, MergeSortViz, QuickSortViz, StepReport, Visualizer,
};

use super::output::{
    print_demo_array, print_help, print_length_advisory, print_steps, print_trace_header,
    print_version,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Trace {
            algorithm,
            input,
            target,
            config_path,
        } => run_trace(&algorithm, &input, target, config_path.as_deref()),
        Command::Play {
            algorithm,
            input,
            target,
            config_path,
        } => run_play(&algorithm, &input, target, config_path.as_deref()),
        Command::Random { seed } => run_random(seed),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Load configuration, falling back to defaults when no path is given.
fn load_config(config_path: Option<&Path>) -> VizResult<VizConfig> {
    config_path.map_or_else(|| Ok(VizConfig::default()), VizConfig::load)
}

/// Parse and validate the input list against the advisory threshold.
///
/// A list longer than the configured threshold prints an advisory but is
/// still returned in full; only an unparseable list is an error.
pub(super) fn parse_input(input: &str, config: &VizConfig) -> VizResult<Vec<f64>> {
    let numbers = parse_numbers(input);
    if numbers.is_empty() {
        return Err(VizError::InvalidInput);
    }
    if numbers.len() > config.input.warn_length {
        print_length_advisory(numbers.len(), config.input.warn_length);
    }
    Ok(numbers)
}

/// Build the right engine and run it to completion, collecting every step
/// description in order.
fn collect_steps(
    algorithm: Algorithm,
    numbers: &[f64],
    target: Option<f64>,
) -> VizResult<(Vec<f64>, Vec<String>)> {
    let mut viz: Box<dyn Visualizer> = match algorithm {
        Algorithm::MergeSort => Box::new(MergeSortViz::new()),
        Algorithm::QuickSort => Box::new(QuickSortViz::new()),
        Algorithm::BinarySearch => {
            let mut search = BinarySearchViz::new();
            search.set_target(target.ok_or(VizError::NoTarget)?)?;
            Box::new(search)
        }
    };

    viz.set_array(numbers)?;

    let mut descriptions = Vec::new();
    loop {
        match viz.step_once()? {
            StepReport::Advanced { description } => descriptions.push(description),
            StepReport::Complete => break,
        }
    }

    Ok((viz.array().to_vec(), descriptions))
}

/// Run the 'trace' command: print the whole trace at once.
#[must_use]
pub fn run_trace(
    algorithm: &str,
    input: &str,
    target: Option<f64>,
    config_path: Option<&Path>,
) -> ExitCode {
    let result = (|| -> VizResult<()> {
        let config = load_config(config_path)?;
        let algorithm = Algorithm::parse(algorithm)?;
        let numbers = parse_input(input, &config)?;

        let (array, descriptions) = collect_steps(algorithm, &numbers, target)?;
        print_trace_header(algorithm, &array);
        print_steps(&descriptions);
        Ok(())
    })();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run the 'play' command: interactive TUI playback.
#[cfg(feature = "tui")]
#[must_use]
pub fn run_play(
    algorithm: &str,
    input: &str,
    target: Option<f64>,
    config_path: Option<&Path>,
) -> ExitCode {
    let result = (|| -> VizResult<()> {
        let config = load_config(config_path)?;
        let algorithm = Algorithm::parse(algorithm)?;
        let numbers = parse_input(input, &config)?;
        crate::tui::run(algorithm, &numbers, target, &config)
    })();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Stub for builds without the TUI.
#[cfg(not(feature = "tui"))]
#[must_use]
pub fn run_play(
    _algorithm: &str,
    _input: &str,
    _target: Option<f64>,
    _config_path: Option<&Path>,
) -> ExitCode {
    eprintln!("Error: 'play' requires the tui feature (cargo install with --features tui)");
    ExitCode::FAILURE
}

/// Run the 'random' command: print a reproducible demo array.
#[must_use]
pub fn run_random(seed: Option<u64>) -> ExitCode {
    let seed = seed.unwrap_or_else(|| VizConfig::default().input.seed);
    let mut rng = VizRng::new(seed);
    print_demo_array(seed, &rng.demo_array());
    ExitCode::SUCCESS
}
