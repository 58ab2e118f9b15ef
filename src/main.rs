//! algoviz CLI - Step-trace algorithm visualizer
//!
//! Command-line interface for generating and playing algorithm traces.

use std::process::ExitCode;

use algoviz::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
