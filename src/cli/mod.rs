//! CLI module for algoviz.
//!
//! All CLI logic lives here rather than in `main.rs` so it can be tested:
//! `run_cli` takes parsed arguments and `Args::parse_from` takes any
//! iterator of strings.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{run_cli, run_random, run_trace};
pub use output::{print_help, print_version};
