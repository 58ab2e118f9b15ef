//! CLI argument parsing.
//!
//! Hand-rolled parser kept separate from `main.rs` so argument handling is
//! fully testable from an iterator of strings.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate and print a step trace (or run a binary search stepwise).
    Trace {
        /// Algorithm name (merge-sort, quick-sort, binary-search).
        algorithm: String,
        /// Input numbers as free-form text.
        input: String,
        /// Search target (binary-search only).
        target: Option<f64>,
        /// Optional configuration file.
        config_path: Option<PathBuf>,
    },
    /// Interactive TUI playback (requires the `tui` feature).
    Play {
        /// Algorithm name.
        algorithm: String,
        /// Input numbers as free-form text.
        input: String,
        /// Search target (binary-search only).
        target: Option<f64>,
        /// Optional configuration file.
        config_path: Option<PathBuf>,
    },
    /// Print a random demo array.
    Random {
        /// Optional seed override.
        seed: Option<u64>,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "trace" => Self::parse_trace_command(args, false),
            "play" => Self::parse_trace_command(args, true),
            "random" => Self::parse_random_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'trace' / 'play' command arguments.
    fn parse_trace_command(args: &[String], play: bool) -> Command {
        if args.len() < 4 {
            eprintln!(
                "Error: '{}' requires an algorithm and an input list",
                if play { "play" } else { "trace" }
            );
            return Command::Help;
        }

        let algorithm = args[2].clone();
        let input = args[3].clone();
        let mut target = None;
        let mut config_path = None;

        let mut i = 4;
        while i < args.len() {
            match args[i].as_str() {
                "--target" => {
                    if i + 1 < args.len() {
                        if let Ok(t) = args[i + 1].parse() {
                            target = Some(t);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--config" => {
                    if i + 1 < args.len() {
                        config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        if play {
            Command::Play {
                algorithm,
                input,
                target,
                config_path,
            }
        } else {
            Command::Trace {
                algorithm,
                input,
                target,
                config_path,
            }
        }
    }

    /// Parse the 'random' command arguments.
    fn parse_random_command(args: &[String]) -> Command {
        let mut seed = None;
        if args.len() > 3 && args[2] == "--seed" {
            if let Ok(s) = args[3].parse() {
                seed = Some(s);
            }
        }

        Command::Random { seed }
    }
}
