// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::loader::default_config_path;

/// Command-line arguments for `supportkit`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "supportkit",
    version,
    about = "Run external commands with their output forwarded line by line.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SUPPORTKIT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Run a command (given after `--`, or by name from the config file).
    Run(RunArgs),

    /// Print where an executable is found on `PATH`.
    Which {
        /// Executable name, e.g. `sh`.
        name: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Path to the config file (TOML) used with `--name`.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Run the `[command.<NAME>]` entry from the config file.
    #[arg(long, value_name = "NAME", conflicts_with = "command")]
    pub name: Option<String>,

    /// Working directory for the child (overrides the config file).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Executable followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
