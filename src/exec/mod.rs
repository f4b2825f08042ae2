// src/exec/mod.rs

//! Process execution layer.
//!
//! Runs external commands with `tokio::process::Command`, forwarding the
//! child's stdout/stderr line by line to optional sinks.
//!
//! - [`command`] holds [`CommandSpec`] (what to run, where, and where output
//!   goes) and [`ExecError`].
//! - [`drain`] owns the per-stream drain tasks.
//! - [`runner`] ties launch, draining, waiting and cleanup together and
//!   exposes the `execute*` entry points.
//! - [`sink`] contains the [`LineSink`] trait and stock sinks.
//! - [`outcome`] defines [`ExitOutcome`] and the sentinel exit codes.

pub mod command;
pub mod drain;
pub mod outcome;
pub mod runner;
pub mod sink;

pub use command::{CommandSpec, ExecError};
pub use drain::{DrainHandle, Drainer};
pub use outcome::{EXECUTION_FAILED, EXECUTION_INTERRUPTED, ExitOutcome};
pub use runner::{
    execute, execute_in, execute_logging_exceptions, execute_logging_exceptions_in,
    execute_with_sinks, run_command, run_command_logging_exceptions,
};
pub use sink::{LineSink, SharedBuffer, WriterSink};
