// src/exec/command.rs

//! Description of one execution attempt.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::oneshot;

use crate::exec::sink::LineSink;

/// Errors that cross the runner boundary.
///
/// Only launch problems are reported this way; read errors on the child's
/// streams and cleanup errors are absorbed by the runner.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("no command given (expected at least the executable)")]
    EmptyCommand,

    #[error("failed to launch '{program}'")]
    LaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// The executable, its arguments, an optional working directory, and the
/// sinks the child's stdout/stderr lines are forwarded to.
///
/// `commands[0]` is the executable; the rest are passed as arguments
/// verbatim (no shell parsing). Without a working directory the child
/// inherits the current process's one.
#[derive(Default)]
pub struct CommandSpec {
    pub(crate) commands: Vec<String>,
    pub(crate) dir: Option<PathBuf>,
    pub(crate) stdout: Option<Box<dyn LineSink>>,
    pub(crate) stderr: Option<Box<dyn LineSink>>,
    pub(crate) interrupt: Option<oneshot::Receiver<()>>,
}

impl CommandSpec {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn stdout_sink(mut self, sink: impl LineSink) -> Self {
        self.stdout = Some(Box::new(sink));
        self
    }

    pub fn stderr_sink(mut self, sink: impl LineSink) -> Self {
        self.stderr = Some(Box::new(sink));
        self
    }

    /// Treat a message on `rx` as an interruption of the wait for the child.
    ///
    /// Dropping the sender without sending is not an interruption.
    pub fn interrupt_on(mut self, rx: oneshot::Receiver<()>) -> Self {
        self.interrupt = Some(rx);
        self
    }

    pub(crate) fn with_dir(mut self, dir: Option<&Path>) -> Self {
        self.dir = dir.map(Path::to_path_buf);
        self
    }

    pub(crate) fn with_sinks(
        mut self,
        stdout: Option<Box<dyn LineSink>>,
        stderr: Option<Box<dyn LineSink>>,
    ) -> Self {
        self.stdout = stdout;
        self.stderr = stderr;
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.commands.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.commands.get(1..).unwrap_or_default()
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("commands", &self.commands)
            .field("dir", &self.dir)
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .field("interruptible", &self.interrupt.is_some())
            .finish()
    }
}
