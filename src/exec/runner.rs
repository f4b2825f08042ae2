// src/exec/runner.rs

//! Process runner: launch, drain, wait, clean up.
//!
//! One call owns exactly one child process and its two drainers:
//!
//! 1. spawn the child (stdin closed, stdout/stderr piped);
//! 2. start a [`Drainer`] per output stream;
//! 3. wait for the child to exit, or for the caller's interrupt signal;
//! 4. join both drainers, then release the child (killing it if the wait
//!    was interrupted).
//!
//! Step 4 runs on every path that got past the launch, so the call never
//! returns while a drain task is still alive and no buffered output is lost.
//! An interrupt only ends the wait: the drainers still run until the child
//! closes its streams.
//! There is no timeout: a child that never exits (or a grandchild that keeps
//! the pipes open) blocks the caller.

use std::error::Error as StdError;
use std::future::pending;
use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tokio::sync::oneshot;
use tracing::{debug, error, info};

use crate::exec::command::{CommandSpec, ExecError};
use crate::exec::drain::{DrainHandle, Drainer};
use crate::exec::outcome::{EXECUTION_FAILED, ExitOutcome};
use crate::exec::sink::LineSink;

/// Execute `commands` in the current working directory, discarding output.
pub async fn execute<S: AsRef<str>>(commands: &[S]) -> Result<i32, ExecError> {
    execute_in(commands, None).await
}

/// Execute `commands` in `dir` (or the current directory), discarding output.
pub async fn execute_in<S: AsRef<str>>(
    commands: &[S],
    dir: Option<&Path>,
) -> Result<i32, ExecError> {
    execute_with_sinks(commands, dir, None, None).await
}

/// Execute `commands`, forwarding stdout/stderr lines to the given sinks.
///
/// Returns the child's exit code; fails only if the process could not be
/// launched.
pub async fn execute_with_sinks<S: AsRef<str>>(
    commands: &[S],
    dir: Option<&Path>,
    stdout: Option<Box<dyn LineSink>>,
    stderr: Option<Box<dyn LineSink>>,
) -> Result<i32, ExecError> {
    let spec = build_spec(commands, dir, stdout, stderr);
    run_command(spec).await.map(ExitOutcome::code)
}

/// Like [`execute_with_sinks`] in the current directory, but a launch
/// failure is described on `stderr` and reported as
/// [`EXECUTION_FAILED`](crate::exec::EXECUTION_FAILED) instead of an error.
pub async fn execute_logging_exceptions<S: AsRef<str>>(
    commands: &[S],
    stdout: Option<Box<dyn LineSink>>,
    stderr: Option<Box<dyn LineSink>>,
) -> i32 {
    execute_logging_exceptions_in(commands, None, stdout, stderr).await
}

/// Never fails: returns the exit code, `EXECUTION_FAILED`, or
/// `EXECUTION_INTERRUPTED`.
pub async fn execute_logging_exceptions_in<S: AsRef<str>>(
    commands: &[S],
    dir: Option<&Path>,
    stdout: Option<Box<dyn LineSink>>,
    stderr: Option<Box<dyn LineSink>>,
) -> i32 {
    let spec = build_spec(commands, dir, stdout, stderr);
    run_command_logging_exceptions(spec).await.code()
}

/// Run one command to completion.
///
/// Launch problems are returned as [`ExecError`]; everything after a
/// successful launch is folded into the [`ExitOutcome`].
pub async fn run_command(spec: CommandSpec) -> Result<ExitOutcome, ExecError> {
    let CommandSpec {
        commands,
        dir,
        stdout,
        stderr,
        interrupt,
    } = spec;

    let child = launch(&commands, dir.as_deref())?;
    Ok(supervise(child, program_name(&commands), stdout, stderr, interrupt).await)
}

/// Run one command to completion, never failing.
///
/// A launch failure is logged, its description (error plus `caused by:`
/// lines) is written to the stderr sink if there is one, and
/// [`ExitOutcome::LaunchFailed`] is returned. The stdout sink is left
/// untouched in that case.
pub async fn run_command_logging_exceptions(spec: CommandSpec) -> ExitOutcome {
    let CommandSpec {
        commands,
        dir,
        stdout,
        stderr,
        interrupt,
    } = spec;

    match launch(&commands, dir.as_deref()) {
        Ok(child) => supervise(child, program_name(&commands), stdout, stderr, interrupt).await,
        Err(err) => {
            error!(
                program = program_name(&commands),
                error = %err,
                "could not launch process"
            );
            if let Some(mut sink) = stderr {
                describe_failure(sink.as_mut(), &err);
            }
            ExitOutcome::LaunchFailed
        }
    }
}

fn build_spec<S: AsRef<str>>(
    commands: &[S],
    dir: Option<&Path>,
    stdout: Option<Box<dyn LineSink>>,
    stderr: Option<Box<dyn LineSink>>,
) -> CommandSpec {
    CommandSpec::new(commands.iter().map(|c| c.as_ref().to_owned()))
        .with_dir(dir)
        .with_sinks(stdout, stderr)
}

fn program_name(commands: &[String]) -> &str {
    commands.first().map(String::as_str).unwrap_or_default()
}

fn launch(commands: &[String], dir: Option<&Path>) -> Result<Child, ExecError> {
    let (program, args) = commands.split_first().ok_or(ExecError::EmptyCommand)?;

    info!(program = %program, ?args, ?dir, "launching process");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    cmd.spawn().map_err(|source| ExecError::LaunchFailure {
        program: program.clone(),
        source,
    })
}

/// Everything after a successful launch. Always joins both drainers before
/// the child is dropped.
async fn supervise(
    mut child: Child,
    program: &str,
    stdout: Option<Box<dyn LineSink>>,
    stderr: Option<Box<dyn LineSink>>,
    interrupt: Option<oneshot::Receiver<()>>,
) -> ExitOutcome {
    let mut drains: Vec<DrainHandle> = Vec::with_capacity(2);
    if let Some(err) = child.stderr.take() {
        drains.push(Drainer::new("stderr", err, stderr).spawn());
    }
    if let Some(out) = child.stdout.take() {
        drains.push(Drainer::new("stdout", out, stdout).spawn());
    }

    let outcome = wait_for_exit(&mut child, program, interrupt).await;

    release(child, program, drains, outcome == ExitOutcome::Interrupted).await;

    outcome
}

async fn wait_for_exit(
    child: &mut Child,
    program: &str,
    interrupt: Option<oneshot::Receiver<()>>,
) -> ExitOutcome {
    let interrupted = async move {
        match interrupt {
            // A dropped sender means nobody can interrupt us any more.
            Some(rx) => {
                if rx.await.is_err() {
                    pending::<()>().await;
                }
            }
            None => pending::<()>().await,
        }
    };

    tokio::select! {
        status_res = child.wait() => {
            match status_res {
                Ok(status) => {
                    let outcome = ExitOutcome::from(status);
                    info!(
                        program,
                        exit_code = outcome.code(),
                        success = status.success(),
                        "process exited"
                    );
                    outcome
                }
                Err(e) => {
                    error!(program, error = %e, "waiting for process failed");
                    ExitOutcome::Exited(EXECUTION_FAILED)
                }
            }
        }

        () = interrupted => {
            info!(program, "interrupted while waiting; draining remaining output");
            ExitOutcome::Interrupted
        }
    }
}

/// Join the drainers, then let the child go.
///
/// The drainers own the stdout/stderr pipes and close them when they end;
/// stdin was never opened. After an interrupted wait the child may still be
/// running once its streams are closed, so it is killed before the handle
/// is dropped.
async fn release(mut child: Child, program: &str, drains: Vec<DrainHandle>, interrupted: bool) {
    for drain in drains {
        let label = drain.label();
        match drain.join().await {
            Some(lines) => debug!(stream = label, lines, "drainer joined"),
            None => debug!(stream = label, "drainer ended abnormally"),
        }
    }

    if interrupted {
        if let Err(e) = child.kill().await {
            debug!(program, error = %e, "ignoring kill error on interrupted process");
        }
    }

    drop(child);
}

/// Write `err` and its source chain to a sink, ignoring write failures.
fn describe_failure(sink: &mut dyn LineSink, err: &ExecError) {
    let _ = sink.write_line(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = sink.write_line(&format!("caused by: {cause}"));
        source = cause.source();
    }
}
