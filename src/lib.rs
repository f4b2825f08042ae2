// src/lib.rs

pub mod cli;
pub mod collections;
pub mod config;
pub mod dates;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod io;
pub mod logging;
pub mod strings;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::cli::{CliArgs, CliCommand, RunArgs};
use crate::config::loader::load_and_validate;
use crate::exec::{CommandSpec, ExitOutcome, WriterSink, run_command_logging_exceptions};

/// High-level entry point used by `main.rs`.
///
/// Returns the exit code the binary should terminate with.
pub async fn run(args: CliArgs) -> Result<i32> {
    match args.command {
        CliCommand::Run(run_args) => run_command_from_cli(run_args).await,
        CliCommand::Which { name } => match fs::lookup_in_path(&name) {
            Some(path) => {
                println!("{}", path.display());
                Ok(0)
            }
            None => {
                eprintln!("{name}: not found on PATH");
                Ok(1)
            }
        },
    }
}

async fn run_command_from_cli(args: RunArgs) -> Result<i32> {
    let spec = resolve_command(&args)?;
    debug!(?spec, "resolved command");

    // Ctrl-C → interrupt the wait; the child is drained, then killed.
    let (interrupt_tx, interrupt_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = interrupt_tx.send(());
    });

    let spec = spec
        .stdout_sink(WriterSink::new(std::io::stdout()))
        .stderr_sink(WriterSink::new(std::io::stderr()))
        .interrupt_on(interrupt_rx);

    let outcome = run_command_logging_exceptions(spec).await;
    info!(?outcome, "command finished");

    Ok(exit_code_for(outcome))
}

/// Build the command either from `--name` (config file) or from the trailing
/// arguments. `--dir` always wins over the config file.
fn resolve_command(args: &RunArgs) -> Result<CommandSpec> {
    let spec = match (&args.name, args.command.is_empty()) {
        (Some(name), _) => {
            let cfg = load_and_validate(&args.config)?;
            let mut spec = cfg.command_spec(name)?;
            if let Some(dir) = cfg.effective_dir(name) {
                spec = spec.current_dir(rebase_on_config_dir(&args.config, dir));
            }
            spec
        }
        (None, false) => CommandSpec::new(args.command.iter().cloned()),
        (None, true) => bail!("nothing to run: pass a command after `--` or use --name"),
    };

    Ok(match &args.dir {
        Some(dir) => spec.current_dir(dir),
        None => spec,
    })
}

/// Relative directories in the config file are relative to the file itself.
///
/// - If the config path has a non-empty parent (e.g. "configs/Supportkit.toml"),
///   we join onto that directory.
/// - For a bare filename we leave `dir` as-is (relative to the cwd).
fn rebase_on_config_dir(config_path: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(dir),
        _ => dir.to_path_buf(),
    }
}

/// Process exit codes are 0..=255; the negative sentinels become `1`.
pub fn exit_code_for(outcome: ExitOutcome) -> i32 {
    match outcome.code() {
        code @ 0..=255 => code,
        _ => 1,
    }
}
