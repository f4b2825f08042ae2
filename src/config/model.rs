// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Result, SupportError};
use crate::exec::CommandSpec;

/// Configuration exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [defaults]
/// dir = "."
///
/// [command.build]
/// args = ["cargo", "build"]
/// dir = "crates/core"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// `[defaults]` section.
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// All commands from `[command.<name>]`, keyed by name.
    #[serde(default)]
    pub command: BTreeMap<String, CommandConfig>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsSection {
    /// Working directory for commands that do not set their own.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// `[command.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Executable followed by its arguments. Never run through a shell.
    pub args: Vec<String>,

    /// Optional working directory; falls back to `defaults.dir`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Validated configuration. Build one with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    defaults: DefaultsSection,
    command: BTreeMap<String, CommandConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        defaults: DefaultsSection,
        command: BTreeMap<String, CommandConfig>,
    ) -> Self {
        Self { defaults, command }
    }

    pub fn defaults(&self) -> &DefaultsSection {
        &self.defaults
    }

    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.command.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&CommandConfig> {
        self.command.get(name)
    }

    /// Effective working directory of a command: its own `dir`, else
    /// `defaults.dir`, else none.
    pub fn effective_dir(&self, name: &str) -> Option<&Path> {
        self.command
            .get(name)
            .and_then(|c| c.dir.as_deref())
            .or(self.defaults.dir.as_deref())
    }

    /// Build a [`CommandSpec`] (without sinks) for a named command.
    pub fn command_spec(&self, name: &str) -> Result<CommandSpec> {
        let cmd = self
            .command
            .get(name)
            .ok_or_else(|| SupportError::CommandNotFound(name.to_string()))?;

        let spec = CommandSpec::new(cmd.args.iter().cloned());
        Ok(match self.effective_dir(name) {
            Some(dir) => spec.current_dir(dir),
            None => spec,
        })
    }
}
