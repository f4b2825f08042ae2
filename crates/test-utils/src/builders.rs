#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use supportkit::config::{CommandConfig, ConfigFile, DefaultsSection, RawConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                defaults: DefaultsSection::default(),
                command: BTreeMap::new(),
            },
        }
    }

    pub fn with_command(mut self, name: &str, command: CommandConfig) -> Self {
        self.config.command.insert(name.to_string(), command);
        self
    }

    pub fn with_default_dir(mut self, dir: &str) -> Self {
        self.config.defaults.dir = Some(PathBuf::from(dir));
        self
    }

    /// The unvalidated config, for exercising validation errors.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CommandConfig`.
pub struct CommandConfigBuilder {
    command: CommandConfig,
}

impl CommandConfigBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            command: CommandConfig {
                args: vec![program.to_string()],
                dir: None,
            },
        }
    }

    /// A command with no arguments at all (invalid).
    pub fn empty() -> Self {
        Self {
            command: CommandConfig {
                args: vec![],
                dir: None,
            },
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.command.args.push(arg.to_string());
        self
    }

    pub fn dir(mut self, dir: &str) -> Self {
        self.command.dir = Some(PathBuf::from(dir));
        self
    }

    pub fn build(self) -> CommandConfig {
        self.command
    }
}
