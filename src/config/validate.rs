// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, SupportError};
use crate::strings::is_blank;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SupportError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.defaults, raw.command))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_commands(cfg)?;
    validate_command_args(cfg)?;
    Ok(())
}

fn ensure_has_commands(cfg: &RawConfigFile) -> Result<()> {
    if cfg.command.is_empty() {
        return Err(SupportError::ConfigError(
            "config must contain at least one [command.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_command_args(cfg: &RawConfigFile) -> Result<()> {
    for (name, command) in cfg.command.iter() {
        match command.args.first() {
            None => {
                return Err(SupportError::ConfigError(format!(
                    "command '{}' has empty `args` (expected at least the executable)",
                    name
                )));
            }
            Some(program) if is_blank(Some(program.as_str())) => {
                return Err(SupportError::ConfigError(format!(
                    "command '{}' has a blank executable in `args`",
                    name
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}
