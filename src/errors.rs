// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! The process runner has its own narrower [`ExecError`]; it converts into
//! [`SupportError`] when it crosses into config/CLI code.

use thiserror::Error;

use crate::exec::ExecError;

#[derive(Error, Debug)]
pub enum SupportError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Command not found in config: {0}")]
    CommandNotFound(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SupportError>;
