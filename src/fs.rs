// src/fs.rs

//! Locating executables on `PATH`.

use std::path::PathBuf;

/// Full path of the first `name` executable found on `PATH`.
pub fn lookup_in_path(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Directory containing the `name` executable (e.g. `/usr/bin`).
pub fn lookup_parent_in_path(name: &str) -> Option<PathBuf> {
    lookup_in_path(name)?.parent().map(PathBuf::from)
}

/// Parent of the directory containing `name` (e.g. `/usr`).
pub fn lookup_grandparent_in_path(name: &str) -> Option<PathBuf> {
    lookup_parent_in_path(name)?.parent().map(PathBuf::from)
}
