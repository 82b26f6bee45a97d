//! Error and warning types.
//!
//! The scheduling core never fails. Errors originate only at the I/O
//! boundary (directory listing, config files) and in session misuse.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Directory listing failure.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The path does not exist.
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory could not be read.
    #[error("cannot read directory {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DirectoryError {
    /// Classifies an I/O error raised while opening `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Unreadable { path, source },
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(p) | Self::NotADirectory(p) => p.as_path(),
            Self::Unreadable { path, .. } => path.as_path(),
        }
    }
}

/// Configuration loading or validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config is not valid JSON for the expected shape.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Burst range is empty or starts at zero.
    #[error("invalid burst range [{min}, {max}]: need 1 <= min <= max")]
    InvalidBurstRange { min: u64, max: u64 },

    /// A rank breaks the table ordering rules.
    #[error("invalid priority rank for '{extension}': {reason}")]
    InvalidRank { extension: String, reason: String },
}

/// Session-level failure.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A run was requested before any directory was selected.
    #[error("no directory selected")]
    NoDirectorySelected,

    /// The directory listing collaborator failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Non-fatal conditions reported alongside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunWarning {
    /// The directory holds no files; the schedule is empty.
    EmptyInput,
}

impl std::fmt::Display for RunWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunWarning::EmptyInput => f.write_str("no items to schedule"),
        }
    }
}
