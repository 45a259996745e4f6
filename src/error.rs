//! Error types and exit codes for Notelink.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const VAULT_NOT_FOUND: i32 = 2;
    pub const BACKUP_FAILED: i32 = 3;
    pub const NOTE_NOT_FOUND: i32 = 4;
    pub const PARTIAL_FAILURE: i32 = 10;
}

/// Main error type for Notelink operations.
///
/// Fatal variants (`VaultNotFound`, `VaultUnreadable`, `Backup`) abort the run
/// before any note is mutated. `NoteDecode` and `NoteWrite` are recoverable:
/// they are isolated per note and surfaced in the end-of-run summary.
#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault root is not readable: {path}: {source}")]
    VaultUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Backup to {dest} failed: {source}")]
    Backup {
        dest: PathBuf,
        source: std::io::Error,
    },

    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Note is not valid UTF-8 text: {path}")]
    NoteDecode { path: PathBuf },

    #[error("Failed to write note {path}: {source}")]
    NoteWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("{0}")]
    Other(String),
}

impl LinkerError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LinkerError::VaultNotFound(_) | LinkerError::VaultUnreadable { .. } => {
                exit_code::VAULT_NOT_FOUND
            }
            LinkerError::Backup { .. } => exit_code::BACKUP_FAILED,
            LinkerError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for Notelink operations.
pub type Result<T> = std::result::Result<T, LinkerError>;

/// Exit status for CLI commands that completed without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// At least one note failed to parse or write; the rest of the run
    /// completed.
    PartialFailure,
}

impl ExitStatus {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => exit_code::SUCCESS,
            ExitStatus::PartialFailure => exit_code::PARTIAL_FAILURE,
        }
    }
}
