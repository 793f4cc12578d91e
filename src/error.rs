//! Error types for the progression library

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while validating XP input or building level tables
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// Cumulative XP never goes below zero
    #[error("XP cannot be negative (got {0})")]
    NegativeXp(i64),

    #[error("invalid level curve: {0}")]
    InvalidCurve(String),

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level curve: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ProgressionError>;
