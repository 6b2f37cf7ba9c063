// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

/// Errors raised at the request boundary (loading, parsing, validation).
///
/// The scheduling core itself never produces these; it reports its outcomes
/// as [`ScheduleError`] folded into a result value.
#[derive(Error, Debug)]
pub enum TaskorderError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestRejected),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// A request that failed boundary validation.
///
/// The inner text is caller-facing and is returned as the response message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid request: {0}")]
pub struct RequestRejected(pub String);

/// Rejection outcomes of the scheduling pipeline.
///
/// `Display` yields the fixed, caller-facing message for each outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Error: No tasks provided for scheduling")]
    EmptyInput,

    #[error("Error: Circular dependency detected in tasks")]
    CircularDependency {
        /// Titles taking part in at least one cycle (diagnostics only).
        members: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, TaskorderError>;
