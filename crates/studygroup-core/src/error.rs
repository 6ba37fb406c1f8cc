//! Core error types for studygroup-core.
//!
//! Invalid input and precondition violations are caller errors: they are
//! reported before any state is touched. Storage and sync failures wrap the
//! underlying library error.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studygroup-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected user input
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Operation not allowed in the current state
    #[error("{0}")]
    Precondition(#[from] PreconditionError),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote sync errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid input: a required field is empty or not a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty after trimming
    #[error("'{field}' must not be empty")]
    EmptyField { field: String },

    /// Numeric field could not be parsed
    #[error("'{field}' must be a non-negative whole number, got '{value}'")]
    NotANumber { field: String, value: String },

    /// Value parsed but is out of range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Caller errors that depend on the current application state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("add at least one subject before generating goals")]
    NoSubjects,

    #[error("daily goal minutes must be greater than zero (got {0})")]
    NonPositiveMinutes(i64),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("no group entered; run `group enter <id>` first")]
    NoActiveGroup,

    #[error("group '{0}' not found")]
    GroupNotFound(String),

    #[error("only members can enter group '{0}'; join it first")]
    NotMember(String),

    #[error("only the owner of group '{0}' can do that")]
    NotOwner(String),

    #[error("subject index {index} out of range (have {len})")]
    SubjectIndexOutOfRange { index: usize, len: usize },
}

/// Snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Remote sync errors. Never fatal: local state stays authoritative.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("invalid sync base url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
