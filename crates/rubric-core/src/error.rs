//! Error types and exit codes for rubric
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown assignment, invalid config, missing record)
//!
//! Only failures that abort a whole run live here. Problems with a single
//! annotation or criterion are reported as [`crate::extract::Diagnostic`]s.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the rubric CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown assignment, invalid config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rubric operations
#[derive(Error, Debug)]
pub enum RubricError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown dialect: {0} (expected: auto, hash, or latex)")]
    UnknownDialect(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("assignment not found: {id}")]
    AssignmentNotFound { id: String },

    #[error("no stored rubric for assignment: {id}")]
    RubricNotFound { id: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("document unavailable: {path}: {reason}")]
    DocumentUnavailable { path: String, reason: String },

    #[error("failed to store rubric for {assignment_id}: {reason}")]
    StoreFailed {
        assignment_id: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RubricError {
    /// Create an error for a document that could not be fetched
    pub fn document_unavailable(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        RubricError::DocumentUnavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed persistence call
    pub fn store_failed(assignment_id: &str, reason: impl std::fmt::Display) -> Self {
        RubricError::StoreFailed {
            assignment_id: assignment_id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RubricError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RubricError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RubricError::UnknownFormat(_)
            | RubricError::UnknownDialect(_)
            | RubricError::UsageError(_)
            | RubricError::InvalidValue { .. } => ExitCode::Usage,

            RubricError::AssignmentNotFound { .. }
            | RubricError::RubricNotFound { .. }
            | RubricError::InvalidConfig { .. } => ExitCode::Data,

            RubricError::DocumentUnavailable { .. }
            | RubricError::StoreFailed { .. }
            | RubricError::Io(_)
            | RubricError::Json(_)
            | RubricError::Toml(_)
            | RubricError::FailedOperationWithTarget { .. }
            | RubricError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RubricError::UnknownFormat(_) => "unknown_format",
            RubricError::UnknownDialect(_) => "unknown_dialect",
            RubricError::UsageError(_) => "usage_error",
            RubricError::InvalidValue { .. } => "invalid_value",
            RubricError::AssignmentNotFound { .. } => "assignment_not_found",
            RubricError::RubricNotFound { .. } => "rubric_not_found",
            RubricError::InvalidConfig { .. } => "invalid_config",
            RubricError::DocumentUnavailable { .. } => "document_unavailable",
            RubricError::StoreFailed { .. } => "store_failed",
            RubricError::Io(_) => "io_error",
            RubricError::Json(_) => "json_error",
            RubricError::Toml(_) => "toml_error",
            RubricError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RubricError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rubric operations
pub type Result<T> = std::result::Result<T, RubricError>;
