//! Error types for both sides of the migration.

use thiserror::Error;

/// Failures while obtaining the source user list. All of these are fatal:
/// they abort the run before any record is processed.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read source snapshot {path}: {message}")]
    ConfigRead { path: String, message: String },

    #[error("3x-ui authentication failed: {message}")]
    Authentication { message: String },

    #[error("3x-ui inbound listing failed: {message}")]
    Api { message: String },
}

/// Failures while talking to the destination panel. These are contained at
/// the driver's per-record boundary and never abort the batch.
#[derive(Error, Debug)]
pub enum DestinationError {
    #[error("network error during {operation}: {message}")]
    Network { operation: String, message: String },

    #[error("invalid {operation} response: {message}")]
    InvalidResponse { operation: String, message: String },

    #[error("{operation} of {username} rejected with status {status}: {body}")]
    Rejected {
        operation: String,
        username: String,
        status: u16,
        body: String,
    },
}
