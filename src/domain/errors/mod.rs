//! Error types for the clip selection core

use thiserror::Error;

/// Domain-level error type. Every failure here is recoverable and reported
/// upward as a typed result; nothing aborts the process.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Clock string not matching HH:MM:SS
    #[error("Malformed timestamp: {value}. Expected HH:MM:SS")]
    MalformedTimestamp { value: String },

    /// Range validation failure
    #[error("Invalid range: start ({start}) must be less than end ({end})")]
    InvalidRange { start: f64, end: f64 },

    /// Export attempted with no resolvable source identifier
    #[error("No source identifier available for export")]
    MissingIdentity,

    /// Library save attempted without a signed-in user
    #[error("Sign-in required to save clips to the library")]
    SignInRequired,

    /// Clip extraction service unreachable or non-success
    #[error("Export service error: {message}")]
    ExportFailed { message: String },

    /// Persistence collaborator failure
    #[error("Clip store error: {message}")]
    StoreFailed { message: String },

    /// Unparseable or out-of-range configuration
    #[error("Invalid configuration: {message}")]
    BadConfig { message: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;
