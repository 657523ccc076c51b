//! Error types for palaver.
//!
//! Uses thiserror for derive macros. Expected lock outcomes (queued, not the
//! holder, ...) are never errors; only contract violations and I/O failures
//! end up here.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for palaver operations.
#[derive(Error, Debug)]
pub enum PalaverError {
    /// User provided invalid arguments or unusable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A snapshot or export file could not be read or written.
    #[error("Persistence failed: {0}")]
    PersistenceError(String),

    /// A caller broke the lock manager's contract (e.g. an empty resource name).
    #[error("Lock contract violated: {0}")]
    LockContract(String),

    /// Internal lock state is inconsistent.
    #[error("Lock invariant violated on '{resource}': {detail}")]
    InvariantViolation { resource: String, detail: String },
}

impl PalaverError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PalaverError::UserError(_) => exit_codes::USER_ERROR,
            PalaverError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PalaverError::PersistenceError(_) => exit_codes::PERSISTENCE_FAILURE,
            PalaverError::LockContract(_) | PalaverError::InvariantViolation { .. } => {
                exit_codes::LOCK_CONTRACT_FAILURE
            }
        }
    }
}

/// Result type alias for palaver operations.
pub type Result<T> = std::result::Result<T, PalaverError>;
