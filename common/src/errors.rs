// Error handling framework

use thiserror::Error;

/// Configuration errors, fatal at first use
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Database connection string '{0}' is not configured.")]
    MissingConnectionString(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Authentication and token errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Failed to issue token: {0}")]
    IssueFailed(String),
}

/// Faults raised while talking to the remote store.
///
/// Expected outcomes (not found, validation failure, identifier mismatch)
/// are not errors; they travel in [`crate::outcome::Outcome`]. Anything
/// here aborts the operation and surfaces as a 500-equivalent.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Procedure '{procedure}' failed: {message}")]
    ProcedureFailed { procedure: String, message: String },

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl StoreError {
    /// Wrap a store driver error with the name of the procedure that
    /// was executing when it occurred.
    pub fn procedure(procedure: &str, err: sqlx::Error) -> Self {
        StoreError::ProcedureFailed {
            procedure: procedure.to_string(),
            message: err.to_string(),
        }
    }
}
