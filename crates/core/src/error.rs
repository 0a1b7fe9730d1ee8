//! Domain error taxonomy.
//!
//! Redemption business-rule violations each get their own variant so the
//! API layer can surface a distinct `errorType` tag with tailored
//! remediation guidance. Provider and storage failures carry only a short
//! message; internal detail stays in the logs.

/// Core domain errors shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or missing input from the client (user-correctable).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The redemption code does not exist.
    #[error("Unknown redemption code")]
    InvalidCode,

    /// The redemption code has already been consumed.
    #[error("Redemption code already used")]
    AlreadyUsed,

    /// Another redemption for this code is currently in flight.
    #[error("Redemption code is pending another redemption")]
    CodePending,

    /// The redemption code has expired (legacy schema only).
    #[error("Redemption code expired")]
    Expired,

    /// The redemption code has no uses left (legacy schema only).
    #[error("Redemption code exhausted")]
    Exhausted,

    /// The requested generation job does not exist.
    #[error("Job {0} not found")]
    JobNotFound(String),

    /// The external AI provider reported or caused a failure. Retryable
    /// up to the worker's retry ceiling.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The persistence layer failed. Not retried automatically.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// The wire-level `errorType` tag for this error, one of
    /// `empty|used|pending|invalid|expired|exhausted|server|network`.
    pub fn error_type(&self) -> &'static str {
        match self {
            CoreError::InvalidRequest(_) => "empty",
            CoreError::InvalidCode => "invalid",
            CoreError::AlreadyUsed => "used",
            CoreError::CodePending => "pending",
            CoreError::Expired => "expired",
            CoreError::Exhausted => "exhausted",
            CoreError::JobNotFound(_) => "invalid",
            CoreError::Provider(_) => "network",
            CoreError::Storage(_) => "server",
        }
    }
}

/// Convenience alias for core results.
pub type CoreResult<T> = Result<T, CoreError>;
