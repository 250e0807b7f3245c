use thiserror::Error;

/// Errors produced by the user service.
///
/// `Invalid` carries the human-readable rejection reason and is surfaced to
/// the client in the response body; `Database` wraps persistence failures and
/// is never leaked to the client.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Invalid(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl UserError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        UserError::Invalid(reason.into())
    }
}
