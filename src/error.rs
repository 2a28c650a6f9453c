use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// User-correctable input problem; rendered inline next to the field.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },
    #[error("remote call failed: {0}")]
    Remote(#[from] crate::remote::RemoteError),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Anything else that broke a submission after the remote call settled.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    #[must_use]
    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// The offending field of a validation error.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
