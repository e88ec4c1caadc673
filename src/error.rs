use thiserror::Error;

/// Failure raised by the remote content API layer. Everything the caller
/// can see collapses into one of two cases: the transport broke, or the
/// server answered and said no.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status or a `success: false` envelope, carrying the server
    /// message when one was present.
    #[error("{message}")]
    Rejected { message: String },
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            message: message.into(),
        }
    }
}

/// Failure raised when submitting a draft for persistence.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
