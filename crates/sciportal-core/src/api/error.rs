use thiserror::Error;

/// Failure kinds a service call can surface.
///
/// `Validation` never touched the network; `Transport` never got an answer;
/// `Rejected` is the server saying no, carrying its own message verbatim;
/// `InvalidResponse` is a body that was not the expected JSON envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected {
        /// HTTP status the rejection arrived with.
        status: Option<u16>,
        message: String,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Local pre-flight rejection; no request was sent.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
