use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    Invalid(&'static str),
}

/// The single failure kind of a generation attempt.
///
/// Transport errors, non-success statuses and unreadable response bodies all
/// collapse into `RequestFailed`; callers only ever need the message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    RequestFailed(String),
}

impl GenerateError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        GenerateError::RequestFailed(msg.into())
    }
}
