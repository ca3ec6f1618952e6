use thiserror::Error;

pub type Result<T> = std::result::Result<T, RedditError>;

/// Failure kinds are kept distinct so callers can log the cause even when
/// they treat every kind the same way.
#[derive(Debug, Error)]
pub enum RedditError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl From<reqwest::Error> for RedditError {
    fn from(err: reqwest::Error) -> Self {
        RedditError::Network(err.to_string())
    }
}
