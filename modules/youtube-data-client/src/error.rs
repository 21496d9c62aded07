use thiserror::Error;

pub type Result<T> = std::result::Result<T, YouTubeApiError>;

#[derive(Debug, Error)]
pub enum YouTubeApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for YouTubeApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            YouTubeApiError::Timeout(err.to_string())
        } else {
            YouTubeApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for YouTubeApiError {
    fn from(err: serde_json::Error) -> Self {
        YouTubeApiError::Parse(err.to_string())
    }
}
