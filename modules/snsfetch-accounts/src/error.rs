/// Result type alias for account lookups.
pub type Result<T> = std::result::Result<T, AccountError>;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A required credential is missing. Raised when an adapter is built.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Invalid account identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Personal accounts are not supported. Only Facebook Pages can be accessed: {0}")]
    PersonalAccountNotSupported(String),

    /// The payload did not have the expected shape; usually a layout change upstream.
    #[error("Could not extract account data: {0}")]
    Extraction(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Who is at fault for a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Reported to the caller verbatim.
    Client,
    /// Reported as a summary only; details stay in the logs.
    Server,
}

impl AccountError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AccountError::Configuration(_) | AccountError::Internal(_) => ErrorClass::Server,
            _ => ErrorClass::Client,
        }
    }

    /// Message safe to hand back to an API caller.
    pub fn public_message(&self) -> String {
        match self.class() {
            ErrorClass::Client => self.to_string(),
            ErrorClass::Server => match self {
                AccountError::Configuration(_) => {
                    "Server is not configured for this platform".to_string()
                }
                _ => "Failed to fetch account info".to_string(),
            },
        }
    }
}

impl From<x_api_client::XApiError> for AccountError {
    fn from(err: x_api_client::XApiError) -> Self {
        use x_api_client::XApiError;
        match err {
            XApiError::Api { status: 401, .. } => AccountError::Authentication(
                "X API authentication failed. Please check your Bearer Token.".to_string(),
            ),
            XApiError::Api { status, message } => {
                AccountError::Upstream(format!("X API error: {status} - {message}"))
            }
            XApiError::Network(msg) | XApiError::Timeout(msg) => {
                AccountError::Upstream(format!("HTTP error occurred: {msg}"))
            }
            XApiError::Parse(msg) => AccountError::Extraction(format!("X API response: {msg}")),
            XApiError::InvalidUrl(msg) => AccountError::Internal(format!("X client: {msg}")),
        }
    }
}

impl From<youtube_data_client::YouTubeApiError> for AccountError {
    fn from(err: youtube_data_client::YouTubeApiError) -> Self {
        use youtube_data_client::YouTubeApiError;
        match err {
            YouTubeApiError::Api { status: 401 | 403, message } => {
                AccountError::Authentication(format!("YouTube API rejected the key: {message}"))
            }
            YouTubeApiError::Api { status, message } => {
                AccountError::Upstream(format!("YouTube API error: {status} - {message}"))
            }
            YouTubeApiError::Network(msg) | YouTubeApiError::Timeout(msg) => {
                AccountError::Upstream(format!("HTTP error occurred: {msg}"))
            }
            YouTubeApiError::Parse(msg) => {
                AccountError::Extraction(format!("YouTube API response: {msg}"))
            }
        }
    }
}
