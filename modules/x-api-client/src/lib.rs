pub mod error;
pub mod types;

pub use error::{Result, XApiError};
pub use types::{ApiProblem, PublicMetrics, User, UserLookupResponse};

use std::time::Duration;

const BASE_URL: &str = "https://api.twitter.com";

/// Fields requested on every user lookup.
const USER_FIELDS: &str = "public_metrics,username,name";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct XClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
    bearer_token: String,
}

impl XClient {
    pub fn new(bearer_token: String) -> Result<Self> {
        Self::with_base_url(BASE_URL, bearer_token)
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(base_url: &str, bearer_token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| XApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(XApiError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            bearer_token,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| XApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Look up a user by username. Non-2xx answers come back as
    /// `XApiError::Api` so callers can map 401/404 themselves.
    pub async fn user_by_username(&self, username: &str) -> Result<UserLookupResponse> {
        let url = self.endpoint(&["2", "users", "by", "username", username])?;
        tracing::debug!(username, "x: user lookup");

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .query(&[("user.fields", USER_FIELDS)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(XApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
