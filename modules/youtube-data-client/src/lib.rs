pub mod error;
pub mod types;

pub use error::{Result, YouTubeApiError};
pub use types::{Channel, ChannelListResponse, ChannelLookup, ChannelSnippet, ChannelStatistics};

use std::time::Duration;

const BASE_URL: &str = "https://www.googleapis.com";

const CHANNEL_PARTS: &str = "snippet,statistics";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct YouTubeDataClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeDataClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// `channels.list` with `part=snippet,statistics`.
    pub async fn list_channels(&self, lookup: ChannelLookup<'_>) -> Result<ChannelListResponse> {
        let url = format!("{}/youtube/v3/channels", self.base_url);
        let (param, value) = lookup.query_pair();
        tracing::debug!(param, value, "youtube: channels.list");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("part", CHANNEL_PARTS),
                (param, value),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(YouTubeApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
