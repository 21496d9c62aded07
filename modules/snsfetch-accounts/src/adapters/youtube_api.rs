// YouTube adapter backed by the Data API v3 (channels.list).

use async_trait::async_trait;
use snsfetch_common::{AccountInfo, Platform};
use tracing::info;
use youtube_data_client::{ChannelListResponse, ChannelLookup, YouTubeApiError, YouTubeDataClient};

use super::PlatformAdapter;
use crate::error::{AccountError, Result};

pub struct YouTubeApiAdapter {
    client: YouTubeDataClient,
}

impl YouTubeApiAdapter {
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        let key = require_key(api_key)?;
        Ok(Self {
            client: YouTubeDataClient::new(key).map_err(|e| {
                AccountError::Internal(format!("failed to build YouTube client: {e}"))
            })?,
        })
    }

    pub fn with_base_url(base_url: &str, api_key: Option<&str>) -> Result<Self> {
        let key = require_key(api_key)?;
        Ok(Self {
            client: YouTubeDataClient::with_base_url(base_url, key).map_err(|e| {
                AccountError::Internal(format!("failed to build YouTube client: {e}"))
            })?,
        })
    }
}

fn require_key(api_key: Option<&str>) -> Result<String> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(AccountError::Configuration(
            "YouTube API key is not configured".to_string(),
        )),
    }
}

#[async_trait]
impl PlatformAdapter for YouTubeApiAdapter {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    /// Handles are passed to `forHandle` as given; the API accepts them with
    /// or without "@".
    fn normalize_identifier(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
        let identifier = self.normalize_identifier(identifier);
        let lookup = ChannelLookup::from_identifier(&identifier);
        info!(identifier = %identifier, ?lookup, "youtube: fetching channel via API");

        let response = match self.client.list_channels(lookup).await {
            Ok(response) => response,
            Err(YouTubeApiError::Api { status: 404, .. }) => {
                return Err(AccountError::NotFound(identifier));
            }
            Err(e) => return Err(e.into()),
        };

        account_from_channels(response, &identifier)
    }
}

fn account_from_channels(response: ChannelListResponse, identifier: &str) -> Result<AccountInfo> {
    let channel = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| AccountError::NotFound(identifier.to_string()))?;

    let stats = channel.statistics;
    Ok(AccountInfo {
        account_id: channel.id,
        account_name: channel.snippet.title,
        followers_count: lenient_u64(stats.subscriber_count.as_deref()),
        // Channels have no following concept.
        following_count: 0,
        post_count: stats
            .video_count
            .as_deref()
            .and_then(|v| v.trim().parse().ok()),
        platform: Platform::YouTube,
    })
}

fn lenient_u64(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
