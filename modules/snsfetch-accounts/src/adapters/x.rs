// X (Twitter) adapter: official API v2 user lookup.

use async_trait::async_trait;
use snsfetch_common::{AccountInfo, Platform};
use tracing::info;
use x_api_client::{UserLookupResponse, XApiError, XClient};

use super::PlatformAdapter;
use crate::error::{AccountError, Result};

pub struct XAdapter {
    client: XClient,
}

impl XAdapter {
    /// Fails with `Configuration` before anything touches the network when
    /// no bearer token is configured.
    pub fn new(bearer_token: Option<&str>) -> Result<Self> {
        let token = require_token(bearer_token)?;
        Ok(Self {
            client: XClient::new(token)
                .map_err(|e| AccountError::Internal(format!("failed to build X client: {e}")))?,
        })
    }

    pub fn with_base_url(base_url: &str, bearer_token: Option<&str>) -> Result<Self> {
        let token = require_token(bearer_token)?;
        Ok(Self {
            client: XClient::with_base_url(base_url, token)
                .map_err(|e| AccountError::Internal(format!("failed to build X client: {e}")))?,
        })
    }
}

fn require_token(bearer_token: Option<&str>) -> Result<String> {
    match bearer_token.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AccountError::Configuration(
            "X Bearer Token is not configured".to_string(),
        )),
    }
}

#[async_trait]
impl PlatformAdapter for XAdapter {
    fn platform(&self) -> Platform {
        Platform::X
    }

    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
        let username = self.normalize_identifier(identifier);
        info!(username = %username, "x: fetching user");

        let response = match self.client.user_by_username(&username).await {
            Ok(response) => response,
            Err(XApiError::Api { status: 404, .. }) => {
                return Err(AccountError::NotFound(username));
            }
            Err(e) => return Err(e.into()),
        };

        account_from_lookup(response, &username)
    }
}

fn account_from_lookup(response: UserLookupResponse, username: &str) -> Result<AccountInfo> {
    let user = response
        .data
        .ok_or_else(|| AccountError::NotFound(username.to_string()))?;
    let metrics = user.public_metrics.unwrap_or_default();

    Ok(AccountInfo {
        account_id: user.username,
        account_name: user.name,
        followers_count: metrics.followers_count,
        following_count: metrics.following_count,
        post_count: metrics.tweet_count,
        platform: Platform::X,
    })
}
