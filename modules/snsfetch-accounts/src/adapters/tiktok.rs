// TikTok adapter: reads the rehydration JSON embedded in the profile page.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use snsfetch_common::{AccountInfo, Platform};
use tracing::info;

use super::PlatformAdapter;
use crate::error::{AccountError, Result};
use crate::fetch::PageFetcher;
use crate::html::PageDocument;
use crate::json_path::{JsonPath, Step};

const TIKTOK_BASE: &str = "https://www.tiktok.com";

const REHYDRATION_SCRIPT_ID: &str = "__UNIVERSAL_DATA_FOR_REHYDRATION__";

const USER_DETAIL: JsonPath = JsonPath(&[
    Step::Key("__DEFAULT_SCOPE__"),
    Step::Key("webapp.user-detail"),
]);

const USER_INFO: JsonPath = JsonPath(&[Step::Key("userInfo")]);

#[derive(Debug, Default, Deserialize)]
struct UserInfo {
    #[serde(default)]
    user: User,
    #[serde(default)]
    stats: Stats,
}

#[derive(Debug, Default, Deserialize)]
struct User {
    #[serde(rename = "uniqueId")]
    unique_id: Option<String>,
    nickname: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Stats {
    #[serde(rename = "followerCount", default)]
    follower_count: u64,
    #[serde(rename = "followingCount", default)]
    following_count: u64,
    #[serde(rename = "videoCount")]
    video_count: Option<u64>,
}

pub struct TikTokAdapter {
    fetcher: PageFetcher,
}

impl TikTokAdapter {
    pub fn new() -> Result<Self> {
        Self::with_base_url(TIKTOK_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new("TikTok", base_url, &[])?,
        })
    }
}

#[async_trait]
impl PlatformAdapter for TikTokAdapter {
    fn platform(&self) -> Platform {
        Platform::TikTok
    }

    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
        let username = self.normalize_identifier(identifier);
        info!(username = %username, "tiktok: fetching profile");

        let profile = format!("@{username}");
        let html = self.fetcher.fetch_page(&[&profile], &username).await?;
        parse_tiktok_profile(&html, &username)
    }
}

/// Extract profile metadata from a TikTok profile page.
pub fn parse_tiktok_profile(html: &str, username: &str) -> Result<AccountInfo> {
    let raw = PageDocument::parse(html)
        .script_by_id(REHYDRATION_SCRIPT_ID)
        .ok_or_else(|| AccountError::Extraction("Could not find user data in page".to_string()))?;

    let data: Value = serde_json::from_str(&raw)
        .map_err(|e| AccountError::Extraction(format!("Failed to parse TikTok page data: {e}")))?;

    let detail = USER_DETAIL
        .resolve(&data)
        .map_err(|missing| AccountError::Extraction(format!("TikTok page data: {missing}")))?;

    // The detail scope exists for unknown users too, just without userInfo.
    let user_info = USER_INFO
        .resolve_from(detail, "__DEFAULT_SCOPE__.webapp.user-detail")
        .ok()
        .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
        .ok_or_else(|| AccountError::NotFound(username.to_string()))?;

    let info: UserInfo = serde_json::from_value(user_info.clone())
        .map_err(|e| AccountError::Extraction(format!("Unexpected TikTok userInfo shape: {e}")))?;

    Ok(AccountInfo {
        account_id: info
            .user
            .unique_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| username.to_string()),
        account_name: info.user.nickname.unwrap_or_default(),
        followers_count: info.stats.follower_count,
        following_count: info.stats.following_count,
        post_count: info.stats.video_count,
        platform: Platform::TikTok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_page(script_body: &str) -> String {
        format!(
            r#"<!DOCTYPE html><html><head><title>TikTok</title></head><body>
<div id="app"></div>
<script id="__UNIVERSAL_DATA_FOR_REHYDRATION__" type="application/json">{script_body}</script>
</body></html>"#
        )
    }

    #[test]
    fn extracts_user_and_stats() {
        let html = profile_page(
            r#"{"__DEFAULT_SCOPE__":{"webapp.app-context":{},"webapp.user-detail":{"userInfo":{
                "user":{"id":"6789","uniqueId":"scout2015","nickname":"Scout 🐶","verified":false},
                "stats":{"followerCount":1234567,"followingCount":89,"heart":50000000,"videoCount":312}
            },"statusCode":0}}}"#,
        );

        let info = parse_tiktok_profile(&html, "Scout2015").unwrap();
        assert_eq!(
            info,
            AccountInfo {
                account_id: "scout2015".into(),
                account_name: "Scout 🐶".into(),
                followers_count: 1_234_567,
                following_count: 89,
                post_count: Some(312),
                platform: Platform::TikTok,
            }
        );
    }

    #[test]
    fn missing_unique_id_falls_back_to_input() {
        let html = profile_page(
            r#"{"__DEFAULT_SCOPE__":{"webapp.user-detail":{"userInfo":{
                "user":{"nickname":"No Id"},"stats":{"followerCount":5,"followingCount":6}}}}}"#,
        );

        let info = parse_tiktok_profile(&html, "fallback_user").unwrap();
        assert_eq!(info.account_id, "fallback_user");
        assert_eq!(info.followers_count, 5);
        assert_eq!(info.following_count, 6);
        assert_eq!(info.post_count, None);
    }

    #[test]
    fn missing_user_info_is_not_found() {
        let html = profile_page(
            r#"{"__DEFAULT_SCOPE__":{"webapp.user-detail":{"statusCode":10221,"statusMsg":"user not exist"}}}"#,
        );
        match parse_tiktok_profile(&html, "ghost") {
            Err(AccountError::NotFound(who)) => assert_eq!(who, "ghost"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_user_info_is_not_found() {
        let html = profile_page(r#"{"__DEFAULT_SCOPE__":{"webapp.user-detail":{"userInfo":{}}}}"#);
        assert!(matches!(
            parse_tiktok_profile(&html, "ghost"),
            Err(AccountError::NotFound(_))
        ));
    }

    #[test]
    fn missing_script_is_extraction_error() {
        let html = "<html><body><script id=\"SIGI_STATE\">{}</script></body></html>";
        match parse_tiktok_profile(html, "someone") {
            Err(AccountError::Extraction(msg)) => assert!(msg.contains("Could not find user data")),
            other => panic!("expected Extraction, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_extraction_error() {
        let html = profile_page("{not json");
        assert!(matches!(
            parse_tiktok_profile(&html, "someone"),
            Err(AccountError::Extraction(_))
        ));
    }

    #[test]
    fn missing_scope_names_the_step() {
        let html = profile_page(r#"{"__DEFAULT_SCOPE__":{"webapp.app-context":{}}}"#);
        match parse_tiktok_profile(&html, "someone") {
            Err(AccountError::Extraction(msg)) => {
                assert!(msg.contains("missing `webapp.user-detail` at __DEFAULT_SCOPE__"), "{msg}")
            }
            other => panic!("expected Extraction, got {other:?}"),
        }
    }
}
