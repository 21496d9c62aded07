// YouTube adapter that scrapes the rendered channel page.
//
// The page assigns its initial state to a global (`var ytInitialData = {...};`).
// Subscriber and video counts live in the page header's metadata rows:
//   row 0: ["@handle"]
//   row 1: ["チャンネル登録者数 11万人", "動画 1234 本"]

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use snsfetch_common::{AccountInfo, Platform};
use tracing::info;

use super::PlatformAdapter;
use crate::count::parse_youtube_count;
use crate::error::{AccountError, Result};
use crate::fetch::PageFetcher;
use crate::json_path::{JsonPath, Step};

const YOUTUBE_BASE: &str = "https://www.youtube.com";

static RE_YT_INITIAL_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialData\s*=\s*(\{.*?\});\s*</script>").unwrap()
});

const CHANNEL_TITLE: JsonPath = JsonPath(&[
    Step::Key("header"),
    Step::Key("pageHeaderRenderer"),
    Step::Key("pageTitle"),
]);

const METADATA_ROWS: JsonPath = JsonPath(&[
    Step::Key("header"),
    Step::Key("pageHeaderRenderer"),
    Step::Key("content"),
    Step::Key("pageHeaderViewModel"),
    Step::Key("metadata"),
    Step::Key("contentMetadataViewModel"),
    Step::Key("metadataRows"),
]);

const ROW_PARTS: JsonPath = JsonPath(&[Step::Key("metadataParts")]);

const PART_TEXT: JsonPath = JsonPath(&[Step::Key("text"), Step::Key("content")]);

/// Only the Japanese header is parsed; `parse_youtube_count` has no Latin suffixes.
const VIDEO_LABEL: &str = "動画";

pub struct YouTubePageAdapter {
    fetcher: PageFetcher,
}

impl YouTubePageAdapter {
    pub fn new() -> Result<Self> {
        Self::with_base_url(YOUTUBE_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new("YouTube", base_url, &[])?,
        })
    }
}

/// `/channel/{id}` for channel ids, `/{@handle}` otherwise.
fn channel_path(identifier: &str) -> Vec<&str> {
    if identifier.starts_with("UC") {
        vec!["channel", identifier]
    } else {
        vec![identifier]
    }
}

#[async_trait]
impl PlatformAdapter for YouTubePageAdapter {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    /// Handles get an "@" prefix; channel ids ("UC...") are left alone.
    fn normalize_identifier(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.starts_with('@') || raw.starts_with("UC") {
            raw.to_string()
        } else {
            format!("@{raw}")
        }
    }

    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
        let identifier = self.normalize_identifier(identifier);
        info!(identifier = %identifier, "youtube: fetching channel page");

        let html = self
            .fetcher
            .fetch_page(&channel_path(&identifier), &identifier)
            .await?;
        parse_youtube_channel(&html, &identifier)
    }
}

/// Extract channel metadata from a rendered channel page.
pub fn parse_youtube_channel(html: &str, identifier: &str) -> Result<AccountInfo> {
    let raw = RE_YT_INITIAL_DATA
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            AccountError::Extraction("Could not find ytInitialData in page".to_string())
        })?
        .as_str();

    let data: Value = serde_json::from_str(raw)
        .map_err(|e| AccountError::Extraction(format!("Failed to parse ytInitialData: {e}")))?;

    let title = CHANNEL_TITLE
        .resolve(&data)
        .ok()
        .and_then(Value::as_str)
        .ok_or_else(|| AccountError::NotFound(identifier.to_string()))?;

    let rows = METADATA_ROWS
        .resolve(&data)
        .map_err(|missing| AccountError::Extraction(format!("ytInitialData: {missing}")))?;

    let handle = row_texts(rows, 0)
        .into_iter()
        .next()
        .filter(|text| text.starts_with('@'));

    let stats = row_texts(rows, 1);
    let subscribers = stats.first().ok_or_else(|| {
        AccountError::Extraction("ytInitialData: subscriber count row is missing".to_string())
    })?;
    let videos = stats
        .iter()
        .skip(1)
        .find(|text| text.contains(VIDEO_LABEL));

    Ok(AccountInfo {
        account_id: handle.unwrap_or(identifier).to_string(),
        account_name: title.to_string(),
        followers_count: parse_youtube_count(subscribers),
        following_count: 0,
        post_count: videos.map(|text| parse_youtube_count(text)),
        platform: Platform::YouTube,
    })
}

/// Text of every part in metadata row `index`; empty when the row is absent.
fn row_texts(rows: &Value, index: usize) -> Vec<&str> {
    let Some(parts) = rows
        .get(index)
        .and_then(|row| ROW_PARTS.resolve(row).ok())
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    parts
        .iter()
        .filter_map(|part| PART_TEXT.resolve(part).ok().and_then(Value::as_str))
        .collect()
}
