// Facebook adapter: public Pages only. Personal profiles serve a login
// teaser in og:description and are rejected.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use snsfetch_common::{AccountInfo, Platform};
use tracing::{debug, info};

use super::PlatformAdapter;
use crate::error::{AccountError, Result};
use crate::fetch::PageFetcher;
use crate::html::PageDocument;
use crate::patterns::{first_count, CountPattern};

const FACEBOOK_BASE: &str = "https://www.facebook.com";

/// Phrases that only appear in the description of a personal profile.
const PERSONAL_PROFILE_MARKERS: &[&str] = &[
    "Facebookを利用しています",
    "Facebookに登録して",
    "Join Facebook to connect",
    "Facebook에 가입하여",
    "加入 Facebook，与",
];

static RE_LIKES_JA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"「いいね！」([\d,.]+[万萬]?)件").unwrap());
static RE_LIKES_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,.]+[KM]?)\s*(?i:likes?)").unwrap());
static RE_LIKES_ZH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,.]+[萬万]?)\s*次贊").unwrap());

const LIKES: &[CountPattern] = &[
    CountPattern { locale: "ja", regex: &RE_LIKES_JA },
    CountPattern { locale: "en", regex: &RE_LIKES_EN },
    CountPattern { locale: "zh", regex: &RE_LIKES_ZH },
];

pub struct FacebookAdapter {
    fetcher: PageFetcher,
}

impl FacebookAdapter {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FACEBOOK_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new("Facebook", base_url, &[])?,
        })
    }
}

#[async_trait]
impl PlatformAdapter for FacebookAdapter {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
        let page_id = self.normalize_identifier(identifier);
        info!(page_id = %page_id, "facebook: fetching page");

        let html = self.fetcher.fetch_page(&[&page_id], &page_id).await?;
        parse_facebook_page(&html, &page_id)
    }
}

/// Extract page metadata from a Facebook Page. Likes stand in for followers.
pub fn parse_facebook_page(html: &str, page_id: &str) -> Result<AccountInfo> {
    let doc = PageDocument::parse(html);

    let title = doc
        .meta_content("og:title")
        .ok_or_else(|| AccountError::Extraction("Could not find page data".to_string()))?;

    let description = doc.meta_content("og:description").unwrap_or_default();

    if PERSONAL_PROFILE_MARKERS
        .iter()
        .any(|marker| description.contains(marker))
    {
        return Err(AccountError::PersonalAccountNotSupported(page_id.to_string()));
    }

    let likes = first_count(LIKES, &description);
    if let Some(found) = likes {
        debug!(page_id, locale = found.locale, likes = found.value, "facebook: like count matched");
    }

    Ok(AccountInfo {
        account_id: page_id.to_string(),
        account_name: if title.is_empty() {
            page_id.to_string()
        } else {
            title
        },
        followers_count: likes.map_or(0, |m| m.value),
        following_count: 0,
        post_count: None,
        platform: Platform::Facebook,
    })
}
