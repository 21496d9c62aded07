// Instagram adapter: Open Graph meta tags on the public profile page.
//
// og:description looks like
//   "831K Followers, 120 Following, 45 Posts - See Instagram photos and videos from ..."
// or, for Japanese sessions,
//   "フォロワー83.1万人、フォロー中120人、投稿45件 - ..."

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use snsfetch_common::{AccountInfo, Platform};
use tracing::{debug, info};

use super::PlatformAdapter;
use crate::error::{AccountError, Result};
use crate::fetch::{PageFetcher, CLIENT_HINT_HEADERS};
use crate::html::PageDocument;
use crate::patterns::{first_count, CountPattern};

const INSTAGRAM_BASE: &str = "https://www.instagram.com";

static RE_FOLLOWERS_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,.KM]+)\s+Followers?").unwrap());
static RE_FOLLOWERS_JA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"フォロワー([\d,.KM万]+)人").unwrap());
static RE_FOLLOWING_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,.KM]+)\s+Following").unwrap());
static RE_FOLLOWING_JA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"フォロー中([\d,.KM万]+)人").unwrap());
static RE_POSTS_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,.KM]+)\s+Posts?").unwrap());
static RE_POSTS_JA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"投稿([\d,.KM万]+)件").unwrap());

/// "Jane Doe (@janedoe) • Instagram ..." and "名前(@user) • Instagram写真と動画"
static RE_DISPLAY_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)\s*\(@").unwrap());

const FOLLOWERS: &[CountPattern] = &[
    CountPattern { locale: "en", regex: &RE_FOLLOWERS_EN },
    CountPattern { locale: "ja", regex: &RE_FOLLOWERS_JA },
];

const FOLLOWING: &[CountPattern] = &[
    CountPattern { locale: "en", regex: &RE_FOLLOWING_EN },
    CountPattern { locale: "ja", regex: &RE_FOLLOWING_JA },
];

const POSTS: &[CountPattern] = &[
    CountPattern { locale: "en", regex: &RE_POSTS_EN },
    CountPattern { locale: "ja", regex: &RE_POSTS_JA },
];

pub struct InstagramAdapter {
    fetcher: PageFetcher,
}

impl InstagramAdapter {
    pub fn new() -> Result<Self> {
        Self::with_base_url(INSTAGRAM_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new("Instagram", base_url, CLIENT_HINT_HEADERS)?,
        })
    }
}

#[async_trait]
impl PlatformAdapter for InstagramAdapter {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
        let username = self.normalize_identifier(identifier);
        info!(username = %username, "instagram: fetching profile");

        // Profile URLs end in a slash: /{username}/
        let html = self.fetcher.fetch_page(&[&username, ""], &username).await?;
        parse_instagram_profile(&html, &username)
    }
}

/// Extract profile metadata from an Instagram profile page.
pub fn parse_instagram_profile(html: &str, username: &str) -> Result<AccountInfo> {
    let doc = PageDocument::parse(html);

    let description = doc.meta_content("og:description").ok_or_else(|| {
        AccountError::Extraction("Could not find account data in page".to_string())
    })?;

    let followers = first_count(FOLLOWERS, &description);
    let following = first_count(FOLLOWING, &description);
    if followers.is_none() && following.is_none() {
        debug!(username, description = %description, "instagram: no counts in og:description");
    }

    let account_name = doc
        .meta_content("og:title")
        .as_deref()
        .and_then(display_name)
        .unwrap_or_else(|| username.to_string());

    Ok(AccountInfo {
        account_id: username.to_string(),
        account_name,
        followers_count: followers.map_or(0, |m| m.value),
        following_count: following.map_or(0, |m| m.value),
        post_count: first_count(POSTS, &description).map(|m| m.value),
        platform: Platform::Instagram,
    })
}

fn display_name(title: &str) -> Option<String> {
    RE_DISPLAY_NAME
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
