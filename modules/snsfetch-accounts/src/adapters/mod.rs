// Platform adapters. Each adapter knows how to reach one platform and turn its
// payload into an `AccountInfo`. Adapters are built per lookup and hold no
// state between calls.

mod facebook;
mod instagram;
mod tiktok;
mod x;
mod youtube_api;
mod youtube_page;

pub use facebook::{parse_facebook_page, FacebookAdapter};
pub use instagram::{parse_instagram_profile, InstagramAdapter};
pub use tiktok::{parse_tiktok_profile, TikTokAdapter};
pub use x::XAdapter;
pub use youtube_api::YouTubeApiAdapter;
pub use youtube_page::{parse_youtube_channel, YouTubePageAdapter};

use async_trait::async_trait;
use snsfetch_common::{AccountInfo, Platform};

use crate::error::Result;

#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    fn platform(&self) -> Platform;

    /// Turn a caller-supplied identifier into the form this platform expects.
    /// Must be idempotent. The default strips every leading "@".
    fn normalize_identifier(&self, raw: &str) -> String {
        strip_at(raw).to_string()
    }

    /// Fetch account metadata. One upstream request, no retries.
    async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo>;
}

pub(crate) fn strip_at(raw: &str) -> &str {
    raw.trim().trim_start_matches('@')
}
