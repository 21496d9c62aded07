pub mod adapters;
pub mod count;
pub mod error;
mod fetch;
mod html;
pub mod json_path;
mod patterns;
pub mod resolver;

pub use adapters::{
    FacebookAdapter, InstagramAdapter, PlatformAdapter, TikTokAdapter, XAdapter, YouTubeApiAdapter,
    YouTubePageAdapter,
};
pub use count::{parse_count, parse_youtube_count};
pub use error::{AccountError, ErrorClass, Result};
pub use resolver::{AccountResolver, AdapterFactory};
pub use snsfetch_common::{AccountInfo, Platform};
