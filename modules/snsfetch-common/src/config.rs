use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which YouTube adapter the resolver wires up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YouTubeSource {
    /// YouTube Data API v3 (needs `YOUTUBE_API_KEY`).
    Api,
    /// Scrape the rendered channel page.
    Page,
}

impl FromStr for YouTubeSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "api" => Ok(YouTubeSource::Api),
            "page" | "scrape" => Ok(YouTubeSource::Page),
            other => Err(anyhow!("YOUTUBE_SOURCE must be \"api\" or \"page\", got {other:?}")),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Credentials are optional here; adapters that need one fail when built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Platform credentials
    pub x_bearer_token: Option<String>,
    pub youtube_api_key: Option<String>,
    pub youtube_source: YouTubeSource,

    // Web server
    pub api_host: String,
    pub api_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let youtube_api_key = get("YOUTUBE_API_KEY");
        let youtube_source = match get("YOUTUBE_SOURCE") {
            Some(raw) => raw.parse()?,
            None if youtube_api_key.is_some() => YouTubeSource::Api,
            None => YouTubeSource::Page,
        };

        let api_port = match get("API_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("API_PORT must be a number, got {raw:?}"))?,
            None => 8000,
        };

        Ok(Self {
            x_bearer_token: get("X_BEARER_TOKEN"),
            youtube_api_key,
            youtube_source,
            api_host: get("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port,
        })
    }

    fn log_keys(&self) {
        fn preview_opt(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let n = v.char_indices().nth(5).map(|(i, _)| i).unwrap_or(v.len());
                    format!("{}...({} chars)", &v[..n], v.len())
                }
                None => "<not set>".to_string(),
            }
        }

        tracing::info!("Config loaded:");
        tracing::info!("  X_BEARER_TOKEN: {}", preview_opt(&self.x_bearer_token));
        tracing::info!("  YOUTUBE_API_KEY: {}", preview_opt(&self.youtube_api_key));
        tracing::info!("  YOUTUBE_SOURCE: {:?}", self.youtube_source);
    }
}
