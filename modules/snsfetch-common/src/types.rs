use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Platforms ---

/// Social platforms an account lookup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    TikTok,
    X,
    Instagram,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::YouTube,
        Platform::TikTok,
        Platform::X,
        Platform::Instagram,
        Platform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::TikTok => "tiktok",
            Platform::X => "x",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    /// Case-insensitive. "twitter" is accepted as an alias for X.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "youtube" => Ok(Platform::YouTube),
            "tiktok" => Ok(Platform::TikTok),
            "x" | "twitter" => Ok(Platform::X),
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

// --- Account lookup ---

/// Public account metadata, as returned by every platform adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Identifier as reported by the source; may differ from the request.
    pub account_id: String,
    pub account_name: String,
    pub followers_count: u64,
    /// 0 where the platform has no following concept.
    pub following_count: u64,
    /// Only present when the source exposes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
    #[serde(rename = "sns")]
    pub platform: Platform,
}

// --- Post CRUD demo ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnsPost {
    pub id: u64,
    /// Free-form platform label ("twitter", "instagram", ...).
    pub platform: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsPostCreate {
    pub platform: String,
    pub content: String,
    pub author: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!("YouTube".parse::<Platform>(), Ok(Platform::YouTube));
        assert_eq!("TIKTOK".parse::<Platform>(), Ok(Platform::TikTok));
        assert_eq!(" instagram ".parse::<Platform>(), Ok(Platform::Instagram));
        assert_eq!("twitter".parse::<Platform>(), Ok(Platform::X));
    }

    #[test]
    fn platform_parse_rejects_unknown() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported platform: myspace");
    }

    #[test]
    fn platform_display_matches_serde() {
        for platform in Platform::ALL {
            let json = serde_json::to_value(platform).unwrap();
            assert_eq!(json, serde_json::json!(platform.to_string()));
        }
    }

    #[test]
    fn account_info_serializes_platform_as_sns() {
        let info = AccountInfo {
            account_id: "janedoe".into(),
            account_name: "Jane Doe".into(),
            followers_count: 831_000,
            following_count: 120,
            post_count: None,
            platform: Platform::Instagram,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["sns"], "instagram");
        assert_eq!(json["followers_count"], 831_000);
        assert!(json.get("post_count").is_none());
    }
}
