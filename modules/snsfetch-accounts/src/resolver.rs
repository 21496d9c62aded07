// Routes a platform tag and a raw identifier to a freshly built adapter.

use std::collections::HashMap;

use snsfetch_common::{AccountInfo, AppConfig, Platform, YouTubeSource};
use tracing::{error, warn};

use crate::adapters::{
    strip_at, FacebookAdapter, InstagramAdapter, PlatformAdapter, TikTokAdapter, XAdapter,
    YouTubeApiAdapter, YouTubePageAdapter,
};
use crate::error::{AccountError, ErrorClass, Result};

/// Builds one adapter for one lookup.
pub type AdapterFactory = Box<dyn Fn() -> Result<Box<dyn PlatformAdapter>> + Send + Sync>;

pub struct AccountResolver {
    factories: HashMap<Platform, AdapterFactory>,
}

impl AccountResolver {
    /// A resolver with no platforms wired up.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the factory for `platform`.
    pub fn with_adapter(
        mut self,
        platform: Platform,
        factory: impl Fn() -> Result<Box<dyn PlatformAdapter>> + Send + Sync + 'static,
    ) -> Self {
        self.factories.insert(platform, Box::new(factory));
        self
    }

    /// Every platform, with credentials taken from `config`. Adapters that
    /// need a missing credential still register; they fail when built.
    pub fn from_config(config: &AppConfig) -> Self {
        let x_token = config.x_bearer_token.clone();
        let youtube_key = config.youtube_api_key.clone();

        let resolver = Self::new()
            .with_adapter(Platform::X, move || {
                Ok(Box::new(XAdapter::new(x_token.as_deref())?))
            })
            .with_adapter(Platform::TikTok, || Ok(Box::new(TikTokAdapter::new()?)))
            .with_adapter(Platform::Instagram, || Ok(Box::new(InstagramAdapter::new()?)))
            .with_adapter(Platform::Facebook, || Ok(Box::new(FacebookAdapter::new()?)));

        match config.youtube_source {
            YouTubeSource::Api => resolver.with_adapter(Platform::YouTube, move || {
                Ok(Box::new(YouTubeApiAdapter::new(youtube_key.as_deref())?))
            }),
            YouTubeSource::Page => resolver.with_adapter(Platform::YouTube, || {
                Ok(Box::new(YouTubePageAdapter::new()?))
            }),
        }
    }

    /// Look up one account. `platform_tag` is case-insensitive and accepts
    /// "twitter" for X.
    pub async fn resolve(&self, platform_tag: &str, identifier: &str) -> Result<AccountInfo> {
        let platform: Platform = platform_tag
            .parse()
            .map_err(|_| AccountError::UnsupportedPlatform(platform_tag.trim().to_string()))?;

        let identifier = identifier.trim();
        if strip_at(identifier).is_empty() {
            return Err(AccountError::InvalidIdentifier(
                "account_id must not be empty".to_string(),
            ));
        }

        let factory = self
            .factories
            .get(&platform)
            .ok_or_else(|| AccountError::UnsupportedPlatform(platform.to_string()))?;

        let result = match factory() {
            Ok(adapter) if adapter.platform() != platform => Err(AccountError::Internal(format!(
                "{platform} factory built a {} adapter",
                adapter.platform()
            ))),
            Ok(adapter) => {
                let normalized = adapter.normalize_identifier(identifier);
                adapter.fetch_account(&normalized).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            match e.class() {
                ErrorClass::Client => {
                    warn!(%platform, identifier, error = %e, "account lookup failed")
                }
                ErrorClass::Server => {
                    error!(%platform, identifier, error = %e, "account lookup failed")
                }
            }
        }
        result
    }
}

impl Default for AccountResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    /// Records the identifiers it was asked for and answers with a canned account.
    struct RecordingAdapter {
        platform: Platform,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PlatformAdapter for RecordingAdapter {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn fetch_account(&self, identifier: &str) -> Result<AccountInfo> {
            self.seen.lock().unwrap().push(identifier.to_string());
            Ok(AccountInfo {
                account_id: identifier.to_string(),
                account_name: "Recorded".to_string(),
                followers_count: 10,
                following_count: 1,
                post_count: None,
                platform: self.platform,
            })
        }
    }

    struct Harness {
        resolver: AccountResolver,
        builds: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    fn harness(platform: Platform) -> Harness {
        let builds = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (b, s) = (builds.clone(), seen.clone());
        let resolver = AccountResolver::new().with_adapter(platform, move || {
            b.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(RecordingAdapter {
                platform,
                seen: s.clone(),
            }))
        });
        Harness {
            resolver,
            builds,
            seen,
        }
    }

    #[tokio::test]
    async fn routes_by_tag_and_strips_at() {
        let h = harness(Platform::X);
        let info = h.resolver.resolve("x", "  @jack ").await.unwrap();
        assert_eq!(info.account_id, "jack");
        assert_eq!(info.platform, Platform::X);
        assert_eq!(*h.seen.lock().unwrap(), vec!["jack".to_string()]);
    }

    #[tokio::test]
    async fn tag_is_case_insensitive_and_accepts_twitter() {
        let h = harness(Platform::X);
        h.resolver.resolve("X", "a").await.unwrap();
        h.resolver.resolve("Twitter", "b").await.unwrap();
        assert_eq!(h.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn builds_a_fresh_adapter_per_call() {
        let h = harness(Platform::TikTok);
        for _ in 0..3 {
            h.resolver.resolve("tiktok", "scout2015").await.unwrap();
        }
        assert_eq!(h.builds.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn unknown_tag_is_unsupported_platform() {
        let h = harness(Platform::X);
        match h.resolver.resolve("myspace", "tom").await {
            Err(AccountError::UnsupportedPlatform(tag)) => assert_eq!(tag, "myspace"),
            other => panic!("expected UnsupportedPlatform, got {other:?}"),
        }
        assert_eq!(h.builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unregistered_platform_is_unsupported() {
        let h = harness(Platform::X);
        assert!(matches!(
            h.resolver.resolve("facebook", "page").await,
            Err(AccountError::UnsupportedPlatform(_))
        ));
    }

    #[tokio::test]
    async fn empty_identifiers_are_rejected_before_building() {
        let h = harness(Platform::Instagram);
        for raw in ["", "   ", "@", " @@ "] {
            assert!(
                matches!(
                    h.resolver.resolve("instagram", raw).await,
                    Err(AccountError::InvalidIdentifier(_))
                ),
                "{raw:?} should be rejected"
            );
        }
        assert_eq!(h.builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn adapter_for_another_platform_is_internal_error() {
        let builds = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (b, s) = (builds.clone(), seen.clone());
        let resolver = AccountResolver::new().with_adapter(Platform::Facebook, move || {
            b.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(RecordingAdapter {
                platform: Platform::Instagram,
                seen: s.clone(),
            }))
        });

        match resolver.resolve("facebook", "somepage").await {
            Err(AccountError::Internal(msg)) => {
                assert_eq!(msg, "facebook factory built a instagram adapter")
            }
            other => panic!("expected Internal, got {other:?}"),
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn configured_adapters_match_their_platform() {
        let config = AppConfig::from_lookup(|key| match key {
            "X_BEARER_TOKEN" => Some("token".to_string()),
            "YOUTUBE_API_KEY" => Some("key".to_string()),
            _ => None,
        })
        .unwrap();
        let resolver = AccountResolver::from_config(&config);
        for platform in Platform::ALL {
            let adapter = (resolver.factories[&platform])().unwrap();
            assert_eq!(adapter.platform(), platform);
        }
    }

    #[tokio::test]
    async fn factory_failure_is_returned() {
        let resolver = AccountResolver::new().with_adapter(Platform::X, || {
            Err(AccountError::Configuration("X Bearer Token is not configured".into()))
        });
        let err = resolver.resolve("x", "jack").await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::Server);
    }

    #[tokio::test]
    async fn missing_credentials_fail_without_network() {
        let config = AppConfig::from_lookup(|key| match key {
            "YOUTUBE_SOURCE" => Some("api".to_string()),
            _ => None,
        })
        .unwrap();
        let resolver = AccountResolver::from_config(&config);

        assert!(matches!(
            resolver.resolve("x", "jack").await,
            Err(AccountError::Configuration(_))
        ));
        assert!(matches!(
            resolver.resolve("youtube", "UCxyz").await,
            Err(AccountError::Configuration(_))
        ));
    }

    #[test]
    fn from_config_registers_every_platform() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let resolver = AccountResolver::from_config(&config);
        for platform in Platform::ALL {
            assert!(resolver.factories.contains_key(&platform), "{platform} missing");
        }
    }
}
