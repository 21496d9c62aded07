// Browser-like HTML fetching shared by the scraping adapters.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{AccountError, Result};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "ja-JP,ja;q=0.9,en-US;q=0.8,en;q=0.7";

/// Navigation headers a desktop Chrome sends for a top-level page load.
const NAVIGATION_HEADERS: &[(&str, &str)] = &[
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
];

/// Client hints; Instagram serves a stripped page without them.
pub const CLIENT_HINT_HEADERS: &[(&str, &str)] = &[
    ("sec-ch-ua", r#""Not_A Brand";v="8", "Chromium";v="120", "Google Chrome";v="120""#),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""macOS""#),
];

/// One HTTP GET per lookup, with browser headers, redirects and a fixed timeout.
pub struct PageFetcher {
    client: reqwest::Client,
    base_url: Url,
    label: &'static str,
    timeout: Duration,
}

impl PageFetcher {
    /// `label` prefixes error messages ("Instagram error: 503").
    pub fn new(
        label: &'static str,
        base_url: &str,
        extra_headers: &[(&str, &str)],
    ) -> Result<Self> {
        Self::with_timeout(label, base_url, extra_headers, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(
        label: &'static str,
        base_url: &str,
        extra_headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AccountError::Internal(format!("invalid {label} base URL {base_url}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AccountError::Internal(format!(
                "invalid {label} base URL {base_url}"
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        for (name, value) in NAVIGATION_HEADERS {
            insert_header(&mut headers, name, value)?;
        }
        for (name, value) in extra_headers {
            insert_header(&mut headers, name, value)?;
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()
            .map_err(|e| AccountError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            label,
            timeout,
        })
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded on
    /// its own, so "/", "?" and "#" inside an identifier stay in the path.
    pub fn page_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AccountError::Internal(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch the page at `segments` below the base URL. 404 is
    /// `NotFound(not_found_subject)`; any other non-200 answer and every
    /// transport failure is `Upstream`.
    pub async fn fetch_page(&self, segments: &[&str], not_found_subject: &str) -> Result<String> {
        let url = self.page_url(segments)?;
        debug!(url = %url, "fetching page");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        match resp.status() {
            StatusCode::OK => resp.text().await.map_err(|e| self.transport_error(e)),
            StatusCode::NOT_FOUND => Err(AccountError::NotFound(not_found_subject.to_string())),
            status => Err(AccountError::Upstream(format!(
                "{} error: {}",
                self.label,
                status.as_u16()
            ))),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> AccountError {
        if err.is_timeout() {
            AccountError::Upstream(format!("request timed out after {:?}: {err}", self.timeout))
        } else {
            AccountError::Upstream(format!("HTTP error occurred: {err}"))
        }
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| AccountError::Internal(format!("invalid header name {name}: {e}")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| AccountError::Internal(format!("invalid value for header {name}: {e}")))?;
    headers.insert(header_name, header_value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(base_url: &str) -> PageFetcher {
        PageFetcher::new("Test", base_url, &[]).unwrap()
    }

    #[test]
    fn page_url_appends_segments() {
        let f = fetcher("https://www.instagram.com");
        assert_eq!(
            f.page_url(&["janedoe", ""]).unwrap().as_str(),
            "https://www.instagram.com/janedoe/"
        );

        let f = fetcher("http://127.0.0.1:8080/");
        assert_eq!(
            f.page_url(&["channel", "UC123"]).unwrap().as_str(),
            "http://127.0.0.1:8080/channel/UC123"
        );
    }

    #[test]
    fn page_url_keeps_at_sign() {
        let f = fetcher("https://www.tiktok.com");
        assert_eq!(f.page_url(&["@scout2015"]).unwrap().path(), "/@scout2015");
    }

    #[test]
    fn identifier_cannot_escape_its_segment() {
        let f = fetcher("https://www.facebook.com");
        let url = f.page_url(&["page#frag"]).unwrap();
        assert_eq!(url.path(), "/page%23frag");
        assert_eq!(url.fragment(), None);

        let url = f.page_url(&["page?x=1"]).unwrap();
        assert_eq!(url.path(), "/page%3Fx=1");
        assert_eq!(url.query(), None);

        let url = f.page_url(&["../admin/panel"]).unwrap();
        assert_eq!(url.path(), "/..%2Fadmin%2Fpanel");
    }

    #[test]
    fn rejects_unusable_base_url() {
        for base in ["not a url", "mailto:someone@example.com"] {
            assert!(
                matches!(PageFetcher::new("Test", base, &[]), Err(AccountError::Internal(_))),
                "{base} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn silent_server_times_out_as_upstream() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold connections without ever answering.
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let f = PageFetcher::with_timeout(
            "Test",
            &format!("http://{addr}"),
            &[],
            Duration::from_millis(200),
        )
        .unwrap();

        match f.fetch_page(&["anyone"], "anyone").await {
            Err(AccountError::Upstream(msg)) => {
                assert!(msg.starts_with("request timed out after 200ms"), "{msg}")
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
