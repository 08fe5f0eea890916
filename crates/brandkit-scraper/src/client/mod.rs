//! HTTP fetcher for pages and stylesheets.

pub mod origin;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Charset assumed when a response does not declare one.
pub const DEFAULT_CHARSET: &str = "utf-8";

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Single-attempt text fetcher with a fixed identifying header.
///
/// Non-2xx responses are surfaced as [`ScraperError::UnexpectedStatus`];
/// transport failures and timeouts as [`ScraperError::Http`]. There are no
/// retries: one failed attempt is final.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns its body decoded as text.
    ///
    /// Decoding follows the charset declared in `Content-Type`, falling back
    /// to [`DEFAULT_CHARSET`]. Invalid byte sequences are replaced with
    /// U+FFFD rather than failing the fetch.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: malformed URL, network/TLS failure or timeout.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,text/css,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                url: url.to_owned(),
            });
        }

        let body = response.text_with_charset(DEFAULT_CHARSET).await?;
        tracing::debug!(url, bytes = body.len(), "fetched text body");
        Ok(body)
    }
}
