//! Website content fetching through a reader proxy.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{Error, Result};
use crate::TRACING_TARGET_READER;

/// Default reader proxy endpoint.
pub const DEFAULT_READER_BASE_URL: &str = "https://r.jina.ai";
/// Default cap on scraped content length, in characters.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 8_000;
/// Default request timeout for reader fetches.
pub const DEFAULT_READER_TIMEOUT: Duration = Duration::from_secs(30);

/// Plain-text page content returned by a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedPage {
    /// Markdown-ish plain text of the page, already truncated.
    pub content: String,
    /// The URL the content was actually fetched from. For proxied reads
    /// this is the proxy endpoint, not the target site.
    pub source: String,
}

/// Fetches a public web page as plain text.
///
/// The trait seam lets tests substitute canned content for the network.
#[async_trait]
pub trait PageReader: Send + Sync {
    async fn read(&self, url: &Url) -> Result<ScrapedPage>;
}

/// [`PageReader`] backed by a Jina-style reader proxy.
///
/// The proxy is addressed as `{base}/{target}` and asked for `text/plain`,
/// which yields rendered page text rather than raw HTML.
#[derive(Debug, Clone)]
pub struct ReaderClient {
    client: reqwest::Client,
    base_url: String,
    max_chars: usize,
}

impl ReaderClient {
    /// Creates a reader client against the given proxy base URL.
    pub fn new(base_url: impl Into<String>, max_chars: usize, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::config(format!("failed to build http client: {error}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            max_chars,
        })
    }

    /// Truncates `text` to at most `max_chars` characters, appending an
    /// ellipsis when content was dropped.
    fn trim_text(text: &str, max_chars: usize) -> String {
        let trimmed = text.trim();
        if trimmed.chars().count() <= max_chars {
            return trimmed.to_owned();
        }
        let mut out: String = trimmed.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

impl Default for ReaderClient {
    fn default() -> Self {
        // The builder only fails on TLS backend misconfiguration, which
        // cannot happen with the defaults used here.
        Self::new(
            DEFAULT_READER_BASE_URL,
            DEFAULT_MAX_CONTENT_CHARS,
            DEFAULT_READER_TIMEOUT,
        )
        .unwrap_or_else(|_| unreachable!("default reader client must build"))
    }
}

#[async_trait]
impl PageReader for ReaderClient {
    async fn read(&self, url: &Url) -> Result<ScrapedPage> {
        let endpoint = format!("{}/{}", self.base_url, url);
        tracing::debug!(
            target: TRACING_TARGET_READER,
            url = %url,
            "Fetching page through reader proxy"
        );

        let response = self
            .client
            .get(&endpoint)
            .header(reqwest::header::ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|error| Error::scrape(url, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::scrape(url, format!("reader returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|error| Error::scrape(url, error))?;

        Ok(ScrapedPage {
            content: Self::trim_text(&body, self.max_chars),
            source: endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through_trimmed() {
        assert_eq!(ReaderClient::trim_text("  hello world  \n", 100), "hello world");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let text = "a".repeat(50);
        let trimmed = ReaderClient::trim_text(&text, 10);
        assert_eq!(trimmed, format!("{}...", "a".repeat(10)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(20);
        let trimmed = ReaderClient::trim_text(&text, 5);
        assert_eq!(trimmed, format!("{}...", "é".repeat(5)));
    }
}
