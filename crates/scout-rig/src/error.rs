//! Error types for scout-rig.

use std::fmt;

/// Result type alias for enrichment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during enrichment.
///
/// Each variant maps to a distinct surfaced message; none of them are
/// retried automatically. Retry, if any, is a caller-initiated repeat of
/// the request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Website scrape failed (network failure or non-success status).
    #[error("failed to scrape website: {url}: {message}")]
    Scrape { url: String, message: String },

    /// Provider error (API call failed, rate limited, etc.)
    #[error("provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    /// The model returned output that could not be parsed.
    #[error("failed to parse AI response: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a scrape error.
    pub fn scrape(url: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Scrape {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a provider error.
    pub fn provider(provider: impl fmt::Display, message: impl fmt::Display) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl fmt::Display) -> Self {
        Self::Parse(message.to_string())
    }

    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Returns true if a caller-initiated retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Scrape { .. } | Self::Provider { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_failures_are_retryable() {
        assert!(Error::scrape("https://acme.test", "timeout").is_retryable());
        assert!(Error::provider("groq", "rate limited").is_retryable());
        assert!(!Error::parse("not json").is_retryable());
        assert!(!Error::config("missing api key").is_retryable());
    }

    #[test]
    fn messages_are_distinct_per_failure_mode() {
        let scrape = Error::scrape("https://acme.test", "502").to_string();
        let parse = Error::parse("unexpected token").to_string();

        assert!(scrape.contains("scrape"));
        assert!(parse.contains("parse"));
        assert_ne!(scrape, parse);
    }
}
