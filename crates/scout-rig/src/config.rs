//! Enrichment configuration.

use std::time::Duration;

use crate::reader::{DEFAULT_MAX_CONTENT_CHARS, DEFAULT_READER_BASE_URL};

/// Default Groq model used for enrichment.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
/// Default reader fetch timeout, in seconds.
const DEFAULT_READER_TIMEOUT_SECS: u64 = 30;

/// Configuration for the enrichment collaborator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "config", derive(clap::Args))]
pub struct EnrichmentConfig {
    /// Groq API key. Enrichment is disabled when absent.
    #[cfg_attr(feature = "config", arg(long, env = "GROQ_API_KEY"))]
    pub groq_api_key: Option<String>,

    /// Groq model identifier used for summarization.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)
    )]
    pub model: String,

    /// Base URL of the reader proxy used to scrape websites.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "READER_BASE_URL", default_value = DEFAULT_READER_BASE_URL)
    )]
    pub reader_base_url: String,

    /// Cap on scraped content length, in characters.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "READER_MAX_CHARS", default_value_t = DEFAULT_MAX_CONTENT_CHARS)
    )]
    pub max_content_chars: usize,

    /// Reader fetch timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "READER_TIMEOUT_SECS", default_value_t = DEFAULT_READER_TIMEOUT_SECS)
    )]
    pub reader_timeout_secs: u64,
}

impl EnrichmentConfig {
    /// Returns the reader fetch timeout as a [`Duration`].
    pub fn reader_timeout(&self) -> Duration {
        Duration::from_secs(self.reader_timeout_secs)
    }

    /// Returns true when an API key is configured.
    pub fn is_enabled(&self) -> bool {
        self.groq_api_key.is_some()
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            reader_base_url: DEFAULT_READER_BASE_URL.to_owned(),
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            reader_timeout_secs: DEFAULT_READER_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = EnrichmentConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.reader_base_url, "https://r.jina.ai");
        assert_eq!(config.max_content_chars, 8_000);
        assert_eq!(config.reader_timeout(), Duration::from_secs(30));
    }
}
