//! Enrichment agent that structures scraped website content.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use rig::agent::{Agent, AgentBuilder};
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::groq;
use url::Url;

use scout_core::model::EnrichmentResult;

use crate::config::EnrichmentConfig;
use crate::error::{Error, Result};
use crate::reader::{PageReader, ReaderClient};
use crate::response::parse_enrichment;
use crate::TRACING_TARGET_ENRICH;

const NAME: &str = "EnrichmentAgent";
const DESCRIPTION: &str =
    "Agent that extracts structured company data from scraped website content";

const PREAMBLE: &str = "\
You are a VC analyst assistant. Extract structured data from company website content.
Return valid JSON only with no markdown, no code fences, no explanation.";

const PROMPT_ENRICH: &str = r#"Analyze this website and return ONLY a JSON object with exactly these fields:
{
  "summary": "1-2 sentence description of what the company does",
  "what_they_do": ["3 to 6 specific bullet points about their product or service"],
  "keywords": ["5 to 10 relevant keywords or tags"],
  "signals": ["2 to 4 signals inferred from the page such as: careers page found, recent blog post detected, changelog present, open source repo linked, pricing page exists, recently updated content"]
}"#;

/// Produces an enrichment payload for a company website.
///
/// The trait seam lets the HTTP server depend on enrichment without a
/// configured provider; tests substitute a canned implementation.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn enrich(&self, url: &Url) -> Result<EnrichmentResult>;
}

/// [`Enricher`] backed by a reader proxy and a Groq completion model.
///
/// Scrapes the target page, prompts the model for a structured JSON
/// object and parses the response into an [`EnrichmentResult`].
pub struct EnrichmentAgent {
    agent: Agent<groq::CompletionModel>,
    reader: Arc<dyn PageReader>,
    model_name: String,
}

impl EnrichmentAgent {
    /// Creates an agent from configuration.
    ///
    /// Fails when no API key is configured; callers should check
    /// [`EnrichmentConfig::is_enabled`] first.
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self> {
        let api_key = config
            .groq_api_key
            .as_deref()
            .ok_or_else(|| Error::config("GROQ_API_KEY is not set"))?;

        let reader = ReaderClient::new(
            &config.reader_base_url,
            config.max_content_chars,
            config.reader_timeout(),
        )?;

        Self::new(api_key, &config.model, Arc::new(reader))
    }

    /// Creates an agent with an explicit reader, used by tests.
    pub fn new(api_key: &str, model: &str, reader: Arc<dyn PageReader>) -> Result<Self> {
        let client = groq::Client::new(api_key)
            .map_err(|error| Error::provider("groq", error.to_string()))?;

        let agent = AgentBuilder::new(client.completion_model(model))
            .name(NAME)
            .description(DESCRIPTION)
            .preamble(PREAMBLE)
            .build();

        Ok(Self {
            agent,
            reader,
            model_name: model.to_owned(),
        })
    }
}

#[async_trait]
impl Enricher for EnrichmentAgent {
    #[tracing::instrument(skip(self), fields(agent = NAME, model = %self.model_name, url = %url))]
    async fn enrich(&self, url: &Url) -> Result<EnrichmentResult> {
        let page = self.reader.read(url).await?;
        let fetched_at = Timestamp::now();

        let prompt = format!("{PROMPT_ENRICH}\n\nWebsite content: [{}]", page.content);
        let raw = self
            .agent
            .prompt(&prompt)
            .await
            .map_err(|error| Error::provider("groq", error.to_string()))?;

        let result = parse_enrichment(&raw, &page.source, fetched_at)?;
        tracing::debug!(
            target: TRACING_TARGET_ENRICH,
            keywords = result.keywords.len(),
            signals = result.signals.len(),
            "Enrichment completed"
        );
        Ok(result)
    }
}
