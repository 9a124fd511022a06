//! Enrichment payloads produced by the AI summarization collaborator.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Structured summary of a company's public website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EnrichmentResult {
    /// One- or two-sentence description of what the company does.
    pub summary: String,

    /// Specific bullet points about the product or service.
    pub what_they_do: Vec<String>,

    /// Relevant keywords or tags.
    pub keywords: Vec<String>,

    /// Signals inferred from the page (careers page, changelog, pricing...).
    pub signals: Vec<String>,

    /// Pages the summary was derived from.
    pub sources: Vec<EnrichmentSource>,

    /// When this payload was produced.
    pub cached_at: Timestamp,
}

/// A source page consulted during enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EnrichmentSource {
    /// URL that was fetched.
    pub url: String,
    /// When it was fetched.
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_timestamps_as_iso8601() {
        let result = EnrichmentResult {
            summary: "Builds widgets.".into(),
            what_they_do: vec!["Widgets".into()],
            keywords: vec!["widgets".into()],
            signals: vec!["pricing page exists".into()],
            sources: vec![EnrichmentSource {
                url: "https://r.jina.ai/https://acme.test".into(),
                timestamp: Timestamp::UNIX_EPOCH,
            }],
            cached_at: Timestamp::UNIX_EPOCH,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["cached_at"], "1970-01-01T00:00:00Z");
        assert_eq!(json["sources"][0]["timestamp"], "1970-01-01T00:00:00Z");
    }
}
