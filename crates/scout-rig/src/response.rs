//! Parsing of model output into an enrichment payload.

use jiff::Timestamp;
use serde::Deserialize;

use scout_core::model::{EnrichmentResult, EnrichmentSource};

use crate::error::{Error, Result};

/// The JSON object the model is instructed to emit.
///
/// Every field is defaulted so a partially filled response still parses;
/// only structurally invalid JSON is rejected.
#[derive(Debug, Default, Deserialize)]
struct RawEnrichment {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    what_they_do: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    signals: Vec<String>,
}

/// Strips a leading/trailing Markdown code fence, if present.
///
/// Models frequently wrap JSON in ```json fences despite instructions not
/// to; the payload inside is kept verbatim.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parses raw model output into an [`EnrichmentResult`].
///
/// `source` is the URL the content was fetched from, recorded alongside
/// the fetch timestamp.
pub fn parse_enrichment(
    raw: &str,
    source: &str,
    fetched_at: Timestamp,
) -> Result<EnrichmentResult> {
    let body = strip_code_fences(raw);
    let parsed: RawEnrichment =
        serde_json::from_str(body).map_err(|error| Error::parse(error.to_string()))?;

    Ok(EnrichmentResult {
        summary: parsed.summary,
        what_they_do: parsed.what_they_do,
        keywords: parsed.keywords,
        signals: parsed.signals,
        sources: vec![EnrichmentSource {
            url: source.to_owned(),
            timestamp: fetched_at,
        }],
        cached_at: fetched_at,
    })
}
