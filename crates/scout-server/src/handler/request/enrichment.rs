//! Request types for company enrichment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the enrichment endpoint.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichCompany {
    /// The company website to scrape and summarize.
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}
