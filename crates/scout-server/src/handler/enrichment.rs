//! Company enrichment handlers.
//!
//! Accepts a company website URL, scrapes it through the reader proxy and
//! structures the content with the AI collaborator. Enrichment is optional
//! at the deployment level; without a configured provider the endpoint
//! reports the feature as unavailable.

use aide::axum::ApiRouter;
use axum::extract::State;
use url::Url;

use scout_core::model::EnrichmentResult;

use crate::extract::{Json, ValidateJson};
use crate::handler::request::EnrichCompany;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{DynEnricher, ServiceState};

/// Tracing target for enrichment operations.
const TRACING_TARGET: &str = "scout_server::handler::enrichment";

/// Parses and validates the target URL.
///
/// Only absolute http(s) URLs are accepted; anything else is a client
/// error, mirroring the checks the browser-facing API performed.
fn parse_target_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_resource("enrichment")
            .with_message("URL is required"));
    }

    let url = Url::parse(trimmed).map_err(|_| {
        ErrorKind::BadRequest
            .with_resource("enrichment")
            .with_message("Invalid URL")
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ErrorKind::BadRequest
            .with_resource("enrichment")
            .with_message("Invalid URL")
            .with_context(format!("unsupported scheme: {}", url.scheme())));
    }

    Ok(url)
}

/// Enriches a company from its public website.
#[tracing::instrument(skip_all)]
async fn enrich_company(
    State(enricher): State<Option<DynEnricher>>,
    ValidateJson(request): ValidateJson<EnrichCompany>,
) -> Result<Json<EnrichmentResult>> {
    let url = parse_target_url(&request.url)?;

    let Some(enricher) = enricher else {
        return Err(ErrorKind::NotImplemented
            .with_resource("enrichment")
            .with_message("Enrichment is not configured"));
    };

    let result = enricher.enrich(&url).await.map_err(Error::from)?;

    tracing::info!(
        target: TRACING_TARGET,
        url = %url,
        keywords = result.keywords.len(),
        "Company enriched"
    );

    Ok(Json(result))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new().api_route("/enrich", post(enrich_company))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use async_trait::async_trait;
    use jiff::Timestamp;
    use serde_json::{Value, json};
    use url::Url;

    use scout_core::model::{EnrichmentResult, EnrichmentSource};
    use scout_rig::Enricher;

    use super::routes;
    use crate::handler::test::{create_test_server_with_router, create_test_server_with_state, test_state};

    /// Enricher double returning a canned payload or failure.
    struct StubEnricher {
        fail_scrape: bool,
    }

    #[async_trait]
    impl Enricher for StubEnricher {
        async fn enrich(&self, url: &Url) -> scout_rig::Result<EnrichmentResult> {
            if self.fail_scrape {
                return Err(scout_rig::Error::scrape(url, "reader returned 502"));
            }
            Ok(EnrichmentResult {
                summary: "Acme builds robots.".into(),
                what_they_do: vec!["Industrial automation".into()],
                keywords: vec!["robotics".into()],
                signals: vec!["careers page found".into()],
                sources: vec![EnrichmentSource {
                    url: url.to_string(),
                    timestamp: Timestamp::UNIX_EPOCH,
                }],
                cached_at: Timestamp::UNIX_EPOCH,
            })
        }
    }

    #[tokio::test]
    async fn empty_url_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server.post("/enrich").json(&json!({ "url": "   " })).await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["name"], "bad_request");
        Ok(())
    }

    #[tokio::test]
    async fn non_http_scheme_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server
            .post("/enrich")
            .json(&json!({ "url": "ftp://acme.test" }))
            .await;
        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn unconfigured_enrichment_is_not_implemented() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server
            .post("/enrich")
            .json(&json!({ "url": "https://acme.test" }))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_IMPLEMENTED);
        Ok(())
    }

    #[tokio::test]
    async fn successful_enrichment_returns_payload() -> anyhow::Result<()> {
        let state = test_state()?.with_enricher(Arc::new(StubEnricher { fail_scrape: false }));
        let server = create_test_server_with_state(routes(), state)?;

        let response = server
            .post("/enrich")
            .json(&json!({ "url": "https://acme.test" }))
            .await;
        response.assert_status_success();

        let body = response.json::<Value>();
        assert_eq!(body["summary"], "Acme builds robots.");
        assert_eq!(body["sources"][0]["url"], "https://acme.test/");
        Ok(())
    }

    #[tokio::test]
    async fn scrape_failure_maps_to_bad_gateway() -> anyhow::Result<()> {
        let state = test_state()?.with_enricher(Arc::new(StubEnricher { fail_scrape: true }));
        let server = create_test_server_with_state(routes(), state)?;

        let response = server
            .post("/enrich")
            .json(&json!({ "url": "https://acme.test" }))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
        assert_eq!(response.json::<Value>()["name"], "bad_gateway");
        Ok(())
    }
}
