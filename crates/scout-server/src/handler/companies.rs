//! Company discovery handlers.
//!
//! Serves the catalog behind the filter/sort/paginate query surface. All
//! query parameters are forgiving: malformed values fall back to their
//! defaults instead of rejecting the request.

use aide::axum::ApiRouter;
use axum::extract::State;

use scout_core::CompanyCatalog;
use scout_core::model::Company;
use scout_core::query::QueryPage;

use crate::extract::{Json, Path, Query};
use crate::handler::request::{CompanyPathParams, ListCompaniesQuery};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for company discovery operations.
const TRACING_TARGET: &str = "scout_server::handler::companies";

/// Default page size for the HTTP listing endpoint.
const DEFAULT_LIMIT: u32 = 8;

/// Lists companies matching the discovery filters.
#[tracing::instrument(skip_all)]
async fn list_companies(
    State(catalog): State<CompanyCatalog>,
    Query(params): Query<ListCompaniesQuery>,
) -> Result<Json<QueryPage<Company>>> {
    let query = params.into_query(DEFAULT_LIMIT);
    let page = catalog.query(&query);

    tracing::debug!(
        target: TRACING_TARGET,
        total = page.total,
        page = page.page,
        total_pages = page.total_pages,
        "Companies listed"
    );

    Ok(Json(page))
}

/// Gets a single company by its identifier.
#[tracing::instrument(skip(catalog))]
async fn get_company(
    State(catalog): State<CompanyCatalog>,
    Path(path_params): Path<CompanyPathParams>,
) -> Result<Json<Company>> {
    let Some(company) = catalog.find(&path_params.company_id) else {
        return Err(ErrorKind::NotFound
            .with_resource("company")
            .with_message("Company not found")
            .with_context(format!("ID: {}", path_params.company_id)));
    };

    Ok(Json(company.clone()))
}

/// Lists the unique company locations in the catalog.
#[tracing::instrument(skip_all)]
async fn list_locations(State(catalog): State<CompanyCatalog>) -> Result<Json<Vec<String>>> {
    Ok(Json(catalog.locations()))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/companies", get(list_companies))
        .api_route("/companies/{companyId}", get(get_company))
        .api_route("/locations", get(list_locations))
}

#[cfg(test)]
mod test {
    use serde_json::Value;

    use super::routes;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn listing_envelope_has_pagination_bookkeeping() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server.get("/companies").await;
        response.assert_status_success();

        let body = response.json::<Value>();
        assert!(body["data"].is_array());
        assert!(body["total"].as_u64().is_some());
        assert_eq!(body["page"], 1);
        assert!(body["totalPages"].as_u64().unwrap() >= 1);

        // The HTTP default page size is 8.
        assert!(body["data"].as_array().unwrap().len() <= 8);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_parameters_fall_back_to_defaults() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server
            .get("/companies")
            .add_query_param("sector", "all")
            .add_query_param("sortBy", "revenue")
            .add_query_param("page", "-2")
            .add_query_param("limit", "many")
            .await;
        response.assert_status_success();

        let body = response.json::<Value>();
        assert_eq!(body["page"], 1);
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_page_is_clamped() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server
            .get("/companies")
            .add_query_param("page", "9999")
            .await;
        response.assert_status_success();

        let body = response.json::<Value>();
        assert_eq!(body["page"], body["totalPages"]);
        assert!(!body["data"].as_array().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn search_is_case_insensitive() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let lower = server.get("/companies").add_query_param("search", "ai").await;
        let upper = server.get("/companies").add_query_param("search", "AI").await;
        lower.assert_status_success();
        upper.assert_status_success();

        let lower = lower.json::<Value>();
        let upper = upper.json::<Value>();
        assert_eq!(lower["total"], upper["total"]);
        assert!(lower["total"].as_u64().unwrap() > 0);
        Ok(())
    }

    #[tokio::test]
    async fn get_company_by_id() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let listing = server
            .get("/companies")
            .add_query_param("limit", "1")
            .await
            .json::<Value>();
        let id = listing["data"][0]["id"].as_str().unwrap().to_owned();

        let response = server.get(&format!("/companies/{id}")).await;
        response.assert_status_success();
        assert_eq!(response.json::<Value>()["id"], id.as_str());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_company_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server.get("/companies/no-such-id").await;
        response.assert_status_not_found();

        let body = response.json::<Value>();
        assert_eq!(body["name"], "not_found");
        assert_eq!(body["resource"], "company");
        Ok(())
    }

    #[tokio::test]
    async fn locations_are_unique_and_sorted() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes)?;

        let response = server.get("/locations").await;
        response.assert_status_success();

        let locations: Vec<String> = response.json();
        let mut expected = locations.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(locations, expected);
        assert!(!locations.is_empty());
        Ok(())
    }
}
