//! System health monitoring handlers.

use aide::axum::ApiRouter;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Reports the health of the API server.
///
/// The server has no external runtime dependencies (the catalog is
/// embedded), so a served response is itself the health signal.
#[tracing::instrument(skip_all)]
async fn health_status() -> Result<Json<HealthStatus>> {
    Ok(Json(HealthStatus::ok()))
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new().api_route("/health", get(health_status))
}
