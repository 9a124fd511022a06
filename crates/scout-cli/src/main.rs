#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use scout_server::handler::routes;
use scout_server::middleware::{RouterOpenApiExt, create_cors_layer};
use scout_server::service::ServiceState;
use tower_http::timeout::TimeoutLayer;

use crate::config::{Cli, MiddlewareConfig};
use crate::server::TRACING_TARGET_SHUTDOWN;

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "scout_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.validate().context("invalid configuration")?;
    cli.log();

    let state =
        ServiceState::from_config(&cli.service).context("failed to create service state")?;
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// The OpenAPI document is generated from the API routes before state is
/// attached; CORS and request timeouts wrap the finished router.
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    let MiddlewareConfig { cors, openapi } = &cli.middleware;

    routes()
        .with_open_api(openapi.clone())
        .with_state(state)
        .layer(create_cors_layer(cors))
        .layer(TimeoutLayer::new(cli.server.request_timeout()))
}
