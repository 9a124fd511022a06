//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Security (CORS)
//! - OpenAPI documentation (aide + Scalar UI)

pub mod security;
mod specification;

pub use security::{CorsConfig, create_cors_layer};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
