//! Security-related middleware.

mod cors;

pub use cors::{CorsConfig, create_cors_layer};
