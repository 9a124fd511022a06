//! Application state and configuration.

mod config;
mod state;

pub use config::ServiceConfig;
pub use state::{DynEnricher, ServiceState};
