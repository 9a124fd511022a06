//! App [`state`] configuration.
//!
//! [`state`]: crate::service::ServiceState

use scout_rig::EnrichmentConfig;

/// Configuration for building the application state.
///
/// The company catalog is embedded, so the only external dependency to
/// configure is the enrichment collaborator.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Enrichment collaborator settings.
    #[cfg_attr(feature = "config", command(flatten))]
    pub enrichment: EnrichmentConfig,
}
