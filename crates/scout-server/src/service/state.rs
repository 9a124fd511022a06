//! Application state and dependency injection.

use std::sync::Arc;

use scout_core::CompanyCatalog;
use scout_rig::{EnrichmentAgent, Enricher};

use crate::service::ServiceConfig;
use crate::{Error, Result};

/// Shared handle to the enrichment collaborator.
pub type DynEnricher = Arc<dyn Enricher>;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    catalog: CompanyCatalog,
    enricher: Option<DynEnricher>,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Loads the embedded catalog and, when an API key is configured,
    /// builds the enrichment agent. Without a key the server still runs;
    /// the enrichment endpoint reports the feature as unavailable.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let catalog = CompanyCatalog::builtin()?;

        let enricher: Option<DynEnricher> = if config.enrichment.is_enabled() {
            let agent = EnrichmentAgent::from_config(&config.enrichment).map_err(|error| {
                Error::config("failed to build enrichment agent").with_source(error)
            })?;
            Some(Arc::new(agent))
        } else {
            None
        };

        Ok(Self { catalog, enricher })
    }

    /// Replaces the enrichment collaborator, used by tests.
    pub fn with_enricher(mut self, enricher: DynEnricher) -> Self {
        self.enricher = Some(enricher);
        self
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(catalog: CompanyCatalog);
impl_di!(enricher: Option<DynEnricher>);
