//! Domain model types for the company catalog.

mod company;
mod enrichment;
mod sector;
mod stage;

pub use company::{Company, CompanySignal};
pub use enrichment::{EnrichmentResult, EnrichmentSource};
pub use sector::Sector;
pub use stage::Stage;
