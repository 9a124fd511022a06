//! Request types for the HTTP handlers.

mod companies;
mod enrichment;

pub use companies::{CompanyPathParams, ListCompaniesQuery};
pub use enrichment::EnrichCompany;
