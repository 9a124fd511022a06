//! The discovery query engine: filter, sort, paginate.
//!
//! The engine is implemented exactly once and shared by every caller (the
//! HTTP API and any in-process/offline path), so identical parameters always
//! produce identical result pages.

mod engine;
mod page;
mod params;

pub use engine::run_query;
pub use page::QueryPage;
pub use params::{CompanyQuery, SortBy, SortDir, normalize_filter, parse_positive};
