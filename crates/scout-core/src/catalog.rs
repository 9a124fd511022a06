//! The static, read-only company collection.

use std::sync::Arc;

use crate::model::Company;
use crate::query::{CompanyQuery, QueryPage, run_query};
use crate::{Error, Result, TRACING_TARGET_CATALOG};

/// Seed catalog embedded at compile time.
const BUILTIN_COMPANIES: &str = include_str!("../data/companies.json");

/// The in-memory company collection queried by the engine.
///
/// Loaded once at startup and immutable afterwards; cheap to clone and safe
/// to share across request handlers.
#[derive(Debug, Clone)]
#[must_use = "a catalog does nothing unless queried"]
pub struct CompanyCatalog {
    companies: Arc<Vec<Company>>,
}

impl CompanyCatalog {
    /// Default page size for in-process callers (the offline/mock path).
    ///
    /// The HTTP API uses its own default; the engine itself has no hidden
    /// page-size constant.
    pub const DEFAULT_PAGE_SIZE: u32 = 9;

    /// Loads the built-in seed catalog.
    pub fn builtin() -> Result<Self> {
        let companies: Vec<Company> = serde_json::from_str(BUILTIN_COMPANIES)
            .map_err(|err| Error::internal("invalid embedded seed catalog").with_source(err))?;

        tracing::debug!(
            target: TRACING_TARGET_CATALOG,
            company_count = companies.len(),
            "Seed catalog loaded"
        );

        Ok(Self::from_companies(companies))
    }

    /// Creates a catalog from an explicit collection.
    pub fn from_companies(companies: Vec<Company>) -> Self {
        Self {
            companies: Arc::new(companies),
        }
    }

    /// Returns the full collection.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Returns the number of companies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Finds a company by its identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    /// Runs a discovery query against the collection.
    ///
    /// This is the single entry point shared by the HTTP API and in-process
    /// callers; both paths see identical behavior for identical parameters.
    pub fn query(&self, query: &CompanyQuery) -> QueryPage<Company> {
        run_query(&self.companies, query)
    }

    /// Returns the unique locations present in the catalog, sorted.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = self
            .companies
            .iter()
            .map(|company| company.location.clone())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::query::SortBy;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = CompanyCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = CompanyCatalog::builtin().unwrap();
        let ids: HashSet<&str> = catalog.companies().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn find_by_id() {
        let catalog = CompanyCatalog::builtin().unwrap();
        let first = &catalog.companies()[0];

        assert_eq!(catalog.find(&first.id).unwrap().name, first.name);
        assert!(catalog.find("no-such-id").is_none());
    }

    #[test]
    fn locations_are_unique_and_sorted() {
        let catalog = CompanyCatalog::builtin().unwrap();
        let locations = catalog.locations();

        let mut sorted = locations.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(locations, sorted);
        assert!(!locations.is_empty());
    }

    #[test]
    fn query_uses_default_page_when_requested() {
        let catalog = CompanyCatalog::builtin().unwrap();
        let query = CompanyQuery::new(CompanyCatalog::DEFAULT_PAGE_SIZE);

        let page = catalog.query(&query);
        assert_eq!(page.total as usize, catalog.len());
        assert!(page.data.len() <= CompanyCatalog::DEFAULT_PAGE_SIZE as usize);
    }

    #[test]
    fn seed_employee_bands_parse() {
        let catalog = CompanyCatalog::builtin().unwrap();
        let query =
            CompanyQuery::new(catalog.len() as u32).with_sort(SortBy::Employees, Default::default());

        let page = catalog.query(&query);
        let bounds: Vec<u32> = page.data.iter().map(|c| c.employees_lower_bound()).collect();
        assert!(bounds.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(bounds.iter().any(|b| *b > 0));
    }
}
