//! Request types for company discovery.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use scout_core::query::{CompanyQuery, SortBy, SortDir, parse_positive};

/// Path parameters for single-company operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPathParams {
    /// The identifier of the company.
    pub company_id: String,
}

/// Query parameters for the company listing endpoint.
///
/// Every field is an optional string on the wire so that malformed values
/// never reject the request; normalization happens in [`into_query`],
/// where sentinels and garbage fall back to the documented defaults.
///
/// [`into_query`]: ListCompaniesQuery::into_query
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesQuery {
    /// Case-insensitive substring search over name, description and tags.
    pub search: Option<String>,
    /// Sector filter; empty or `"all"` means no filter.
    pub sector: Option<String>,
    /// Stage filter; empty or `"all"` means no filter.
    pub stage: Option<String>,
    /// Location filter; empty or `"all"` means no filter.
    pub location: Option<String>,
    /// Sort key: `name`, `founded` or `employees`. Defaults to `name`.
    pub sort_by: Option<String>,
    /// Sort direction: `asc` or `desc`. Defaults to `asc`.
    pub sort_dir: Option<String>,
    /// Requested page, 1-based. Defaults to 1.
    pub page: Option<String>,
    /// Page size. Defaults to the endpoint's page size.
    pub limit: Option<String>,
}

impl ListCompaniesQuery {
    /// Normalizes the raw parameters into an engine query.
    pub fn into_query(self, default_limit: u32) -> CompanyQuery {
        let page_size = parse_positive(self.limit.as_deref(), default_limit);
        let page = parse_positive(self.page.as_deref(), 1);

        let mut query = CompanyQuery::new(page_size)
            .with_sort(
                SortBy::from_param(self.sort_by.as_deref()),
                SortDir::from_param(self.sort_dir.as_deref()),
            )
            .with_page(page);

        if let Some(search) = &self.search {
            query = query.with_search(search);
        }
        if let Some(sector) = &self.sector {
            query = query.with_sector(sector);
        }
        if let Some(stage) = &self.stage {
            query = query.with_stage(stage);
        }
        if let Some(location) = &self.location {
            query = query.with_location(location);
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_empty_request() {
        let query = ListCompaniesQuery::default().into_query(8);

        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 8);
        assert_eq!(query.sort_by, SortBy::Name);
        assert_eq!(query.sort_dir, SortDir::Asc);
        assert_eq!(query.search, None);
    }

    #[test]
    fn garbage_values_never_reject() {
        let raw = ListCompaniesQuery {
            sector: Some("all".into()),
            stage: Some("   ".into()),
            sort_by: Some("revenue".into()),
            sort_dir: Some("sideways".into()),
            page: Some("-3".into()),
            limit: Some("many".into()),
            ..ListCompaniesQuery::default()
        };

        let query = raw.into_query(8);
        assert_eq!(query.sector, None);
        assert_eq!(query.stage, None);
        assert_eq!(query.sort_by, SortBy::Name);
        assert_eq!(query.sort_dir, SortDir::Asc);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 8);
    }

    #[test]
    fn explicit_values_are_honored() {
        let raw = ListCompaniesQuery {
            search: Some("carbon".into()),
            sector: Some("Climate".into()),
            sort_by: Some("founded".into()),
            sort_dir: Some("desc".into()),
            page: Some("2".into()),
            limit: Some("4".into()),
            ..ListCompaniesQuery::default()
        };

        let query = raw.into_query(8);
        assert_eq!(query.search, Some("carbon".into()));
        assert_eq!(query.sector, Some("Climate".into()));
        assert_eq!(query.sort_by, SortBy::Founded);
        assert_eq!(query.sort_dir, SortDir::Desc);
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 4);
    }
}
