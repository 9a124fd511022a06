//! Result envelope for paginated queries.

use serde::{Deserialize, Serialize};

/// A single page of query results with pagination bookkeeping.
///
/// `page` is the page actually served, which may differ from the requested
/// page after clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct QueryPage<T> {
    /// Entries of the current page only.
    pub data: Vec<T>,

    /// Count of entries matching the filters, pre-pagination.
    pub total: u64,

    /// The effective page number served.
    pub page: u32,

    /// Total page count, at least 1 even for an empty result.
    pub total_pages: u32,
}

impl<T> QueryPage<T> {
    /// Maps the page entries with `f`, keeping the pagination bookkeeping.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> QueryPage<U> {
        QueryPage {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_total_pages_in_camel_case() {
        let page = QueryPage {
            data: vec![1, 2, 3],
            total: 3,
            page: 1,
            total_pages: 1,
        };

        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("totalPages").is_some());
        assert!(json.get("total_pages").is_none());
    }

    #[test]
    fn map_preserves_bookkeeping() {
        let page = QueryPage {
            data: vec![1, 2],
            total: 10,
            page: 2,
            total_pages: 5,
        };

        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.data, vec!["1", "2"]);
        assert_eq!(mapped.total, 10);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total_pages, 5);
    }
}
