//! Typed query parameters and boundary normalization.
//!
//! Raw parameters arrive as URL query strings or typed optional fields. The
//! engine relies on the normalization contract implemented here: on the
//! sector/stage/location dimensions, absent, empty-string and `"all"` are
//! interchangeable "no filter" sentinels. The free-text search has no
//! sentinel; only blank input means "no text filter", so searching for the
//! literal word "all" still substring-matches. Numeric parameters that fail
//! to parse as a positive integer fall back to their default instead of
//! propagating into slice arithmetic.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Sentinel value meaning "no constraint" on a filter dimension.
const ALL_SENTINEL: &str = "all";

/// Sort key for company queries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum SortBy {
    /// Sort by display name (the default).
    #[default]
    Name,
    /// Sort by founding year.
    Founded,
    /// Sort by the numeric lower bound of the employee band.
    Employees,
}

impl SortBy {
    /// Parses a raw parameter, falling back to [`SortBy::Name`] for absent
    /// or unrecognized values.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

/// Sort direction for company queries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum SortDir {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDir {
    /// Parses a raw parameter, falling back to [`SortDir::Asc`] for absent
    /// or unrecognized values.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

/// Normalizes a filter parameter to the internal "unset" representation.
///
/// Absent, empty/whitespace and the `"all"` sentinel all mean "no filter";
/// the engine only ever sees `Some` or `None`, never string sentinels.
#[must_use]
pub fn normalize_filter(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Parses a positive integer parameter, falling back to `default` for
/// absent, non-numeric or non-positive input.
#[must_use]
pub fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.map(str::trim)
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(default)
}

/// Fully normalized parameters for one catalog query.
///
/// Constructed fresh per call; `page_size` is always explicit because the
/// default differs per caller context (the HTTP API serves 8 per page, the
/// offline catalog path serves 9).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyQuery {
    /// Case-insensitive substring search over name, description and tags.
    pub search: Option<String>,
    /// Exact-match sector filter (serialized form, e.g. `"FinTech"`).
    pub sector: Option<String>,
    /// Exact-match stage filter (serialized form, e.g. `"Series A"`).
    pub stage: Option<String>,
    /// Exact-match location filter.
    pub location: Option<String>,
    /// Sort key.
    pub sort_by: SortBy,
    /// Sort direction.
    pub sort_dir: SortDir,
    /// Requested page, 1-based; clamped by the engine.
    pub page: u32,
    /// Page length, always positive.
    pub page_size: u32,
}

impl CompanyQuery {
    /// Returns an unfiltered query over the first page.
    pub fn new(page_size: u32) -> Self {
        Self {
            search: None,
            sector: None,
            stage: None,
            location: None,
            sort_by: SortBy::default(),
            sort_dir: SortDir::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Sets the search term; only blank input means "no text filter".
    ///
    /// Unlike the discrete filters, the search dimension has no `"all"`
    /// sentinel: "all" is a perfectly valid substring to look for.
    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        let term = search.as_ref().trim();
        self.search = (!term.is_empty()).then(|| term.to_owned());
        self
    }

    /// Sets the sector filter, applying sentinel normalization.
    pub fn with_sector(mut self, sector: impl AsRef<str>) -> Self {
        self.sector = normalize_filter(Some(sector.as_ref()));
        self
    }

    /// Sets the stage filter, applying sentinel normalization.
    pub fn with_stage(mut self, stage: impl AsRef<str>) -> Self {
        self.stage = normalize_filter(Some(stage.as_ref()));
        self
    }

    /// Sets the location filter, applying sentinel normalization.
    pub fn with_location(mut self, location: impl AsRef<str>) -> Self {
        self.location = normalize_filter(Some(location.as_ref()));
        self
    }

    /// Sets the sort key and direction.
    pub fn with_sort(mut self, sort_by: SortBy, sort_dir: SortDir) -> Self {
        self.sort_by = sort_by;
        self.sort_dir = sort_dir;
        self
    }

    /// Sets the requested page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }
}
