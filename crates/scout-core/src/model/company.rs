//! Company records served by the catalog.

use serde::{Deserialize, Serialize};

use super::{EnrichmentResult, Sector, Stage};

/// A company record in the discovery catalog.
///
/// Records are read-only for the lifetime of the process: the catalog loads
/// them once and the query engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Company {
    /// Opaque unique identifier.
    pub id: String,

    /// Display name; the primary sort key and a search target.
    pub name: String,

    /// Public website, used by the enrichment flow.
    pub website: String,

    /// Free-text description; a search target.
    pub description: String,

    /// Industry sector.
    pub sector: Sector,

    /// Funding stage.
    pub stage: Stage,

    /// Free-form location, matched exactly when filtered.
    pub location: String,

    /// Founding year.
    pub founded: i32,

    /// Banded employee count, e.g. `"11-50"`.
    ///
    /// Sorted by its numeric lower bound, never lexicographically.
    pub employees: String,

    /// Free-text labels; a search target and display data.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Dated events, display only.
    #[serde(default)]
    pub signals: Vec<CompanySignal>,

    /// Cached enrichment payload, when present in the seed data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enriched: Option<EnrichmentResult>,
}

impl Company {
    /// Returns the numeric lower bound of the banded employee count.
    ///
    /// `"11-50"` yields 11; a band without leading digits yields 0.
    #[must_use]
    pub fn employees_lower_bound(&self) -> u32 {
        let digits: String = self
            .employees
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }
}

/// A dated event attached to a company, e.g. a fundraise or launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CompanySignal {
    /// ISO date of the event.
    pub date: String,
    /// Human-readable event description.
    pub event: String,
}
