//! Funding stage classification.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Funding stage of a company, ordered by maturity.
///
/// The derived `Ord` follows declaration order: `PreSeed < Seed < SeriesA <
/// SeriesB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Stage {
    #[serde(rename = "Pre-Seed")]
    #[strum(serialize = "Pre-Seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Series A")]
    #[strum(serialize = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    #[strum(serialize = "Series B")]
    SeriesB,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn ordered_by_maturity() {
        assert!(Stage::PreSeed < Stage::Seed);
        assert!(Stage::Seed < Stage::SeriesA);
        assert!(Stage::SeriesA < Stage::SeriesB);
    }

    #[test]
    fn parses_hyphenated_forms() {
        assert_eq!(Stage::from_str("Pre-Seed").unwrap(), Stage::PreSeed);
        assert_eq!(Stage::from_str("Series A").unwrap(), Stage::SeriesA);
    }

    #[test]
    fn serde_matches_strum() {
        let json = serde_json::to_string(&Stage::SeriesB).unwrap();
        assert_eq!(json, "\"Series B\"");
        assert_eq!(Stage::SeriesB.as_ref(), "Series B");
    }
}
