//! Industry sector classification.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Industry sector of a company.
///
/// The catalog uses a closed set of sectors; filter parameters compare
/// against the serialized form (e.g. `"FinTech"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Sector {
    FinTech,
    LegalTech,
    HealthTech,
    SaaS,
    Climate,
    Logistics,
    DataTech,
    EdTech,
    CyberSecurity,
    AgTech,
    HRTech,
    PropTech,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn twelve_sectors() {
        assert_eq!(Sector::iter().count(), 12);
    }

    #[test]
    fn round_trips_through_display() {
        for sector in Sector::iter() {
            let parsed = Sector::from_str(sector.as_ref()).unwrap();
            assert_eq!(parsed, sector);
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Sector::FinTech).unwrap();
        assert_eq!(json, "\"FinTech\"");
    }
}
