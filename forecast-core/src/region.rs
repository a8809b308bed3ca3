use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Provider-specific identifier for a forecast area, e.g. `"130000"` for Tokyo.
///
/// Only constructed from the compiled-in registry or through [`AreaCode::new`],
/// which rejects empty codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaCode(&'static str);

impl AreaCode {
    pub fn new(code: &'static str) -> Option<Self> {
        if code.trim().is_empty() { None } else { Some(Self(code)) }
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The closed set of regions the viewer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Tokyo,
    Osaka,
    Fukuoka,
    Okinawa,
}

impl Region {
    pub const fn all() -> &'static [Region] {
        &[Region::Tokyo, Region::Osaka, Region::Fukuoka, Region::Okinawa]
    }

    /// Human-readable name shown in the selection UI.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Tokyo => "東京",
            Region::Osaka => "大阪",
            Region::Fukuoka => "福岡",
            Region::Okinawa => "沖縄",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Region::Tokyo => "tokyo",
            Region::Osaka => "osaka",
            Region::Fukuoka => "fukuoka",
            Region::Okinawa => "okinawa",
        }
    }

    /// Registry lookup. Total over the enum, so there is no failure path.
    pub fn area_code(&self) -> AreaCode {
        match self {
            Region::Tokyo => AreaCode("130000"),
            Region::Osaka => AreaCode("270000"),
            Region::Fukuoka => AreaCode("400000"),
            Region::Okinawa => AreaCode("471000"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Region {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();

        Region::all()
            .iter()
            .copied()
            .find(|r| r.slug().eq_ignore_ascii_case(trimmed) || r.name() == trimmed)
            .ok_or_else(|| {
                let supported: Vec<_> = Region::all().iter().map(|r| r.slug()).collect();
                anyhow::anyhow!(
                    "Unknown region '{value}'. Supported regions: {}.",
                    supported.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_a_non_empty_area_code() {
        for region in Region::all() {
            assert!(!region.area_code().as_str().is_empty(), "{region:?}");
        }
    }

    #[test]
    fn area_codes_are_distinct() {
        let mut codes: Vec<_> = Region::all().iter().map(|r| r.area_code()).collect();
        codes.sort_by_key(|c| c.as_str());
        codes.dedup();
        assert_eq!(codes.len(), Region::all().len());
    }

    #[test]
    fn tokyo_maps_to_its_provider_code() {
        assert_eq!(Region::Tokyo.area_code().as_str(), "130000");
        assert_eq!(Region::default(), Region::Tokyo);
    }

    #[test]
    fn parses_slug_and_display_name() {
        for region in Region::all() {
            assert_eq!(Region::try_from(region.slug()).unwrap(), *region);
            assert_eq!(Region::try_from(region.name()).unwrap(), *region);
        }
        assert_eq!(Region::try_from(" OSAKA ").unwrap(), Region::Osaka);
    }

    #[test]
    fn unknown_region_error() {
        let err = Region::try_from("atlantis").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown region"));
        assert!(msg.contains("tokyo"));
    }

    #[test]
    fn area_code_rejects_empty() {
        assert!(AreaCode::new("").is_none());
        assert!(AreaCode::new("  ").is_none());
        assert_eq!(AreaCode::new("016000").map(|c| c.to_string()), Some("016000".into()));
    }
}
