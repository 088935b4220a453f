use super::{Region, SeasonId};
use serde::Serialize;

/// Eligibility set for a crop: either every value or an explicit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Eligibility<T: 'static> {
    All,
    Only(&'static [T]),
}

impl<T: PartialEq + Copy> Eligibility<T> {
    pub fn admits(&self, value: T) -> bool {
        match self {
            Eligibility::All => true,
            Eligibility::Only(values) => values.contains(&value),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Eligibility<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eligibility::All => write!(f, "All"),
            Eligibility::Only(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WaterNeed {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl WaterNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterNeed::Low => "Low",
            WaterNeed::Medium => "Medium",
            WaterNeed::High => "High",
            WaterNeed::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for WaterNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A crop's principal weather vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCategory {
    None,
    Drought,
    HeavyRain,
    Heat,
    Waterlogging,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::None => "None",
            RiskCategory::Drought => "Drought",
            RiskCategory::HeavyRain => "Heavy Rain",
            RiskCategory::Heat => "Heat",
            RiskCategory::Waterlogging => "Waterlogging",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crop {
    /// Bilingual label, e.g. "Maize (Ibigori)"
    pub name: &'static str,
    pub seasons: Eligibility<SeasonId>,
    pub regions: Eligibility<Region>,
    pub water: WaterNeed,
    pub risk: RiskCategory,
}

impl Crop {
    pub fn grows_in_season(&self, season: SeasonId) -> bool {
        self.seasons.admits(season)
    }

    pub fn grows_in_region(&self, region: Region) -> bool {
        self.regions.admits(region)
    }
}

/// A crop that survived filtering, with the reason shown to the farmer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedCrop {
    pub crop: Crop,
    pub reason: String,
}

impl RecommendedCrop {
    pub fn new(crop: Crop, season: SeasonId, region: Region) -> Self {
        Self {
            crop,
            reason: format!("Matches Season {} & {}", season, region),
        }
    }
}
