//! Built-in district, crop and season tables.

use crate::error::{AgriError, Result};
use crate::models::{
    Crop, District, Eligibility, Region, RiskCategory, SeasonDescriptor, SeasonId, WaterNeed,
};

/// Approximate district centers.
pub static DISTRICTS: &[District] = &[
    District::new("Kigali (Gasabo)", -1.95, 30.09, Region::Central),
    District::new("Musanze", -1.50, 29.63, Region::North),
    District::new("Huye", -2.60, 29.74, Region::South),
    District::new("Rubavu", -1.67, 29.26, Region::West),
    District::new("Kayonza", -1.95, 30.51, Region::East),
    District::new("Nyagatare", -1.29, 30.32, Region::East),
    District::new("Rusizi", -2.48, 28.90, Region::West),
    District::new("Gicumbi", -1.61, 30.11, Region::North),
];

/// Declaration order is the order recommendations are presented in.
pub static CROPS: &[Crop] = &[
    Crop {
        name: "Maize (Ibigori)",
        seasons: Eligibility::Only(&[SeasonId::A]),
        regions: Eligibility::Only(&[
            Region::North,
            Region::East,
            Region::South,
            Region::Central,
            Region::West,
        ]),
        water: WaterNeed::High,
        risk: RiskCategory::Drought,
    },
    Crop {
        name: "Beans (Ibishyimbo)",
        seasons: Eligibility::Only(&[SeasonId::A, SeasonId::B]),
        regions: Eligibility::All,
        water: WaterNeed::Medium,
        risk: RiskCategory::HeavyRain,
    },
    Crop {
        name: "Irish Potatoes (Ibirayi)",
        seasons: Eligibility::Only(&[SeasonId::A, SeasonId::B]),
        regions: Eligibility::Only(&[Region::North, Region::West]),
        water: WaterNeed::Medium,
        risk: RiskCategory::Heat,
    },
    Crop {
        name: "Sorghum (Amasaka)",
        seasons: Eligibility::Only(&[SeasonId::B]),
        regions: Eligibility::Only(&[Region::East, Region::South, Region::Central]),
        water: WaterNeed::Low,
        risk: RiskCategory::None,
    },
    Crop {
        name: "Cassava (Imyumbati)",
        seasons: Eligibility::All,
        regions: Eligibility::Only(&[Region::South, Region::East, Region::West]),
        water: WaterNeed::Low,
        risk: RiskCategory::Waterlogging,
    },
    Crop {
        name: "Vegetables (Imboga)",
        seasons: Eligibility::Only(&[SeasonId::C]),
        regions: Eligibility::All,
        water: WaterNeed::High,
        risk: RiskCategory::Drought,
    },
    Crop {
        name: "Rice (Umuceri)",
        seasons: Eligibility::Only(&[SeasonId::A, SeasonId::B]),
        regions: Eligibility::Only(&[Region::East, Region::South]),
        water: WaterNeed::VeryHigh,
        risk: RiskCategory::Drought,
    },
    Crop {
        name: "Wheat (Ingano)",
        seasons: Eligibility::Only(&[SeasonId::A, SeasonId::B]),
        regions: Eligibility::Only(&[Region::North, Region::West]),
        water: WaterNeed::Medium,
        risk: RiskCategory::Heat,
    },
];

static SEASONS: [SeasonDescriptor; 3] = [
    SeasonDescriptor {
        id: SeasonId::A,
        name: "Imuhindo (Season A)",
        description: "The short rainy season. Ideal for Maize and Beans.",
    },
    SeasonDescriptor {
        id: SeasonId::B,
        name: "Urugaryi (Season B)",
        description: "The long rainy season. Good for Sorghum and Potatoes.",
    },
    SeasonDescriptor {
        id: SeasonId::C,
        name: "Impeshyi (Season C)",
        description: "The dry season. Focus on marshlands and irrigation.",
    },
];

pub fn season_descriptor(id: SeasonId) -> SeasonDescriptor {
    match id {
        SeasonId::A => SEASONS[0],
        SeasonId::B => SEASONS[1],
        SeasonId::C => SEASONS[2],
    }
}

pub fn find_district(name: &str) -> Result<&'static District> {
    DISTRICTS
        .iter()
        .find(|d| d.matches_name(name))
        .ok_or_else(|| AgriError::NotFound(format!("district '{}'", name.trim())))
}

pub fn district_names() -> Vec<&'static str> {
    DISTRICTS.iter().map(|d| d.name).collect()
}

/// Every season, A through C.
pub fn seasons() -> impl Iterator<Item = SeasonDescriptor> {
    SeasonId::ALL.into_iter().map(season_descriptor)
}

/// Parse a region name, listing the accepted names on failure.
pub fn parse_region(name: &str) -> Result<Region> {
    Region::from_str(name).ok_or_else(|| {
        let known: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
        AgriError::InvalidInput(format!(
            "unknown region '{}', expected one of {}",
            name.trim(),
            known.join(", ")
        ))
    })
}
