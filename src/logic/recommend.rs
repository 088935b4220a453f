use crate::error::Result;
use crate::logic::thresholds::{is_heavy_rain, is_high_heat};
use crate::models::{Crop, Region, RiskCategory, SeasonDescriptor, WeatherReading};
use crate::reference::CROPS;

/// Crops suited to the season and region that current weather does not put at risk.
///
/// Survivors keep the reference table's declaration order.
pub fn recommend(
    season: &SeasonDescriptor,
    region: Region,
    reading: &WeatherReading,
) -> Result<Vec<Crop>> {
    recommend_from(CROPS, season, region, reading)
}

pub fn recommend_from(
    crops: &[Crop],
    season: &SeasonDescriptor,
    region: Region,
    reading: &WeatherReading,
) -> Result<Vec<Crop>> {
    reading.validate()?;

    let heavy_rain = is_heavy_rain(reading);
    let high_heat = is_high_heat(reading);

    Ok(crops
        .iter()
        .filter(|crop| crop.grows_in_season(season.id))
        .filter(|crop| crop.grows_in_region(region))
        .filter(|crop| !(heavy_rain && crop.risk == RiskCategory::HeavyRain))
        .filter(|crop| !(high_heat && crop.risk == RiskCategory::Heat))
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgriError;
    use crate::models::{Eligibility, SeasonId, WaterNeed};
    use crate::reference::season_descriptor;

    fn names(crops: &[Crop]) -> Vec<&'static str> {
        crops.iter().map(|c| c.name).collect()
    }

    fn mild() -> WeatherReading {
        WeatherReading::new(20.0, 50.0, 0.0)
    }

    #[test]
    fn season_a_north_in_mild_weather() {
        let crops = recommend(&season_descriptor(SeasonId::A), Region::North, &mild()).unwrap();
        assert_eq!(
            names(&crops),
            vec![
                "Maize (Ibigori)",
                "Beans (Ibishyimbo)",
                "Irish Potatoes (Ibirayi)",
                "Wheat (Ingano)"
            ]
        );
    }

    #[test]
    fn heat_excludes_heat_sensitive_crops() {
        let hot = WeatherReading::new(30.0, 50.0, 0.0);
        let crops = recommend(&season_descriptor(SeasonId::B), Region::East, &hot).unwrap();
        assert!(crops.iter().all(|c| c.risk != RiskCategory::Heat));
        assert_eq!(
            names(&crops),
            vec![
                "Beans (Ibishyimbo)",
                "Sorghum (Amasaka)",
                "Cassava (Imyumbati)",
                "Rice (Umuceri)"
            ]
        );

        let north = recommend(&season_descriptor(SeasonId::B), Region::North, &hot).unwrap();
        assert_eq!(names(&north), vec!["Beans (Ibishyimbo)"]);
    }

    #[test]
    fn heavy_rain_excludes_rain_sensitive_crops() {
        let storm = WeatherReading::new(20.0, 50.0, 15.0);
        let crops = recommend(&season_descriptor(SeasonId::A), Region::North, &storm).unwrap();
        assert!(crops.iter().all(|c| c.risk != RiskCategory::HeavyRain));
        assert_eq!(
            names(&crops),
            vec!["Maize (Ibigori)", "Irish Potatoes (Ibirayi)", "Wheat (Ingano)"]
        );
    }

    #[test]
    fn threshold_values_do_not_exclude() {
        let edge = WeatherReading::new(28.0, 50.0, 10.0);
        let crops = recommend(&season_descriptor(SeasonId::A), Region::North, &edge).unwrap();
        assert_eq!(crops.len(), 4);
    }

    #[test]
    fn dry_season_in_central_keeps_vegetables_only() {
        let crops = recommend(&season_descriptor(SeasonId::C), Region::Central, &mild()).unwrap();
        assert_eq!(names(&crops), vec!["Vegetables (Imboga)"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let only_north = [Crop {
            name: "Test Crop",
            seasons: Eligibility::Only(&[SeasonId::C]),
            regions: Eligibility::Only(&[Region::North]),
            water: WaterNeed::Low,
            risk: RiskCategory::None,
        }];
        let crops = recommend_from(
            &only_north,
            &season_descriptor(SeasonId::A),
            Region::North,
            &mild(),
        )
        .unwrap();
        assert!(crops.is_empty());
    }

    #[test]
    fn all_sentinels_match_everywhere() {
        let anywhere = [Crop {
            name: "Hardy",
            seasons: Eligibility::All,
            regions: Eligibility::All,
            water: WaterNeed::Low,
            risk: RiskCategory::None,
        }];
        for season in SeasonId::ALL {
            for region in Region::ALL {
                let crops =
                    recommend_from(&anywhere, &season_descriptor(season), region, &mild())
                        .unwrap();
                assert_eq!(crops.len(), 1, "{} {}", season, region);
            }
        }
    }

    #[test]
    fn invalid_reading_rejected() {
        let bad = WeatherReading::new(20.0, 50.0, -3.0);
        let result = recommend(&season_descriptor(SeasonId::A), Region::North, &bad);
        assert!(matches!(result, Err(AgriError::InvalidInput(_))));
    }

    #[test]
    fn recommendation_is_repeatable() {
        let season = season_descriptor(SeasonId::B);
        let reading = WeatherReading::new(29.0, 85.0, 11.0);
        assert_eq!(
            recommend(&season, Region::West, &reading).unwrap(),
            recommend(&season, Region::West, &reading).unwrap()
        );
    }
}
