use crate::error::{AgriError, Result};
use crate::models::{SeasonDescriptor, SeasonId};
use crate::reference::season_descriptor;
use chrono::{Datelike, Local};

/// Classify a calendar month (1 = January) into its agricultural season.
pub fn classify_season(month: u32) -> Result<SeasonDescriptor> {
    SeasonId::for_month(month)
        .map(season_descriptor)
        .ok_or_else(|| AgriError::InvalidInput(format!("month must be 1-12, got {}", month)))
}

/// Season for today's local date.
pub fn current_season() -> SeasonDescriptor {
    let month = Local::now().month();
    // chrono months are always 1..=12
    season_descriptor(SeasonId::for_month(month).unwrap_or(SeasonId::A))
}

pub fn current_month() -> u32 {
    Local::now().month()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_months() {
        assert_eq!(classify_season(9).unwrap().id, SeasonId::A);
        assert_eq!(classify_season(2).unwrap().id, SeasonId::B);
        assert_eq!(classify_season(7).unwrap().id, SeasonId::C);
        assert_eq!(classify_season(1).unwrap().id, SeasonId::A);
        assert_eq!(classify_season(6).unwrap().id, SeasonId::B);
        assert_eq!(classify_season(8).unwrap().id, SeasonId::C);
    }

    #[test]
    fn seasons_partition_the_year() {
        let mut counts = [0usize; 3];
        for month in 1..=12 {
            match classify_season(month).unwrap().id {
                SeasonId::A => counts[0] += 1,
                SeasonId::B => counts[1] += 1,
                SeasonId::C => counts[2] += 1,
            }
        }
        assert_eq!(counts, [5, 5, 2]);
    }

    #[test]
    fn out_of_range_month_rejected() {
        assert!(matches!(classify_season(0), Err(AgriError::InvalidInput(_))));
        assert!(classify_season(13).is_err());
    }

    #[test]
    fn descriptor_text() {
        let season = classify_season(3).unwrap();
        assert_eq!(season.name, "Urugaryi (Season B)");
        assert!(season.description.contains("long rainy season"));
    }

    #[test]
    fn current_season_agrees_with_current_month() {
        assert_eq!(current_season(), classify_season(current_month()).unwrap());
    }
}
