//! Plain-text rendering of an advisory for the `advise` subcommand.

use crate::models::{Advisory, WeatherStatus};
use std::fmt::Write;

pub const NO_CROPS_MESSAGE: &str = "No specific crops recommended for these conditions.";
pub const NO_WEATHER_MESSAGE: &str = "Weather data unavailable";

pub fn render_text(advisory: &Advisory) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", advisory.district);
    let _ = writeln!(
        out,
        "  {:.2}, {:.2}",
        advisory.district.latitude, advisory.district.longitude
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Season: {}", advisory.season.name);
    let _ = writeln!(out, "  {}", advisory.season.description);
    let _ = writeln!(out);

    match advisory.weather {
        WeatherStatus::Available { ref reading } => {
            let _ = writeln!(out, "Weather: {}", reading);
        }
        WeatherStatus::Unavailable { ref reason } => {
            let _ = writeln!(out, "Weather: {} ({})", NO_WEATHER_MESSAGE, reason);
        }
    }
    let _ = writeln!(out);

    let analysis = match advisory.analysis {
        Some(ref analysis) => analysis,
        None => {
            let _ = writeln!(out, "Alerts and crop recommendations need live weather.");
            return out;
        }
    };

    let _ = writeln!(out, "Alerts:");
    for alert in &analysis.alerts {
        let _ = writeln!(out, "  {} {}", alert.severity.symbol(), alert);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Recommended crops:");
    if analysis.crops.is_empty() {
        let _ = writeln!(out, "  {}", NO_CROPS_MESSAGE);
    }
    for rec in &analysis.crops {
        let _ = writeln!(
            out,
            "  {:<26} {} (water: {}, risk: {})",
            rec.crop.name, rec.reason, rec.crop.water, rec.crop.risk
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgriError;
    use crate::logic::advisor::{build_advisory, QueryTracker};
    use crate::logic::classify_season;
    use crate::models::WeatherReading;
    use crate::reference::find_district;

    #[test]
    fn renders_full_advisory() {
        let advisory = build_advisory(
            QueryTracker::new().issue(),
            find_district("Nyagatare").unwrap(),
            classify_season(3).unwrap(),
            Ok(WeatherReading::new(30.0, 50.0, 0.0)),
        );
        let text = render_text(&advisory);
        assert!(text.contains("Nyagatare (East Region)"));
        assert!(text.contains("Urugaryi (Season B)"));
        assert!(text.contains("WARNING: High Heat"));
        assert!(text.contains("Sorghum (Amasaka)"));
        assert!(text.contains("Matches Season B & East"));
        assert!(!text.contains(NO_CROPS_MESSAGE));
    }

    #[test]
    fn renders_unavailable_weather() {
        let advisory = build_advisory(
            QueryTracker::new().issue(),
            find_district("Rusizi").unwrap(),
            classify_season(8).unwrap(),
            Err(AgriError::ProviderUnavailable("timeout".into())),
        );
        let text = render_text(&advisory);
        assert!(text.contains("Impeshyi (Season C)"));
        assert!(text.contains(NO_WEATHER_MESSAGE));
        assert!(text.contains("timeout"));
        assert!(!text.contains("Recommended crops"));
    }

    #[test]
    fn renders_empty_crop_list_message() {
        let advisory = build_advisory(
            QueryTracker::new().issue(),
            find_district("Gicumbi").unwrap(),
            classify_season(5).unwrap(),
            Ok(WeatherReading::new(30.0, 50.0, 15.0)),
        );
        assert!(render_text(&advisory).contains(NO_CROPS_MESSAGE));
    }
}
