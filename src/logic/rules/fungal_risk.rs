use super::WeatherRule;
use crate::logic::thresholds::is_high_humidity;
use crate::models::{Alert, AlertSeverity, WeatherReading};

/// Fungal disease risk rule
///
/// Late blight on potatoes and tomatoes spreads quickly when relative
/// humidity stays above 80%.
pub struct FungalRiskRule;

impl WeatherRule for FungalRiskRule {
    fn id(&self) -> &'static str {
        "fungal_risk"
    }

    fn name(&self) -> &'static str {
        "High Humidity"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<Alert> {
        if !is_high_humidity(reading) {
            return None;
        }

        Some(Alert::new(
            self.id(),
            AlertSeverity::Warning,
            "High Humidity: Risk of fungal diseases (Blight).",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_humid_air() {
        let alert = FungalRiskRule
            .evaluate(&WeatherReading::new(20.0, 85.0, 0.0))
            .unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert!(alert.message.contains("Blight"));
    }

    #[test]
    fn silent_at_threshold() {
        assert!(FungalRiskRule
            .evaluate(&WeatherReading::new(20.0, 80.0, 0.0))
            .is_none());
    }
}
