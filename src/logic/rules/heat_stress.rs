use super::WeatherRule;
use crate::logic::thresholds::is_high_heat;
use crate::models::{Alert, AlertSeverity, WeatherReading};

/// Heat stress rule - warns when air temperature exceeds the heat threshold
///
/// High temperatures drive evaporation from bare soil; mulching keeps
/// moisture in the root zone.
pub struct HeatStressRule;

impl WeatherRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "High Heat"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<Alert> {
        if !is_high_heat(reading) {
            return None;
        }

        Some(Alert::new(
            self.id(),
            AlertSeverity::Warning,
            "High Heat: Risk of evaporation. Mulching recommended.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_above_threshold() {
        let alert = HeatStressRule
            .evaluate(&WeatherReading::new(30.0, 50.0, 0.0))
            .unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert!(alert.message.contains("Mulching"));
    }

    #[test]
    fn silent_at_threshold() {
        assert!(HeatStressRule
            .evaluate(&WeatherReading::new(28.0, 50.0, 0.0))
            .is_none());
    }
}
