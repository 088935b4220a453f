use super::WeatherRule;
use crate::logic::thresholds::{is_heavy_rain, is_raining};
use crate::models::{Alert, AlertSeverity, WeatherReading};

/// Rain delay rule - pesticide sprays wash off when applied during rain
pub struct RainDelayRule;

impl WeatherRule for RainDelayRule {
    fn id(&self) -> &'static str {
        "rain_delay"
    }

    fn name(&self) -> &'static str {
        "Raining Now"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<Alert> {
        if !is_raining(reading) {
            return None;
        }

        Some(Alert::new(
            self.id(),
            AlertSeverity::Info,
            "Raining Now: Pause spraying pesticides.",
        ))
    }
}

/// Heavy rain rule - erosion risk on hillside plots, fresh bean seed rots
///
/// Fires together with [`RainDelayRule`] since heavy rain is also rain.
pub struct HeavyRainRule;

impl WeatherRule for HeavyRainRule {
    fn id(&self) -> &'static str {
        "heavy_rain"
    }

    fn name(&self) -> &'static str {
        "Heavy Rain"
    }

    fn evaluate(&self, reading: &WeatherReading) -> Option<Alert> {
        if !is_heavy_rain(reading) {
            return None;
        }

        Some(Alert::new(
            self.id(),
            AlertSeverity::Danger,
            "Heavy Rain Alert: Risk of soil erosion. Delay planting beans.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_rain_only_pauses_spraying() {
        let reading = WeatherReading::new(20.0, 50.0, 3.0);
        assert_eq!(
            RainDelayRule.evaluate(&reading).unwrap().severity,
            AlertSeverity::Info
        );
        assert!(HeavyRainRule.evaluate(&reading).is_none());
    }

    #[test]
    fn heavy_rain_triggers_both() {
        let reading = WeatherReading::new(20.0, 50.0, 12.0);
        assert!(RainDelayRule.evaluate(&reading).is_some());
        let alert = HeavyRainRule.evaluate(&reading).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Danger);
        assert!(alert.message.contains("erosion"));
    }

    #[test]
    fn dry_conditions_are_silent() {
        let reading = WeatherReading::new(20.0, 50.0, 0.0);
        assert!(RainDelayRule.evaluate(&reading).is_none());
        assert!(HeavyRainRule.evaluate(&reading).is_none());
    }
}
