use super::{
    fungal_risk::FungalRiskRule,
    heat_stress::HeatStressRule,
    rain_delay::{HeavyRainRule, RainDelayRule},
    WeatherRule,
};
use crate::error::Result;
use crate::models::{Alert, AlertSeverity, WeatherReading};

const FAVORABLE_ID: &str = "favorable";
const FAVORABLE_MESSAGE: &str = "Conditions are favorable for standard activities.";

/// Evaluates every weather rule in a fixed order.
///
/// Rules are independent; all that match fire. When none fire a single
/// `success` alert is returned instead.
pub struct AlertEngine {
    rules: Vec<Box<dyn WeatherRule>>,
}

impl AlertEngine {
    pub fn new() -> Self {
        // Output order: heat, rain now, heavy rain, humidity
        let rules: Vec<Box<dyn WeatherRule>> = vec![
            Box::new(HeatStressRule),
            Box::new(RainDelayRule),
            Box::new(HeavyRainRule),
            Box::new(FungalRiskRule),
        ];

        Self { rules }
    }

    pub fn analyze(&self, reading: &WeatherReading) -> Result<Vec<Alert>> {
        reading.validate()?;

        let mut alerts: Vec<Alert> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(reading))
            .collect();

        if alerts.is_empty() {
            alerts.push(Alert::new(
                FAVORABLE_ID,
                AlertSeverity::Success,
                FAVORABLE_MESSAGE,
            ));
        }

        Ok(alerts)
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a reading with the standard rule set.
pub fn analyze_weather(reading: &WeatherReading) -> Result<Vec<Alert>> {
    AlertEngine::new().analyze(reading)
}
