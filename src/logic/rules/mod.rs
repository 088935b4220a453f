pub mod engine;
pub mod fungal_risk;
pub mod heat_stress;
pub mod rain_delay;

pub use engine::{analyze_weather, AlertEngine};

use crate::models::{Alert, WeatherReading};

/// Trait for weather alert rules
pub trait WeatherRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a validated reading and return an alert if it fires
    fn evaluate(&self, reading: &WeatherReading) -> Option<Alert>;
}
