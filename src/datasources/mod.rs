pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

use crate::error::Result;
use crate::models::WeatherReading;
use async_trait::async_trait;

/// Source of current weather conditions for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current reading; a single attempt with no retry.
    async fn current_reading(&self, latitude: f64, longitude: f64) -> Result<WeatherReading>;

    /// Short name shown in status lines and logs
    fn name(&self) -> &'static str;

    /// Check that the provider answers at all.
    async fn is_healthy(&self) -> bool;
}
