use crate::error::{AgriError, Result};
use serde::{Deserialize, Serialize};

/// Current conditions at a location, in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
}

impl WeatherReading {
    pub fn new(temperature_c: f64, humidity_percent: f64, rainfall_mm: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            rainfall_mm,
        }
    }

    /// Reject readings that cannot come from a working sensor.
    pub fn validate(&self) -> Result<()> {
        if !self.temperature_c.is_finite() {
            return Err(AgriError::InvalidInput(format!(
                "temperature is not a finite number: {}",
                self.temperature_c
            )));
        }
        if !self.humidity_percent.is_finite() || !(0.0..=100.0).contains(&self.humidity_percent)
        {
            return Err(AgriError::InvalidInput(format!(
                "humidity must be within 0-100%: {}",
                self.humidity_percent
            )));
        }
        if !self.rainfall_mm.is_finite() || self.rainfall_mm < 0.0 {
            return Err(AgriError::InvalidInput(format!(
                "rainfall must be a non-negative number: {}",
                self.rainfall_mm
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1}°C, {:.0}% humidity, {:.1} mm rain",
            self.temperature_c, self.humidity_percent, self.rainfall_mm
        )
    }
}
