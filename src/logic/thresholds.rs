//! Weather thresholds shared by the alert rules and the crop filter.
//!
//! All comparisons are strict: a reading exactly at a threshold does not trigger it.

use crate::models::WeatherReading;

/// Air temperature above which heat stress is expected (°C).
pub const HEAT_THRESHOLD_C: f64 = 28.0;

/// Rainfall above which it counts as currently raining (mm).
pub const RAIN_NOW_THRESHOLD_MM: f64 = 0.5;

/// Rainfall above which soil erosion becomes a risk (mm).
pub const HEAVY_RAIN_THRESHOLD_MM: f64 = 10.0;

/// Relative humidity above which fungal disease pressure rises (%).
pub const HIGH_HUMIDITY_PERCENT: f64 = 80.0;

pub fn is_high_heat(reading: &WeatherReading) -> bool {
    reading.temperature_c > HEAT_THRESHOLD_C
}

pub fn is_raining(reading: &WeatherReading) -> bool {
    reading.rainfall_mm > RAIN_NOW_THRESHOLD_MM
}

pub fn is_heavy_rain(reading: &WeatherReading) -> bool {
    reading.rainfall_mm > HEAVY_RAIN_THRESHOLD_MM
}

pub fn is_high_humidity(reading: &WeatherReading) -> bool {
    reading.humidity_percent > HIGH_HUMIDITY_PERCENT
}
