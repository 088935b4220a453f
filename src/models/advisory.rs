use super::{Alert, District, RecommendedCrop, SeasonDescriptor, WeatherReading};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WeatherStatus {
    Available { reading: WeatherReading },
    Unavailable { reason: String },
}

impl WeatherStatus {
    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            WeatherStatus::Available { reading } => Some(reading),
            WeatherStatus::Unavailable { .. } => None,
        }
    }
}

/// Alerts and crops derived from a valid weather reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAnalysis {
    pub alerts: Vec<Alert>,
    pub crops: Vec<RecommendedCrop>,
}

/// Everything shown for one district selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub query_id: u64,
    pub district: District,
    pub season: SeasonDescriptor,
    pub weather: WeatherStatus,
    /// `None` when no weather reading was available
    pub analysis: Option<WeatherAnalysis>,
    pub generated_at: DateTime<Utc>,
}

impl Advisory {
    pub fn alerts(&self) -> &[Alert] {
        self.analysis
            .as_ref()
            .map(|a| a.alerts.as_slice())
            .unwrap_or(&[])
    }

    pub fn crops(&self) -> Option<&[RecommendedCrop]> {
        self.analysis.as_ref().map(|a| a.crops.as_slice())
    }
}
