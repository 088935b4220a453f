use super::WeatherProvider;
use crate::config::WeatherConfig;
use crate::error::{AgriError, Result};
use crate::models::WeatherReading;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,rain";

/// Kigali, used for connection checks
const HEALTH_CHECK_COORDS: (f64, f64) = (-1.95, 30.06);

pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    #[serde(default)]
    temperature_2m: Option<f64>,
    #[serde(default)]
    relative_humidity_2m: Option<f64>,
    #[serde(default)]
    rain: Option<f64>,
}

impl OpenMeteoClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("agriadvisor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AgriError::InvalidInput(format!(
                "coordinates out of range: {}, {}",
                latitude, longitude
            )));
        }
        Ok(())
    }

    fn current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}&timezone=auto",
            self.config.base_url.trim_end_matches('/'),
            latitude,
            longitude,
            CURRENT_FIELDS
        )
    }

    fn convert_response(response: ForecastResponse) -> Result<WeatherReading> {
        let current = response.current.ok_or_else(|| {
            AgriError::ProviderUnavailable("Open-Meteo response has no current conditions".into())
        })?;

        let field = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| {
                AgriError::ProviderUnavailable(format!("Open-Meteo response is missing {}", name))
            })
        };

        Ok(WeatherReading {
            temperature_c: field(current.temperature_2m, "temperature_2m")?,
            humidity_percent: field(current.relative_humidity_2m, "relative_humidity_2m")?,
            rainfall_mm: field(current.rain, "rain")?,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn current_reading(&self, latitude: f64, longitude: f64) -> Result<WeatherReading> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.current_url(latitude, longitude);
        tracing::debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AgriError::ProviderUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgriError::ProviderUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let parsed: ForecastResponse = response.json().await.map_err(|e| {
            AgriError::ProviderUnavailable(format!("Failed to parse Open-Meteo response: {}", e))
        })?;

        Self::convert_response(parsed)
    }

    fn name(&self) -> &'static str {
        "Open-Meteo"
    }

    async fn is_healthy(&self) -> bool {
        let (lat, lon) = HEALTH_CHECK_COORDS;
        match self.current_reading(lat, lon).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Open-Meteo health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenMeteoClient {
        OpenMeteoClient::new(WeatherConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            enabled: true,
        })
        .unwrap()
    }

    fn sample_response() -> serde_json::Value {
        serde_json::json!({
            "latitude": -1.5,
            "longitude": 29.625,
            "timezone": "Africa/Kigali",
            "current_units": {
                "time": "iso8601",
                "temperature_2m": "°C",
                "relative_humidity_2m": "%",
                "rain": "mm"
            },
            "current": {
                "time": "2024-10-01T14:00",
                "interval": 900,
                "temperature_2m": 21.4,
                "relative_humidity_2m": 83,
                "rain": 1.2
            }
        })
    }

    #[test]
    fn url_requests_current_fields() {
        let client = OpenMeteoClient::new(WeatherConfig {
            base_url: "https://api.open-meteo.com/v1/".into(),
            ..WeatherConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.current_url(-1.5, 29.63),
            "https://api.open-meteo.com/v1/forecast?latitude=-1.5&longitude=29.63\
             &current=temperature_2m,relative_humidity_2m,rain&timezone=auto"
        );
    }

    #[test]
    fn coordinates_validated() {
        assert!(OpenMeteoClient::validate_coordinates(-1.95, 30.09).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn missing_current_block_is_unavailable() {
        let parsed: ForecastResponse = serde_json::from_str(r#"{"latitude": 1.0}"#).unwrap();
        assert!(matches!(
            OpenMeteoClient::convert_response(parsed),
            Err(AgriError::ProviderUnavailable(_))
        ));
    }

    #[test]
    fn null_field_is_unavailable() {
        let parsed: ForecastResponse = serde_json::from_str(
            r#"{"current": {"temperature_2m": 20.0, "relative_humidity_2m": null, "rain": 0.0}}"#,
        )
        .unwrap();
        let err = OpenMeteoClient::convert_response(parsed).unwrap_err();
        assert!(err.to_string().contains("relative_humidity_2m"));
    }

    #[tokio::test]
    async fn fetches_current_reading() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "-1.5"))
            .and(query_param("longitude", "29.63"))
            .and(query_param("current", CURRENT_FIELDS))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
            .mount(&server)
            .await;

        let reading = client_for(&server)
            .current_reading(-1.5, 29.63)
            .await
            .unwrap();
        assert_eq!(reading, WeatherReading::new(21.4, 83.0, 1.2));
    }

    #[tokio::test]
    async fn server_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .current_reading(-1.5, 29.63)
            .await
            .unwrap_err();
        assert!(matches!(err, AgriError::ProviderUnavailable(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).current_reading(-1.5, 29.63).await;
        assert!(matches!(result, Err(AgriError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn invalid_coordinates_skip_the_network() {
        let server = MockServer::start().await;
        let result = client_for(&server).current_reading(120.0, 0.0).await;
        assert!(matches!(result, Err(AgriError::InvalidInput(_))));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn health_check_reflects_server_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
            .mount(&server)
            .await;
        assert!(client_for(&server).is_healthy().await);

        let down = MockServer::start().await;
        assert!(!client_for(&down).is_healthy().await);
    }
}
