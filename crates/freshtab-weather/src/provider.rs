//! Open-Meteo forecast client.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::types::{Coordinate, RawForecast, WeatherError};

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// HTTP client for the Open-Meteo forecast endpoint.
/// One request per resolution; no retries, no caching.
#[derive(Debug, Clone)]
pub struct ForecastProvider {
    client: Arc<Client>,
    base_url: String,
    timezone: String,
    forecast_days: u8,
}

impl ForecastProvider {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_url(OPEN_METEO_URL)
    }

    /// Client against a non-default server. Used by tests and config overrides.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            forecast_days: 1,
        })
    }

    /// IANA timezone the daily aggregates are computed in.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    /// Fetch a forecast for the given position.
    ///
    /// Transport failures and non-2xx statuses surface as fetch errors; a
    /// 200 body that does not match the forecast shape is a parse error.
    pub async fn fetch_forecast(&self, coord: Coordinate) -> Result<RawForecast, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        tracing::debug!("Fetching forecast for ({}, {})", coord.lat, coord.lon);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coord.lat.to_string()),
                ("longitude", coord.lon.to_string()),
                ("current", "temperature_2m,weather_code".to_string()),
                ("daily", "temperature_2m_max,temperature_2m_min".to_string()),
                ("timezone", self.timezone.clone()),
                ("forecast_days", self.forecast_days.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Forecast request returned status {}", status);
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}
