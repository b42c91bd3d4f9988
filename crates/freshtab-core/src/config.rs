//! Application configuration.
//!
//! Freshtab keeps no config file and reads no environment variables; the
//! built-in defaults are validated at startup and handed to the services.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, ConfigError};

/// Root configuration for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub weather: WeatherConfig,
    pub location: LocationConfig,
}

/// Weather service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the forecast service
    pub endpoint: String,
    /// IANA timezone the daily aggregates are computed in
    pub timezone: String,
    /// Number of forecast days requested
    pub forecast_days: u8,
}

/// Position settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Ask the live location source; when false the fallback is used directly
    pub use_device_location: bool,
    /// Latitude substituted when no live fix is available
    pub fallback_lat: f64,
    /// Longitude substituted when no live fix is available
    pub fallback_lon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: WeatherConfig {
                endpoint: "https://api.open-meteo.com".to_string(),
                timezone: "Asia/Tokyo".to_string(),
                forecast_days: 1,
            },
            location: LocationConfig {
                use_device_location: true,
                fallback_lat: 35.6895,
                fallback_lon: 139.6917,
            },
        }
    }
}

impl Config {
    /// Build and validate the runtime configuration.
    pub fn load() -> Result<Self, AppError> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Check every setting; returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.weather.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(e.to_string()))?;

        if self.weather.timezone.is_empty() {
            return Err(ConfigError::InvalidTimezone("empty".to_string()));
        }

        if self.weather.forecast_days == 0 {
            return Err(ConfigError::ZeroForecastDays);
        }

        if !(-90.0..=90.0).contains(&self.location.fallback_lat) {
            return Err(ConfigError::LatitudeOutOfRange(self.location.fallback_lat));
        }

        if !(-180.0..=180.0).contains(&self.location.fallback_lon) {
            return Err(ConfigError::LongitudeOutOfRange(self.location.fallback_lon));
        }

        Ok(())
    }
}
