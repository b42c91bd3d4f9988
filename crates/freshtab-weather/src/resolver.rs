//! One-shot weather resolution: position, then forecast, then code catalog.

use std::sync::Arc;

use crate::codes;
use crate::location::LocationSource;
use crate::provider::ForecastProvider;
use crate::types::{Coordinate, RawForecast, WeatherError, WeatherInfo, WeatherResolutionError};

/// Position substituted when no live fix is available: Tokyo.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    lat: 35.6895,
    lon: 139.6917,
};

/// Orchestrates one resolution against an injected location source and
/// forecast provider. Each call produces a fresh, immutable [`WeatherInfo`]
/// or a single wrapped failure; nothing is cached between calls.
pub struct WeatherResolver {
    source: Arc<dyn LocationSource>,
    provider: ForecastProvider,
    fallback: Coordinate,
}

impl WeatherResolver {
    pub fn new(source: Arc<dyn LocationSource>, provider: ForecastProvider) -> Self {
        Self {
            source,
            provider,
            fallback: FALLBACK_COORDINATE,
        }
    }

    pub fn with_fallback(mut self, fallback: Coordinate) -> Self {
        self.fallback = fallback;
        self
    }

    /// Best-effort position. Never fails: a missing capability or a failed
    /// fix substitutes the fallback coordinate so the pipeline always
    /// reaches the fetch stage.
    pub async fn resolve_position(&self) -> Coordinate {
        if !self.source.is_available() {
            tracing::warn!("No location capability, using fallback coordinate");
            return self.fallback;
        }

        match self.source.current_position().await {
            Ok(coord) => {
                tracing::info!("Got position: ({}, {})", coord.lat, coord.lon);
                coord
            }
            Err(e) => {
                tracing::warn!("Location error, using fallback coordinate: {}", e);
                self.fallback
            }
        }
    }

    /// Run the full pipeline once.
    ///
    /// Location failures are absorbed by [`Self::resolve_position`]; only
    /// fetch and parse failures reach the caller, always wrapped.
    pub async fn resolve(&self) -> Result<WeatherInfo, WeatherResolutionError> {
        let position = self.resolve_position().await;
        let raw = self.provider.fetch_forecast(position).await?;
        Ok(assemble(raw)?)
    }
}

fn assemble(raw: RawForecast) -> Result<WeatherInfo, WeatherError> {
    let current = raw.current.ok_or_else(|| missing("current"))?;
    let daily = raw.daily.ok_or_else(|| missing("daily"))?;

    let temperature = current
        .temperature_2m
        .ok_or_else(|| missing("current.temperature_2m"))?;
    let code = current
        .weather_code
        .ok_or_else(|| missing("current.weather_code"))?;
    let time = current.time.ok_or_else(|| missing("current.time"))?;
    let max = daily
        .temperature_2m_max
        .first()
        .copied()
        .ok_or_else(|| missing("daily.temperature_2m_max"))?;
    let min = daily
        .temperature_2m_min
        .first()
        .copied()
        .ok_or_else(|| missing("daily.temperature_2m_min"))?;

    let description = codes::describe(code);

    Ok(WeatherInfo {
        current_temperature: truncate(temperature),
        current_weather: description.label.to_string(),
        today_max_temp: truncate(max),
        today_min_temp: truncate(min),
        time,
        icon: description.icon,
    })
}

fn missing(field: &str) -> WeatherError {
    WeatherError::Parse(format!("forecast response missing {field}"))
}

/// The panel shows whole degrees, truncated toward zero rather than rounded.
fn truncate(value: f64) -> i32 {
    value as i32
}
