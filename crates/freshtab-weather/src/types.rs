use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Icon categories derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    #[default]
    Unknown,
}

impl CategoryTag {
    /// Get icon name for the display layer's glyph set
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun",
            Self::PartlyCloudy => "cloud_sun",
            Self::Overcast => "cloud",
            Self::Fog => "cloud_fog",
            Self::Drizzle => "cloud_rain",
            Self::Rain => "cloud_rain",
            Self::Snow => "cloud_snow",
            Self::Thunderstorm => "cloud_lightning",
            Self::Unknown => "question",
        }
    }
}

/// Label and icon category for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherDescription {
    pub label: &'static str,
    pub icon: CategoryTag,
}

/// Open-Meteo forecast response.
///
/// External input: every field is optional so an unexpected body can never
/// panic the pipeline. The resolver decides which fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecast {
    #[serde(default)]
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub daily: Option<DailyRange>,
}

/// `current` block of the forecast response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub weather_code: Option<i32>,
}

/// `daily` block of the forecast response, one entry per requested day
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyRange {
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
}

/// Terminal value of one weather resolution, ready for the panel.
/// Temperatures are whole degrees, truncated toward zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherInfo {
    pub current_temperature: i32,
    pub current_weather: String,
    pub today_max_temp: i32,
    pub today_min_temp: i32,
    pub time: String,
    pub icon: CategoryTag,
}

/// Location source errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Forecast fetch errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Failure of the whole resolution pipeline, wrapping its cause.
/// This is the only error the display surface ever sees.
#[derive(Debug, thiserror::Error)]
#[error("Weather resolution failed: {source}")]
pub struct WeatherResolutionError {
    #[from]
    pub source: WeatherError,
}
