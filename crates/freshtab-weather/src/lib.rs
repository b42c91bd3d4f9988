//! Weather resolution for Freshtab
//!
//! Resolves a best-effort position (with a fixed fallback), fetches a
//! one-day forecast from Open-Meteo, and maps the WMO weather code to a
//! description and icon category for the new-tab panel.

pub mod codes;
pub mod location;
pub mod provider;
pub mod resolver;
pub mod types;

pub use codes::describe;
pub use location::{IpLocationSource, LocationSource, NullLocationSource, StaticLocationSource};
pub use provider::ForecastProvider;
pub use resolver::{WeatherResolver, FALLBACK_COORDINATE};
pub use types::*;
