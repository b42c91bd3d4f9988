//! Display surface for Freshtab: the new-tab weather panel.
//!
//! Owns the one-shot fetch service and the three-state panel cell
//! (loading, failure, populated forecast).

pub mod panel;
pub mod weather_service;

pub use panel::{render_panel, FetchState};
pub use weather_service::{request_fetch, WeatherMessage, WeatherModel};
