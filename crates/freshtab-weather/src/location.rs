//! Location sources: best-effort device position behind an injectable port.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::types::{Coordinate, LocationError};

const IP_LOOKUP_URL: &str = "https://ipapi.co";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One-shot position capability. Ask once, get a fix or an error;
/// continuous tracking is never requested.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Whether the runtime exposes this capability at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Request a single position fix.
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Coarse position from the caller's public IP.
/// City-level accuracy, no permission prompt.
#[derive(Debug, Clone)]
pub struct IpLocationSource {
    client: Client,
    base_url: String,
}

impl IpLocationSource {
    pub fn new() -> Result<Self, LocationError> {
        Self::with_base_url(IP_LOOKUP_URL)
    }

    /// Point the lookup at a different server. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LocationError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[async_trait]
impl LocationSource for IpLocationSource {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        let url = format!("{}/json/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocationError::Other(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!("IP location lookup returned status {}", response.status());
            return Err(LocationError::ServiceUnavailable);
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Other(e.to_string()))?;

        match (body.latitude, body.longitude) {
            (Some(lat), Some(lon)) => Ok(Coordinate { lat, lon }),
            _ => Err(LocationError::Other(
                "lookup response had no coordinates".to_string(),
            )),
        }
    }
}

/// Fixed position, for pinned locations and tests
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationSource(pub Coordinate);

#[async_trait]
impl LocationSource for StaticLocationSource {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// A runtime with no location capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocationSource;

#[async_trait]
impl LocationSource for NullLocationSource {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::ServiceUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_returns_its_coordinate() {
        let source = StaticLocationSource(Coordinate { lat: 1.0, lon: 2.0 });
        assert!(source.is_available());
        let coord = source.current_position().await.unwrap();
        assert_eq!(coord, Coordinate { lat: 1.0, lon: 2.0 });
    }

    #[tokio::test]
    async fn test_null_source_is_unavailable() {
        let source = NullLocationSource;
        assert!(!source.is_available());
        assert!(matches!(
            source.current_position().await,
            Err(LocationError::ServiceUnavailable)
        ));
    }
}
