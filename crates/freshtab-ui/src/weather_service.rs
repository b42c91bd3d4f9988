//! Weather backend: async weather resolution off the render thread.
//! The resolution runs once; its result is sent back via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use freshtab_weather::{WeatherInfo, WeatherResolver};

use crate::panel::FetchState;

/// Messages sent from the resolution task back to the render thread
#[derive(Debug)]
pub enum WeatherMessage {
    /// Result of the one-shot weather resolution
    FetchDone(Result<WeatherInfo, String>),
}

/// Holds the panel's single state cell and folds messages into it.
#[derive(Debug, Default)]
pub struct WeatherModel {
    state: FetchState,
}

impl WeatherModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn handle(&mut self, message: WeatherMessage) {
        match message {
            WeatherMessage::FetchDone(result) => {
                if let Err(e) = &result {
                    tracing::warn!("Weather resolution failed: {}", e);
                }
                self.state = std::mem::take(&mut self.state).on_fetch_done(result);
            }
        }
    }
}

/// Request the weather resolution asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &Sender<WeatherMessage>,
    runtime: &tokio::runtime::Handle,
    resolver: Arc<WeatherResolver>,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = resolver.resolve().await.map_err(|e| e.to_string());
        let _ = tx.send(WeatherMessage::FetchDone(result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshtab_weather::{
        CategoryTag, Coordinate, ForecastProvider, StaticLocationSource,
    };
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn info() -> WeatherInfo {
        WeatherInfo {
            current_temperature: 23,
            current_weather: "Rain: Slight intensity".to_string(),
            today_max_temp: 25,
            today_min_temp: 18,
            time: "T".to_string(),
            icon: CategoryTag::Rain,
        }
    }

    #[test]
    fn test_model_folds_success() {
        let mut model = WeatherModel::new();
        assert_eq!(model.state(), &FetchState::Pending);

        model.handle(WeatherMessage::FetchDone(Ok(info())));
        assert_eq!(model.state(), &FetchState::Ready(info()));
    }

    #[test]
    fn test_model_folds_failure() {
        let mut model = WeatherModel::new();
        model.handle(WeatherMessage::FetchDone(Err("503".to_string())));
        assert_eq!(model.state(), &FetchState::Failed("503".to_string()));
    }

    #[test]
    fn test_model_ignores_late_messages() {
        let mut model = WeatherModel::new();
        model.handle(WeatherMessage::FetchDone(Ok(info())));
        model.handle(WeatherMessage::FetchDone(Err("late".to_string())));
        assert_eq!(model.state(), &FetchState::Ready(info()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_request_fetch_delivers_result() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": { "time": "T", "temperature_2m": 23.7, "weather_code": 61 },
                "daily": { "temperature_2m_max": [25.9], "temperature_2m_min": [18.2] }
            })))
            .mount(&mock_server)
            .await;

        let provider = ForecastProvider::with_base_url(mock_server.uri()).unwrap();
        let source = Arc::new(StaticLocationSource(Coordinate { lat: 1.0, lon: 2.0 }));
        let resolver = Arc::new(freshtab_weather::WeatherResolver::new(source, provider));

        let (tx, rx) = std::sync::mpsc::channel();
        request_fetch(&tx, &tokio::runtime::Handle::current(), resolver);

        let message = tokio::task::spawn_blocking(move || {
            rx.recv_timeout(std::time::Duration::from_secs(5))
        })
        .await
        .unwrap()
        .unwrap();

        let mut model = WeatherModel::new();
        model.handle(message);
        assert_eq!(model.state(), &FetchState::Ready(info()));
    }
}
