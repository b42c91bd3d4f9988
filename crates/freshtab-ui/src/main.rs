use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;
use freshtab_core::Config;
use freshtab_weather::{
    Coordinate, ForecastProvider, IpLocationSource, LocationSource, StaticLocationSource,
    WeatherResolver,
};
use freshtab_ui::{render_panel, request_fetch, WeatherModel};

#[tokio::main]
async fn main() -> Result<()> {
    freshtab_core::init()?;
    let config = Config::load()?;

    let fallback = Coordinate {
        lat: config.location.fallback_lat,
        lon: config.location.fallback_lon,
    };
    let source: Arc<dyn LocationSource> = if config.location.use_device_location {
        Arc::new(IpLocationSource::new()?)
    } else {
        Arc::new(StaticLocationSource(fallback))
    };
    let provider = ForecastProvider::with_base_url(&config.weather.endpoint)?
        .with_timezone(&config.weather.timezone)
        .with_forecast_days(config.weather.forecast_days);
    let resolver = Arc::new(WeatherResolver::new(source, provider).with_fallback(fallback));

    let mut model = WeatherModel::new();
    for line in render_panel(model.state()) {
        println!("{line}");
    }

    let (tx, rx) = mpsc::channel();
    request_fetch(&tx, &tokio::runtime::Handle::current(), resolver);

    // Single message per load; block off the runtime until it lands.
    let message = tokio::task::spawn_blocking(move || rx.recv()).await??;
    model.handle(message);

    for line in render_panel(model.state()) {
        println!("{line}");
    }

    Ok(())
}
