//! Weather panel state machine and text rendering.
//!
//! One resolution per page load: the cell starts `Pending` and moves to
//! exactly one of `Ready` or `Failed`, both terminal for that load.

use freshtab_weather::WeatherInfo;

/// State cell for the one-shot weather resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Resolution requested, no result yet
    #[default]
    Pending,
    /// Resolution finished with a forecast
    Ready(WeatherInfo),
    /// Resolution failed; holds the logged cause
    Failed(String),
}

impl FetchState {
    /// True once a result or failure has landed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Pending)
    }

    /// Fold a finished resolution into the cell.
    /// Terminal states never transition again within a load.
    pub fn on_fetch_done(self, result: Result<WeatherInfo, String>) -> Self {
        if self.is_terminal() {
            return self;
        }
        match result {
            Ok(info) => FetchState::Ready(info),
            Err(message) => FetchState::Failed(message),
        }
    }
}

const LOADING_TEXT: &str = "Loading...";
const FAILURE_TEXT: &str = "Could not load weather";

/// Render the weather panel lines for the current state.
/// Failure is rendered distinctly from loading, never as an endless spinner.
pub fn render_panel(state: &FetchState) -> Vec<String> {
    match state {
        FetchState::Pending => vec![LOADING_TEXT.to_string()],
        FetchState::Failed(_) => vec![FAILURE_TEXT.to_string()],
        FetchState::Ready(info) => vec![
            format!("{}°C", info.current_temperature),
            info.current_weather.clone(),
            format!("{}°C", info.today_max_temp),
            format!("{}°C", info.today_min_temp),
            info.time.clone(),
            format!("[{}]", info.icon.icon_name()),
        ],
    }
}
