use ayurdosha::assessment::WeatherSnapshot;
use ayurdosha::config::AssessmentDefaults;
use ayurdosha::weather::{Forecast, ForecastDay};
use chrono::Local;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) defaults: Arc<AssessmentDefaults>,
}

/// Full English name of the current local month, e.g. `"October"`.
pub(crate) fn current_month() -> String {
    Local::now().format("%B").to_string()
}

/// Weather the engine should score, plus any daily outlook worth displaying.
#[derive(Debug, Default)]
pub(crate) struct ResolvedWeather {
    pub(crate) snapshot: Option<WeatherSnapshot>,
    pub(crate) outlook: Vec<ForecastDay>,
}

/// An explicit snapshot wins over the forecast's current block. A forecast that fails to
/// decode is logged and treated as no data.
pub(crate) fn resolve_weather(
    snapshot: Option<WeatherSnapshot>,
    forecast: Option<serde_json::Value>,
) -> ResolvedWeather {
    let decoded = match forecast {
        Some(payload) => match Forecast::from_value(payload) {
            Ok(forecast) => forecast,
            Err(err) => {
                warn!(error = %err, "forecast payload unusable; scoring without weather");
                Forecast::default()
            }
        },
        None => Forecast::default(),
    };

    ResolvedWeather {
        snapshot: snapshot.or(decoded.current),
        outlook: decoded.daily,
    }
}

/// Reads a saved forecast response. Text that is not JSON is logged and treated as no data.
pub(crate) fn read_forecast_file(path: &Path) -> Result<Option<serde_json::Value>, std::io::Error> {
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "forecast file is not JSON; scoring without weather");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(temperature_c: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c,
            relative_humidity_pct: 50.0,
            wind_speed_kmh: 5.0,
            rain_mm: 0.0,
        }
    }

    #[test]
    fn explicit_snapshot_takes_precedence() {
        let forecast = json!({
            "current": {
                "temperature_2m": 12.0,
                "relative_humidity_2m": 80,
                "wind_speed_10m": 3.0,
                "rain": 0.0
            },
            "daily": { "time": ["2025-01-10"], "uv_index_max": [2.5] }
        });
        let resolved = resolve_weather(Some(snapshot(33.0)), Some(forecast));
        assert_eq!(resolved.snapshot.map(|s| s.temperature_c), Some(33.0));
        assert_eq!(resolved.outlook.len(), 1);
    }

    #[test]
    fn malformed_forecast_degrades_to_no_data() {
        let resolved = resolve_weather(None, Some(json!({ "current": "offline" })));
        assert!(resolved.snapshot.is_none());
        assert!(resolved.outlook.is_empty());
    }

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ayurdosha-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("scratch file writable");
        path
    }

    #[test]
    fn forecast_file_that_is_not_json_reads_as_no_data() {
        let path = scratch_file("broken.json", "<html>rate limited</html>");
        let forecast = read_forecast_file(&path).expect("file readable");
        std::fs::remove_file(&path).ok();
        assert!(forecast.is_none());
    }

    #[test]
    fn forecast_file_feeds_weather_resolution() {
        let path = scratch_file(
            "forecast.json",
            r#"{"current":{"temperature_2m":9.0,"relative_humidity_2m":40,"wind_speed_10m":22.0,"rain":0.0}}"#,
        );
        let forecast = read_forecast_file(&path).expect("file readable");
        std::fs::remove_file(&path).ok();

        let resolved = resolve_weather(None, forecast);
        assert_eq!(resolved.snapshot.map(|s| s.wind_speed_kmh), Some(22.0));
    }

    #[test]
    fn missing_forecast_file_is_an_error() {
        let path = std::env::temp_dir().join("ayurdosha-absent-forecast.json");
        assert!(read_forecast_file(&path).is_err());
    }

    #[test]
    fn current_month_is_a_calendar_month() {
        assert!(ayurdosha::assessment::parse_month(&current_month()).is_some());
    }
}
