//! Decoding of Open-Meteo forecast responses fetched by an upstream client.
//!
//! Nothing here performs I/O. A response without a `current` block decodes to a
//! forecast with no snapshot, which the climate scorer treats as "no data".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assessment::WeatherSnapshot;

/// City assumed when a user has none on record or geocoding fails upstream.
pub const FALLBACK_CITY: &str = "Pune";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub weather_code: Option<u16>,
    pub temperature_max_c: Option<f64>,
    pub temperature_min_c: Option<f64>,
    pub uv_index_max: Option<f64>,
    pub precipitation_sum_mm: Option<f64>,
}

/// Decoded forecast: current conditions (if reported) plus the daily outlook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: Option<Coordinates>,
    pub current: Option<WeatherSnapshot>,
    pub daily: Vec<ForecastDay>,
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherDecodeError {
    #[error("forecast payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("current conditions report neither rain nor precipitation")]
    MissingRain,
    #[error("daily series '{field}' has {actual} values, expected {expected}")]
    DailyLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Deserialize)]
struct RawForecast {
    latitude: Option<f64>,
    longitude: Option<f64>,
    current: Option<RawCurrent>,
    daily: Option<RawDaily>,
}

#[derive(Deserialize)]
struct RawCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    rain: Option<f64>,
    precipitation: Option<f64>,
}

#[derive(Deserialize)]
struct RawDaily {
    time: Vec<NaiveDate>,
    #[serde(default)]
    weather_code: Vec<Option<u16>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    uv_index_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

impl Forecast {
    pub fn from_json_str(raw: &str) -> Result<Self, WeatherDecodeError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, WeatherDecodeError> {
        let raw: RawForecast = serde_json::from_value(value)?;

        let location = match (raw.latitude, raw.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        let current = raw.current.map(RawCurrent::into_snapshot).transpose()?;
        let daily = match raw.daily {
            Some(daily) => daily.into_days()?,
            None => Vec::new(),
        };

        Ok(Self {
            location,
            current,
            daily,
        })
    }
}

impl RawCurrent {
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherDecodeError> {
        let rain_mm = self
            .rain
            .or(self.precipitation)
            .ok_or(WeatherDecodeError::MissingRain)?;

        Ok(WeatherSnapshot {
            temperature_c: self.temperature_2m,
            relative_humidity_pct: self.relative_humidity_2m,
            wind_speed_kmh: self.wind_speed_10m,
            rain_mm,
        })
    }
}

impl RawDaily {
    fn into_days(self) -> Result<Vec<ForecastDay>, WeatherDecodeError> {
        let expected = self.time.len();
        let weather_code = series("weather_code", self.weather_code, expected)?;
        let temperature_max = series("temperature_2m_max", self.temperature_2m_max, expected)?;
        let temperature_min = series("temperature_2m_min", self.temperature_2m_min, expected)?;
        let uv_index_max = series("uv_index_max", self.uv_index_max, expected)?;
        let precipitation_sum = series("precipitation_sum", self.precipitation_sum, expected)?;

        Ok(self
            .time
            .into_iter()
            .enumerate()
            .map(|(idx, date)| ForecastDay {
                date,
                weather_code: weather_code[idx],
                temperature_max_c: temperature_max[idx],
                temperature_min_c: temperature_min[idx],
                uv_index_max: uv_index_max[idx],
                precipitation_sum_mm: precipitation_sum[idx],
            })
            .collect())
    }
}

/// Absent series read as all-null; present series must match the date axis.
fn series<T: Copy>(
    field: &'static str,
    values: Vec<Option<T>>,
    expected: usize,
) -> Result<Vec<Option<T>>, WeatherDecodeError> {
    if values.is_empty() {
        return Ok(vec![None; expected]);
    }
    if values.len() != expected {
        return Err(WeatherDecodeError::DailyLengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "latitude": 18.52,
            "longitude": 73.86,
            "current": {
                "time": "2025-07-14T10:00",
                "temperature_2m": 31.4,
                "relative_humidity_2m": 78,
                "is_day": 1,
                "precipitation": 0.4,
                "rain": 0.4,
                "weather_code": 61,
                "wind_speed_10m": 12.2
            },
            "daily": {
                "time": ["2025-07-14", "2025-07-15"],
                "weather_code": [61, 3],
                "temperature_2m_max": [32.0, 30.5],
                "temperature_2m_min": [24.1, null],
                "uv_index_max": [7.1, 6.0],
                "precipitation_sum": [5.2, 0.0]
            }
        })
    }

    #[test]
    fn decodes_current_conditions_and_outlook() {
        let forecast = Forecast::from_value(sample_payload()).expect("payload decodes");

        let current = forecast.current.expect("current block present");
        assert_eq!(current.temperature_c, 31.4);
        assert_eq!(current.relative_humidity_pct, 78.0);
        assert_eq!(current.wind_speed_kmh, 12.2);
        assert_eq!(current.rain_mm, 0.4);

        assert_eq!(forecast.daily.len(), 2);
        assert_eq!(
            forecast.daily[0].date,
            NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid date")
        );
        assert_eq!(forecast.daily[1].temperature_min_c, None);
        assert_eq!(
            forecast.location,
            Some(Coordinates {
                latitude: 18.52,
                longitude: 73.86
            })
        );
    }

    #[test]
    fn missing_current_block_means_no_snapshot() {
        let forecast = Forecast::from_value(json!({ "error": true, "reason": "quota" }))
            .expect("error payload still decodes");
        assert!(forecast.current.is_none());
        assert!(forecast.daily.is_empty());
    }

    #[test]
    fn precipitation_stands_in_for_missing_rain() {
        let mut payload = sample_payload();
        payload["current"]
            .as_object_mut()
            .expect("current is an object")
            .remove("rain");
        payload["current"]["precipitation"] = json!(1.5);

        let forecast = Forecast::from_value(payload).expect("payload decodes");
        assert_eq!(forecast.current.map(|c| c.rain_mm), Some(1.5));
    }

    #[test]
    fn rejects_current_block_without_any_rain_reading() {
        let payload = json!({
            "current": {
                "temperature_2m": 18.0,
                "relative_humidity_2m": 55,
                "wind_speed_10m": 4.0
            }
        });
        let err = Forecast::from_value(payload).expect_err("rain is required");
        assert!(matches!(err, WeatherDecodeError::MissingRain));
    }

    #[test]
    fn rejects_ragged_daily_series() {
        let mut payload = sample_payload();
        payload["daily"]["uv_index_max"] = json!([7.1]);
        let err = Forecast::from_value(payload).expect_err("ragged series rejected");
        assert!(matches!(
            err,
            WeatherDecodeError::DailyLengthMismatch {
                field: "uv_index_max",
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_temperature() {
        let err = Forecast::from_json_str(r#"{"current":{"temperature_2m":"hot"}}"#)
            .expect_err("string temperature rejected");
        assert!(matches!(err, WeatherDecodeError::Malformed(_)));
    }
}
