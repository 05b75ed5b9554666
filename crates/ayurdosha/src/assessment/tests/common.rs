use crate::assessment::{AnswerSet, ConstitutionLabel, Dosha, WeatherSnapshot};

pub(super) fn answers(codes: &[&str]) -> AnswerSet {
    codes
        .iter()
        .enumerate()
        .map(|(idx, code)| (format!("q{}", idx + 1), code.to_string()))
        .collect()
}

pub(super) fn single(dosha: Dosha) -> ConstitutionLabel {
    ConstitutionLabel::Single(dosha)
}

pub(super) fn dual(first: Dosha, second: Dosha) -> ConstitutionLabel {
    ConstitutionLabel::Dual(first, second)
}

pub(super) fn weather(temperature_c: f64, humidity: f64, wind: f64, rain: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c,
        relative_humidity_pct: humidity,
        wind_speed_kmh: wind,
        rain_mm: rain,
    }
}

/// Mild conditions that trip no rule at all.
pub(super) fn temperate() -> WeatherSnapshot {
    weather(25.0, 55.0, 8.0, 0.0)
}
